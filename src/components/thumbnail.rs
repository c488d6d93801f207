use dioxus::prelude::*;

/// Video thumbnail with an optional duration badge in the corner.
#[component]
pub fn VideoThumbnail(
    src: String,
    alt: String,
    #[props(default = String::new())] class: String,
    #[props(default)] duration: Option<String>,
) -> Element {
    rsx! {
        div { class: "relative rounded-md overflow-hidden {class}",
            if src.is_empty() {
                div { class: "w-full h-full bg-gray-700" }
            } else {
                img {
                    src: "{src}",
                    alt: "{alt}",
                    class: "skeuo-thumbnail-img w-full h-full object-cover",
                    loading: "lazy",
                }
            }
            if let Some(duration) = duration {
                div { class: "absolute bottom-1 right-1 bg-black/70 text-white text-xs px-1 rounded",
                    "{duration}"
                }
            }
        }
    }
}
