//! Embedded YouTube player and the now-playing panel around it.

use crate::config::YOUTUBE_EMBED_BASE;
use crate::store::JukeboxStore;
use dioxus::prelude::*;
use serde::Deserialize;

mod controls;

use controls::{NextButton, PlayPauseButton};

const PLAYER_FRAME_ID: &str = "jukebox-player";

/// Player state reported by the iframe API when a video finishes.
const STATE_ENDED: i64 = 0;

/// Messages the embed needs before it starts posting player events back.
const HANDSHAKE_MESSAGES: [&str; 2] = [
    r#"{"event":"listening","id":"jukebox-player"}"#,
    r#"{"event":"command","func":"addEventListener","args":["onStateChange"],"id":"jukebox-player"}"#,
];

pub fn embed_url(youtube_id: &str, autoplay: bool) -> String {
    format!(
        "{YOUTUBE_EMBED_BASE}/{youtube_id}?enablejsapi=1&autoplay={}&controls=1",
        u8::from(autoplay)
    )
}

#[derive(Deserialize)]
struct PlayerMessage {
    event: String,
    #[serde(default)]
    info: Option<serde_json::Value>,
}

/// True for the `onStateChange` message the iframe posts when playback ends.
pub fn is_ended_message(raw: &str) -> bool {
    serde_json::from_str::<PlayerMessage>(raw).is_ok_and(|message| {
        message.event == "onStateChange"
            && message.info.and_then(|info| info.as_i64()) == Some(STATE_ENDED)
    })
}

#[cfg(target_arch = "wasm32")]
fn use_ended_listener(on_ended: EventHandler<()>) {
    use dioxus::core::{Runtime, RuntimeGuard};
    use std::rc::Rc;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let listener = use_hook(move || {
        let runtime = Runtime::current();
        let callback = Closure::wrap(Box::new(move |event: web_sys::MessageEvent| {
            let _guard = RuntimeGuard::new(runtime.clone());
            if event
                .data()
                .as_string()
                .is_some_and(|raw| is_ended_message(&raw))
            {
                tracing::debug!("player reported end of video");
                on_ended.call(());
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(win) = web_sys::window() {
            let _ = win
                .add_event_listener_with_callback("message", callback.as_ref().unchecked_ref());
        }
        Rc::new(callback)
    });

    use_drop(move || {
        if let Some(win) = web_sys::window() {
            let function: &js_sys::Function = (*listener).as_ref().unchecked_ref();
            let _ = win.remove_event_listener_with_callback("message", function);
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn use_ended_listener(on_ended: EventHandler<()>) {
    use_future(move || async move {
        let mut eval = document::eval(
            r#"if (window.__jukeboxPlayerListener) {
                window.removeEventListener("message", window.__jukeboxPlayerListener);
            }
            window.__jukeboxPlayerListener = (event) => {
                if (typeof event.data === "string") {
                    dioxus.send(event.data);
                }
            };
            window.addEventListener("message", window.__jukeboxPlayerListener);"#,
        );

        while let Ok(raw) = eval.recv::<String>().await {
            if is_ended_message(&raw) {
                tracing::debug!("player reported end of video");
                on_ended.call(());
            }
        }
    });
}

#[cfg(target_arch = "wasm32")]
fn send_handshake() {
    use wasm_bindgen::{JsCast, JsValue};

    let frame = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(PLAYER_FRAME_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlIFrameElement>().ok())
        .and_then(|frame| frame.content_window());

    if let Some(target) = frame {
        for message in HANDSHAKE_MESSAGES {
            let _ = target.post_message(&JsValue::from_str(message), "*");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn send_handshake() {
    let messages = HANDSHAKE_MESSAGES
        .iter()
        .map(|m| serde_json::Value::String(m.to_string()).to_string())
        .collect::<Vec<_>>()
        .join(",");
    let script = format!(
        r#"(function () {{
            const frame = document.getElementById("{PLAYER_FRAME_ID}");
            if (!frame || !frame.contentWindow) return;
            for (const message of [{messages}]) {{
                frame.contentWindow.postMessage(message, "*");
            }}
        }})();"#
    );
    let _ = document::eval(&script);
}

#[component]
pub fn YoutubePlayer(
    youtube_id: String,
    autoplay: bool,
    height: u32,
    on_ended: EventHandler<()>,
) -> Element {
    use_ended_listener(on_ended);

    let src = embed_url(&youtube_id, autoplay);

    rsx! {
        iframe {
            id: PLAYER_FRAME_ID,
            width: "100%",
            height: "{height}",
            src: "{src}",
            title: "YouTube video player",
            style: "border: 0;",
            allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
            allowfullscreen: true,
            onload: move |_| send_handshake(),
        }
    }
}

/// Player for the current queue entry with its title and transport buttons.
/// Renders nothing while the queue is empty.
#[component]
pub fn NowPlaying(on_ended: EventHandler<()>) -> Element {
    let store = use_context::<Signal<JukeboxStore>>();
    let store = store.read();

    let Some(current) = store.current_video() else {
        return rsx! {};
    };
    let height = store.settings().aspect_ratio.player_height();

    rsx! {
        div { class: "mb-4 bg-black rounded-md overflow-hidden",
            YoutubePlayer {
                youtube_id: current.youtube_id.clone(),
                autoplay: store.is_playing(),
                height,
                on_ended,
            }
            div { class: "p-3 bg-gray-800",
                h3 { class: "text-lg font-semibold", "{current.title}" }
                p { class: "text-gray-400", "{current.artist}" }
                div { class: "flex gap-2 mt-2",
                    PlayPauseButton {}
                    NextButton {}
                }
            }
        }
    }
}
