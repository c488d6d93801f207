use dioxus::prelude::*;

/// Stroke icon outlines on a 24x24 grid, one `d` attribute per path.
fn icon_paths(name: &str) -> &'static [&'static str] {
    match name {
        "music" => &[
            "M9 18V5l12-2v13",
            "M6 21a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
            "M18 19a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
        ],
        "disc" => &[
            "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
            "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
            "M6 12a6 6 0 0 1 6-6",
        ],
        "radio" => &[
            "M4.9 19.1a10 10 0 0 1 0-14.2",
            "M7.8 16.2a6 6 0 0 1 0-8.4",
            "M16.2 7.8a6 6 0 0 1 0 8.4",
            "M19.1 4.9a10 10 0 0 1 0 14.2",
            "M12 14a2 2 0 1 0 0-4 2 2 0 0 0 0 4z",
        ],
        "mic" => &[
            "M12 2a3 3 0 0 0-3 3v7a3 3 0 0 0 6 0V5a3 3 0 0 0-3-3z",
            "M19 10v2a7 7 0 0 1-14 0v-2",
            "M12 19v3",
        ],
        "film" => &[
            "M4 3h16a1 1 0 0 1 1 1v16a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1z",
            "M7 3v18M17 3v18M3 12h18M3 7.5h4M3 16.5h4M17 7.5h4M17 16.5h4",
        ],
        "library" => &["M4 4v16", "M9 4v16", "M14 4l4 16", "M3 20h18"],
        "settings" => &[
            "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
            "M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 0 1-4 0v-.09A1.65 1.65 0 0 0 9 19.4a1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06A1.65 1.65 0 0 0 4.68 15a1.65 1.65 0 0 0-1.51-1H3a2 2 0 0 1 0-4h.09A1.65 1.65 0 0 0 4.6 9a1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06A1.65 1.65 0 0 0 9 4.68a1.65 1.65 0 0 0 1-1.51V3a2 2 0 0 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06A1.65 1.65 0 0 0 19.4 9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 0 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z",
        ],
        "search" => &["M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16z", "M21 21l-4.35-4.35"],
        "plus" => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M12 8v8", "M8 12h8"],
        "trash" => &[
            "M3 6h18",
            "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6m3 0V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2",
        ],
        "edit" => &[
            "M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7",
            "M18.5 2.5a2.12 2.12 0 0 1 3 3L12 15l-4 1 1-4 9.5-9.5z",
        ],
        "check" => &["M20 6L9 17l-5-5"],
        "x" => &["M18 6L6 18", "M6 6l12 12"],
        "alert" => &[
            "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
            "M12 8v4",
            "M12 16h.01",
        ],
        "loader" => &["M21 12a9 9 0 1 1-6.22-8.56"],
        "play" => &["M5 3l14 9-14 9V3z"],
        "pause" => &["M6 4h4v16H6z", "M14 4h4v16h-4z"],
        "next" => &["M5 4l10 8-10 8V4z", "M19 5v14"],
        _ => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z"],
    }
}

#[component]
pub fn Icon(name: String, class: String) -> Element {
    let spin = if name == "loader" { " animate-spin" } else { "" };

    rsx! {
        svg {
            class: "{class}{spin}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            for d in icon_paths(&name) {
                path { d: "{d}" }
            }
        }
    }
}
