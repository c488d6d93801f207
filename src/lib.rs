//! JukeBox Tempo: a YouTube playlist jukebox.
//!
//! The Dioxus app lives in [`components`]; [`store`] holds the library, queue and
//! settings; [`api`] ingests playlists from the YouTube Data API and [`library`] commits
//! them to the store. Native builds
//! also carry the [`server`] that delivers the built app.

pub mod api;
pub mod catalog;
pub mod components;
pub mod config;
pub mod db;
pub mod library;
pub mod store;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;
