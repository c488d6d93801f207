//! The components module contains all shared components for our app.

mod app;
mod app_view;
mod icons;
mod navigation;
mod notice;
mod player;
mod thumbnail;
pub mod views;

pub use app::*;
pub use app_view::*;
pub use icons::*;
pub use navigation::*;
pub use notice::*;
pub use player::*;
pub use thumbnail::*;
