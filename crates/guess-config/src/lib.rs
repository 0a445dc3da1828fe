// Configuration (config.json) and colour themes

pub mod config;
pub mod theme;

pub use config::AppConfig;
pub use theme::{Palette, Rgb, Theme, UnknownTheme};
