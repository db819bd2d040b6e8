//! Weightgrid - weighted grid layout and a themed button widget
//!
//! Geometry and visual state only: nothing here draws or pumps events.
//! Callers feed input into widgets, run layouts over their children and
//! read back positions, sizes and colors.

// Include the log module first so the log! macro works everywhere
#[macro_use]
pub mod log;

pub mod animation;
pub mod canvas;
pub mod config;
pub mod device;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod theme;
pub mod widget;

pub use canvas::CanvasObject;
pub use config::Config;
pub use device::{Device, DeviceOrientation};
pub use error::{ConfigError, LayoutError};
pub use geometry::{Position, Size};
pub use layout::{HBoxLayout, Layout, Orientation, WeightedGridLayout};
pub use theme::{Color, ColorName, DefaultTheme, Theme, ThemeSettings};
pub use widget::CmButton;
