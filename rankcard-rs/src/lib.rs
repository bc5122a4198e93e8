#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod format;
pub mod image_loading;
pub mod renderer;

#[macro_use]
extern crate lazy_static;

pub use config::{CardConfig, Status, ValidatedCard};
pub use error::{CardError, RequiredField};
pub use image_loading::{HttpImageFetcher, ImageFetcher};
pub use rankcard_canvas;
pub use rankcard_canvas::{CanvasImage, FontConfig};
pub use renderer::{CardRenderer, Captions};
