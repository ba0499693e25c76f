//! Icon renderer
//!
//! This module resolves an icon name to an svg file and produces an inline
//! `<svg>` string with the configured attributes.

pub mod icon;
pub mod request;

pub use icon::IconRenderer;
pub use request::{IconRequest, DEFAULT_SIZE};
