//! mdi-svg - Inline Material Design Icons for server-rendered HTML
//!
//! This library looks up an icon in the `@mdi/svg` distribution (one
//! `<name>.svg` file per icon), keeps its `<path d="..." />` element and wraps
//! it in a small `<svg>` tag with configurable size, class and attributes.
//!
//! # Example
//!
//! ```no_run
//! use mdi_svg::{IconConfig, IconRenderer, IconRequest};
//!
//! let renderer = IconRenderer::new(
//!     IconConfig::new()
//!         .with_icons_directory("node_modules/@mdi/svg/svg")
//!         .with_default_attribute("fill", "currentColor"),
//! )?;
//!
//! let svg = renderer.render_request(
//!     &IconRequest::new("mdi-duck")
//!         .with_class("icon")
//!         .with_size(32)
//!         .with_attribute("title", "I am a duck"),
//! )?;
//! assert!(svg.starts_with("<svg "));
//! # Ok::<(), mdi_svg::IconError>(())
//! ```

pub mod attribute;
pub mod config;
pub mod error;
pub mod renderer;

pub use attribute::{AttrValue, Attributes};
pub use config::{IconConfig, DEFAULT_SEARCH_PATH};
pub use error::IconError;
pub use renderer::{IconRenderer, IconRequest, DEFAULT_SIZE};

/// Render a single icon with a one-off renderer
///
/// Long-lived callers should build an [`IconRenderer`] once instead, so that
/// configuration is validated and the icon directory detected only once.
///
/// # Example
///
/// ```no_run
/// use mdi_svg::{render_icon, IconConfig, IconRequest};
///
/// let config = IconConfig::new().with_icons_directory("node_modules/@mdi/svg/svg");
/// let svg = render_icon(&config, &IconRequest::new("duck"))?;
/// assert!(svg.ends_with("</svg>"));
/// # Ok::<(), mdi_svg::IconError>(())
/// ```
pub fn render_icon(config: &IconConfig, request: &IconRequest) -> Result<String, IconError> {
    IconRenderer::new(config.clone())?.render_request(request)
}
