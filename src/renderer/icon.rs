//! Icon lookup and `<svg>` generation

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace};
use once_cell::sync::{Lazy, OnceCell};
use regex::Regex;

use crate::attribute::Attributes;
use crate::config::{normalize_directory, IconConfig};
use crate::error::IconError;

use super::IconRequest;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const VIEW_BOX: &str = "0 0 24 24";

/// Single-line `<path d="..." />`, the only element kept from an icon file
static ICON_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<path d=".+" />"#).expect("icon path pattern should be valid"));

/// Renders icons from a directory of svg files.
///
/// Configure it once at startup, then share it (e.g. behind an `Arc`).
/// Every render reads the icon file again; nothing is cached except the
/// auto-detected directory.
#[derive(Debug)]
pub struct IconRenderer {
    config: IconConfig,
    detected: OnceCell<PathBuf>,
}

impl IconRenderer {
    /// Create a renderer, validating the configured directory and attributes
    pub fn new(mut config: IconConfig) -> Result<Self, IconError> {
        if let Some(dir) = config.icons_directory.take() {
            config.icons_directory = Some(normalize_directory(&dir)?);
        }
        config.default_attributes.validate()?;

        Ok(Self {
            config,
            detected: OnceCell::new(),
        })
    }

    /// Set the icon directory, replacing any previous one
    pub fn set_icons_directory(&mut self, path: impl AsRef<Path>) -> Result<(), IconError> {
        let dir = normalize_directory(path.as_ref())?;
        debug!("icons directory set to {}", dir.display());
        self.config.icons_directory = Some(dir);
        Ok(())
    }

    /// Forget the configured and auto-detected directories
    pub fn clear_icons_directory(&mut self) {
        self.config.icons_directory = None;
        self.detected = OnceCell::new();
    }

    /// Replace the default attributes (no merge)
    pub fn set_default_attributes(&mut self, attrs: Attributes) -> Result<(), IconError> {
        attrs.validate()?;
        self.config.default_attributes = attrs;
        Ok(())
    }

    pub fn default_attributes(&self) -> &Attributes {
        &self.config.default_attributes
    }

    /// The icon directory, auto-detecting it on first use if unset.
    ///
    /// The returned path always ends with a separator.
    pub fn icons_directory(&self) -> Result<&Path, IconError> {
        if let Some(dir) = &self.config.icons_directory {
            return Ok(dir.as_path());
        }

        self.detected
            .get_or_try_init(|| self.auto_detect().ok_or_else(IconError::path_not_specified))
            .map(PathBuf::as_path)
    }

    fn auto_detect(&self) -> Option<PathBuf> {
        let found = self
            .candidates()
            .into_iter()
            .find(|candidate| candidate.is_dir())
            .and_then(|candidate| normalize_directory(&candidate).ok());

        match &found {
            Some(dir) => debug!("auto-detected icons directory {}", dir.display()),
            None => debug!("no icons directory found in {:?}", self.config.search_paths),
        }
        found
    }

    /// Search paths expanded to the concrete locations to try, in order
    fn candidates(&self) -> Vec<PathBuf> {
        let cwd = std::env::current_dir().ok();
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));

        let mut candidates = Vec::new();
        for path in &self.config.search_paths {
            if path.is_absolute() {
                candidates.push(path.clone());
                continue;
            }
            if let Some(cwd) = &cwd {
                candidates.push(cwd.join(path));
            }
            if let Some(exe_dir) = &exe_dir {
                candidates.extend(exe_dir.ancestors().map(|dir| dir.join(path)));
            }
        }
        candidates
    }

    /// Render an icon with the default size and no extra attributes
    pub fn render(&self, name: &str) -> Result<String, IconError> {
        self.render_request(&IconRequest::new(name))
    }

    /// Render an icon as `<svg ...><path d="..." /></svg>`
    pub fn render_request(&self, request: &IconRequest) -> Result<String, IconError> {
        let dir = self.icons_directory()?;

        request.attributes.validate()?;
        if request.size == 0 {
            return Err(IconError::validation(
                "width",
                "size must be a positive integer",
            ));
        }

        let icon = request.icon_name();
        let path = icon_file_path(dir, icon);
        if !path.is_file() {
            return Err(IconError::NotFound {
                icon: icon.to_string(),
                path,
            });
        }

        debug!("reading icon file {}", path.display());
        let svg = fs::read_to_string(&path)?;
        let markup = ICON_PATH
            .find(&svg)
            .ok_or_else(|| IconError::MalformedIcon { path: path.clone() })?
            .as_str();

        let attrs = self.svg_attributes(request);
        trace!("svg attributes for {}: {:?}", icon, attrs);

        Ok(format!("<svg {}>{}</svg>", attrs.to_html(), markup))
    }

    /// Implicit defaults, then configured defaults, then per-call extras,
    /// then `class`
    fn svg_attributes(&self, request: &IconRequest) -> Attributes {
        let mut attrs = Attributes::new()
            .with("viewBox", VIEW_BOX)
            .with("xmlns", SVG_NAMESPACE)
            .with("width", request.size)
            .with("height", request.size)
            .with("role", "presentation");

        attrs.overlay(&self.config.default_attributes);
        attrs.overlay(&request.attributes);

        if let Some(class) = &request.class {
            attrs.insert_last("class", class.as_str());
        }

        attrs.retain_non_empty();
        attrs
    }
}

/// `directory + name + ".svg"`; the directory already ends with a separator
fn icon_file_path(dir: &Path, icon: &str) -> PathBuf {
    let mut file = OsString::from(dir.as_os_str());
    file.push(icon);
    file.push(".svg");
    PathBuf::from(file)
}
