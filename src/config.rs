//! Configuration for icon lookup and rendering
//!
//! An [`IconConfig`] is built once at startup, either in code through the
//! builder methods or from a TOML file:
//!
//! ```toml
//! icons_directory = "node_modules/@mdi/svg/svg"
//! search_paths = ["assets/mdi/svg"]
//!
//! [default_attributes]
//! fill = "currentColor"
//! role = false
//! ```

use std::path::{is_separator, Path, PathBuf, MAIN_SEPARATOR_STR};

use serde::Deserialize;

use crate::attribute::{AttrValue, Attributes};
use crate::error::IconError;

/// Where the `@mdi/svg` npm package keeps its icons
pub const DEFAULT_SEARCH_PATH: &str = "node_modules/@mdi/svg/svg";

/// Configuration options for the icon renderer
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// Directory holding one `<name>.svg` per icon
    pub icons_directory: Option<PathBuf>,

    /// Attributes applied to every rendered icon
    pub default_attributes: Attributes,

    /// Candidates tried, in order, when no directory is configured.
    /// Relative entries are resolved against the working directory and
    /// then against each ancestor of the executable's directory.
    pub search_paths: Vec<PathBuf>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            icons_directory: None,
            default_attributes: Attributes::new(),
            search_paths: vec![PathBuf::from(DEFAULT_SEARCH_PATH)],
        }
    }
}

/// TOML structure for deserializing config files
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    icons_directory: Option<PathBuf>,
    search_paths: Option<Vec<PathBuf>>,
    #[serde(default)]
    default_attributes: toml::Table,
}

impl IconConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the icon directory
    pub fn with_icons_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.icons_directory = Some(path.into());
        self
    }

    /// Replace the default attributes
    pub fn with_default_attributes(mut self, attrs: Attributes) -> Self {
        self.default_attributes = attrs;
        self
    }

    /// Add a single default attribute
    pub fn with_default_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Self {
        self.default_attributes.insert(name, value);
        self
    }

    /// Replace the auto-detection candidates
    pub fn with_search_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.search_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Append an auto-detection candidate
    pub fn add_search_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.search_paths.push(path.into());
        self
    }

    /// Load configuration from a TOML file.
    ///
    /// Relative directories written in the file are resolved against the
    /// file's parent directory. Built-in search paths are left as they are.
    pub fn from_file(path: &Path) -> Result<Self, IconError> {
        let content = std::fs::read_to_string(path)?;
        let parsed: TomlConfig = toml::from_str(&content)?;
        Self::from_toml(parsed, path.parent())
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, IconError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        Self::from_toml(parsed, None)
    }

    fn from_toml(parsed: TomlConfig, base: Option<&Path>) -> Result<Self, IconError> {
        let rebase = |p: PathBuf| match base {
            Some(base) => resolve_against(base, p),
            None => p,
        };

        Ok(IconConfig {
            icons_directory: parsed.icons_directory.map(&rebase),
            default_attributes: Attributes::from_toml(parsed.default_attributes)?,
            search_paths: match parsed.search_paths {
                Some(paths) => paths.into_iter().map(&rebase).collect(),
                None => Self::default().search_paths,
            },
        })
    }
}

fn resolve_against(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path
    }
}

/// Check that `path` is an existing directory and give it exactly one
/// trailing separator
pub(crate) fn normalize_directory(path: &Path) -> Result<PathBuf, IconError> {
    if path.as_os_str().is_empty() || !path.is_dir() {
        return Err(IconError::missing_directory(path));
    }

    let mut dir: PathBuf = path.components().collect();
    if !dir.as_os_str().to_string_lossy().ends_with(is_separator) {
        dir.as_mut_os_string().push(MAIN_SEPARATOR_STR);
    }
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IconConfig::default();
        assert_eq!(config.icons_directory, None);
        assert!(config.default_attributes.is_empty());
        assert_eq!(config.search_paths, vec![PathBuf::from(DEFAULT_SEARCH_PATH)]);
    }

    #[test]
    fn test_builder_pattern() {
        let config = IconConfig::new()
            .with_icons_directory("/srv/icons")
            .with_default_attribute("fill", "currentColor")
            .with_search_paths(["a", "b"])
            .add_search_path("c");

        assert_eq!(config.icons_directory, Some(PathBuf::from("/srv/icons")));
        assert_eq!(
            config.default_attributes.get("fill"),
            Some(&AttrValue::from("currentColor"))
        );
        assert_eq!(
            config.search_paths,
            vec![PathBuf::from("a"), PathBuf::from("b"), PathBuf::from("c")]
        );
    }

    #[test]
    fn test_parse_toml_full() {
        let config = IconConfig::from_str(
            r#"
icons_directory = "/srv/icons"
search_paths = ["vendor/mdi"]

[default_attributes]
fill = "currentColor"
role = false
"#,
        )
        .expect("Should parse");

        assert_eq!(config.icons_directory, Some(PathBuf::from("/srv/icons")));
        assert_eq!(config.search_paths, vec![PathBuf::from("vendor/mdi")]);
        let names: Vec<_> = config.default_attributes.names().collect();
        assert_eq!(names, vec!["fill", "role"]);
    }

    #[test]
    fn test_parse_toml_empty_keeps_defaults() {
        let config = IconConfig::from_str("").expect("Should parse");
        assert_eq!(config.icons_directory, None);
        assert_eq!(config.search_paths, vec![PathBuf::from(DEFAULT_SEARCH_PATH)]);
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = IconConfig::from_str("this is not valid toml {{{{");
        assert!(matches!(result, Err(IconError::ConfigFile(_))));
    }

    #[test]
    fn test_unknown_key_error() {
        let result = IconConfig::from_str("icon_dir = \"/srv\"");
        assert!(matches!(result, Err(IconError::ConfigFile(_))));
    }

    #[test]
    fn test_array_attribute_error() {
        let result = IconConfig::from_str("[default_attributes]\nclass = [\"a\"]");
        assert!(matches!(result, Err(IconError::Validation { attribute, .. }) if attribute == "class"));
    }

    #[test]
    fn test_normalize_directory_adds_single_separator() {
        let dir = std::env::temp_dir();
        let with_slashes = PathBuf::from(format!(
            "{}{}{}",
            dir.display(),
            MAIN_SEPARATOR_STR,
            MAIN_SEPARATOR_STR
        ));

        let normalized = normalize_directory(&with_slashes).unwrap();
        let text = normalized.to_string_lossy().into_owned();
        assert!(text.ends_with(MAIN_SEPARATOR_STR));
        assert!(!text.ends_with(&MAIN_SEPARATOR_STR.repeat(2)));
        assert_eq!(normalize_directory(&dir).unwrap(), normalized);
    }

    #[test]
    fn test_normalize_directory_missing() {
        let err = normalize_directory(Path::new("/definitely/not/here/fa")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "specified icons path (/definitely/not/here/fa) does not exist"
        );
        assert!(matches!(
            normalize_directory(Path::new("")),
            Err(IconError::Configuration { .. })
        ));
    }
}
