//! Per-call icon render request

use crate::attribute::{AttrValue, Attributes};

/// Icon size used when none is given, in pixels
pub const DEFAULT_SIZE: u32 = 24;

/// Everything needed to render one icon
#[derive(Debug, Clone, PartialEq)]
pub struct IconRequest {
    /// Icon name, optionally prefixed with `mdi-` or `mdi mdi-`
    pub name: String,
    /// CSS class; always rendered last and wins over any other `class`
    pub class: Option<String>,
    /// Width and height in pixels
    pub size: u32,
    /// Per-call attributes, applied over the configured defaults
    pub attributes: Attributes,
}

impl IconRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: None,
            size: DEFAULT_SIZE,
            attributes: Attributes::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_attributes(mut self, attrs: Attributes) -> Self {
        self.attributes = attrs;
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    /// The icon name with a leading `mdi mdi-` or `mdi-` removed.
    ///
    /// Only one prefix is stripped.
    pub fn icon_name(&self) -> &str {
        let name = self.name.as_str();
        name.strip_prefix("mdi mdi-")
            .or_else(|| name.strip_prefix("mdi-"))
            .unwrap_or(name)
    }
}

impl From<&str> for IconRequest {
    fn from(name: &str) -> Self {
        IconRequest::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = IconRequest::new("duck");
        assert_eq!(request.size, 24);
        assert_eq!(request.class, None);
        assert!(request.attributes.is_empty());
    }

    #[test]
    fn test_icon_name_prefixes() {
        assert_eq!(IconRequest::new("mdi mdi-duck").icon_name(), "duck");
        assert_eq!(IconRequest::new("mdi-duck").icon_name(), "duck");
        assert_eq!(IconRequest::new("duck").icon_name(), "duck");
    }

    #[test]
    fn test_icon_name_strips_once() {
        assert_eq!(IconRequest::new("mdi mdi-mdi-duck").icon_name(), "mdi-duck");
        assert_eq!(IconRequest::new("mdi-mdi-duck").icon_name(), "mdi-duck");
        assert_eq!(IconRequest::new("mdiduck").icon_name(), "mdiduck");
    }

    #[test]
    fn test_builder_pattern() {
        let request = IconRequest::new("duck")
            .with_class("icon")
            .with_size(64)
            .with_attribute("title", "Duck");

        assert_eq!(request.class.as_deref(), Some("icon"));
        assert_eq!(request.size, 64);
        assert_eq!(request.attributes.get("title"), Some(&AttrValue::from("Duck")));
    }
}
