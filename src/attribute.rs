//! Attribute values and ordered attribute sets for the `<svg>` tag

use std::fmt;

use indexmap::IndexMap;

use crate::error::IconError;

/// A value that can be rendered into an HTML attribute
///
/// Every variant converts to a string through `Display`, except that
/// `NaN` and infinite floats fail validation rather than rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Removes the attribute from the rendered output
    Absent,
}

impl AttrValue {
    /// Whether the value is dropped before rendering.
    ///
    /// `Absent`, `false`, `""`, `"0"`, `0` and `0.0` are all empty.
    pub fn is_empty(&self) -> bool {
        match self {
            AttrValue::Str(s) => s.is_empty() || s == "0",
            AttrValue::Int(n) => *n == 0,
            AttrValue::Float(f) => *f == 0.0,
            AttrValue::Bool(b) => !b,
            AttrValue::Absent => true,
        }
    }

    /// Convert a TOML value, rejecting arrays and tables
    pub fn from_toml(attribute: &str, value: toml::Value) -> Result<Self, IconError> {
        let value = match value {
            toml::Value::String(s) => AttrValue::Str(s),
            toml::Value::Integer(n) => AttrValue::Int(n),
            toml::Value::Float(f) => AttrValue::Float(f),
            toml::Value::Boolean(b) => AttrValue::Bool(b),
            toml::Value::Datetime(dt) => AttrValue::Str(dt.to_string()),
            toml::Value::Array(_) => {
                return Err(IconError::validation(
                    attribute,
                    "arrays cannot be converted to a string",
                ))
            }
            toml::Value::Table(_) => {
                return Err(IconError::validation(
                    attribute,
                    "tables cannot be converted to a string",
                ))
            }
        };
        value.validate(attribute)?;
        Ok(value)
    }

    fn validate(&self, attribute: &str) -> Result<(), IconError> {
        match self {
            AttrValue::Float(f) if !f.is_finite() => Err(IconError::validation(
                attribute,
                format!("{} is not a finite number", f),
            )),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Str(s) => f.write_str(s),
            AttrValue::Int(n) => write!(f, "{}", n),
            AttrValue::Float(v) => write!(f, "{}", v),
            AttrValue::Bool(b) => write!(f, "{}", b),
            AttrValue::Absent => Ok(()),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Str(s)
    }
}

impl From<i64> for AttrValue {
    fn from(n: i64) -> Self {
        AttrValue::Int(n)
    }
}

impl From<i32> for AttrValue {
    fn from(n: i32) -> Self {
        AttrValue::Int(n.into())
    }
}

impl From<u32> for AttrValue {
    fn from(n: u32) -> Self {
        AttrValue::Int(n.into())
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Float(v)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(AttrValue::Absent)
    }
}

/// An ordered set of attributes.
///
/// Re-inserting an existing key replaces its value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(IndexMap<String, AttrValue>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute, builder style
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace an attribute
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Insert an attribute at the end, moving it there if it already exists
    pub fn insert_last(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        self.0.shift_remove(&name);
        self.0.insert(name, value.into());
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Names of all attributes, in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    /// Check every name and value, failing on the first bad attribute
    pub fn validate(&self) -> Result<(), IconError> {
        for (name, value) in &self.0 {
            validate_name(name)?;
            value.validate(name)?;
        }
        Ok(())
    }

    /// Apply `other` on top of this set
    pub fn overlay(&mut self, other: &Attributes) {
        for (name, value) in &other.0 {
            self.0.insert(name.clone(), value.clone());
        }
    }

    /// Drop every empty value
    pub fn retain_non_empty(&mut self) {
        self.0.retain(|_, value| !value.is_empty());
    }

    /// Serialize as space-separated `name="value"` pairs, skipping empty values
    pub fn to_html(&self) -> String {
        self.iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| format!(r#"{}="{}""#, name, escape_attr(&value.to_string())))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Convert a TOML table, e.g. a `[default_attributes]` section
    pub fn from_toml(table: toml::Table) -> Result<Self, IconError> {
        let mut attrs = Attributes::new();
        for (name, value) in table {
            validate_name(&name)?;
            let value = AttrValue::from_toml(&name, value)?;
            attrs.0.insert(name, value);
        }
        Ok(attrs)
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}

fn validate_name(name: &str) -> Result<(), IconError> {
    if name.is_empty() {
        return Err(IconError::validation(name, "attribute name is empty"));
    }
    let bad = name.chars().find(|&c| {
        c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
    });
    match bad {
        Some(c) => Err(IconError::validation(
            name,
            format!("attribute name contains {:?}", c),
        )),
        None => Ok(()),
    }
}

/// Escape special HTML characters in an attribute value
fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
