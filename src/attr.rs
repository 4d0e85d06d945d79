use std::borrow::Cow;

use indexmap::IndexMap;

use crate::escape::escape_attribute;

/// The value of an attribute.
///
/// Values are stringified on render. A `Tokens` value paired with the
/// `class` attribute renders as a space-joined token list instead of one
/// escaped atomic string.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// A plain value, escaped on render.
    Text(String),
    /// A token list, space-joined on render.
    Tokens(Vec<String>),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Text(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Text(value.to_string())
    }
}

macro_rules! attr_value_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for AttrValue {
                fn from(value: $t) -> Self {
                    AttrValue::Text(value.to_string())
                }
            }
        )*
    };
}

attr_value_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64);

impl From<Vec<String>> for AttrValue {
    fn from(tokens: Vec<String>) -> Self {
        AttrValue::Tokens(tokens)
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(tokens: Vec<&str>) -> Self {
        AttrValue::Tokens(tokens.into_iter().map(|t| t.to_string()).collect())
    }
}

impl From<&[&str]> for AttrValue {
    fn from(tokens: &[&str]) -> Self {
        AttrValue::Tokens(tokens.iter().map(|t| t.to_string()).collect())
    }
}

/// A single entry in an attribute collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Attr {
    /// A name/value pair, rendered `name="value"`.
    Pair(String, AttrValue),
    /// A boolean-style attribute, rendered `name="name"`
    /// (`checked`, `selected`, `multiple` and friends).
    Flag(String),
    /// A pre-rendered fragment, passed through verbatim.
    Raw(String),
}

impl Attr {
    /// Create a name/value attribute.
    pub fn new(name: impl Into<String>, value: impl Into<AttrValue>) -> Attr {
        Attr::Pair(name.into(), value.into())
    }

    /// Create a boolean-style attribute.
    pub fn flag(name: impl Into<String>) -> Attr {
        Attr::Flag(name.into())
    }

    /// Create a pass-through fragment.
    pub fn raw(fragment: impl Into<String>) -> Attr {
        Attr::Raw(fragment.into())
    }

    pub(crate) fn encode(&self) -> Option<String> {
        match self {
            Attr::Pair(name, value) => Some(encode_attr(name, value)),
            Attr::Flag(name) => Some(encode_attr(name, &AttrValue::Text(name.clone()))),
            Attr::Raw(fragment) => {
                if fragment.is_empty() {
                    None
                } else {
                    Some(fragment.clone())
                }
            }
        }
    }
}

/// An attribute collection, in one of the accepted input shapes.
///
/// ```rust
/// use xhtmlgen::{encode_attrs, Attr, Attrs};
///
/// let attrs = Attrs::from(vec![
///     Attr::new("class", vec!["odd", "row"]),
///     Attr::flag("checked"),
/// ]);
/// assert_eq!(encode_attrs(&attrs, " "), r#" class="odd row" checked="checked""#);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Attrs {
    /// No attributes.
    #[default]
    None,
    /// A pre-rendered attribute string, passed through verbatim.
    Raw(String),
    /// An ordered sequence of attributes.
    Pairs(Vec<Attr>),
    /// A name to value mapping; insertion order is preserved.
    Map(IndexMap<String, AttrValue>),
}

impl Attrs {
    /// An empty attribute collection.
    pub fn none() -> Attrs {
        Attrs::None
    }

    /// A pre-rendered attribute string.
    pub fn raw(fragment: impl Into<String>) -> Attrs {
        Attrs::Raw(fragment.into())
    }
}

impl From<Vec<Attr>> for Attrs {
    fn from(attrs: Vec<Attr>) -> Self {
        Attrs::Pairs(attrs)
    }
}

impl From<IndexMap<String, AttrValue>> for Attrs {
    fn from(map: IndexMap<String, AttrValue>) -> Self {
        Attrs::Map(map)
    }
}

/// Encode a single attribute as `name="value"`.
///
/// The name is lowercased. A `Tokens` value on the `class` attribute is
/// space-joined without escaping; everything else is escaped.
pub fn encode_attr(name: &str, value: &AttrValue) -> String {
    let name = name.to_ascii_lowercase();
    let value: Cow<str> = match value {
        AttrValue::Tokens(tokens) if name == "class" => tokens.join(" ").into(),
        AttrValue::Tokens(tokens) => escape_attribute(&tokens.join(" ")).into_owned().into(),
        AttrValue::Text(text) => escape_attribute(text),
    };
    format!("{}=\"{}\"", name, value)
}

/// Encode an attribute collection into a single markup fragment.
///
/// All resolved attributes are joined with one space. A non-empty result
/// is prefixed with `start` unless it already starts with it, which keeps
/// pre-rendered strings from being prefixed twice.
pub fn encode_attrs(attrs: &Attrs, start: &str) -> String {
    let joined = match attrs {
        Attrs::None => String::new(),
        Attrs::Raw(fragment) => fragment.clone(),
        Attrs::Pairs(items) => items
            .iter()
            .filter_map(|item| item.encode())
            .collect::<Vec<_>>()
            .join(" "),
        Attrs::Map(map) => map
            .iter()
            .map(|(name, value)| encode_attr(name, value))
            .collect::<Vec<_>>()
            .join(" "),
    };
    if joined.is_empty() || joined.starts_with(start) {
        joined
    } else {
        format!("{}{}", start, joined)
    }
}

/// The mutable attribute list owned by a tree node.
///
/// Attributes are appended through the fluent node API and encoded once
/// per render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttrList {
    items: Vec<Attr>,
}

impl AttrList {
    pub(crate) fn new() -> AttrList {
        AttrList { items: Vec::new() }
    }

    pub(crate) fn push(&mut self, attr: Attr) {
        self.items.push(attr);
    }

    /// Append a name/value attribute.
    pub fn push_pair(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.items.push(Attr::new(name, value));
    }

    /// Append a boolean-style attribute.
    pub fn push_flag(&mut self, name: impl Into<String>) {
        self.items.push(Attr::Flag(name.into()));
    }

    /// Append a whole collection, in any accepted shape.
    pub fn extend(&mut self, attrs: Attrs) {
        match attrs {
            Attrs::None => {}
            Attrs::Raw(fragment) => self.items.push(Attr::Raw(fragment)),
            Attrs::Pairs(items) => self.items.extend(items),
            Attrs::Map(map) => {
                for (name, value) in map {
                    self.items.push(Attr::Pair(name, value));
                }
            }
        }
    }

    pub(crate) fn items(&self) -> &[Attr] {
        &self.items
    }

    pub(crate) fn encode(&self, start: &str) -> String {
        encode_attrs(&Attrs::Pairs(self.items.clone()), start)
    }
}
