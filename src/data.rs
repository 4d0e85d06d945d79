use indexmap::IndexMap;

use crate::attr::{Attr, Attrs};

/// Bulk data for a composite node, in one of the accepted shapes.
///
/// `Raw` fills the node's literal content; `Records` and `Map` fill the
/// node's child lists. A node never mixes the two.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum NodeData {
    /// Nothing.
    #[default]
    None,
    /// Pre-rendered literal content.
    Raw(String),
    /// An ordered sequence of tagged records.
    Records(Vec<Record>),
    /// A tag to records mapping; insertion order is preserved.
    Map(IndexMap<String, Vec<RecordBody>>),
}

impl NodeData {
    /// Literal content.
    pub fn raw(content: impl Into<String>) -> NodeData {
        NodeData::Raw(content.into())
    }
}

impl From<&str> for NodeData {
    fn from(content: &str) -> Self {
        NodeData::Raw(content.to_string())
    }
}

impl From<Vec<Record>> for NodeData {
    fn from(records: Vec<Record>) -> Self {
        NodeData::Records(records)
    }
}

/// One tagged record in a [`NodeData::Records`] sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// The target child tag.
    pub tag: String,
    /// The record payload.
    pub body: RecordBody,
}

impl Record {
    /// A record carrying data and attributes for a child of kind `tag`.
    pub fn new(tag: impl Into<String>, data: NodeData, attrs: Attrs) -> Record {
        Record {
            tag: tag.into(),
            body: RecordBody { data, attrs },
        }
    }

    /// A record with data only.
    pub fn data(tag: impl Into<String>, data: NodeData) -> Record {
        Record::new(tag, data, Attrs::none())
    }
}

/// The payload of a record: nested data plus attributes for the child.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordBody {
    /// Nested node data.
    pub data: NodeData,
    /// Attributes of the child node.
    pub attrs: Attrs,
}

impl RecordBody {
    /// A payload carrying data and attributes.
    pub fn new(data: NodeData, attrs: Attrs) -> RecordBody {
        RecordBody { data, attrs }
    }

    /// A payload with data only.
    pub fn data(data: NodeData) -> RecordBody {
        RecordBody {
            data,
            attrs: Attrs::none(),
        }
    }
}

/// Bulk data for a list element (`ul`/`ol`/`dir`/`menu`).
#[derive(Debug, Clone, PartialEq)]
pub enum ListData {
    /// Pre-rendered `<li>` markup.
    Raw(String),
    /// An ordered sequence of items.
    Items(Vec<ListItemData>),
    /// A label to attributes mapping; insertion order is preserved.
    Map(IndexMap<String, Vec<Attr>>),
}

/// One entry of [`ListData::Items`]: the item content plus attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItemData {
    /// Content of the `li`.
    pub content: String,
    /// Attributes of the `li`.
    pub attrs: Vec<Attr>,
}

impl ListItemData {
    /// An item with content and attributes.
    pub fn new(content: impl Into<String>, attrs: Vec<Attr>) -> ListItemData {
        ListItemData {
            content: content.into(),
            attrs,
        }
    }
}

impl From<&str> for ListItemData {
    fn from(content: &str) -> Self {
        ListItemData::new(content, Vec::new())
    }
}

impl From<String> for ListItemData {
    fn from(content: String) -> Self {
        ListItemData::new(content, Vec::new())
    }
}

/// Option data for selects, optgroups and grouped inputs, in one of the
/// accepted shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionsData {
    /// Pre-rendered option markup (selects only).
    Raw(String),
    /// Scalar values; each doubles as its own label.
    Values(Vec<String>),
    /// Value/label/attributes entries.
    Entries(Vec<OptionEntry>),
    /// A value to label mapping; insertion order is preserved.
    Map(IndexMap<String, OptionLabel>),
}

impl OptionsData {
    /// Scalar values from anything stringly.
    pub fn values<I, S>(values: I) -> OptionsData
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        OptionsData::Values(values.into_iter().map(Into::into).collect())
    }
}

/// One entry of [`OptionsData::Entries`].
#[derive(Debug, Clone, PartialEq)]
pub struct OptionEntry {
    /// The option value.
    pub value: String,
    /// The display label; defaults to the value when absent.
    pub label: Option<String>,
    /// Extra attributes of the option.
    pub attrs: Vec<Attr>,
}

impl OptionEntry {
    /// An entry with a value only; the value doubles as the label.
    pub fn value(value: impl Into<String>) -> OptionEntry {
        OptionEntry {
            value: value.into(),
            label: None,
            attrs: Vec::new(),
        }
    }

    /// An entry with a value and a display label.
    pub fn labeled(value: impl Into<String>, label: impl Into<String>) -> OptionEntry {
        OptionEntry {
            value: value.into(),
            label: Some(label.into()),
            attrs: Vec::new(),
        }
    }

    /// Same entry with extra attributes.
    pub fn with_attrs(mut self, attrs: Vec<Attr>) -> OptionEntry {
        self.attrs = attrs;
        self
    }
}

/// The mapped side of [`OptionsData::Map`]: a label plus attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionLabel {
    /// The display label.
    pub label: String,
    /// Extra attributes of the option.
    pub attrs: Vec<Attr>,
}

impl OptionLabel {
    /// A label without extra attributes.
    pub fn new(label: impl Into<String>) -> OptionLabel {
        OptionLabel {
            label: label.into(),
            attrs: Vec::new(),
        }
    }

    /// Same label with extra attributes.
    pub fn with_attrs(mut self, attrs: Vec<Attr>) -> OptionLabel {
        self.attrs = attrs;
        self
    }
}
