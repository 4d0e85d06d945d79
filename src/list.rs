use crate::attr::Attrs;
use crate::data::{ListData, ListItemData};
use crate::element::{impl_node_common, NodeCore, Render};
use crate::render::RenderOptions;

/// The kind of a list element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `<ul>`
    Ul,
    /// `<ol>`
    Ol,
    /// `<dir>`
    Dir,
    /// `<menu>`
    Menu,
}

impl ListKind {
    /// The tag this list renders as.
    pub fn tag(&self) -> &'static str {
        match self {
            ListKind::Ul => "ul",
            ListKind::Ol => "ol",
            ListKind::Dir => "dir",
            ListKind::Menu => "menu",
        }
    }
}

/// A `<ul>`/`<ol>`/`<dir>`/`<menu>` node; its only child kind is `li`.
///
/// ```rust
/// use xhtmlgen::{List, ListData, ListKind, Render, RenderOptions};
///
/// let mut list = List::from_data(
///     ListKind::Ul,
///     ListData::Items(vec!["one".into(), "two".into()]),
///     Default::default(),
/// );
/// list.attr("class", "plain");
/// assert_eq!(
///     list.render(&RenderOptions::default().minimized()),
///     r#"<ul class="plain"><li>one</li><li>two</li></ul>"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    kind: ListKind,
    core: NodeCore,
    items: Vec<ListItem>,
}

impl_node_common!(List);

impl List {
    /// Create an empty list of the given kind.
    pub fn new(kind: ListKind) -> List {
        List {
            kind,
            core: NodeCore::new(),
            items: Vec::new(),
        }
    }

    /// Create a list from bulk data: pre-rendered markup, ordered items
    /// or a label to attributes mapping, each entry normalized into an
    /// `li`.
    pub fn from_data(kind: ListKind, data: ListData, attrs: Attrs) -> List {
        let mut list = List::new(kind);
        list.attrs(attrs);
        list.extend(data);
        list
    }

    /// The kind of this list.
    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// Append an `li` and return it.
    pub fn li(&mut self, content: impl Into<String>) -> &mut ListItem {
        self.items.push(ListItem::new(content));
        self.items.last_mut().unwrap()
    }

    /// Append an already built item.
    pub fn push_item(&mut self, item: ListItem) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Extend the list from bulk data, the same normalization the
    /// constructor applies.
    pub fn extend(&mut self, data: ListData) -> &mut Self {
        match data {
            ListData::Raw(content) => {
                self.core.content = content;
            }
            ListData::Items(items) => {
                for ListItemData { content, attrs } in items {
                    self.li(content).attrs(Attrs::Pairs(attrs));
                }
            }
            ListData::Map(map) => {
                for (content, attrs) in map {
                    self.li(content).attrs(Attrs::Pairs(attrs));
                }
            }
        }
        self
    }
}

impl Render for List {
    fn render(&self, options: &RenderOptions) -> String {
        let children = self.items.iter().map(|item| item.render(options)).collect();
        self.core.render_node(options, self.kind.tag(), "\n", children)
    }
}

/// An `<li>` leaf node holding literal content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListItem {
    core: NodeCore,
}

impl_node_common!(ListItem);

impl ListItem {
    /// Create an item with the given content.
    pub fn new(content: impl Into<String>) -> ListItem {
        ListItem {
            core: NodeCore {
                content: content.into(),
                ..NodeCore::new()
            },
        }
    }

    /// Set the literal content.
    pub fn text(&mut self, content: impl Into<String>) -> &mut Self {
        self.core.content = content.into();
        self
    }
}

impl Render for ListItem {
    fn render(&self, options: &RenderOptions) -> String {
        self.core.render_node(options, "li", "", Vec::new())
    }
}
