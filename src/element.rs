use crate::attr::{AttrList, Attrs};
use crate::data::NodeData;
use crate::render::{element, tag_classes, RenderOptions};

/// Deferred rendering of a markup node.
///
/// Rendering never mutates the tree; a node can be rendered any number
/// of times, against different options.
pub trait Render {
    /// Render this node to a markup string.
    fn render(&self, options: &RenderOptions) -> String;
}

/// State shared by every tree node: attributes, literal content and the
/// optional trailing comment.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct NodeCore {
    pub(crate) attrs: AttrList,
    pub(crate) comment: Option<String>,
    pub(crate) content: String,
}

impl NodeCore {
    pub(crate) fn new() -> NodeCore {
        NodeCore {
            attrs: AttrList::new(),
            comment: None,
            content: String::new(),
        }
    }

    /// Compose the node: rendered children in declared order, then the
    /// literal content, joined by newlines and wrapped in the tag.
    pub(crate) fn render_node(
        &self,
        options: &RenderOptions,
        tag: &str,
        outer_sep: &str,
        children: Vec<String>,
    ) -> String {
        let join_sep = options.separator("\n");
        let mut parts = children;
        if !self.content.is_empty() {
            parts.push(self.content.clone());
        }
        let inner = parts.join(join_sep);
        let content = if inner.is_empty() {
            None
        } else {
            Some(inner.as_str())
        };
        let encoded = self.attrs.encode(" ");
        element(
            options,
            tag,
            &Attrs::Raw(encoded),
            content,
            self.comment.as_deref(),
            outer_sep,
            tag_classes().is_paired(tag),
        )
    }
}

// The fluent attribute/comment API every node type exposes.
macro_rules! impl_node_common {
    ($ty:ty) => {
        impl $ty {
            /// Append one attribute.
            pub fn attr(
                &mut self,
                name: impl Into<String>,
                value: impl Into<$crate::attr::AttrValue>,
            ) -> &mut Self {
                self.core.attrs.push_pair(name, value);
                self
            }

            /// Append a boolean-style attribute, rendered `name="name"`.
            pub fn flag(&mut self, name: impl Into<String>) -> &mut Self {
                self.core.attrs.push_flag(name);
                self
            }

            /// Append a whole attribute collection.
            pub fn attrs(&mut self, attrs: $crate::attr::Attrs) -> &mut Self {
                self.core.attrs.extend(attrs);
                self
            }

            /// Set the trailing comment, rendered after the end-tag.
            pub fn comment(&mut self, text: impl Into<String>) -> &mut Self {
                self.core.comment = Some(text.into());
                self
            }
        }
    };
}
pub(crate) use impl_node_common;

/// A generic container node of any tag.
///
/// Holds literal content and arbitrarily nested child containers;
/// pairedness and the default separator derive from the tag.
///
/// ```rust
/// use xhtmlgen::{Container, Render, RenderOptions};
///
/// let mut div = Container::new("div");
/// div.attr("id", "main").text("hello");
/// assert_eq!(div.render(&RenderOptions::default()), "<div id=\"main\">\nhello\n</div>");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    tag: String,
    core: NodeCore,
    children: Vec<Container>,
}

impl_node_common!(Container);

impl Container {
    /// Create an empty container; the tag is normalized to lowercase.
    pub fn new(tag: impl Into<String>) -> Container {
        Container {
            tag: tag.into().to_ascii_lowercase(),
            core: NodeCore::new(),
            children: Vec::new(),
        }
    }

    /// Create a container from bulk data: literal content, tagged
    /// records or a tag to records mapping.
    pub fn from_data(tag: impl Into<String>, data: NodeData, attrs: Attrs) -> Container {
        let mut container = Container::new(tag);
        container.attrs(attrs);
        container.extend(data);
        container
    }

    /// The (lowercased) tag of this container.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Set the literal content.
    pub fn text(&mut self, content: impl Into<String>) -> &mut Self {
        self.core.content = content.into();
        self
    }

    /// Append an empty child container and return it for further
    /// building.
    pub fn child(&mut self, tag: impl Into<String>) -> &mut Container {
        self.children.push(Container::new(tag));
        self.children.last_mut().unwrap()
    }

    /// Append an already built child container.
    pub fn push(&mut self, child: Container) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Extend this container from bulk data, the same normalization the
    /// constructor applies.
    pub fn extend(&mut self, data: NodeData) -> &mut Self {
        match data {
            NodeData::None => {}
            NodeData::Raw(content) => {
                self.core.content = content;
            }
            NodeData::Records(records) => {
                for record in records {
                    self.children.push(Container::from_data(
                        record.tag,
                        record.body.data,
                        record.body.attrs,
                    ));
                }
            }
            NodeData::Map(map) => {
                for (tag, bodies) in map {
                    for body in bodies {
                        self.children
                            .push(Container::from_data(&tag, body.data, body.attrs));
                    }
                }
            }
        }
        self
    }
}

impl Render for Container {
    fn render(&self, options: &RenderOptions) -> String {
        let children = self
            .children
            .iter()
            .map(|child| child.render(options))
            .collect();
        self.core
            .render_node(options, &self.tag, tag_classes().separator(&self.tag), children)
    }
}
