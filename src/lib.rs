#![forbid(unsafe_code)]

//! Xhtmlgen generates well-formed (X)HTML markup from structured data.
//!
//! There are two interchangeable ways to generate markup:
//!
//! * [`Fast`], an immediate-mode builder whose methods return complete
//!   markup strings right away.
//! * A node tree ([`Container`], [`Table`], [`List`], [`Select`] and
//!   friends) built up with fluent append calls and rendered once at the
//!   end through [`Render::render`].
//!
//! Both share the same attribute encoding, tag rendering and
//! [`Doctype`] policy. Rendering is controlled by a [`RenderOptions`]
//! value the caller threads through explicitly; there is no process-wide
//! state.
//!
//! ```rust
//! use xhtmlgen::{Attrs, Fast, Render, RenderOptions, Table};
//!
//! // immediate mode
//! let fast = Fast::default();
//! assert_eq!(
//!     fast.element("p", Attrs::none(), Some("hello"), None),
//!     "<p>hello</p>"
//! );
//!
//! // tree mode: rendering is deferred, order comes from the child
//! // whitelist, not from append order
//! let mut table = Table::new();
//! table.tr().td("body cell");
//! table.thead().tr().th("header cell");
//! let markup = table.render(&RenderOptions::default().minimized());
//! assert!(markup.starts_with("<table><thead>"));
//! ```

mod attr;
mod data;
mod doctype;
mod element;
mod error;
mod escape;
mod fast;
mod list;
mod render;
mod select;
mod table;

pub use attr::{encode_attr, encode_attrs, Attr, AttrList, AttrValue, Attrs};
pub use data::{
    ListData, ListItemData, NodeData, OptionEntry, OptionLabel, OptionsData, Record, RecordBody,
};
pub use doctype::Doctype;
pub use element::{Container, Render};
pub use error::Error;
pub use fast::{Fast, InputKind, Rendered};
pub use list::{List, ListItem, ListKind};
pub use render::{comment, element, end_tag, start_tag, RenderOptions};
pub use select::{Optgroup, OptionNode, Select};
pub use table::{Cell, CellKind, Row, SectionKind, Table, TableSection};
