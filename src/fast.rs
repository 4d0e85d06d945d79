use indexmap::IndexMap;

use crate::attr::{encode_attrs, Attr, Attrs};
use crate::data::{ListData, NodeData, OptionsData, RecordBody};
use crate::doctype::Doctype;
use crate::error::Error;
use crate::list::ListKind;
use crate::render::{self, tag_classes, RenderOptions};

/// The `type` of a form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// `type="text"`
    Text,
    /// `type="hidden"`
    Hidden,
    /// `type="checkbox"`
    Checkbox,
    /// `type="radio"`
    Radio,
    /// `type="submit"`
    Submit,
    /// `type="reset"`
    Reset,
    /// `type="password"`
    Password,
    /// `type="file"`
    File,
}

impl InputKind {
    /// The `type` attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Hidden => "hidden",
            InputKind::Checkbox => "checkbox",
            InputKind::Radio => "radio",
            InputKind::Submit => "submit",
            InputKind::Reset => "reset",
            InputKind::Password => "password",
            InputKind::File => "file",
        }
    }

    // hidden/submit/reset inputs get no label by default
    fn labeled_by_default(&self) -> bool {
        !matches!(self, InputKind::Hidden | InputKind::Submit | InputKind::Reset)
    }

    // only these two honor a checked set
    fn checkable(&self) -> bool {
        matches!(self, InputKind::Checkbox | InputKind::Radio)
    }
}

/// Markup for a group of inputs, mirroring the shape of the option data
/// it was generated from.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// One rendered input per sequence entry, in order.
    List(Vec<String>),
    /// Rendered inputs keyed by option value; insertion order preserved.
    Map(IndexMap<String, String>),
}

/// The immediate-mode builder: every method returns a complete markup
/// string right away, no tree is retained.
///
/// Arbitrary elements go through [`Fast::element`]; a closed set of
/// specialized methods covers lists, tables, selects and form inputs.
///
/// ```rust
/// use xhtmlgen::{Attrs, Doctype, Fast};
///
/// let fast = Fast::with_doctype(Doctype::Xhtml10Strict);
/// assert_eq!(fast.element("br", Attrs::none(), None, None), "<br />");
/// assert_eq!(
///     fast.element("em", Attrs::none(), Some("now"), None),
///     "<em>now</em>"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Fast {
    options: RenderOptions,
}

impl Fast {
    /// Create a builder rendering with the given options.
    pub fn new(options: RenderOptions) -> Fast {
        Fast { options }
    }

    /// Create a non-minimizing builder for a doctype.
    pub fn with_doctype(doctype: Doctype) -> Fast {
        Fast::new(RenderOptions::new(doctype))
    }

    /// The render options of this builder.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// The `<!DOCTYPE …>` declaration for this builder's doctype.
    pub fn doctype_declaration(&self) -> &'static str {
        self.options.doctype.declaration()
    }

    /// A start-tag; pairedness is decided by the fixed self-closing set.
    pub fn start_tag(&self, name: &str, attrs: Attrs) -> String {
        let name = name.to_ascii_lowercase();
        render::start_tag(&self.options, &name, &attrs, tag_classes().is_paired(&name))
    }

    /// An end-tag with an optional trailing comment; self-closing tags
    /// yield only the comment.
    pub fn end_tag(&self, name: &str, comment: Option<&str>) -> String {
        let name = name.to_ascii_lowercase();
        render::end_tag(&self.options, &name, comment, tag_classes().is_paired(&name))
    }

    /// A markup comment, suppressed entirely when minimizing.
    pub fn comment(&self, text: &str) -> String {
        render::comment(&self.options, text)
    }

    /// Any element by tag name: the generic escape hatch. Pairedness and
    /// the default separator are decided by the fixed tag sets.
    pub fn element(
        &self,
        name: &str,
        attrs: Attrs,
        content: Option<&str>,
        comment: Option<&str>,
    ) -> String {
        self.element_with_sep(name, attrs, content, comment, None)
    }

    /// Like [`Fast::element`] with an explicit separator overriding the
    /// tag's default.
    pub fn element_with_sep(
        &self,
        name: &str,
        attrs: Attrs,
        content: Option<&str>,
        comment: Option<&str>,
        sep: Option<&str>,
    ) -> String {
        let name = name.to_ascii_lowercase();
        let classes = tag_classes();
        let sep = sep.unwrap_or_else(|| classes.separator(&name));
        render::element(
            &self.options,
            &name,
            &attrs,
            content,
            comment,
            sep,
            classes.is_paired(&name),
        )
    }

    // own attributes first, then the caller's extras
    fn merge_attrs(&self, own: Vec<Attr>, extra: &Attrs) -> Attrs {
        Attrs::Raw(format!(
            "{}{}",
            encode_attrs(&Attrs::Pairs(own), " "),
            encode_attrs(extra, " ")
        ))
    }

    /// A complete list element; every entry is normalized into an `li`.
    pub fn list(
        &self,
        kind: ListKind,
        data: ListData,
        attrs: Attrs,
        comment: Option<&str>,
    ) -> String {
        let sep = self.options.separator("\n");
        let items = match data {
            ListData::Raw(markup) => markup,
            ListData::Items(items) => items
                .into_iter()
                .map(|item| {
                    self.element("li", Attrs::Pairs(item.attrs), Some(&item.content), None)
                })
                .collect::<Vec<_>>()
                .join(sep),
            ListData::Map(map) => map
                .into_iter()
                .map(|(content, attrs)| {
                    self.element("li", Attrs::Pairs(attrs), Some(&content), None)
                })
                .collect::<Vec<_>>()
                .join(sep),
        };
        self.element_with_sep(kind.tag(), attrs, Some(&items), comment, Some("\n"))
    }

    /// A single `<input>`; `File` inputs carry no `value` attribute.
    pub fn input(
        &self,
        kind: InputKind,
        name: &str,
        value: &str,
        attrs: Attrs,
        comment: Option<&str>,
    ) -> String {
        let mut own = vec![Attr::new("type", kind.as_str()), Attr::new("name", name)];
        if kind != InputKind::File {
            own.push(Attr::new("value", value));
        }
        let merged = self.merge_attrs(own, &attrs);
        self.element("input", merged, None, comment)
    }

    /// A group of inputs sharing one field name, one per option.
    ///
    /// Each input is wrapped in a `<label>` unless `labels` suppresses
    /// it (the default skips labels for hidden/submit/reset). Checkbox
    /// and radio inputs place the label text after the input, all other
    /// kinds before it. The `checked` set is honored for checkbox and
    /// radio only. The result mirrors the container shape of the
    /// options: a list for sequences, a map keyed by value for maps.
    pub fn inputs(
        &self,
        kind: InputKind,
        name: &str,
        options: OptionsData,
        checked: &[&str],
        labels: Option<bool>,
    ) -> Result<Rendered, Error> {
        let labels = labels.unwrap_or_else(|| kind.labeled_by_default());
        let checked: &[&str] = if kind.checkable() { checked } else { &[] };

        let one = |value: &str, text: &str, extra: Vec<Attr>| -> String {
            let mut fragment = String::new();
            if checked.contains(&value) {
                fragment.push_str(&encode_attrs(
                    &Attrs::Pairs(vec![Attr::flag("checked")]),
                    " ",
                ));
            }
            fragment.push_str(&encode_attrs(&Attrs::Pairs(extra), " "));
            let input = self.input(kind, name, value, Attrs::Raw(fragment), None);
            if !labels {
                return input;
            }
            let content = if kind.checkable() {
                format!("{} {}", input, text)
            } else {
                format!("{}: {}", text, input)
            };
            self.label(&content, None, Attrs::none(), None)
        };

        match options {
            OptionsData::Raw(_) => Err(Error::InvalidInput(
                "grouped inputs accept values, entries or a map".to_string(),
            )),
            OptionsData::Values(values) => Ok(Rendered::List(
                values
                    .into_iter()
                    .map(|value| one(&value, &value, Vec::new()))
                    .collect(),
            )),
            OptionsData::Entries(entries) => Ok(Rendered::List(
                entries
                    .into_iter()
                    .map(|entry| {
                        let text = entry.label.as_deref().unwrap_or(&entry.value);
                        one(&entry.value, text, entry.attrs.clone())
                    })
                    .collect(),
            )),
            OptionsData::Map(map) => Ok(Rendered::Map(
                map.into_iter()
                    .map(|(value, label)| {
                        let rendered = one(&value, &label.label, label.attrs);
                        (value, rendered)
                    })
                    .collect(),
            )),
        }
    }

    // shared by the table family: dispatch records to the matching
    // sub-tag renderer; unrecognized tags are silently dropped
    fn table_content(&self, data: NodeData) -> String {
        let sep = self.options.separator("\n");
        match data {
            NodeData::None => String::new(),
            NodeData::Raw(markup) => markup,
            NodeData::Records(records) => records
                .into_iter()
                .filter_map(|record| self.table_record(&record.tag, record.body))
                .collect::<Vec<_>>()
                .join(sep),
            NodeData::Map(map) => map
                .into_iter()
                .flat_map(|(tag, bodies)| {
                    bodies
                        .into_iter()
                        .filter_map(|body| self.table_record(&tag, body))
                        .collect::<Vec<_>>()
                })
                .collect::<Vec<_>>()
                .join(sep),
        }
    }

    fn table_record(&self, tag: &str, body: RecordBody) -> Option<String> {
        match tag.to_ascii_lowercase().as_str() {
            "thead" => Some(self.thead(body.data, body.attrs, None)),
            "tbody" => Some(self.tbody(body.data, body.attrs, None)),
            "tfoot" => Some(self.tfoot(body.data, body.attrs, None)),
            "tr" => Some(self.tr(body.data, body.attrs, None)),
            "td" => Some(self.td(&raw_content(body.data), body.attrs, None)),
            "th" => Some(self.th(&raw_content(body.data), body.attrs, None)),
            _ => None,
        }
    }

    /// A complete `<table>` from bulk data.
    pub fn table(&self, data: NodeData, attrs: Attrs, comment: Option<&str>) -> String {
        let content = self.table_content(data);
        self.element("table", attrs, Some(&content), comment)
    }

    /// A `<thead>` from bulk data.
    pub fn thead(&self, data: NodeData, attrs: Attrs, comment: Option<&str>) -> String {
        let content = self.table_content(data);
        self.element("thead", attrs, Some(&content), comment)
    }

    /// A `<tbody>` from bulk data.
    pub fn tbody(&self, data: NodeData, attrs: Attrs, comment: Option<&str>) -> String {
        let content = self.table_content(data);
        self.element("tbody", attrs, Some(&content), comment)
    }

    /// A `<tfoot>` from bulk data.
    pub fn tfoot(&self, data: NodeData, attrs: Attrs, comment: Option<&str>) -> String {
        let content = self.table_content(data);
        self.element("tfoot", attrs, Some(&content), comment)
    }

    /// A `<tr>` from bulk data.
    pub fn tr(&self, data: NodeData, attrs: Attrs, comment: Option<&str>) -> String {
        let content = self.table_content(data);
        self.element("tr", attrs, Some(&content), comment)
    }

    /// A `<td>` cell.
    pub fn td(&self, content: &str, attrs: Attrs, comment: Option<&str>) -> String {
        self.element("td", attrs, Some(content), comment)
    }

    /// A `<th>` cell.
    pub fn th(&self, content: &str, attrs: Attrs, comment: Option<&str>) -> String {
        self.element("th", attrs, Some(content), comment)
    }

    /// A complete `<select>`; selection is decided by membership in the
    /// `selected` set.
    pub fn select(
        &self,
        name: &str,
        options: OptionsData,
        selected: &[&str],
        attrs: Attrs,
        comment: Option<&str>,
    ) -> String {
        let merged = self.merge_attrs(vec![Attr::new("name", name)], &attrs);
        let rendered = self.options_markup(options, selected);
        self.element("select", merged, Some(&rendered), comment)
    }

    /// An `<optgroup>` with its own selected set.
    pub fn optgroup(
        &self,
        label: &str,
        options: OptionsData,
        selected: &[&str],
        attrs: Attrs,
        comment: Option<&str>,
    ) -> String {
        let merged = self.merge_attrs(vec![Attr::new("label", label)], &attrs);
        let rendered = self.options_markup(options, selected);
        self.element("optgroup", merged, Some(&rendered), comment)
    }

    /// A single `<option>`; the content defaults to the value.
    pub fn option(
        &self,
        value: &str,
        content: Option<&str>,
        selected: bool,
        attrs: Attrs,
        comment: Option<&str>,
    ) -> String {
        let mut own = vec![Attr::new("value", value)];
        if selected {
            own.push(Attr::flag("selected"));
        }
        let merged = self.merge_attrs(own, &attrs);
        self.element("option", merged, Some(content.unwrap_or(value)), comment)
    }

    fn options_markup(&self, data: OptionsData, selected: &[&str]) -> String {
        let sep = self.options.separator("\n");
        match data {
            OptionsData::Raw(markup) => markup,
            OptionsData::Values(values) => values
                .into_iter()
                .map(|value| {
                    let is_selected = selected.contains(&value.as_str());
                    self.option(&value, None, is_selected, Attrs::none(), None)
                })
                .collect::<Vec<_>>()
                .join(sep),
            OptionsData::Entries(entries) => entries
                .into_iter()
                .map(|entry| {
                    let is_selected = selected.contains(&entry.value.as_str());
                    self.option(
                        &entry.value,
                        entry.label.as_deref(),
                        is_selected,
                        Attrs::Pairs(entry.attrs.clone()),
                        None,
                    )
                })
                .collect::<Vec<_>>()
                .join(sep),
            OptionsData::Map(map) => map
                .into_iter()
                .map(|(value, label)| {
                    let is_selected = selected.contains(&value.as_str());
                    self.option(
                        &value,
                        Some(&label.label),
                        is_selected,
                        Attrs::Pairs(label.attrs),
                        None,
                    )
                })
                .collect::<Vec<_>>()
                .join(sep),
        }
    }

    /// An anchor. `href` wins over `name` when both are given.
    #[allow(clippy::too_many_arguments)]
    pub fn a(
        &self,
        content: &str,
        href: Option<&str>,
        name: Option<&str>,
        title: Option<&str>,
        target: Option<&str>,
        lang: Option<&str>,
        attrs: Attrs,
        comment: Option<&str>,
    ) -> String {
        let mut own = Vec::new();
        if let Some(href) = href {
            own.push(Attr::new("href", href));
        } else if let Some(name) = name {
            own.push(Attr::new("name", name));
        }
        for (attr_name, value) in [("title", title), ("target", target), ("hreflang", lang)] {
            if let Some(value) = value {
                own.push(Attr::new(attr_name, value));
            }
        }
        let merged = self.merge_attrs(own, &attrs);
        self.element("a", merged, Some(content), comment)
    }

    /// An image; `title` falls back to the `alt` text.
    #[allow(clippy::too_many_arguments)]
    pub fn img(
        &self,
        src: &str,
        alt: &str,
        width: Option<&str>,
        height: Option<&str>,
        title: Option<&str>,
        attrs: Attrs,
        comment: Option<&str>,
    ) -> String {
        let mut own = vec![Attr::new("src", src), Attr::new("alt", alt)];
        own.push(Attr::new("title", title.unwrap_or(alt)));
        for (attr_name, value) in [("width", width), ("height", height)] {
            if let Some(value) = value {
                own.push(Attr::new(attr_name, value));
            }
        }
        let merged = self.merge_attrs(own, &attrs);
        self.element("img", merged, None, comment)
    }

    /// A form element.
    pub fn form(
        &self,
        content: &str,
        action: &str,
        method: Option<&str>,
        enctype: Option<&str>,
        attrs: Attrs,
        comment: Option<&str>,
    ) -> String {
        let mut own = vec![Attr::new("action", action)];
        for (attr_name, value) in [("method", method), ("enctype", enctype)] {
            if let Some(value) = value {
                own.push(Attr::new(attr_name, value));
            }
        }
        let merged = self.merge_attrs(own, &attrs);
        self.element("form", merged, Some(content), comment)
    }

    /// A label, optionally bound to a field id.
    pub fn label(
        &self,
        content: &str,
        for_id: Option<&str>,
        attrs: Attrs,
        comment: Option<&str>,
    ) -> String {
        let own = match for_id {
            Some(for_id) => vec![Attr::new("for", for_id)],
            None => Vec::new(),
        };
        let merged = self.merge_attrs(own, &attrs);
        self.element("label", merged, Some(content), comment)
    }

    /// A fieldset; the label doubles as the trailing comment unless one
    /// is given explicitly.
    pub fn fieldset(
        &self,
        content: &str,
        label: Option<&str>,
        attrs: Attrs,
        comment: Option<&str>,
    ) -> String {
        let content = match label {
            Some(label) => format!(
                "{}\n{}",
                self.label(label, None, Attrs::none(), None),
                content
            ),
            None => content.to_string(),
        };
        let comment = comment.or(label);
        self.element("fieldset", attrs, Some(&content), comment)
    }

    /// A textarea field.
    pub fn textarea(
        &self,
        name: &str,
        content: &str,
        cols: u32,
        rows: u32,
        attrs: Attrs,
        comment: Option<&str>,
    ) -> String {
        let own = vec![
            Attr::new("name", name),
            Attr::new("cols", cols),
            Attr::new("rows", rows),
        ];
        let merged = self.merge_attrs(own, &attrs);
        self.element("textarea", merged, Some(content), comment)
    }

    /// A button of the given type (`button`, `reset`, `submit`).
    pub fn button(
        &self,
        button_type: &str,
        content: &str,
        name: Option<&str>,
        value: Option<&str>,
        attrs: Attrs,
        comment: Option<&str>,
    ) -> String {
        let mut own = vec![Attr::new("type", button_type)];
        for (attr_name, attr_value) in [("name", name), ("value", value)] {
            if let Some(attr_value) = attr_value {
                own.push(Attr::new(attr_name, attr_value));
            }
        }
        let merged = self.merge_attrs(own, &attrs);
        self.element("button", merged, Some(content), comment)
    }

    /// An inline stylesheet.
    pub fn style(&self, content: &str, media: Option<&str>, comment: Option<&str>) -> String {
        let mut own = vec![Attr::new("type", "text/css")];
        if let Some(media) = media {
            own.push(Attr::new("media", media));
        }
        let merged = self.merge_attrs(own, &Attrs::none());
        self.element("style", merged, Some(content), comment)
    }

    /// A script element. Inline scripts are wrapped in a CDATA guard for
    /// the SGML doctypes unless minimizing; external scripts render a
    /// placeholder comment as content.
    pub fn script(
        &self,
        content: Option<&str>,
        src: Option<&str>,
        charset: Option<&str>,
        attrs: Attrs,
        comment: Option<&str>,
    ) -> String {
        let mut own = vec![Attr::new("type", "text/javascript")];
        for (attr_name, value) in [("src", src), ("charset", charset)] {
            if let Some(value) = value {
                own.push(Attr::new(attr_name, value));
            }
        }
        let merged = self.merge_attrs(own, &attrs);
        match content {
            Some(content) => {
                let content = if self.options.minimize || self.options.doctype.is_xml() {
                    content.to_string()
                } else {
                    format!("/* <![CDATA[ */\n{}\n/* ]]> */", content)
                };
                self.element("script", merged, Some(&content), comment)
            }
            None => {
                let placeholder = self.comment("");
                self.element_with_sep("script", merged, Some(&placeholder), comment, Some(""))
            }
        }
    }

    /// A stylesheet/resource link.
    pub fn link(
        &self,
        rel: Option<&str>,
        href: Option<&str>,
        link_type: Option<&str>,
        attrs: Attrs,
        comment: Option<&str>,
    ) -> String {
        let mut own = Vec::new();
        for (attr_name, value) in [("rel", rel), ("type", link_type), ("href", href)] {
            if let Some(value) = value {
                own.push(Attr::new(attr_name, value));
            }
        }
        // the caller's attributes come first here
        let merged = Attrs::Raw(format!(
            "{}{}",
            encode_attrs(&attrs, " "),
            encode_attrs(&Attrs::Pairs(own), " ")
        ));
        self.element("link", merged, None, comment)
    }

    /// A meta tag.
    pub fn meta(
        &self,
        content: &str,
        name: Option<&str>,
        http_equiv: Option<&str>,
        attrs: Attrs,
        comment: Option<&str>,
    ) -> String {
        let mut own = vec![Attr::new("content", content)];
        for (attr_name, value) in [("name", name), ("http-equiv", http_equiv)] {
            if let Some(value) = value {
                own.push(Attr::new(attr_name, value));
            }
        }
        // the caller's attributes come first here
        let merged = Attrs::Raw(format!(
            "{}{}",
            encode_attrs(&attrs, " "),
            encode_attrs(&Attrs::Pairs(own), " ")
        ));
        self.element("meta", merged, None, comment)
    }
}

fn raw_content(data: NodeData) -> String {
    match data {
        NodeData::Raw(content) => content,
        _ => String::new(),
    }
}
