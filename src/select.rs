use ahash::{HashSet, HashSetExt};

use crate::attr::{Attr, AttrList, Attrs};
use crate::data::OptionsData;
use crate::element::{impl_node_common, NodeCore, Render};
use crate::render::{element, RenderOptions};

fn selected_set<I, S>(values: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

/// A `<select>` node. Child kinds in declared order: `option`, then
/// `optgroup`.
///
/// The select holds a set of selected values; an appended option is
/// selected by default when its value is a member of that set.
///
/// ```rust
/// use xhtmlgen::{Render, RenderOptions, Select};
///
/// let mut select = Select::new("color");
/// select.selected(["green"]);
/// select.option("red");
/// select.option("green");
/// assert_eq!(
///     select.render(&RenderOptions::default().minimized()),
///     r#"<select name="color"><option value="red">red</option><option value="green" selected="selected">green</option></select>"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    core: NodeCore,
    selected: HashSet<String>,
    options: Vec<OptionNode>,
    groups: Vec<Optgroup>,
}

impl_node_common!(Select);

impl Select {
    /// Create an empty select with the given `name` attribute.
    pub fn new(name: impl Into<String>) -> Select {
        let mut core = NodeCore::new();
        core.attrs.push_pair("name", name.into());
        Select {
            core,
            selected: HashSet::new(),
            options: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Create a select and populate it from option data.
    pub fn from_data<I, S>(name: impl Into<String>, data: OptionsData, selected: I) -> Select
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut select = Select::new(name);
        select.selected(selected);
        select.options(data);
        select
    }

    /// Replace the selected-values set. Only affects options appended
    /// afterwards.
    pub fn selected<I, S>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected = selected_set(values);
        self
    }

    /// Append an option; its selection flag defaults to membership of
    /// the value in the selected-values set. The returned node can
    /// override the flag.
    pub fn option(&mut self, value: impl Into<String>) -> &mut OptionNode {
        let value = value.into();
        let is_selected = self.selected.contains(&value);
        let mut option = OptionNode::new(value);
        option.selected(is_selected);
        self.options.push(option);
        self.options.last_mut().unwrap()
    }

    /// Append options from bulk data in any accepted shape.
    pub fn options(&mut self, data: OptionsData) -> &mut Self {
        match data {
            OptionsData::Raw(content) => {
                self.core.content = content;
            }
            OptionsData::Values(values) => {
                for value in values {
                    self.option(value);
                }
            }
            OptionsData::Entries(entries) => {
                for entry in entries {
                    let option = self.option(entry.value);
                    if let Some(label) = entry.label {
                        option.text(label);
                    }
                    option.attrs(Attrs::Pairs(entry.attrs));
                }
            }
            OptionsData::Map(map) => {
                for (value, label) in map {
                    self.option(value)
                        .text(label.label)
                        .attrs(Attrs::Pairs(label.attrs));
                }
            }
        }
        self
    }

    /// Append an optgroup inheriting this select's selected-values set,
    /// and return it.
    pub fn optgroup(&mut self, label: impl Into<String>) -> &mut Optgroup {
        let mut group = Optgroup::new(label);
        group.selected = self.selected.clone();
        self.groups.push(group);
        self.groups.last_mut().unwrap()
    }

    /// Append an already built option.
    pub fn push_option(&mut self, option: OptionNode) -> &mut Self {
        self.options.push(option);
        self
    }

    /// Append an already built optgroup, keeping its own selected set.
    pub fn push_group(&mut self, group: Optgroup) -> &mut Self {
        self.groups.push(group);
        self
    }
}

impl Render for Select {
    fn render(&self, options: &RenderOptions) -> String {
        let children = self
            .options
            .iter()
            .map(|option| option.render(options))
            .chain(self.groups.iter().map(|group| group.render(options)))
            .collect();
        self.core.render_node(options, "select", "\n", children)
    }
}

/// An `<optgroup>` node; its only child kind is `option`.
///
/// The group carries its own selected-values set; when appended through
/// [`Select::optgroup`] it starts out inheriting the parent's set.
#[derive(Debug, Clone, PartialEq)]
pub struct Optgroup {
    core: NodeCore,
    selected: HashSet<String>,
    options: Vec<OptionNode>,
}

impl_node_common!(Optgroup);

impl Optgroup {
    /// Create an empty optgroup with the given `label` attribute.
    pub fn new(label: impl Into<String>) -> Optgroup {
        let mut core = NodeCore::new();
        core.attrs.push_pair("label", label.into());
        Optgroup {
            core,
            selected: HashSet::new(),
            options: Vec::new(),
        }
    }

    /// Replace the selected-values set. Only affects options appended
    /// afterwards.
    pub fn selected<I, S>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected = selected_set(values);
        self
    }

    /// Append an option; its selection flag defaults to membership of
    /// the value in the selected-values set.
    pub fn option(&mut self, value: impl Into<String>) -> &mut OptionNode {
        let value = value.into();
        let is_selected = self.selected.contains(&value);
        let mut option = OptionNode::new(value);
        option.selected(is_selected);
        self.options.push(option);
        self.options.last_mut().unwrap()
    }

    /// Append options from bulk data in any accepted shape.
    pub fn options(&mut self, data: OptionsData) -> &mut Self {
        match data {
            OptionsData::Raw(content) => {
                self.core.content = content;
            }
            OptionsData::Values(values) => {
                for value in values {
                    self.option(value);
                }
            }
            OptionsData::Entries(entries) => {
                for entry in entries {
                    let option = self.option(entry.value);
                    if let Some(label) = entry.label {
                        option.text(label);
                    }
                    option.attrs(Attrs::Pairs(entry.attrs));
                }
            }
            OptionsData::Map(map) => {
                for (value, label) in map {
                    self.option(value)
                        .text(label.label)
                        .attrs(Attrs::Pairs(label.attrs));
                }
            }
        }
        self
    }

    /// Append an already built option.
    pub fn push_option(&mut self, option: OptionNode) -> &mut Self {
        self.options.push(option);
        self
    }
}

impl Render for Optgroup {
    fn render(&self, options: &RenderOptions) -> String {
        let children = self
            .options
            .iter()
            .map(|option| option.render(options))
            .collect();
        self.core.render_node(options, "optgroup", "\n", children)
    }
}

/// An `<option>` leaf node.
///
/// The selection state lives next to the attribute list, not in it: at
/// render time any `selected` entries in the supplied attributes are
/// discarded and a single `selected="selected"` is emitted exactly when
/// the flag is set, so repeated renders stay idempotent.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionNode {
    core: NodeCore,
    value: String,
    selected: bool,
}

impl_node_common!(OptionNode);

impl OptionNode {
    /// Create an option; the display content defaults to the value.
    pub fn new(value: impl Into<String>) -> OptionNode {
        let value = value.into();
        OptionNode {
            core: NodeCore {
                content: value.clone(),
                ..NodeCore::new()
            },
            value,
            selected: false,
        }
    }

    /// The option value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the display content.
    pub fn text(&mut self, content: impl Into<String>) -> &mut Self {
        self.core.content = content.into();
        self
    }

    /// Set the selection flag.
    pub fn selected(&mut self, selected: bool) -> &mut Self {
        self.selected = selected;
        self
    }

    /// The selection flag.
    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

impl Render for OptionNode {
    fn render(&self, options: &RenderOptions) -> String {
        let mut attrs = AttrList::new();
        attrs.push_pair("value", &self.value);
        for attr in self.core.attrs.items() {
            // selected is dedicated node state; duplicates in the
            // supplied attributes are dropped
            match attr {
                Attr::Pair(name, _) | Attr::Flag(name)
                    if name.eq_ignore_ascii_case("selected") => {}
                other => attrs.push(other.clone()),
            }
        }
        if self.selected {
            attrs.push_pair("selected", "selected");
        }
        let content = if self.core.content.is_empty() {
            None
        } else {
            Some(self.core.content.as_str())
        };
        element(
            options,
            "option",
            &Attrs::Raw(attrs.encode(" ")),
            content,
            self.core.comment.as_deref(),
            "",
            true,
        )
    }
}
