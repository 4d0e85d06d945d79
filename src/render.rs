use std::sync::OnceLock;

use ahash::{HashSet, HashSetExt};

use crate::attr::{encode_attrs, Attrs};
use crate::doctype::Doctype;

// Elements with no end tag.
const UNPAIRED: [&str; 12] = [
    "area", "base", "basefont", "br", "col", "frame", "hr", "img", "input", "link", "meta",
    "param",
];

// Elements whose content goes on its own lines by default.
const SEPARATED: [&str; 29] = [
    "address", "applet", "blockquote", "body", "center", "code", "dir", "div", "dl", "fieldset",
    "form", "frameset", "head", "html", "iframe", "ol", "optgroup", "map", "menu", "pre",
    "select", "script", "style", "table", "thead", "tbody", "tfoot", "tr", "ul",
];

#[derive(Debug)]
pub(crate) struct TagClasses {
    unpaired: HashSet<&'static str>,
    separated: HashSet<&'static str>,
}

impl TagClasses {
    fn new() -> Self {
        let mut unpaired = HashSet::new();
        unpaired.extend(UNPAIRED);
        let mut separated = HashSet::new();
        separated.extend(SEPARATED);
        TagClasses {
            unpaired,
            separated,
        }
    }

    /// Expects an already lowercased name.
    pub(crate) fn is_paired(&self, name: &str) -> bool {
        !self.unpaired.contains(name)
    }

    /// The default separator for an already lowercased name.
    pub(crate) fn separator(&self, name: &str) -> &'static str {
        if self.separated.contains(name) {
            "\n"
        } else {
            ""
        }
    }
}

pub(crate) fn tag_classes() -> &'static TagClasses {
    static CLASSES: OnceLock<TagClasses> = OnceLock::new();
    CLASSES.get_or_init(TagClasses::new)
}

/// How markup is rendered: for which doctype, and whether the output is
/// minimized.
///
/// An options value is built once by the caller and passed by reference
/// to every render call; there is no shared ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// The doctype generated for; decides the self-closing syntax.
    pub doctype: Doctype,
    /// Minimized output: no comments, no separators around content.
    pub minimize: bool,
}

impl RenderOptions {
    /// Options for a doctype, not minimized.
    pub fn new(doctype: Doctype) -> RenderOptions {
        RenderOptions {
            doctype,
            minimize: false,
        }
    }

    /// Same options with minimization enabled.
    pub fn minimized(mut self) -> RenderOptions {
        self.minimize = true;
        self
    }

    /// The separator to actually use: collapsed to `""` when minimizing.
    pub(crate) fn separator<'a>(&self, sep: &'a str) -> &'a str {
        if self.minimize {
            ""
        } else {
            sep
        }
    }
}

/// Generate the start-tag of an element.
///
/// For unpaired elements the doctype decides between `<name attrs />`
/// and `<name attrs>`.
pub fn start_tag(options: &RenderOptions, name: &str, attrs: &Attrs, paired: bool) -> String {
    let name = name.to_ascii_lowercase();
    let attrs = encode_attrs(attrs, " ");
    if paired || !options.doctype.is_xml() {
        format!("<{}{}>", name, attrs)
    } else {
        format!("<{}{} />", name, attrs)
    }
}

/// Generate the end-tag of an element, with an optional trailing comment.
///
/// The comment text is prefixed with `/` unless it already starts with
/// one. Unpaired elements have no end tag, so only the comment is
/// returned for them.
pub fn end_tag(
    options: &RenderOptions,
    name: &str,
    comment_text: Option<&str>,
    paired: bool,
) -> String {
    let rendered_comment = match comment_text {
        None => String::new(),
        Some(text) => {
            if text.starts_with('/') {
                comment(options, text)
            } else {
                comment(options, &format!("/{}", text))
            }
        }
    };
    if paired {
        format!("</{}>{}", name.to_ascii_lowercase(), rendered_comment)
    } else {
        rendered_comment
    }
}

/// Generate a complete element.
///
/// Paired elements compose start-tag, separated content and end-tag;
/// unpaired elements compose the start-tag and an inline comment. The
/// separator is forced empty when minimizing.
pub fn element(
    options: &RenderOptions,
    name: &str,
    attrs: &Attrs,
    content: Option<&str>,
    comment_text: Option<&str>,
    sep: &str,
    paired: bool,
) -> String {
    let sep = options.separator(sep);
    if paired {
        let content = match content {
            Some(content) if !content.is_empty() => format!("{}{}{}", sep, content, sep),
            _ => String::new(),
        };
        format!(
            "{}{}{}",
            start_tag(options, name, attrs, true),
            content,
            end_tag(options, name, comment_text, true)
        )
    } else {
        let rendered_comment = match comment_text {
            Some(text) => comment(options, text),
            None => String::new(),
        };
        format!(
            "{}{}",
            start_tag(options, name, attrs, false),
            rendered_comment
        )
    }
}

/// Generate a markup comment.
///
/// Minimized output suppresses comments entirely.
///
/// ```rust
/// use xhtmlgen::{comment, RenderOptions};
///
/// let options = RenderOptions::default();
/// assert_eq!(comment(&options, "row ends"), "<!-- row ends -->");
/// assert_eq!(comment(&options, ""), "<!-- -->");
/// assert_eq!(comment(&options.minimized(), "row ends"), "");
/// ```
pub fn comment(options: &RenderOptions, text: &str) -> String {
    if options.minimize {
        return String::new();
    }
    if text.is_empty() {
        "<!-- -->".to_string()
    } else {
        format!("<!-- {} -->", text)
    }
}
