use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The markup language version a document is generated for.
///
/// The doctype decides the exact `<!DOCTYPE …>` declaration and whether
/// self-closing elements render with XML syntax (`<br />`) or SGML syntax
/// (`<br>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Doctype {
    /// `XHTML 1.0 Transitional`, the default.
    #[default]
    Xhtml10Transitional,
    /// `XHTML 1.0 Strict`
    Xhtml10Strict,
    /// `XHTML 1.0 Frameset`
    Xhtml10Frameset,
    /// `XHTML 1.1`
    Xhtml11,
    /// `HTML 4.01 Transitional`
    Html401Transitional,
    /// `HTML 4.01 Strict`
    Html401Strict,
    /// `HTML 4.01 Frameset`
    Html401Frameset,
}

impl Doctype {
    /// The name of the doctype, in the exact wording accepted by
    /// [`Doctype::from_name`].
    pub fn name(&self) -> &'static str {
        use Doctype::*;
        match self {
            Xhtml10Transitional => "XHTML 1.0 Transitional",
            Xhtml10Strict => "XHTML 1.0 Strict",
            Xhtml10Frameset => "XHTML 1.0 Frameset",
            Xhtml11 => "XHTML 1.1",
            Html401Transitional => "HTML 4.01 Transitional",
            Html401Strict => "HTML 4.01 Strict",
            Html401Frameset => "HTML 4.01 Frameset",
        }
    }

    /// The `<!DOCTYPE …>` declaration for this doctype.
    ///
    /// ```rust
    /// use xhtmlgen::Doctype;
    ///
    /// assert_eq!(
    ///     Doctype::Xhtml11.declaration(),
    ///     r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.1//EN" "http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd">"#
    /// );
    /// ```
    pub fn declaration(&self) -> &'static str {
        use Doctype::*;
        match self {
            Xhtml10Transitional => {
                "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">"
            }
            Xhtml10Strict => {
                "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">"
            }
            Xhtml10Frameset => {
                "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Frameset//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-frameset.dtd\">"
            }
            Xhtml11 => {
                "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.1//EN\" \"http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd\">"
            }
            Html401Transitional => {
                "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Transitional//EN\" \"http://www.w3.org/TR/html4/loose.dtd\">"
            }
            Html401Strict => {
                "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\" \"http://www.w3.org/TR/html4/strict.dtd\">"
            }
            Html401Frameset => {
                "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Frameset//EN\" \"http://www.w3.org/TR/html4/frameset.dtd\">"
            }
        }
    }

    /// True for the XML-derived doctypes, which close empty elements as
    /// `<tag />` rather than `<tag>`.
    pub fn is_xml(&self) -> bool {
        self.name().starts_with('X')
    }

    /// Look up a doctype by name, falling back to the default
    /// (`XHTML 1.0 Transitional`) when the name is not recognized.
    ///
    /// Use the [`FromStr`] impl instead to reject unknown names.
    pub fn from_name(name: &str) -> Doctype {
        name.parse().unwrap_or_default()
    }
}

impl FromStr for Doctype {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Doctype::*;
        match s {
            "XHTML 1.0 Transitional" => Ok(Xhtml10Transitional),
            "XHTML 1.0 Strict" => Ok(Xhtml10Strict),
            "XHTML 1.0 Frameset" => Ok(Xhtml10Frameset),
            "XHTML 1.1" => Ok(Xhtml11),
            "HTML 4.01 Transitional" => Ok(Html401Transitional),
            "HTML 4.01 Strict" => Ok(Html401Strict),
            "HTML 4.01 Frameset" => Ok(Html401Frameset),
            _ => Err(Error::UnknownDoctype(s.to_string())),
        }
    }
}

impl fmt::Display for Doctype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
