use std::fmt;

/// The error type for this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A child of this tag kind cannot be appended to the parent node.
    UnsupportedChild {
        /// Tag of the node being extended.
        parent: String,
        /// Tag of the rejected child.
        child: String,
    },
    /// Bulk data did not have one of the accepted shapes.
    InvalidInput(String),
    /// The doctype name is not one of the supported identifiers.
    UnknownDoctype(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedChild { parent, child } => {
                write!(f, "element <{}> does not allow <{}> children", parent, child)
            }
            Error::InvalidInput(message) => write!(f, "invalid input: {}", message),
            Error::UnknownDoctype(name) => write!(f, "unknown doctype: {}", name),
        }
    }
}

impl std::error::Error for Error {}
