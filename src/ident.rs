//! Identifiers
//!
//! Variable, function, and argument names in the Language are modeled as a
//! distinct newtype over `String` rather than bare `String`, matching the
//! AST's treatment of identifiers as a kind separate from arbitrary string
//! values (which flow through `StringExpr`/`ListExpr` instead).

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_by_bytes() {
        assert_eq!(Identifier::new("x"), Identifier::from("x"));
        assert_ne!(Identifier::new("x"), Identifier::new("y"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Identifier::new("foo").to_string(), "foo");
    }
}
