//! The payload stored next to every key in a tree.
//!
//! A node's content is a closed sum type, so its type is always known and
//! releasing it is just dropping it. Content moves with its node; replacing
//! it drops the previous value exactly once.

use std::fmt;

use crate::Error;

/// The discriminant of a [`Content`] value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// [`Content::Integer`]
    Integer,
    /// [`Content::Float`]
    Float,
    /// [`Content::Char`]
    Char,
    /// [`Content::Text`]
    String,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::Float => "FLOAT",
            Self::Char => "CHAR",
            Self::String => "STRING",
        };
        f.write_str(name)
    }
}

/// A typed value owned by a tree node.
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    /// A signed integer, e.g. an occurrence counter.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A single character.
    Char(char),
    /// An owned string.
    Text(String),
}

impl Content {
    /// Which variant this is.
    pub fn tag(&self) -> ContentType {
        match self {
            Self::Integer(_) => ContentType::Integer,
            Self::Float(_) => ContentType::Float,
            Self::Char(_) => ContentType::Char,
            Self::Text(_) => ContentType::String,
        }
    }

    /// The integer inside, if this is [`Content::Integer`].
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{}", x),
            Self::Char(c) => write!(f, "{}", c),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Content {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for Content {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<char> for Content {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl TryFrom<&Content> for i64 {
    type Error = Error;

    fn try_from(content: &Content) -> Result<Self, Self::Error> {
        match content {
            Content::Integer(n) => Ok(*n),
            other => Err(Error::TypeMismatch {
                expected: ContentType::Integer,
                found: other.tag(),
            }),
        }
    }
}

impl TryFrom<&Content> for f64 {
    type Error = Error;

    fn try_from(content: &Content) -> Result<Self, Self::Error> {
        match content {
            Content::Float(x) => Ok(*x),
            other => Err(Error::TypeMismatch {
                expected: ContentType::Float,
                found: other.tag(),
            }),
        }
    }
}
