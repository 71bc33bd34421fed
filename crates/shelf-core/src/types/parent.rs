//! Parent-folder reference with a root sentinel.
//!
//! The wire format uses `0` for "no parent folder" and a UUID string
//! for a concrete folder, so the type carries its own serde impls
//! instead of deriving them.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference to the containing folder of a file record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParentId {
    /// The root sentinel — no parent folder. Serialized as `0`.
    #[default]
    Root,
    /// A concrete parent folder.
    Folder(Uuid),
}

impl ParentId {
    /// The folder UUID, or `None` at the root.
    pub fn as_folder(&self) -> Option<Uuid> {
        match self {
            Self::Root => None,
            Self::Folder(id) => Some(*id),
        }
    }

    /// Build from the nullable column representation.
    pub fn from_option(id: Option<Uuid>) -> Self {
        match id {
            None => Self::Root,
            Some(id) => Self::Folder(id),
        }
    }

    /// Whether this is the root sentinel.
    pub fn is_root(&self) -> bool {
        matches!(self, Self::Root)
    }
}

impl fmt::Display for ParentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, "0"),
            Self::Folder(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for ParentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "0" {
            return Ok(Self::Root);
        }
        Uuid::parse_str(s).map(Self::Folder)
    }
}

impl Serialize for ParentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Root => serializer.serialize_u64(0),
            Self::Folder(id) => serializer.serialize_str(&id.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for ParentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(u64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(0) => Ok(ParentId::Root),
            Repr::Number(n) => Err(de::Error::custom(format!("invalid parent id: {n}"))),
            Repr::Text(s) => s
                .parse()
                .map_err(|_| de::Error::custom(format!("invalid parent id: {s}"))),
        }
    }
}
