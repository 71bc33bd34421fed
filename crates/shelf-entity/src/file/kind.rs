//! File record kind.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of a file record.
///
/// Folders carry no content; files and images reference a stored blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "file_kind", rename_all = "lowercase")]
pub enum FileKind {
    /// A container for other records; never downloadable.
    Folder,
    /// A regular file backed by a blob.
    File,
    /// An image file backed by a blob, possibly with size variants.
    Image,
}

impl FileKind {
    /// Whether records of this kind reference a stored blob.
    pub fn has_content(&self) -> bool {
        !matches!(self, Self::Folder)
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Folder => write!(f, "folder"),
            Self::File => write!(f, "file"),
            Self::Image => write!(f, "image"),
        }
    }
}

impl FromStr for FileKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "folder" => Ok(Self::Folder),
            "file" => Ok(Self::File),
            "image" => Ok(Self::Image),
            other => Err(format!("unknown file kind: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&FileKind::Folder).unwrap(), "\"folder\"");
        assert_eq!(serde_json::to_string(&FileKind::Image).unwrap(), "\"image\"");
    }

    #[test]
    fn only_folders_lack_content() {
        assert!(!FileKind::Folder.has_content());
        assert!(FileKind::File.has_content());
        assert!(FileKind::Image.has_content());
    }
}
