/*!
`Format`, the serialization format chosen by file extension or explicit override (§6 "File I/O":
"Format is chosen by file extension or explicit option").
*/

use std::path::Path;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    NTriples,
    NQuads,
    Turtle,
}

impl Format {
    /// Maps a file extension (without the leading dot, case-insensitive) to a `Format`.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "nt" => Some(Format::NTriples),
            "nq" => Some(Format::NQuads),
            "ttl" | "turtle" => Some(Format::Turtle),
            _ => None,
        }
    }

    /// Inspects `path`'s extension and maps it to a `Format`.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension().and_then(|ext| ext.to_str()).and_then(Format::from_extension)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Format::NTriples => "nt",
            Format::NQuads => "nq",
            Format::Turtle => "ttl",
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn recognizes_known_extensions_case_insensitively() {
        assert_eq!(Format::from_extension("TTL"), Some(Format::Turtle));
        assert_eq!(Format::from_extension("nq"), Some(Format::NQuads));
        assert_eq!(Format::from_extension("unknown"), None);
    }

    #[test]
    fn derives_format_from_path_extension() {
        let path = PathBuf::from("/tmp/data.nt");
        assert_eq!(Format::from_path(&path), Some(Format::NTriples));
    }
}
