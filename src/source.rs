//! Layout source documents
//!
//! A layout source is a JSON object mapping element names to definitions.
//! Key order is meaningful: it fixes registration order, and with it both
//! dependency-vertex indices and render z-order, so the mapping is kept
//! ordered rather than hashed.
//!
//! Each definition carries a `content` block (text, declared extent,
//! optional RGBA color) and a `constraints` block with up to four anchor
//! entries keyed by the subject's own side. Missing sides are simply
//! unconstrained; unknown side keys are rejected.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::layout::{Rgba, Side};

/// Errors that can occur when loading or parsing a layout source
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read layout source: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse layout JSON: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// A parsed layout source: element definitions in document order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub elements: IndexMap<String, ElementDef>,
}

/// One element definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ElementDef {
    pub content: ContentDef,
    pub constraints: ConstraintsDef,
}

/// Declared content of an element.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentDef {
    pub text: String,
    pub width: f64,
    pub height: f64,
    /// RGBA channels in `[0, 1]`; omitted means opaque white.
    pub color: Option<[f64; 4]>,
}

impl ContentDef {
    /// Element color, defaulting to opaque white.
    pub fn color(&self) -> Rgba {
        self.color.map(Rgba::from).unwrap_or(Rgba::WHITE)
    }
}

/// The four optional constraint slots, keyed by the subject's side.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstraintsDef {
    pub left: Option<AnchorDef>,
    pub right: Option<AnchorDef>,
    pub top: Option<AnchorDef>,
    pub bottom: Option<AnchorDef>,
}

impl ConstraintsDef {
    /// The slots in evaluation order: left, right, top, bottom.
    pub fn entries(&self) -> [(Side, Option<&AnchorDef>); 4] {
        [
            (Side::Left, self.left.as_ref()),
            (Side::Right, self.right.as_ref()),
            (Side::Top, self.top.as_ref()),
            (Side::Bottom, self.bottom.as_ref()),
        ]
    }
}

/// One anchor entry: target name, which side of the target to read, and
/// the offset applied to the value read there.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnchorDef {
    pub name: String,
    pub direction: Direction,
    pub value: f64,
}

/// Target side named in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Top,
    Bottom,
}

impl Direction {
    pub fn side(self) -> Side {
        match self {
            Direction::Left => Side::Left,
            Direction::Right => Side::Right,
            Direction::Top => Side::Top,
            Direction::Bottom => Side::Bottom,
        }
    }
}

impl Document {
    /// Parse a layout source from a JSON string.
    pub fn from_str(content: &str) -> Result<Self, SourceError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a layout source from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, SourceError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Number of element definitions.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// `true` if the document defines no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Well-known location a host reads the layout source from at the start
/// of every pass.
#[derive(Debug, Clone)]
pub struct SourceStore {
    path: PathBuf,
}

impl SourceStore {
    /// Default source location, relative to the working directory.
    pub const DEFAULT_PATH: &'static str = "layout.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the source afresh.
    pub fn load(&self) -> Result<Document, SourceError> {
        Document::from_file(&self.path)
    }
}

impl Default for SourceStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PATH)
    }
}

/// A small self-contained layout source, printed by the CLI's `--example`
/// flag and reused as a test fixture.
pub const EXAMPLE_SOURCE: &str = r#"{
  "Header": {
    "content": { "text": "Header", "width": 0, "height": 60,
                 "color": [0.0, 0.3, 0.6, 1.0] },
    "constraints": {
      "left":  { "name": "ScreenLeft",  "direction": "left",  "value": 0 },
      "right": { "name": "ScreenRight", "direction": "right", "value": 0 },
      "top":   { "name": "ScreenTop",   "direction": "top",   "value": 0 }
    }
  },
  "Sidebar": {
    "content": { "text": "Sidebar", "width": 200, "height": 300,
                 "color": [0.2, 0.2, 0.25, 1.0] },
    "constraints": {
      "left": { "name": "ScreenLeft", "direction": "left",   "value": 0 },
      "top":  { "name": "Header",     "direction": "bottom", "value": 10 }
    }
  },
  "Body": {
    "content": { "text": "Body", "width": 0, "height": 0 },
    "constraints": {
      "left":   { "name": "Sidebar",      "direction": "right",  "value": 10 },
      "right":  { "name": "ScreenRight",  "direction": "right",  "value": 10 },
      "top":    { "name": "Header",       "direction": "bottom", "value": 10 },
      "bottom": { "name": "ScreenBottom", "direction": "bottom", "value": 10 }
    }
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_example_source() {
        let doc = Document::from_str(EXAMPLE_SOURCE).expect("Should parse");
        assert_eq!(doc.len(), 3);
        let header = &doc.elements["Header"];
        assert_eq!(header.content.text, "Header");
        assert_eq!(header.content.height, 60.0);
        assert!(header.constraints.bottom.is_none());
        let top = header.constraints.top.as_ref().expect("top anchor");
        assert_eq!(top.name, "ScreenTop");
        assert_eq!(top.direction, Direction::Top);
        assert_eq!(top.value, 0.0);
    }

    #[test]
    fn test_document_order_is_preserved() {
        let doc = Document::from_str(EXAMPLE_SOURCE).expect("Should parse");
        let names: Vec<&str> = doc.elements.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Header", "Sidebar", "Body"]);
    }

    #[test]
    fn test_color_defaults_to_opaque_white() {
        let doc = Document::from_str(EXAMPLE_SOURCE).expect("Should parse");
        assert_eq!(doc.elements["Body"].content.color(), Rgba::WHITE);
        let header = doc.elements["Header"].content.color();
        assert_eq!(header, Rgba::new(0.0, 0.3, 0.6, 1.0));
    }

    #[test]
    fn test_missing_content_field_is_an_error() {
        let source = r#"{
          "Box": {
            "content": { "text": "x", "width": 10 },
            "constraints": {}
          }
        }"#;
        assert!(Document::from_str(source).is_err());
    }

    #[test]
    fn test_unknown_constraint_side_is_an_error() {
        let source = r#"{
          "Box": {
            "content": { "text": "x", "width": 10, "height": 10 },
            "constraints": {
              "center": { "name": "ScreenLeft", "direction": "left", "value": 0 }
            }
          }
        }"#;
        assert!(Document::from_str(source).is_err());
    }

    #[test]
    fn test_invalid_direction_is_an_error() {
        let source = r#"{
          "Box": {
            "content": { "text": "x", "width": 10, "height": 10 },
            "constraints": {
              "left": { "name": "ScreenLeft", "direction": "sideways", "value": 0 }
            }
          }
        }"#;
        assert!(Document::from_str(source).is_err());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            Document::from_str("{ not json"),
            Err(SourceError::ParseError(_))
        ));
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::from_str("{}").expect("Should parse");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_constraint_entries_order() {
        let doc = Document::from_str(EXAMPLE_SOURCE).expect("Should parse");
        let entries = doc.elements["Header"].constraints.entries();
        let sides: Vec<Side> = entries.iter().map(|(side, _)| *side).collect();
        assert_eq!(sides, vec![Side::Left, Side::Right, Side::Top, Side::Bottom]);
        assert!(entries[3].1.is_none());
    }

    #[test]
    fn test_store_missing_file_is_io_error() {
        let store = SourceStore::new("definitely/not/a/real/source.json");
        assert!(matches!(store.load(), Err(SourceError::IoError(_))));
    }
}
