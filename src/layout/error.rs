//! Error types for the layout solver

use thiserror::Error;

/// Errors that can reject a layout pass before any geometry is computed.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Two element definitions share one name, or an element reuses a
    /// reserved screen-edge name.
    #[error("duplicate element name '{name}'")]
    DuplicateName { name: String },

    /// A constraint targets a name that is neither a registered element
    /// nor a screen edge.
    #[error("element '{element}' references unknown target '{target}'")]
    UnknownReference {
        element: String,
        target: String,
        suggestions: Vec<String>,
    },

    /// Constraints form a dependency cycle, so no evaluation order exists.
    #[error("circular constraint dependency: {}", members.join(" -> "))]
    Cycle { members: Vec<String> },
}

impl LayoutError {
    /// Create a duplicate name error.
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Create an unknown reference error with near-miss suggestions.
    pub fn unknown_reference(
        element: impl Into<String>,
        target: impl Into<String>,
        suggestions: Vec<String>,
    ) -> Self {
        Self::UnknownReference {
            element: element.into(),
            target: target.into(),
            suggestions,
        }
    }

    /// Create a cycle error from the member element names.
    pub fn cycle(members: Vec<String>) -> Self {
        Self::Cycle { members }
    }

    /// Get suggestions if available.
    pub fn suggestions(&self) -> Option<&[String]> {
        match self {
            Self::UnknownReference { suggestions, .. } => Some(suggestions),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_display() {
        let err = LayoutError::duplicate("Box");
        assert!(err.to_string().contains("Box"));
    }

    #[test]
    fn test_unknown_reference_display() {
        let err = LayoutError::unknown_reference("Box", "Ancohr", vec!["Anchor".to_string()]);
        let message = err.to_string();
        assert!(message.contains("Box"));
        assert!(message.contains("Ancohr"));
        assert_eq!(err.suggestions(), Some(&["Anchor".to_string()][..]));
    }

    #[test]
    fn test_cycle_display() {
        let err = LayoutError::cycle(vec!["a".to_string(), "b".to_string()]);
        assert!(err.to_string().contains("a -> b"));
    }
}
