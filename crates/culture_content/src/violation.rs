//! Content Violations
//!
//! A violation is a FAILURE, not a warning: a document with any violation is
//! rejected as a whole. Violations carry the editor-facing path of the field
//! (`pricingSection.tiers[1].popular`) so every problem can be fixed in one
//! pass.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Location of a field inside the content document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(Vec<PathSegment>);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum PathSegment {
    Key(String),
    Index(usize),
}

impl FieldPath {
    /// The document root.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Path of a named child field.
    pub fn key(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Key(key.to_string()));
        Self(segments)
    }

    /// Path of a list element.
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "<root>");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => write!(f, "{}", key)?,
                PathSegment::Key(key) => write!(f, ".{}", key)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Types of content violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Required field is absent (or `null`)
    Missing,

    /// Field is present with the wrong JSON type
    TypeMismatch,

    /// Section id is empty and cannot serve as an anchor
    EmptyAnchor,

    /// Section id is already used by an earlier section
    DuplicateAnchor,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Missing => write!(f, "Missing field"),
            ViolationKind::TypeMismatch => write!(f, "Type mismatch"),
            ViolationKind::EmptyAnchor => write!(f, "Empty section id"),
            ViolationKind::DuplicateAnchor => write!(f, "Duplicate section id"),
        }
    }
}

/// A single field that does not satisfy the content contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentViolation {
    /// Where in the document
    pub path: FieldPath,

    /// What was expected
    pub expected: String,

    /// What was actually found
    pub got: String,

    /// Type of violation
    pub kind: ViolationKind,
}

impl ContentViolation {
    pub fn missing(path: FieldPath, expected: impl Into<String>) -> Self {
        Self {
            path,
            expected: expected.into(),
            got: "nothing".to_string(),
            kind: ViolationKind::Missing,
        }
    }

    pub fn type_mismatch(path: FieldPath, expected: impl Into<String>, got: impl Into<String>) -> Self {
        Self {
            path,
            expected: expected.into(),
            got: got.into(),
            kind: ViolationKind::TypeMismatch,
        }
    }

    pub fn empty_anchor(path: FieldPath) -> Self {
        Self {
            path,
            expected: "non-empty section id".to_string(),
            got: "empty string".to_string(),
            kind: ViolationKind::EmptyAnchor,
        }
    }

    pub fn duplicate_anchor(path: FieldPath, id: &str, first_use: &FieldPath) -> Self {
        Self {
            path,
            expected: "unique section id".to_string(),
            got: format!("'{}' already used by {}", id, first_use),
            kind: ViolationKind::DuplicateAnchor,
        }
    }
}

impl fmt::Display for ContentViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}: expected {}, got {}",
            self.path, self.kind, self.expected, self.got
        )
    }
}

/// The content source failed validation. Fatal: the page must not render.
#[derive(Debug, Clone, Error, Serialize)]
#[error("content document failed validation with {} violation(s)", .violations.len())]
pub struct ContentValidationError {
    pub violations: Vec<ContentViolation>,
}

impl ContentValidationError {
    pub fn new(violations: Vec<ContentViolation>) -> Self {
        Self { violations }
    }

    /// Paths of every violating field, in document order.
    pub fn paths(&self) -> Vec<String> {
        self.violations.iter().map(|v| v.path.to_string()).collect()
    }

    /// Whether a violation was reported at exactly `path`.
    pub fn has_path(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.path.to_string() == path)
    }

    /// One line per violation, for terminal output.
    pub fn report(&self) -> String {
        let mut out = format!("{}\n", self);
        for violation in &self.violations {
            out.push_str("  - ");
            out.push_str(&violation.to_string());
            out.push('\n');
        }
        out
    }
}
