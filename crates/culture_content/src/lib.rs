//! Content Contract
//!
//! # Philosophy: validate once at the boundary
//!
//! The homepage copy lives in one JSON document edited through a CMS. That
//! document is untyped until it passes [`validate`]; after that it is a
//! [`ContentDocument`] whose every field is guaranteed present and correctly
//! typed. There are NO partial documents: a single violation rejects the
//! whole thing, and the failure lists every violating field path.
//!
//! # Modules
//!
//! - [`model`]: the typed document (sections, links, form copy)
//! - [`validate`](mod@validate): the validation pass
//! - [`violation`]: field paths and violation reports
//! - [`icons`]: icon registry with a fallback for unknown ids
//! - [`lint`](mod@lint): non-fatal warnings (unknown icons, dangling anchors)
//! - [`load`]: read + validate from disk

pub mod icons;
pub mod lint;
pub mod load;
pub mod model;
pub mod validate;
pub mod violation;

pub use icons::{resolve_icon, ClassIconRenderer, Icon, IconRenderer};
pub use lint::{lint, ContentLint, LintKind};
pub use load::{load_content, ContentLoadError};
pub use model::*;
pub use validate::{validate, validate_str};
pub use violation::{ContentValidationError, ContentViolation, FieldPath, ViolationKind};
