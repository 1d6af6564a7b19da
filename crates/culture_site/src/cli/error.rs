//! Helpful error types for CLI commands
//!
//! Every error includes:
//! - What went wrong
//! - Context about the situation
//! - Suggestions for how to fix it

use std::fmt;
use std::path::Path;

use culture_content::ContentLoadError;
use culture_site::ConfigError;

/// An error with helpful context and suggestions
#[derive(Debug)]
pub struct HelpfulError {
    /// The main error message
    pub message: String,
    /// Additional context about what was happening
    pub context: Option<String>,
    /// Suggestions for how to fix the error
    pub suggestions: Vec<String>,
}

impl HelpfulError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_suggestions(mut self, suggestions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.suggestions.extend(suggestions.into_iter().map(|s| s.into()));
        self
    }

    // === Common error constructors ===

    /// File does not exist
    pub fn file_not_found(path: &Path) -> Self {
        Self::new(format!("File not found: {}", path.display()))
            .with_context("The specified file does not exist")
            .with_suggestions([
                format!("TRY: Check if the file exists: ls -la {}", path.display()),
                format!(
                    "TRY: Look for similar files: ls {}",
                    path.parent()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| ".".to_string())
                ),
            ])
    }

    /// JSON parsing error
    pub fn json_parse_error(path: &Path, details: &str) -> Self {
        Self::new(format!("JSON parse error: {}", details))
            .with_context(format!("Failed to parse JSON file: {}", path.display()))
            .with_suggestions([
                "TRY: Validate the JSON: cat FILE | python -m json.tool".to_string(),
                "TRY: Check for trailing commas and unquoted keys".to_string(),
            ])
    }

    /// Content parsed but broke the contract
    pub fn content_invalid(path: &Path, violations: usize) -> Self {
        Self::new(format!(
            "Content document has {} violation(s): {}",
            violations,
            path.display()
        ))
        .with_context("Nothing was rendered; the page only renders from valid content")
        .with_suggestions([
            format!("TRY: List every violation: culture_site validate --content {}", path.display()),
            "TRY: Compare against the shipped document: content/home.json".to_string(),
        ])
    }

    pub fn from_load_error(err: &ContentLoadError) -> Self {
        match err {
            ContentLoadError::Io { path, source } if source.kind() == std::io::ErrorKind::NotFound => {
                Self::file_not_found(path)
            }
            ContentLoadError::Io { path, source } => {
                Self::new(format!("Cannot read file: {}", path.display()))
                    .with_context(source.to_string())
                    .with_suggestion(format!("TRY: Check file permissions: ls -la {}", path.display()))
            }
            ContentLoadError::Json { path, source } => Self::json_parse_error(path, &source.to_string()),
            ContentLoadError::Invalid { path, source } => {
                Self::content_invalid(path, source.violations.len())
            }
        }
    }

    pub fn from_config_error(err: &ConfigError) -> Self {
        match err {
            ConfigError::Read { path, .. } => Self::file_not_found(path)
                .with_context("The --config file could not be read"),
            ConfigError::Parse { path, source } => {
                Self::new(format!("Invalid config file: {}", path.display()))
                    .with_context(source.to_string())
                    .with_suggestions([
                        "TRY: Show the effective settings: culture_site config".to_string(),
                        "TRY: Known keys: content_path, output_dir, [form], [chrome]".to_string(),
                    ])
            }
        }
    }
}

impl fmt::Display for HelpfulError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ERROR: {}", self.message)?;

        if let Some(ctx) = &self.context {
            writeln!(f, "CONTEXT: {}", ctx)?;
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            for suggestion in &self.suggestions {
                writeln!(f, "  {}", suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for HelpfulError {}

/// Error as a JSON object on stderr, so stdout only ever carries results.
pub fn print_json_error(err: &anyhow::Error) {
    let body = match err.downcast_ref::<HelpfulError>() {
        Some(helpful) => serde_json::json!({
            "error": {
                "message": helpful.message,
                "context": helpful.context,
                "suggestions": helpful.suggestions,
            }
        }),
        None => serde_json::json!({
            "error": {
                "message": err.to_string(),
                "chain": err.chain().skip(1).map(|e| e.to_string()).collect::<Vec<_>>(),
            }
        }),
    };
    match serde_json::to_string_pretty(&body) {
        Ok(text) => eprintln!("{}", text),
        Err(_) => eprintln!("{:?}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_helpful_error_display() {
        let err = HelpfulError::new("Something went wrong")
            .with_context("While rendering")
            .with_suggestion("Try again");

        let display = format!("{}", err);
        assert!(display.contains("ERROR: Something went wrong"));
        assert!(display.contains("CONTEXT: While rendering"));
        assert!(display.contains("Try again"));
    }

    #[test]
    fn test_missing_content_maps_to_file_not_found() {
        let path = PathBuf::from("/nonexistent/home.json");
        let err = ContentLoadError::Io {
            path: path.clone(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let display = HelpfulError::from_load_error(&err).to_string();
        assert!(display.contains("File not found: /nonexistent/home.json"));
        assert!(display.contains("TRY:"));
    }

    #[test]
    fn test_content_invalid_points_at_validate() {
        let err = HelpfulError::content_invalid(Path::new("site/home.json"), 3);
        assert!(err.message.contains("3 violation(s)"));
        assert!(err.suggestions[0].contains("validate --content site/home.json"));
    }
}
