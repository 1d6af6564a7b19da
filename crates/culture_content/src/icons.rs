//! Icon Registry
//!
//! Content authors name icons with string ids (`"compass"`, `"bar-chart-3"`).
//! Those ids resolve to a closed set of [`Icon`]s; anything unrecognised
//! resolves to [`Icon::Fallback`] so an editorial typo degrades to a neutral
//! glyph instead of breaking the page.

use serde::Serialize;
use std::fmt;

/// A renderable icon from the fixed registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Compass,
    Heart,
    MessageSquare,
    Users,
    Palette,
    BarChart3,
    Linkedin,
    Twitter,
    /// Shown for any id not in the registry
    Fallback,
}

impl Icon {
    /// Every known icon, excluding the fallback.
    pub const KNOWN: [Icon; 8] = [
        Icon::Compass,
        Icon::Heart,
        Icon::MessageSquare,
        Icon::Users,
        Icon::Palette,
        Icon::BarChart3,
        Icon::Linkedin,
        Icon::Twitter,
    ];

    /// The content-facing id. The fallback has no id of its own.
    pub fn id(&self) -> &'static str {
        match self {
            Icon::Compass => "compass",
            Icon::Heart => "heart",
            Icon::MessageSquare => "message-square",
            Icon::Users => "users",
            Icon::Palette => "palette",
            Icon::BarChart3 => "bar-chart-3",
            Icon::Linkedin => "linkedin",
            Icon::Twitter => "twitter",
            Icon::Fallback => "circle-help",
        }
    }

    /// Accessible name for screen readers.
    pub fn label(&self) -> &'static str {
        match self {
            Icon::Compass => "Compass",
            Icon::Heart => "Heart",
            Icon::MessageSquare => "Message",
            Icon::Users => "People",
            Icon::Palette => "Palette",
            Icon::BarChart3 => "Bar chart",
            Icon::Linkedin => "LinkedIn",
            Icon::Twitter => "Twitter",
            Icon::Fallback => "Icon",
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Icon::Fallback)
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Map a content-authored icon id to an icon. Never fails.
pub fn resolve_icon(id: &str) -> Icon {
    Icon::KNOWN
        .iter()
        .copied()
        .find(|icon| icon.id() == id)
        .unwrap_or(Icon::Fallback)
}

/// Whether `id` names a registry icon.
pub fn is_known_icon(id: &str) -> bool {
    !resolve_icon(id).is_fallback()
}

/// Turns an [`Icon`] into markup. Implemented by whatever icon set the page
/// ships with.
pub trait IconRenderer {
    fn render(&self, icon: Icon) -> String;
}

/// Renders icons as CSS-class placeholders (`<i class="icon icon-compass">`)
/// for a stylesheet-driven icon font.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClassIconRenderer;

impl IconRenderer for ClassIconRenderer {
    fn render(&self, icon: Icon) -> String {
        format!(
            "<i class=\"icon icon-{}\" role=\"img\" aria-label=\"{}\"></i>",
            icon.id(),
            icon.label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_icons() {
        for icon in Icon::KNOWN {
            assert_eq!(resolve_icon(icon.id()), icon);
        }
        assert_eq!(resolve_icon("bar-chart-3"), Icon::BarChart3);
        assert_eq!(resolve_icon("message-square"), Icon::MessageSquare);
    }

    #[test]
    fn test_unknown_ids_fall_back() {
        for id in ["", "Compass", "compass ", "rocket", "bar-chart", "circle-help", "💥"] {
            assert_eq!(resolve_icon(id), Icon::Fallback, "id {:?}", id);
        }
        assert!(!is_known_icon("rocket"));
        assert!(is_known_icon("linkedin"));
    }

    #[test]
    fn test_class_renderer() {
        let html = ClassIconRenderer.render(Icon::Palette);
        assert!(html.contains("icon-palette"));
        assert!(html.contains("aria-label=\"Palette\""));

        let fallback = ClassIconRenderer.render(resolve_icon("unknown"));
        assert!(fallback.contains("icon-circle-help"));
    }
}
