//! Navigation chrome: the mobile menu and the scroll-to-top button.

use serde::Serialize;

use culture_content::Link;

/// Collapsible mobile navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavState {
    open: bool,
}

impl NavState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// A mobile nav link was chosen: close the menu and return the in-page
    /// anchor to scroll to, if any.
    pub fn choose<'a>(&mut self, link: &'a Link) -> Option<&'a str> {
        self.close();
        link.anchor()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBehavior {
    Smooth,
}

/// Request to move the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScrollRequest {
    pub top: u32,
    pub behavior: ScrollBehavior,
}

/// Shown once the page has scrolled past the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScrollToTop {
    threshold: u32,
    offset: u32,
}

impl ScrollToTop {
    pub const DEFAULT_THRESHOLD: u32 = 500;

    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            offset: 0,
        }
    }

    pub fn on_scroll(&mut self, offset: u32) {
        self.offset = offset;
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn is_visible(&self) -> bool {
        self.offset > self.threshold
    }

    pub fn activate(&self) -> ScrollRequest {
        ScrollRequest {
            top: 0,
            behavior: ScrollBehavior::Smooth,
        }
    }
}

impl Default for ScrollToTop {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_toggle_and_choose_closes() {
        let mut nav = NavState::default();
        assert!(!nav.is_open());
        nav.toggle();
        assert!(nav.is_open());

        let link = Link::new("Pricing", "#pricing");
        assert_eq!(nav.choose(&link), Some("pricing"));
        assert!(!nav.is_open());

        nav.toggle();
        nav.toggle();
        assert!(!nav.is_open());
    }

    #[test]
    fn test_scroll_threshold_is_exclusive() {
        let mut scroll = ScrollToTop::default();
        assert!(!scroll.is_visible());
        scroll.on_scroll(500);
        assert!(!scroll.is_visible());
        scroll.on_scroll(501);
        assert!(scroll.is_visible());
        scroll.on_scroll(120);
        assert!(!scroll.is_visible());
    }

    #[test]
    fn test_activate_requests_smooth_scroll_to_top() {
        let mut scroll = ScrollToTop::new(100);
        scroll.on_scroll(2400);
        assert_eq!(
            scroll.activate(),
            ScrollRequest {
                top: 0,
                behavior: ScrollBehavior::Smooth
            }
        );
    }
}
