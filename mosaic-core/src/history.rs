//! Location fragment markers for deep links into a slide
//!
//! While the lightbox is open the fragment carries `&gid=<gallery>&pid=<n>`,
//! where `pid` is the 1-based slide number. A page load that still carries
//! those markers with no open overlay gets them stripped.
//!
//! The first marker write of an overlay session pushes a history entry so the
//! browser's Back button closes the overlay; later slides replace it.
//! [`HistorySession`] tracks which of the two the browser needs.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

fn marker_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"&gid=\d*?&pid=\d*").expect("marker pattern is valid"))
}

/// Remove the first gallery/photo marker pair from `fragment`.
///
/// Borrows when there is nothing to strip.
pub fn strip_markers(fragment: &str) -> Cow<'_, str> {
    marker_pattern().replacen(fragment, 1, "")
}

/// Whether `fragment` carries a marker pair
pub fn has_markers(fragment: &str) -> bool {
    marker_pattern().is_match(fragment)
}

/// Fragment for slide `index` of gallery `gallery_id`, built on top of the
/// marker-free `base` fragment
pub fn with_markers(base: &str, gallery_id: u32, index: usize) -> String {
    let base = strip_markers(base);
    let base = if base.is_empty() { "#" } else { base.as_ref() };
    format!("{base}&gid={gallery_id}&pid={}", index + 1)
}

/// How a fragment reaches the location
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FragmentUpdate {
    Push(String),
    Replace(String),
}

/// What the location needs when the overlay closes
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CloseNavigation {
    /// Pop the entry the session pushed
    Back,
    /// Nothing was pushed; put the pre-open fragment back
    Restore(String),
    /// The browser already left the marked entry
    None,
}

/// Marker bookkeeping for one overlay session
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistorySession {
    /// Location fragment from before the overlay opened, markers removed
    base: Option<String>,
    pushed: bool,
}

impl HistorySession {
    /// Start a session over the current location fragment
    pub fn begin(&mut self, fragment: &str) {
        self.base = Some(strip_markers(fragment).into_owned());
        self.pushed = false;
    }

    pub fn is_active(&self) -> bool {
        self.base.is_some()
    }

    pub fn has_pushed(&self) -> bool {
        self.pushed
    }

    /// Fragment write for showing slide `index`. `None` outside a session.
    pub fn slide_changed(&mut self, gallery_id: u32, index: usize) -> Option<FragmentUpdate> {
        let base = self.base.as_deref()?;
        let fragment = with_markers(base, gallery_id, index);
        if self.pushed {
            Some(FragmentUpdate::Replace(fragment))
        } else {
            self.pushed = true;
            Some(FragmentUpdate::Push(fragment))
        }
    }

    /// End the session. `left_by_navigation` is set when the overlay closes
    /// because the browser moved off the marked entry (Back, edited hash).
    pub fn end(&mut self, left_by_navigation: bool) -> CloseNavigation {
        let Some(base) = self.base.take() else {
            return CloseNavigation::None;
        };
        let pushed = std::mem::take(&mut self.pushed);
        if left_by_navigation {
            CloseNavigation::None
        } else if pushed {
            CloseNavigation::Back
        } else {
            CloseNavigation::Restore(base)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_removes_marker_pair() {
        assert_eq!(strip_markers("#&gid=3&pid=7"), "#");
        assert_eq!(strip_markers("#results&gid=3&pid=7"), "#results");
        assert_eq!(strip_markers("#a&gid=3&pid=7&b"), "#a&b");
    }

    #[test]
    fn test_strip_only_first_occurrence() {
        assert_eq!(
            strip_markers("#&gid=3&pid=7&gid=1&pid=2"),
            "#&gid=1&pid=2"
        );
    }

    #[test]
    fn test_strip_without_markers_borrows() {
        assert!(matches!(strip_markers("#top"), Cow::Borrowed("#top")));
        assert!(!has_markers("#top"));
        assert!(has_markers("#x&gid=1&pid=12"));
    }

    #[test]
    fn test_with_markers_is_one_based() {
        assert_eq!(with_markers("", 1, 0), "#&gid=1&pid=1");
        assert_eq!(with_markers("#q", 2, 4), "#q&gid=2&pid=5");
    }

    #[test]
    fn test_with_markers_replaces_existing_pair() {
        assert_eq!(with_markers("#q&gid=1&pid=3", 1, 3), "#q&gid=1&pid=4");
    }

    #[test]
    fn test_session_pushes_once_then_replaces() {
        let mut session = HistorySession::default();
        session.begin("#q");
        assert_eq!(
            session.slide_changed(1, 0),
            Some(FragmentUpdate::Push("#q&gid=1&pid=1".to_string()))
        );
        assert!(session.has_pushed());
        assert_eq!(
            session.slide_changed(1, 1),
            Some(FragmentUpdate::Replace("#q&gid=1&pid=2".to_string()))
        );
        assert_eq!(session.end(false), CloseNavigation::Back);
        assert!(!session.is_active());
    }

    #[test]
    fn test_session_begin_strips_stale_markers() {
        let mut session = HistorySession::default();
        session.begin("#q&gid=1&pid=9");
        assert_eq!(
            session.slide_changed(2, 0),
            Some(FragmentUpdate::Push("#q&gid=2&pid=1".to_string()))
        );
    }

    #[test]
    fn test_session_closed_by_back_does_not_go_back_again() {
        let mut session = HistorySession::default();
        session.begin("");
        session.slide_changed(1, 3);
        assert_eq!(session.end(true), CloseNavigation::None);
    }

    #[test]
    fn test_session_without_writes_restores_fragment() {
        let mut session = HistorySession::default();
        session.begin("#top&gid=1&pid=2");
        assert_eq!(session.end(false), CloseNavigation::Restore("#top".to_string()));
    }

    #[test]
    fn test_no_session_no_writes() {
        let mut session = HistorySession::default();
        assert_eq!(session.slide_changed(1, 0), None);
        assert_eq!(session.end(false), CloseNavigation::None);
    }

    #[test]
    fn test_reopen_pushes_again() {
        let mut session = HistorySession::default();
        session.begin("");
        session.slide_changed(1, 0);
        session.end(false);
        session.begin("");
        assert!(matches!(session.slide_changed(1, 0), Some(FragmentUpdate::Push(_))));
    }
}
