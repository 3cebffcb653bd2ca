use tracing::debug;

use crate::section::SectionKind;

/// Tracks which section the viewport is looking at.
///
/// Section tops are document offsets in pixels and must be supplied in
/// scroll order. A section becomes active once its top crosses the middle
/// of the viewport.
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    tops: Vec<(SectionKind, f64)>,
    viewport_height: f64,
    document_height: f64,
    active: Option<SectionKind>,
}

impl ScrollSpy {
    pub fn new(tops: Vec<(SectionKind, f64)>, viewport_height: f64, document_height: f64) -> Self {
        let active = tops.first().map(|(k, _)| *k);
        Self {
            tops,
            viewport_height: viewport_height.max(0.0),
            document_height: document_height.max(0.0),
            active,
        }
    }

    /// Evenly stacked sections of `section_height` each.
    pub fn uniform(section_height: f64, viewport_height: f64) -> Self {
        let tops = SectionKind::ALL
            .iter()
            .enumerate()
            .map(|(i, k)| (*k, i as f64 * section_height))
            .collect::<Vec<_>>();
        let document_height = section_height * tops.len() as f64;
        Self::new(tops, viewport_height, document_height)
    }

    pub fn active(&self) -> Option<SectionKind> {
        self.active
    }

    /// Section under the viewport's middle line at `scroll_y`.
    pub fn section_at(&self, scroll_y: f64) -> Option<SectionKind> {
        let probe = scroll_y + self.viewport_height * 0.5;
        let mut found = self.tops.first().map(|(k, _)| *k);
        for (kind, top) in &self.tops {
            if *top <= probe {
                found = Some(*kind);
            } else {
                break;
            }
        }
        found
    }

    /// Updates the active section. Returns the new section when it changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<SectionKind> {
        let next = self.section_at(scroll_y);
        if next == self.active {
            return None;
        }
        debug!(from = ?self.active, to = ?next, "active section");
        self.active = next;
        next
    }

    /// Offset to scroll to for `kind`, if the page has it.
    pub fn scroll_target(&self, kind: SectionKind) -> Option<f64> {
        self.tops.iter().find(|(k, _)| *k == kind).map(|(_, top)| *top)
    }

    /// Fraction of the page scrolled, in [0, 1].
    pub fn progress(&self, scroll_y: f64) -> f64 {
        let scrollable = self.document_height - self.viewport_height;
        if scrollable <= 0.0 {
            return 1.0;
        }
        (scroll_y / scrollable).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::ScrollSpy;
    use crate::section::SectionKind;

    #[test]
    fn active_section_follows_middle_line() {
        let spy = ScrollSpy::uniform(1000.0, 800.0);
        assert_eq!(spy.section_at(0.0), Some(SectionKind::Hero));
        assert_eq!(spy.section_at(599.0), Some(SectionKind::Hero));
        assert_eq!(spy.section_at(600.0), Some(SectionKind::Education));
        assert_eq!(spy.section_at(6_000.0), Some(SectionKind::Contact));
        assert_eq!(spy.section_at(-50.0), Some(SectionKind::Hero));
    }

    #[test]
    fn on_scroll_reports_changes_only() {
        let mut spy = ScrollSpy::uniform(1000.0, 800.0);
        assert_eq!(spy.active(), Some(SectionKind::Hero));
        assert_eq!(spy.on_scroll(100.0), None);
        assert_eq!(spy.on_scroll(1_700.0), Some(SectionKind::Skills));
        assert_eq!(spy.on_scroll(1_750.0), None);
        assert_eq!(spy.active(), Some(SectionKind::Skills));
    }

    #[test]
    fn scroll_targets_and_progress() {
        let spy = ScrollSpy::uniform(1000.0, 1000.0);
        assert_eq!(spy.scroll_target(SectionKind::Projects), Some(3000.0));
        assert_eq!(spy.progress(0.0), 0.0);
        assert_eq!(spy.progress(3000.0), 0.5);
        assert_eq!(spy.progress(99_999.0), 1.0);
    }

    #[test]
    fn short_page_is_fully_scrolled() {
        let spy = ScrollSpy::new(vec![(SectionKind::Hero, 0.0)], 900.0, 600.0);
        assert_eq!(spy.progress(0.0), 1.0);
        assert_eq!(spy.scroll_target(SectionKind::Contact), None);
    }
}
