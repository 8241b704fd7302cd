//! Slide deck, current selection, and preview zoom.
//!
//! DESIGN
//! ======
//! The deck is fetched once per page load and replaced wholesale. Selection
//! and zoom change only through the intent methods below, which keep
//! `current_index < slides.len()` and `zoom ∈ [ZOOM_MIN, ZOOM_MAX]`.

#[cfg(test)]
#[path = "deck_test.rs"]
mod deck_test;

use crate::net::types::Slide;

pub const ZOOM_MIN: u32 = 10;
pub const ZOOM_MAX: u32 = 200;
pub const ZOOM_STEP: u32 = 10;
pub const ZOOM_DEFAULT: u32 = 100;

/// Preview canvas width at 100% zoom, in pixels.
pub const CANVAS_BASE_MAX_WIDTH: u32 = 1000;

/// What the preview area shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckStatus {
    /// Initial fetch in flight.
    Loading,
    /// Fetch finished (or failed) with no slides.
    ReadyEmpty,
    /// At least one slide; the current slide is rendered.
    ReadyWithContent,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeckState {
    slides: Vec<Slide>,
    loading: bool,
    current_index: Option<usize>,
    zoom: u32,
}

impl Default for DeckState {
    fn default() -> Self {
        Self { slides: Vec::new(), loading: true, current_index: None, zoom: ZOOM_DEFAULT }
    }
}

impl DeckState {
    #[must_use]
    pub fn status(&self) -> DeckStatus {
        if self.loading {
            DeckStatus::Loading
        } else if self.slides.is_empty() {
            DeckStatus::ReadyEmpty
        } else {
            DeckStatus::ReadyWithContent
        }
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    #[must_use]
    pub fn current_slide(&self) -> Option<&Slide> {
        self.current_index.and_then(|i| self.slides.get(i))
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.current_index == Some(index)
    }

    #[must_use]
    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    /// Replace the deck with a freshly fetched one and select its first slide.
    pub fn finish_loading(&mut self, slides: Vec<Slide>) {
        self.current_index = if slides.is_empty() { None } else { Some(0) };
        self.slides = slides;
        self.loading = false;
    }

    /// A failed fetch leaves an empty deck; there is no retry.
    pub fn fail_loading(&mut self) {
        self.finish_loading(Vec::new());
    }

    /// Select slide `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.slides.len() {
            return false;
        }
        self.current_index = Some(index);
        true
    }

    pub fn zoom_in(&mut self) -> u32 {
        self.zoom = (self.zoom + ZOOM_STEP).min(ZOOM_MAX);
        self.zoom
    }

    pub fn zoom_out(&mut self) -> u32 {
        self.zoom = self.zoom.saturating_sub(ZOOM_STEP).max(ZOOM_MIN);
        self.zoom
    }

    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        self.zoom < ZOOM_MAX
    }

    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        self.zoom > ZOOM_MIN
    }

    /// Inline style sizing the preview canvas for the current zoom.
    #[must_use]
    pub fn canvas_style(&self) -> String {
        let max_width = CANVAS_BASE_MAX_WIDTH * self.zoom / 100;
        format!("width: {}%; max-width: {max_width}px;", self.zoom)
    }

    /// 1-based page label for the footer.
    #[must_use]
    pub fn page_label(&self) -> Option<String> {
        self.current_index.map(|i| format!("Page {}", i + 1))
    }
}

/// Navigator header text (`"3 Slides"`).
#[must_use]
pub fn slide_count_label(total: usize) -> String {
    format!("{total} Slides")
}
