//! Dashboard state management
//!
//! Wraps the controller with the bits of state only the terminal needs:
//! input mode, list selection and the animation tick.

use crate::controller::DashboardController;
use crate::quote::LikedQuote;
use std::time::Instant;

/// What typed characters go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys are commands.
    Normal,
    /// Keys edit the search term.
    Search,
}

#[derive(Debug)]
pub struct DashboardState {
    /// All quote and like state.
    pub controller: DashboardController,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Where quotes come from, shown in the header.
    pub endpoint: String,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,

    input_mode: InputMode,
    /// Index into the filtered liked list.
    selected: usize,
}

impl DashboardState {
    pub fn new(
        controller: DashboardController,
        endpoint: String,
        start_time: Instant,
        with_background_color: bool,
    ) -> Self {
        Self {
            controller,
            start_time,
            endpoint,
            with_background_color,
            tick: 0,
            input_mode: InputMode::Normal,
            selected: 0,
        }
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn set_input_mode(&mut self, mode: InputMode) {
        self.input_mode = mode;
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        let len = self.controller.visible_liked_quotes().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// The liked quote under the cursor, if the filtered list is non-empty.
    pub fn selected_quote(&self) -> Option<&LikedQuote> {
        self.controller
            .visible_liked_quotes()
            .get(self.selected)
            .copied()
    }

    /// Unlikes the quote under the cursor.
    pub fn remove_selected(&mut self) -> bool {
        let Some(text) = self.selected_quote().map(|item| item.quote.clone()) else {
            return false;
        };
        let removed = self.controller.remove_like(&text);
        self.clamp_selection();
        removed
    }

    /// Keeps the cursor inside the filtered list after it shrinks.
    pub fn clamp_selection(&mut self) {
        let len = self.controller.visible_liked_quotes().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Advance one frame.
    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }
}
