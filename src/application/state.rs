//! Application shell state.
//!
//! Holds both screens (the signup wizard and the passenger table), the
//! help popup state and the status line, and wires controller changes on
//! the table to the fetch dispatcher.

use super::dispatcher::FetchDispatcher;
use super::table::PassengerTable;
use super::wizard::{AdvanceOutcome, Wizard};
use crate::domain::{Field, FetchRequest, PassengerSource, Step, SubmissionService};
use std::sync::Arc;

/// Which screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Signup,
    Passengers,
}

/// Determines how key presses are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Keys go to the active screen
    Normal,
    /// Help popup is displayed
    Help,
}

pub struct App {
    pub screen: Screen,
    pub mode: AppMode,
    pub wizard: Wizard,
    /// Index of the focused input within the active step
    pub focus: usize,
    pub passengers: PassengerTable,
    /// First visible row of the passenger table
    pub table_scroll: usize,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    pub should_quit: bool,
    dispatcher: FetchDispatcher,
}

impl App {
    pub fn new(
        submitter: Box<dyn SubmissionService>,
        source: Arc<dyn PassengerSource>,
        passengers: PassengerTable,
    ) -> Self {
        Self {
            screen: Screen::Signup,
            mode: AppMode::Normal,
            wizard: Wizard::new(submitter),
            focus: 0,
            passengers,
            table_scroll: 0,
            help_scroll: 0,
            status_message: None,
            should_quit: false,
            dispatcher: FetchDispatcher::new(source),
        }
    }

    /// The input that currently receives typed characters, if any.
    pub fn focused_field(&self) -> Option<Field> {
        if self.wizard.is_submitted() {
            return None;
        }
        self.wizard.step().fields().get(self.focus).copied()
    }

    pub fn focus_next(&mut self) {
        let count = self.wizard.step().fields().len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    pub fn focus_previous(&mut self) {
        let count = self.wizard.step().fields().len();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }

    pub fn type_char(&mut self, c: char) {
        if let Some(field) = self.focused_field() {
            let mut value = self.wizard.form().get(field).to_string();
            value.push(c);
            self.wizard.set_field(field, value);
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(field) = self.focused_field() {
            let mut value = self.wizard.form().get(field).to_string();
            value.pop();
            self.wizard.set_field(field, value);
        }
    }

    /// Next/Submit button.
    pub fn advance(&mut self) {
        let before = self.wizard.step();
        let outcome = self.wizard.advance();
        self.status_message = match outcome {
            AdvanceOutcome::Advanced(step) => Some(format!("Step {}: {}", step.index() + 1, step.label())),
            AdvanceOutcome::Blocked(errors) => Some(format!("Fix {} field(s) before continuing", errors.len())),
            AdvanceOutcome::Submitted => Some("Signup submitted".to_string()),
            AdvanceOutcome::SubmitFailed(_) | AdvanceOutcome::Finished => None,
        };
        self.after_step_change(before);
    }

    /// Back button.
    pub fn back(&mut self) {
        let before = self.wizard.step();
        if self.wizard.back() {
            self.status_message = None;
        }
        self.after_step_change(before);
    }

    fn after_step_change(&mut self, before: Step) {
        if self.wizard.step() != before {
            self.focus = 0;
        }
    }

    pub fn toggle_screen(&mut self) {
        self.status_message = None;
        match self.screen {
            Screen::Signup => self.show_passengers(),
            Screen::Passengers => self.screen = Screen::Signup,
        }
    }

    /// Switches to the passenger table, fetching the first page on first show.
    pub fn show_passengers(&mut self) {
        self.screen = Screen::Passengers;
        let request = self.passengers.mount();
        self.dispatch(request);
    }

    pub fn next_page(&mut self) {
        let request = self.passengers.next_page();
        self.dispatch(request);
    }

    pub fn previous_page(&mut self) {
        let request = self.passengers.previous_page();
        self.dispatch(request);
    }

    pub fn set_page(&mut self, page: usize) {
        let request = self.passengers.set_page(page);
        self.dispatch(request);
    }

    pub fn set_rows_per_page(&mut self, size: usize) {
        let request = self.passengers.set_rows_per_page(size);
        self.dispatch(request);
    }

    pub fn cycle_rows_per_page(&mut self, forward: bool) {
        let request = self.passengers.cycle_rows_per_page(forward);
        self.dispatch(request);
    }

    pub fn refresh_passengers(&mut self) {
        let request = self.passengers.refresh();
        self.dispatch(Some(request));
    }

    fn dispatch(&mut self, request: Option<FetchRequest>) {
        if let Some(request) = request {
            self.table_scroll = 0;
            self.dispatcher.dispatch(request);
        }
    }

    /// Applies every fetch outcome that has arrived. Returns true when the
    /// table changed.
    pub fn poll_fetches(&mut self) -> bool {
        let mut changed = false;
        for outcome in self.dispatcher.drain() {
            changed |= self.passengers.apply_response(outcome.request, outcome.result);
        }
        changed
    }

    pub fn scroll_rows(&mut self, down: bool) {
        if down {
            if self.table_scroll + 1 < self.passengers.items().len() {
                self.table_scroll += 1;
            }
        } else {
            self.table_scroll = self.table_scroll.saturating_sub(1);
        }
    }

    pub fn open_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
    }

    pub fn close_help(&mut self) {
        self.mode = AppMode::Normal;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    #[cfg(test)]
    pub(crate) fn dispatcher(&self) -> &FetchDispatcher {
        &self.dispatcher
    }
}
