//! Application State
//!
//! One launcher session: the binding tree, where the user is in it, and
//! what is on screen.

mod config;

use std::time::Instant;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use tracing::debug;

use crate::bindings::LoadReport;
use crate::dispatch::{Dispatcher, Launcher, SystemLauncher};
use crate::input::{token_for_key, InputHandler, InputToken, NavigationState, Outcome, Transition};
use crate::ui::{format_state, MessageType, Renderer, UiState};

pub use config::AppConfig;

pub struct App<'t, L: Launcher = SystemLauncher> {
    pub config: AppConfig,
    pub navigation: NavigationState<'t>,
    pub dispatcher: Dispatcher<L>,
    pub options: String,
    pub message: Option<(String, MessageType, Instant)>,
    pub should_quit: bool,
    binding_count: usize,
    started: Instant,
    seen_input: bool,
}

impl<'t, L: Launcher> App<'t, L> {
    pub fn new(config: AppConfig, report: &'t LoadReport, dispatcher: Dispatcher<L>) -> Self {
        let navigation = NavigationState::new(&report.tree);
        let options = format_state(&navigation);

        let mut app = Self {
            config,
            navigation,
            dispatcher,
            options,
            message: None,
            should_quit: false,
            binding_count: report.tree.node_count(),
            started: Instant::now(),
            seen_input: false,
        };

        if !report.is_clean() {
            app.set_message(
                &format!("{} problem(s) in bindings, see log", report.problem_count()),
                MessageType::Warning,
            );
        } else if report.tree.is_empty() {
            app.set_message("No bindings configured", MessageType::Info);
        }

        app
    }

    /// Handle a terminal key event. Returns true when the session is over.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if let Some(token) = token_for_key(key) {
            self.handle_token(token);
        }
        self.should_quit
    }

    pub fn handle_token(&mut self, token: InputToken) {
        if !self.seen_input {
            self.seen_input = true;
            debug!("First input after {:.2?}", self.started.elapsed());
        }

        if token == InputToken::Escape && self.config.escape_exits {
            self.should_quit = true;
            return;
        }

        let outcome = InputHandler::handle_token(token, &mut self.navigation, &mut self.dispatcher);
        self.should_quit |= outcome.is_complete();
        self.apply_outcome(outcome);
        self.options = format_state(&self.navigation);
    }

    fn apply_outcome(&mut self, outcome: Outcome<'t>) {
        match outcome {
            Outcome::Completed { node } => {
                self.set_message(&format!("Launched {}", node.description), MessageType::Success);
            }
            Outcome::DispatchFailed { node, error } => {
                let reason = if error.is_parse_error() {
                    "bad command line"
                } else {
                    "launch failed"
                };
                debug!("Dispatch of {:?} failed: {}", node.description, error);
                self.set_message(&format!("{}: {}", node.description, reason), MessageType::Error);
            }
            Outcome::Navigated(Transition::Rejected { key, .. }) => {
                self.set_message(&format!("No binding for '{}'", key), MessageType::Warning);
            }
            Outcome::Navigated(Transition::DeadEnd { sequence }) => {
                self.set_message(&format!("'{}' has no command", sequence), MessageType::Warning);
            }
            Outcome::Navigated(Transition::Broken) => {
                self.set_message("Invalid key sequence", MessageType::Error);
            }
            Outcome::Navigated(_) => self.message = None,
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.check_message_expiry();

        let sequence = self.navigation.sequence_string();
        let message = self.message.as_ref().map(|(m, t, _)| (m.as_str(), *t));

        let state = UiState {
            phase: self.navigation.phase(),
            sequence: &sequence,
            options: &self.options,
            message,
            binding_count: self.binding_count,
            escape_exits: self.config.escape_exits,
        };

        Renderer::render(frame, &state);
    }

    fn check_message_expiry(&mut self) {
        let expired = self
            .message
            .as_ref()
            .is_some_and(|(_, _, time)| time.elapsed() > self.config.message_timeout);

        if expired {
            self.message = None;
        }
    }

    pub fn set_message(&mut self, msg: &str, msg_type: MessageType) {
        self.message = Some((msg.to_string(), msg_type, Instant::now()));
    }
}
