//! Input Handler
//!
//! Feeds tokens to the navigation state and runs commands it selects.

use tracing::debug;

use super::keymap::InputToken;
use super::navigation::{NavigationState, Transition};
use crate::bindings::ActionNode;
use crate::dispatch::{DispatchError, Dispatcher, Launcher};

/// Result of handling one token.
#[derive(Debug)]
pub enum Outcome<'t> {
    /// The state moved (or stayed put); nothing was launched.
    Navigated(Transition<'t>),
    /// A command was launched. The session is complete.
    Completed { node: &'t ActionNode },
    /// A command was selected but could not be launched. The state is back
    /// at the root and the caller may keep going.
    DispatchFailed {
        node: &'t ActionNode,
        error: DispatchError,
    },
}

impl Outcome<'_> {
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// Single entry point for input: one token is fully processed before the
/// next is accepted.
pub struct InputHandler;

impl InputHandler {
    pub fn handle_token<'t, L: Launcher>(
        token: InputToken,
        state: &mut NavigationState<'t>,
        dispatcher: &mut Dispatcher<L>,
    ) -> Outcome<'t> {
        let transition = state.apply(token);
        debug!(?token, ?transition, "Handled input");

        let Transition::Dispatch { node, command, .. } = transition else {
            return Outcome::Navigated(transition);
        };

        match dispatcher.dispatch(command) {
            Ok(()) => Outcome::Completed { node },
            Err(error) => Outcome::DispatchFailed { node, error },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::{load_str, BindingTree};
    use crate::input::navigation::Phase;

    #[derive(Default)]
    struct RecordingLauncher {
        launched: Vec<Vec<String>>,
    }

    impl Launcher for RecordingLauncher {
        fn launch(&mut self, argv: &[String]) -> std::io::Result<()> {
            self.launched.push(argv.to_vec());
            Ok(())
        }
    }

    struct FailingLauncher;

    impl Launcher for FailingLauncher {
        fn launch(&mut self, _argv: &[String]) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "not found"))
        }
    }

    fn firefox_tree() -> BindingTree {
        load_str(
            r#"[{"key": "a", "description": "Apps", "sub_actions": [
                {"key": "f", "description": "Firefox", "command": "firefox"}
            ]}]"#,
            "test",
        )
        .tree
    }

    fn labels(state: &NavigationState<'_>) -> Vec<String> {
        state
            .node_set()
            .nodes()
            .iter()
            .map(|n| format!("{}: {}", n.key, n.description))
            .collect()
    }

    #[test]
    fn test_end_to_end_launch() {
        let tree = firefox_tree();
        let mut state = NavigationState::new(&tree);
        let mut dispatcher = Dispatcher::new(RecordingLauncher::default());

        assert_eq!(labels(&state), vec!["a: Apps"]);

        let outcome = InputHandler::handle_token(InputToken::Char('x'), &mut state, &mut dispatcher);
        assert!(matches!(outcome, Outcome::Navigated(Transition::Rejected { key: 'x', .. })));
        assert_eq!(state.sequence_string(), "");
        assert_eq!(labels(&state), vec!["a: Apps"]);

        let outcome = InputHandler::handle_token(InputToken::Char('a'), &mut state, &mut dispatcher);
        assert!(matches!(outcome, Outcome::Navigated(Transition::Descended)));
        assert_eq!(state.sequence_string(), "a");
        assert_eq!(labels(&state), vec!["f: Firefox"]);

        let outcome = InputHandler::handle_token(InputToken::Char('f'), &mut state, &mut dispatcher);
        assert!(outcome.is_complete());
        assert_eq!(dispatcher.launcher().launched, vec![vec!["firefox".to_string()]]);
    }

    #[test]
    fn test_empty_configuration_ignores_keys() {
        let tree = load_str("not json", "test").tree;
        let mut state = NavigationState::new(&tree);
        let mut dispatcher = Dispatcher::new(RecordingLauncher::default());

        for c in ['a', 'z', '1'] {
            InputHandler::handle_token(InputToken::Char(c), &mut state, &mut dispatcher);
            assert_eq!(state.phase(), Phase::Root);
            assert!(state.sequence().is_empty());
        }
        assert!(dispatcher.launcher().launched.is_empty());
    }

    #[test]
    fn test_failed_launch_keeps_session_alive() {
        let tree = firefox_tree();
        let mut state = NavigationState::new(&tree);
        let mut dispatcher = Dispatcher::new(FailingLauncher);

        InputHandler::handle_token(InputToken::Char('a'), &mut state, &mut dispatcher);
        let outcome = InputHandler::handle_token(InputToken::Char('f'), &mut state, &mut dispatcher);

        match outcome {
            Outcome::DispatchFailed { node, error } => {
                assert_eq!(node.key, 'f');
                assert!(matches!(error, DispatchError::Spawn { .. }));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(state.phase(), Phase::Root);
    }

    #[test]
    fn test_unparsable_command() {
        let tree = load_str(
            r#"[{"key": "q", "description": "Quote", "command": "echo 'oops"}]"#,
            "test",
        )
        .tree;
        let mut state = NavigationState::new(&tree);
        let mut dispatcher = Dispatcher::new(RecordingLauncher::default());

        let outcome = InputHandler::handle_token(InputToken::Char('q'), &mut state, &mut dispatcher);
        assert!(matches!(
            outcome,
            Outcome::DispatchFailed { ref error, .. } if error.is_parse_error()
        ));
        assert!(dispatcher.launcher().launched.is_empty());
    }

    #[test]
    fn test_unbindable_token_keeps_sequence() {
        let tree = firefox_tree();
        let mut state = NavigationState::new(&tree);
        let mut dispatcher = Dispatcher::new(RecordingLauncher::default());

        InputHandler::handle_token(InputToken::Char('a'), &mut state, &mut dispatcher);
        for c in ['/', 'F'] {
            let outcome = InputHandler::handle_token(InputToken::Char(c), &mut state, &mut dispatcher);
            assert!(matches!(outcome, Outcome::Navigated(Transition::Unchanged)));
        }
        assert_eq!(state.sequence_string(), "a");
        assert_eq!(labels(&state), vec!["f: Firefox"]);
        assert!(dispatcher.launcher().launched.is_empty());
    }

    #[test]
    fn test_backspace_and_escape() {
        let tree = firefox_tree();
        let mut state = NavigationState::new(&tree);
        let mut dispatcher = Dispatcher::new(RecordingLauncher::default());

        InputHandler::handle_token(InputToken::Char('a'), &mut state, &mut dispatcher);
        let outcome = InputHandler::handle_token(InputToken::Backspace, &mut state, &mut dispatcher);
        assert!(matches!(outcome, Outcome::Navigated(Transition::Backtracked)));
        assert_eq!(state.phase(), Phase::Root);

        InputHandler::handle_token(InputToken::Char('a'), &mut state, &mut dispatcher);
        let outcome = InputHandler::handle_token(InputToken::Escape, &mut state, &mut dispatcher);
        assert!(matches!(outcome, Outcome::Navigated(Transition::Cleared)));
        assert_eq!(state.phase(), Phase::Root);
    }
}
