//! Command Launcher
//!
//! Shell-style splitting of command lines and fire-and-forget process start.

use std::process::{Command, Stdio};

use tracing::{info, warn};

use super::{DispatchError, DispatchResult};

/// Starts a program from an argument vector without waiting for it.
pub trait Launcher {
    fn launch(&mut self, argv: &[String]) -> std::io::Result<()>;
}

/// Spawns real processes, detached from the launcher's terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&mut self, argv: &[String]) -> std::io::Result<()> {
        let Some((program, args)) = argv.split_first() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "empty argument vector",
            ));
        };

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }

        // The child handle is dropped: no wait, no exit status.
        command.spawn().map(drop)
    }
}

/// Split a command line the way a POSIX shell would, without running one.
pub fn split_command(command: &str) -> DispatchResult<Vec<String>> {
    let argv = shlex::split(command).ok_or_else(|| DispatchError::Parse {
        command: command.to_string(),
    })?;

    if argv.is_empty() {
        return Err(DispatchError::Empty {
            command: command.to_string(),
        });
    }

    Ok(argv)
}

/// Hands command lines to a [`Launcher`].
pub struct Dispatcher<L: Launcher = SystemLauncher> {
    launcher: L,
}

impl Default for Dispatcher<SystemLauncher> {
    fn default() -> Self {
        Self::new(SystemLauncher)
    }
}

impl<L: Launcher> Dispatcher<L> {
    pub fn new(launcher: L) -> Self {
        Self { launcher }
    }

    #[cfg(test)]
    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Start `command` detached. Returns as soon as the process is spawned.
    pub fn dispatch(&mut self, command: &str) -> DispatchResult<()> {
        let argv = split_command(command).inspect_err(|e| warn!("{e}"))?;

        match self.launcher.launch(&argv) {
            Ok(()) => {
                info!("Launched '{}'", argv[0]);
                Ok(())
            }
            Err(source) => {
                let error = DispatchError::Spawn {
                    program: argv[0].clone(),
                    source,
                };
                warn!("{error}");
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingLauncher {
        launched: Vec<Vec<String>>,
        fail: bool,
    }

    impl Launcher for RecordingLauncher {
        fn launch(&mut self, argv: &[String]) -> std::io::Result<()> {
            if self.fail {
                return Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no such program"));
            }
            self.launched.push(argv.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_split_command() {
        assert_eq!(split_command("firefox").unwrap(), vec!["firefox"]);
        assert_eq!(
            split_command("alacritty -e 'htop --tree'").unwrap(),
            vec!["alacritty", "-e", "htop --tree"]
        );
        assert_eq!(
            split_command(r#"notify-send "hello world" a\ b"#).unwrap(),
            vec!["notify-send", "hello world", "a b"]
        );
    }

    #[test]
    fn test_split_command_errors() {
        let err = split_command("echo 'unterminated").unwrap_err();
        assert!(matches!(err, DispatchError::Parse { .. }));
        assert!(err.is_parse_error());

        let err = split_command("   ").unwrap_err();
        assert!(matches!(err, DispatchError::Empty { .. }));
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_dispatch_launches_argv() {
        let mut dispatcher = Dispatcher::new(RecordingLauncher::default());
        dispatcher.dispatch("rofi -show drun").unwrap();

        assert_eq!(
            dispatcher.launcher().launched,
            vec![vec!["rofi".to_string(), "-show".to_string(), "drun".to_string()]]
        );
    }

    #[test]
    fn test_parse_error_has_no_side_effect() {
        let mut dispatcher = Dispatcher::new(RecordingLauncher::default());
        let err = dispatcher.dispatch("sh -c \"oops").unwrap_err();

        assert!(err.is_parse_error());
        assert!(dispatcher.launcher().launched.is_empty());
    }

    #[test]
    fn test_spawn_error_is_reported() {
        let mut dispatcher = Dispatcher::new(RecordingLauncher {
            fail: true,
            ..Default::default()
        });
        let err = dispatcher.dispatch("definitely-not-installed").unwrap_err();

        match err {
            DispatchError::Spawn { program, .. } => assert_eq!(program, "definitely-not-installed"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_system_launcher_rejects_empty_argv() {
        let err = SystemLauncher.launch(&[]).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
