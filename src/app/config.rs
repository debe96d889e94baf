use std::path::PathBuf;
use std::time::Duration;

pub struct AppConfig {
    pub bindings_path: PathBuf,
    pub log_file: Option<PathBuf>,
    pub escape_exits: bool,
    pub message_timeout: Duration,
}

impl AppConfig {
    /// `<config dir>/modali/bindings.json`
    pub fn default_bindings_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("modali")
            .join("bindings.json")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings_path: Self::default_bindings_path(),
            log_file: None,
            escape_exits: true,
            message_timeout: Duration::from_secs(5),
        }
    }
}
