pub mod nav;
pub mod notification;
pub mod ui;

pub use nav::{NavState, ScreenKey, Tab, View};
pub use notification::NotificationState;
pub use ui::UiState;


/// Configuration constants for the application
pub struct AppConfig {
    /// Attendees show up when |vibe score - dial| is strictly below this.
    pub vibe_window: u8,
    pub default_vibe: u8,
    pub default_squad_size: u8,
    pub dial_step: u8,
    pub max_message_length: usize,
    pub notification_timeout_ms: u64,
    /// Milliseconds per tick of the UI loop; notification timeouts are counted in ticks.
    pub tick_rate_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            vibe_window: 40,
            default_vibe: 50,
            default_squad_size: 0,
            dial_step: 5,
            max_message_length: 500,
            notification_timeout_ms: 1500,
            tick_rate_ms: 50,
        }
    }
}

/// Application error types
#[derive(Debug)]
pub enum AppError {
    IO(std::io::Error),
    Terminal(String),
    Prefs(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::IO(err) => write!(f, "IO error: {}", err),
            AppError::Terminal(msg) => write!(f, "Terminal error: {}", msg),
            AppError::Prefs(msg) => write!(f, "Preferences error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IO(err)
    }
}

pub type AppResult<T> = Result<T, AppError>;
