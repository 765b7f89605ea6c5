/// A popup message. `close_tick` is `None` for acknowledgements that stay up
/// until the next key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub close_tick: Option<u64>,
}

/// State management for notifications
#[derive(Default)]
pub struct NotificationState {
    pub current_notification: Option<Notice>,
}

impl NotificationState {
    pub fn set_notification(&mut self, message: impl Into<String>, ticks: Option<u64>, tick_count: u64) {
        let close_tick = ticks.map(|duration| tick_count + duration);
        self.current_notification = Some(Notice { message: message.into(), close_tick });
    }

    pub fn clear_notification(&mut self) {
        self.current_notification = None;
    }

    pub fn should_close_notification(&self, tick_count: u64) -> bool {
        if let Some(Notice { close_tick: Some(close_tick), .. }) = &self.current_notification {
            tick_count >= *close_tick
        } else {
            false
        }
    }
}
