//! Transient UI state: theme mode and user-facing messages.

/// UI-only state that is not part of the form itself.
#[derive(Debug, Clone)]
pub struct UiState {
    /// Whether the dark theme is active
    pub dark_mode: bool,
    /// Error banner shown above the buttons
    pub error_message: Option<String>,
    /// Success/info banner shown above the buttons
    pub success_message: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            dark_mode: false,
            error_message: None,
            success_message: None,
        }
    }

    /// Clear both message banners.
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }
}
