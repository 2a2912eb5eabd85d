#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

pub const READY_STATUS: &str = "Ready. Press Ctrl+S to save the product.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_raw(&mut self, msg: impl Into<String>) {
        self.message = msg.into();
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub fn issues_remaining(&mut self, count: usize) {
        self.message = format!("{count} field(s) need attention");
    }

    pub fn pending_exit(&mut self) {
        self.message = "Unsaved changes. Press Esc or Ctrl+Q again to leave without saving.".to_string();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
