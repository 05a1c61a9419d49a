//! Shared context passed to modules

/// Shared context available to all modules
#[derive(Debug, Default)]
pub struct Context {
    /// Injected narrow-viewport signal (terminal width or --narrow)
    pub narrow: bool,

    /// Clipboard content mirrored after a successful copy
    pub clipboard: Option<String>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set clipboard content
    pub fn set_clipboard(&mut self, content: String) {
        self.clipboard = Some(content);
    }

    /// Get clipboard content
    pub fn get_clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }
}
