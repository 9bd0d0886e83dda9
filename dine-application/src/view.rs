/// Lifecycle of the data behind a view.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum ViewStatus {
    /// Nothing has been requested yet.
    #[default]
    Idle,
    Loading,
    Ready,
    /// The fetch succeeded, but there was nothing recognizable in it.
    Empty,
    /// The fetch failed and local data is shown instead.
    Fallback(String),
    /// The fetch failed; the message is meant for the user.
    Failed(String),
}

impl ViewStatus {
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Fallback(msg) | Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
