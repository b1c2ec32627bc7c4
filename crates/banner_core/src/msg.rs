#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Caller asked to display a message in the status region.
    ShowRequested {
        message: String,
        severity: Option<String>,
    },
    /// Caller asked to hide the status region.
    HideRequested,
    /// A raw server response should be turned into a user-visible message.
    ResponseReported {
        body: String,
        fallback: String,
        severity: Option<String>,
    },
}
