#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,

    FocusNext,
    FocusPrev,

    /// A component asked for the form to be submitted
    Submit,
    /// Remount the form, discarding all of its state
    Reload,

    /// Event consumed, nothing to dispatch
    None,
}
