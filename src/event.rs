/// A form submission in flight.
///
/// The shell's default action for a submission is to remount the form,
/// wiping all state. Handlers that process the submission themselves must
/// call [`SubmitEvent::prevent_default`].
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}
