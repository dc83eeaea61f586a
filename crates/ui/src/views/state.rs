#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    SaveFailed,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ViewError::Unknown => "Something went wrong. Please try again.",
            ViewError::SaveFailed => "Could not save responses.",
        }
    }
}

/// Progress of the save action on the sheet screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveState {
    Idle,
    Saving,
    Saved { location: String },
    Failed(ViewError),
}

impl SaveState {
    #[must_use]
    pub fn is_saving(&self) -> bool {
        matches!(self, SaveState::Saving)
    }
}
