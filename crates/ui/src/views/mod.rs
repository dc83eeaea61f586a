mod components;
mod prompt;
mod scripts;
mod sheet;
mod state;

pub use prompt::PromptView;
pub use sheet::SheetView;
pub use state::{SaveState, ViewError};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
