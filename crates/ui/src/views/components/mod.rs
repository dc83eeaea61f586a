mod bubble_grid;
mod modals;
mod preview;

pub use bubble_grid::BubbleGrid;
pub use modals::SaveNotice;
pub use preview::AnswerPreview;
