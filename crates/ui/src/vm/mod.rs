mod bubble_vm;
mod drag_scroll;
mod prompt_vm;
mod sheet_vm;

pub use bubble_vm::{
    BubbleId, BubbleVm, OUTLINE_COLOR, OVAL_HEIGHT, OVAL_OUTLINE, OVAL_PADDING, OVAL_WIDTH,
    QuestionRowVm, map_question_rows,
};
pub use drag_scroll::DragScroll;
pub use prompt_vm::{PromptOutcome, prompt_label, submit_question_count};
pub use sheet_vm::{PreviewVisibility, SheetIntent, SheetVm};
