use omr_core::model::{OptionLabel, QuestionNumber, ResponseSheet};

pub const OVAL_WIDTH: u32 = 40;
pub const OVAL_HEIGHT: u32 = 30;
pub const OVAL_PADDING: u32 = 10;
pub const OVAL_OUTLINE: u32 = 2;

pub const SELECTED_FILL: &str = "#4CAF50";
pub const UNSELECTED_FILL: &str = "white";
pub const SELECTED_TEXT: &str = "white";
pub const UNSELECTED_TEXT: &str = "black";
pub const OUTLINE_COLOR: &str = "black";

/// Identity of one clickable oval. This is the payload a click reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BubbleId {
    pub question: QuestionNumber,
    pub option: OptionLabel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BubbleVm {
    pub id: BubbleId,
    pub selected: bool,
    pub fill: &'static str,
    pub text_color: &'static str,
    /// Left edge of the oval inside its row canvas.
    pub x: u32,
}

impl BubbleVm {
    #[must_use]
    pub fn center_x(&self) -> u32 {
        self.x + OVAL_WIDTH / 2
    }

    #[must_use]
    pub fn center_y(&self) -> u32 {
        OVAL_HEIGHT / 2
    }

    /// Radii shrunk by half the outline so the stroke stays inside the box.
    #[must_use]
    pub fn radius_x(&self) -> u32 {
        (OVAL_WIDTH - OVAL_OUTLINE) / 2
    }

    #[must_use]
    pub fn radius_y(&self) -> u32 {
        (OVAL_HEIGHT - OVAL_OUTLINE) / 2
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionRowVm {
    pub question: QuestionNumber,
    pub label: String,
    pub bubbles: Vec<BubbleVm>,
    pub canvas_width: u32,
}

/// Derive every row from the sheet. Called after each change; nothing is
/// patched in place.
#[must_use]
pub fn map_question_rows(sheet: &ResponseSheet) -> Vec<QuestionRowVm> {
    let option_count = u32::try_from(sheet.options().len()).unwrap_or(u32::MAX);
    let canvas_width = option_count.saturating_mul(OVAL_WIDTH + OVAL_PADDING);

    sheet
        .iter()
        .map(|(question, answer)| {
            let bubbles = sheet
                .options()
                .iter()
                .zip(0u32..)
                .map(|(option, index)| {
                    let selected = answer == Some(option);
                    BubbleVm {
                        id: BubbleId { question, option },
                        selected,
                        fill: if selected { SELECTED_FILL } else { UNSELECTED_FILL },
                        text_color: if selected { SELECTED_TEXT } else { UNSELECTED_TEXT },
                        x: index * (OVAL_WIDTH + OVAL_PADDING),
                    }
                })
                .collect();
            QuestionRowVm {
                question,
                label: format!("{question}."),
                bubbles,
                canvas_width,
            }
        })
        .collect()
}
