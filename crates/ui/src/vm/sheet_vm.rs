use services::SheetSession;

use crate::views::ViewError;
use crate::vm::bubble_vm::{BubbleId, QuestionRowVm, map_question_rows};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetIntent {
    Select(BubbleId),
    Reset,
    TogglePreview,
}

/// Whether the text preview panel is on screen. Display state only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreviewVisibility {
    Shown,
    #[default]
    Hidden,
}

impl PreviewVisibility {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Shown => Self::Hidden,
            Self::Hidden => Self::Shown,
        }
    }

    #[must_use]
    pub fn is_shown(self) -> bool {
        self == Self::Shown
    }

    /// Label for the control that flips the panel.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Shown => "🔽 Hide Answers",
            Self::Hidden => "📜 Show Answers",
        }
    }
}

pub struct SheetVm {
    session: SheetSession,
    preview: PreviewVisibility,
}

impl SheetVm {
    #[must_use]
    pub fn new(session: SheetSession) -> Self {
        Self {
            session,
            preview: PreviewVisibility::Hidden,
        }
    }

    #[must_use]
    pub fn session(&self) -> &SheetSession {
        &self.session
    }

    #[must_use]
    pub fn preview(&self) -> PreviewVisibility {
        self.preview
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if a selection names a question or option
    /// that is not on the sheet. The sheet is left unchanged.
    pub fn apply(&mut self, intent: SheetIntent) -> Result<(), ViewError> {
        match intent {
            SheetIntent::Select(id) => self
                .session
                .select(id.question, id.option)
                .map_err(|err| {
                    tracing::warn!(error = %err, "ignored selection");
                    ViewError::Unknown
                }),
            SheetIntent::Reset => {
                self.session.reset();
                Ok(())
            }
            SheetIntent::TogglePreview => {
                self.preview = self.preview.toggled();
                Ok(())
            }
        }
    }

    #[must_use]
    pub fn rows(&self) -> Vec<QuestionRowVm> {
        map_question_rows(self.session.sheet())
    }

    /// Preview panel contents; same lines as the saved file.
    #[must_use]
    pub fn preview_text(&self) -> String {
        self.session.export_text()
    }

    #[must_use]
    pub fn header(&self) -> String {
        format!("OMR Sheet ({} Questions)", self.session.question_count().value())
    }

    #[must_use]
    pub fn window_title(&self) -> String {
        format!(
            "Interactive OMR Sheet ({} Questions)",
            self.session.question_count().value()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omr_core::model::{OptionLabel, OptionSet, QuestionCount, QuestionNumber};

    fn vm(count: u32) -> SheetVm {
        let count = QuestionCount::new(count, 200).unwrap();
        SheetVm::new(SheetSession::new(count, OptionSet::abcd(), 10, 8))
    }

    fn select(question: u16, option: char) -> SheetIntent {
        SheetIntent::Select(BubbleId {
            question: QuestionNumber::new(question),
            option: OptionLabel::new(option),
        })
    }

    #[test]
    fn select_then_overwrite() {
        let mut vm = vm(3);
        vm.apply(select(1, 'A')).unwrap();
        vm.apply(select(1, 'D')).unwrap();

        let row = &vm.rows()[0];
        let selected: Vec<char> = row
            .bubbles
            .iter()
            .filter(|b| b.selected)
            .map(|b| b.id.option.as_char())
            .collect();
        assert_eq!(selected, vec!['D']);
        assert!(vm.preview_text().starts_with("1.D     \n"));
    }

    #[test]
    fn reset_returns_every_question_to_unanswered() {
        let mut vm = vm(3);
        vm.apply(select(1, 'B')).unwrap();
        vm.apply(select(3, 'D')).unwrap();

        vm.apply(SheetIntent::Reset).unwrap();

        assert!(vm.rows().iter().all(|row| row.bubbles.iter().all(|b| !b.selected)));
        assert!(vm.preview_text().starts_with("1.-     \n2.-     \n3.-     \n"));
    }

    #[test]
    fn toggle_only_changes_visibility() {
        let mut vm = vm(2);
        vm.apply(select(2, 'C')).unwrap();
        let before = vm.preview_text();

        assert_eq!(vm.preview(), PreviewVisibility::Hidden);
        assert_eq!(vm.preview().toggle_label(), "📜 Show Answers");
        vm.apply(SheetIntent::TogglePreview).unwrap();
        assert_eq!(vm.preview(), PreviewVisibility::Shown);
        assert_eq!(vm.preview().toggle_label(), "🔽 Hide Answers");
        vm.apply(SheetIntent::TogglePreview).unwrap();
        assert_eq!(vm.preview(), PreviewVisibility::Hidden);

        assert_eq!(vm.preview_text(), before);
    }

    #[test]
    fn invalid_selection_is_rejected_without_change() {
        let mut vm = vm(2);
        assert_eq!(vm.apply(select(5, 'A')), Err(ViewError::Unknown));
        assert_eq!(vm.apply(select(1, 'Z')), Err(ViewError::Unknown));
        assert_eq!(vm.session().sheet().answered_count(), 0);
    }

    #[test]
    fn titles_reflect_question_count() {
        let vm = vm(42);
        assert_eq!(vm.header(), "OMR Sheet (42 Questions)");
        assert_eq!(vm.window_title(), "Interactive OMR Sheet (42 Questions)");
    }
}
