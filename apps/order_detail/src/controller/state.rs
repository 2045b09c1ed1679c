use crate::page::ModalElement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Untouched,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalState {
    pub present: bool,
    pub rated: bool,
    pub shown: bool,
}

impl ModalState {
    pub fn from_element(element: Option<&ModalElement>) -> Self {
        Self {
            present: element.is_some(),
            rated: element.is_some_and(|modal| modal.rated),
            shown: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RatingFormState {
    pub phase: FormPhase,
    /// Every input, textarea and button of the form.
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReviewFormState {
    pub phase: FormPhase,
    pub submit_disabled: bool,
    pub rows_disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControllerState {
    pub modal: ModalState,
    pub rating_form: RatingFormState,
    pub review_form: ReviewFormState,
}
