//! Controller layer: submission results, explicit page state, and the form flows.

pub mod events;
pub mod form;
pub mod state;

pub use events::{FailureKind, SubmitResult};
pub use form::{ControllerError, FormController, ModalOptions, PageView};
pub use state::{ControllerState, FormPhase, ModalState, RatingFormState, ReviewFormState};
