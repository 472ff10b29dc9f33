//! Editable form state for the dashboard screens.
//!
//! Each form is driven by method calls from a page handler and answers with
//! [`Notice`](crate::notice::Notice)s and [`Navigation`](crate::notice::Navigation)
//! decisions instead of drawing anything.

mod link;
mod profile;
mod score;

pub use link::*;
pub use profile::*;
pub use score::*;

/// Why a form refused an edit or a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// A save is in flight; inputs are disabled until it finishes.
    #[error("a save is already in progress")]
    Busy,
    /// The form has not finished loading its record.
    #[error("the form is still loading")]
    Loading,
}
