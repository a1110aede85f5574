//! Presentation seam shared by the page controllers.
//!
//! Controllers never print or draw directly; everything user-visible goes
//! through a [`PageView`]. The terminal front-end implements it for the CLI,
//! tests use a recording implementation.

use crate::core::error::{AppError, Result};

pub trait PageView: Send {
    /// Short-lived notification
    fn toast(&mut self, message: &str);

    /// Replace the autocomplete data source of the name field
    fn set_autocomplete(&mut self, names: &[String]);

    /// Render one summary line per report, in load order
    fn render_rows(&mut self, rows: &[String]);

    /// Replace the modal body and open it
    fn show_modal(&mut self, body: &str);

    fn hide_row(&mut self, index: usize);

    /// Reset every input of the submission form
    fn clear_form(&mut self);
}

/// Lifecycle of one rendered list row.
///
/// `Rendered -> DetailShown -> Hidden`; nothing moves backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    Rendered,
    DetailShown,
    Hidden,
}

impl RowState {
    pub fn click(self) -> Result<Self> {
        match self {
            RowState::Rendered | RowState::DetailShown => Ok(RowState::DetailShown),
            RowState::Hidden => Err(AppError::InvalidState(
                "row is hidden and can no longer be opened".to_string(),
            )),
        }
    }

    /// Approve/deny buttons are only armed once the detail has been shown.
    pub fn act(self) -> Result<Self> {
        match self {
            RowState::DetailShown => Ok(RowState::Hidden),
            RowState::Rendered => Err(AppError::InvalidState(
                "open the report before approving or denying it".to_string(),
            )),
            RowState::Hidden => Err(AppError::InvalidState(
                "a decision was already sent for this report".to_string(),
            )),
        }
    }
}
