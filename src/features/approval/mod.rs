//! Approval queue page.
//!
//! Lists reports awaiting a decision; each opened row can be approved or
//! denied once.

mod controller;

pub use controller::ApprovalController;
