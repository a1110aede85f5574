//! Report listing page.

mod controller;

pub use controller::ListingController;
