//! Modules layer - Infrastructure components for presenting pages
//!
//! Contains the views that render controller output outside a browser.

pub mod terminal;
