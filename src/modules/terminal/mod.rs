//! Terminal front-end for the page controllers.

mod terminal_view;

pub use terminal_view::TerminalView;
