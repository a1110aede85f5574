pub mod constants;
pub mod format;
pub mod html;
pub mod templates;
pub mod view;

#[cfg(test)]
pub mod test_helpers;
