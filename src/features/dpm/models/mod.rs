mod directory;

pub use directory::{Directory, DirectoryEntry};
