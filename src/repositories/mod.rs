//! Storage for contact records.

mod directory;

pub use directory::Directory;
