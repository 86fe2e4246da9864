pub mod defaults;

// Re-export so code outside can do "use crate::http::HttpDefaults;"
pub use defaults::HttpDefaults;
