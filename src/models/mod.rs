pub mod recipe;
pub mod user;

// Re-export the record types so code outside can do
// "use crate::models::{Recipe, User};"
pub use recipe::Recipe;
pub use user::User;
