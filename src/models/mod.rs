pub mod recipe;
pub mod search;
pub mod user;

pub use recipe::*;
pub use search::*;
pub use user::*;
