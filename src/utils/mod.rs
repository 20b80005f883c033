// Utility functions
pub mod error;
pub mod http;
pub mod id;

pub use error::*;
pub use id::*;
