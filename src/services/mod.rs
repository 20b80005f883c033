pub mod recipe_service;
pub mod spoonacular_service;
pub mod unwrangle_service;
pub mod user_service;

pub use spoonacular_service::{RecipeSearchProvider, SpoonacularClient};
pub use unwrangle_service::{ProductSearchProvider, UnwrangleClient};
