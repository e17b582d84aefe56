pub mod api;
pub mod cache;
pub mod error;
pub mod source;
pub mod types;
pub mod validation;

pub use api::{MockRecipeApi, RecipeApi, SpoonacularClient, SpoonacularClientBuilder};
pub use cache::RecipeCache;
pub use error::{ApiError, FieldError, ValidationErrors};
pub use source::RecipeSource;
pub use types::{IngredientLine, RecipeDetail, RecipeSummary, SearchResults};
