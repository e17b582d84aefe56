//! Shapes of the external recipe API's JSON payloads.

use serde::{Deserialize, Serialize};

/// One hit from a recipe search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Body of a search response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub results: Vec<RecipeSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    #[serde(default)]
    pub original: String,
}

/// Full recipe information as returned by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub extended_ingredients: Vec<IngredientLine>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub source_url: Option<String>,
}

impl RecipeDetail {
    /// Ingredient lines, skipping blanks.
    pub fn ingredient_lines(&self) -> Vec<String> {
        self.extended_ingredients
            .iter()
            .map(|i| i.original.trim())
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Ingredients flattened into the single string stored on saved recipes.
    pub fn flattened_ingredients(&self) -> String {
        self.ingredient_lines().join(", ")
    }

    pub fn instructions_text(&self) -> String {
        self.instructions.clone().unwrap_or_default()
    }
}
