use serde::{Deserialize, Serialize};

use crate::ingredients::Ingredient;

/// Minimal displayable record for one recipe, as returned by the lookup API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: String,
}

impl MealSummary {
    /// Address of the meal's human-facing detail page under the given base URL.
    pub fn detail_url(&self, meal_page_base: &str) -> String {
        format!("{}/{}", meal_page_base.trim_end_matches('/'), self.id)
    }
}

/// Wire shape of one lookup reply: `{"meals": [...]}` with `null` standing
/// for "no recipe uses this ingredient".
#[derive(Debug, Deserialize)]
pub struct LookupResponse {
    pub meals: Option<Vec<MealSummary>>,
}

/// One ingredient's lookup result.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub ingredient: Ingredient,
    pub meals: Option<Vec<MealSummary>>,
}

/// A completed search: what was asked and which meals use all of it.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Strictly increasing per-finder stamp; of two overlapping searches,
    /// the one with the larger value is the fresher.
    pub seq: u64,
    pub ingredients: Vec<Ingredient>,
    /// Meals common to every matched ingredient, in the first surviving
    /// result's native order. Empty means no recipe uses all ingredients.
    pub meals: Vec<MealSummary>,
}
