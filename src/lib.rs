pub mod config;
pub mod error;
pub mod finder;
pub mod ingredients;
pub mod intersect;
pub mod model;
pub mod render;

pub use config::{load_config, FinderConfig};
pub use error::FinderError;
pub use finder::{JoinPolicy, MealFinder, MealFinderBuilder};
pub use ingredients::{parse_ingredients, Ingredient};
pub use intersect::common_meals;
pub use model::{LookupResponse, MealSummary, SearchOutcome, SearchResult};
pub use render::{render_meals, EMPTY_INPUT_NOTICE, FAILURE_NOTICE, NO_MATCH_NOTICE};

/// Run one search against the public endpoint with loaded configuration.
///
/// Convenience wrapper for one-shot callers; anything issuing more than one
/// search should build a [`MealFinder`] once and reuse it.
pub async fn find_recipes(input: &str) -> Result<SearchOutcome, FinderError> {
    let config = load_config()?;
    let finder = MealFinder::new(config)?;
    finder.search(input).await
}
