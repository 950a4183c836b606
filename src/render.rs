use crate::model::MealSummary;

/// Shown when the submitted line contains no ingredients.
pub const EMPTY_INPUT_NOTICE: &str = "Please enter some ingredients.";

/// Shown when every lookup succeeded but no meal uses all ingredients.
pub const NO_MATCH_NOTICE: &str =
    "No recipes found matching all your ingredients. Try fewer ingredients.";

/// Shown when the search failed as a whole.
pub const FAILURE_NOTICE: &str = "Sorry, something went wrong. Please try again later.";

/// Render the search outcome as a plain-text block, one card per meal.
///
/// Each card shows the meal name, its detail-page address under
/// `meal_page_base`, and the thumbnail address. Meals are printed in the
/// order given; an empty slice renders the no-match notice instead.
pub fn render_meals(meals: &[MealSummary], meal_page_base: &str) -> String {
    if meals.is_empty() {
        return NO_MATCH_NOTICE.to_string();
    }

    meals
        .iter()
        .map(|meal| {
            format!(
                "{}\n  {}\n  {}",
                meal.name,
                meal.detail_url(meal_page_base),
                meal.thumbnail
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
