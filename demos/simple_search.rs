//! Simplest possible usage: one search against the public endpoint
//! using loaded configuration, then print the rendered cards.

use pantry_finder::{find_recipes, render_meals, FinderConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let outcome = find_recipes("chicken, garlic").await?;

    println!(
        "Search #{} over {} ingredients found {} common meals\n",
        outcome.seq,
        outcome.ingredients.len(),
        outcome.meals.len()
    );
    println!(
        "{}",
        render_meals(&outcome.meals, &FinderConfig::default().meal_page_base)
    );

    Ok(())
}
