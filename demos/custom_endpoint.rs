//! Builder usage: point the finder at a self-hosted API mirror, cap each
//! request at ten seconds, and degrade failed lookups to "not found"
//! instead of aborting the whole search.

use std::time::Duration;

use pantry_finder::{render_meals, JoinPolicy, MealFinder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let finder = MealFinder::builder()
        .api_base("http://localhost:9000/api/json/v1/1")
        .meal_page_base("http://localhost:9000/meal")
        .timeout(Duration::from_secs(10))
        .join_policy(JoinPolicy::SkipFailures)
        .build()?;

    let outcome = finder.search("salmon, dill, lemon").await?;
    println!("{}", render_meals(&outcome.meals, finder.meal_page_base()));

    Ok(())
}
