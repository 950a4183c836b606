use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use futures::future::{join_all, try_join_all};
use log::{debug, warn};
use reqwest::Client;

use crate::config::FinderConfig;
use crate::error::FinderError;
use crate::ingredients::{parse_ingredients, Ingredient};
use crate::intersect::common_meals;
use crate::model::{LookupResponse, SearchOutcome, SearchResult};

/// How the fan-out/fan-in barrier treats a failed lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JoinPolicy {
    /// Any failed lookup aborts the whole search (Promise.all semantics,
    /// matching the original page).
    #[default]
    AllOrNothing,
    /// A failed lookup is logged and treated like "ingredient not found":
    /// excluded from the intersection, never fatal.
    SkipFailures,
}

/// Reusable async search client: one shared HTTP client, an immutable
/// configuration, and a per-finder sequence counter for stamping outcomes.
pub struct MealFinder {
    client: Client,
    config: FinderConfig,
    join_policy: JoinPolicy,
    seq: AtomicU64,
}

impl MealFinder {
    /// Create a finder with the default join policy (all-or-nothing).
    pub fn new(config: FinderConfig) -> Result<Self, FinderError> {
        Self::with_policy(config, JoinPolicy::default())
    }

    /// Create a finder with an explicit join policy.
    pub fn with_policy(config: FinderConfig, join_policy: JoinPolicy) -> Result<Self, FinderError> {
        let mut builder = Client::builder().user_agent(&config.user_agent);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            config,
            join_policy,
            seq: AtomicU64::new(0),
        })
    }

    /// Creates a new builder for configuring a finder
    ///
    /// # Example
    /// ```
    /// use pantry_finder::MealFinder;
    ///
    /// let builder = MealFinder::builder();
    /// ```
    pub fn builder() -> MealFinderBuilder {
        MealFinderBuilder::default()
    }

    /// Base URL of the human-facing meal detail pages, for rendering.
    pub fn meal_page_base(&self) -> &str {
        &self.config.meal_page_base
    }

    pub fn join_policy(&self) -> JoinPolicy {
        self.join_policy
    }

    /// Look one ingredient up. The ingredient travels as a query pair, so
    /// reqwest percent-encodes it; raw URL interpolation is never used.
    async fn lookup(&self, ingredient: &Ingredient) -> Result<SearchResult, FinderError> {
        let url = format!("{}/filter.php", self.config.api_base.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .query(&[("i", ingredient.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FinderError::UnexpectedStatus(status));
        }

        let reply: LookupResponse = response.json().await?;
        debug!(
            "lookup '{}': {} meals",
            ingredient,
            reply.meals.as_ref().map_or(0, Vec::len)
        );

        Ok(SearchResult {
            ingredient: ingredient.clone(),
            meals: reply.meals,
        })
    }

    /// Run one whole search: parse the raw line, fan out one lookup per
    /// ingredient, join per the finder's policy, and intersect the results.
    ///
    /// A search with no meal common to all ingredients is `Ok` with an empty
    /// meal list, not an error. An empty input line fails with
    /// [`FinderError::EmptyInput`] before any request is issued.
    ///
    /// Searches are not cancelled by later ones; callers that overlap
    /// searches should keep the outcome with the highest `seq` stamp.
    pub async fn search(&self, raw_input: &str) -> Result<SearchOutcome, FinderError> {
        let ingredients = parse_ingredients(raw_input);
        if ingredients.is_empty() {
            return Err(FinderError::EmptyInput);
        }

        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        debug!("search #{}: {} ingredients", seq, ingredients.len());

        let lookups = ingredients.iter().map(|ingredient| self.lookup(ingredient));
        let results: Vec<SearchResult> = match self.join_policy {
            JoinPolicy::AllOrNothing => try_join_all(lookups).await?,
            JoinPolicy::SkipFailures => join_all(lookups)
                .await
                .into_iter()
                .zip(&ingredients)
                .map(|(result, ingredient)| {
                    result.unwrap_or_else(|err| {
                        warn!("lookup '{}' failed, skipping: {}", ingredient, err);
                        SearchResult {
                            ingredient: ingredient.clone(),
                            meals: None,
                        }
                    })
                })
                .collect(),
        };

        let meals = common_meals(&results);
        Ok(SearchOutcome {
            seq,
            ingredients,
            meals,
        })
    }
}

/// Builder for configuring a [`MealFinder`]
#[derive(Debug, Default)]
pub struct MealFinderBuilder {
    api_base: Option<String>,
    meal_page_base: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    join_policy: JoinPolicy,
}

impl MealFinderBuilder {
    /// Point the finder at a different lookup API
    ///
    /// # Example
    /// ```
    /// use pantry_finder::MealFinder;
    ///
    /// let builder = MealFinder::builder()
    ///     .api_base("http://localhost:9000/api/json/v1/1");
    /// ```
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }

    /// Set the base URL used when rendering meal detail links
    pub fn meal_page_base(mut self, base: impl Into<String>) -> Self {
        self.meal_page_base = Some(base.into());
        self
    }

    /// Set a per-request timeout; without one a hung request hangs the
    /// whole search indefinitely
    ///
    /// # Example
    /// ```
    /// use pantry_finder::MealFinder;
    /// use std::time::Duration;
    ///
    /// let builder = MealFinder::builder()
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Override the user agent sent with lookup requests
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Choose how a failed lookup affects the search
    ///
    /// # Example
    /// ```
    /// use pantry_finder::{JoinPolicy, MealFinder};
    ///
    /// let builder = MealFinder::builder()
    ///     .join_policy(JoinPolicy::SkipFailures);
    /// ```
    pub fn join_policy(mut self, policy: JoinPolicy) -> Self {
        self.join_policy = policy;
        self
    }

    /// Build the finder, filling unset fields from the defaults
    pub fn build(self) -> Result<MealFinder, FinderError> {
        let mut config = FinderConfig::default();
        if let Some(base) = self.api_base {
            config.api_base = base;
        }
        if let Some(base) = self.meal_page_base {
            config.meal_page_base = base;
        }
        if let Some(duration) = self.timeout {
            config.timeout_secs = Some(duration.as_secs());
        }
        if let Some(agent) = self.user_agent {
            config.user_agent = agent;
        }

        MealFinder::with_policy(config, self.join_policy)
    }
}
