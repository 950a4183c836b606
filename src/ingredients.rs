use std::fmt;

/// A trimmed, non-empty search token, kept exactly as typed otherwise
/// (case and inner whitespace are preserved).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ingredient(String);

impl Ingredient {
    /// Trim one raw segment into a token; blank segments yield `None`.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Ingredient(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split a raw comma-separated line into ingredient tokens.
///
/// Each segment is trimmed and empty segments are discarded; the order of
/// the surviving tokens follows the input. The result may be empty, in
/// which case the caller must show the empty-input notice instead of
/// querying anything.
pub fn parse_ingredients(raw: &str) -> Vec<Ingredient> {
    raw.split(',').filter_map(Ingredient::new).collect()
}
