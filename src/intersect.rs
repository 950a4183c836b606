use std::collections::HashSet;

use crate::model::{MealSummary, SearchResult};

/// Compute the meals common to every ingredient that matched anything.
///
/// Results with no matches (`meals: null` or an empty list) are dropped
/// before intersecting: an unknown ingredient contributes nothing rather
/// than zeroing the whole search. If nothing survives, the result is empty.
///
/// The intersection is taken over meal ids, so it is independent of the
/// ingredient order. The surviving ids are materialized from the *first*
/// surviving result's records, in that result's native order; duplicate ids
/// across results are assumed to carry identical attributes.
pub fn common_meals(results: &[SearchResult]) -> Vec<MealSummary> {
    let valid: Vec<&Vec<MealSummary>> = results
        .iter()
        .filter_map(|result| result.meals.as_ref())
        .filter(|meals| !meals.is_empty())
        .collect();

    let Some((first, rest)) = valid.split_first() else {
        return Vec::new();
    };

    let mut common: HashSet<&str> = first.iter().map(|meal| meal.id.as_str()).collect();
    for meals in rest {
        let ids: HashSet<&str> = meals.iter().map(|meal| meal.id.as_str()).collect();
        common.retain(|id| ids.contains(id));
    }

    first
        .iter()
        .filter(|meal| common.contains(meal.id.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredients::Ingredient;

    fn meal(id: &str, name: &str) -> MealSummary {
        MealSummary {
            id: id.to_string(),
            name: name.to_string(),
            thumbnail: format!("https://img.example/{}.jpg", id),
        }
    }

    fn result(ingredient: &str, meals: Option<Vec<MealSummary>>) -> SearchResult {
        SearchResult {
            ingredient: Ingredient::new(ingredient).unwrap(),
            meals,
        }
    }

    #[test]
    fn test_intersects_overlapping_results() {
        let results = vec![
            result(
                "chicken",
                Some(vec![meal("1", "One"), meal("2", "Two"), meal("3", "Three")]),
            ),
            result(
                "garlic",
                Some(vec![meal("2", "Two"), meal("3", "Three"), meal("4", "Four")]),
            ),
        ];

        let common = common_meals(&results);
        let ids: Vec<&str> = common.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn test_order_independent() {
        let chicken = result(
            "chicken",
            Some(vec![meal("1", "One"), meal("2", "Two"), meal("3", "Three")]),
        );
        let garlic = result("garlic", Some(vec![meal("3", "Three"), meal("2", "Two")]));

        let forward = common_meals(&[chicken.clone(), garlic.clone()]);
        let reversed = common_meals(&[garlic, chicken]);

        let forward_ids: HashSet<String> = forward.iter().map(|m| m.id.clone()).collect();
        let reversed_ids: HashSet<String> = reversed.iter().map(|m| m.id.clone()).collect();
        assert_eq!(forward_ids, reversed_ids);
    }

    #[test]
    fn test_projects_attributes_from_first_surviving_result() {
        let results = vec![
            result("chicken", Some(vec![meal("2", "First copy")])),
            result("garlic", Some(vec![meal("2", "Second copy")])),
        ];

        let common = common_meals(&results);
        assert_eq!(common.len(), 1);
        assert_eq!(common[0].name, "First copy");
    }

    #[test]
    fn test_no_match_result_is_excluded_not_fatal() {
        let results = vec![
            result("unobtainium", None),
            result("chicken", Some(vec![meal("1", "One"), meal("2", "Two")])),
        ];

        let common = common_meals(&results);
        assert_eq!(common.len(), 2);
    }

    #[test]
    fn test_empty_list_treated_like_null() {
        let results = vec![
            result("unobtainium", Some(vec![])),
            result("chicken", Some(vec![meal("1", "One")])),
        ];

        let common = common_meals(&results);
        assert_eq!(common.len(), 1);
        assert_eq!(common[0].id, "1");
    }

    #[test]
    fn test_all_results_empty_yields_empty() {
        let results = vec![result("a", None), result("b", Some(vec![]))];
        assert!(common_meals(&results).is_empty());
    }

    #[test]
    fn test_no_results_yields_empty() {
        assert!(common_meals(&[]).is_empty());
    }

    #[test]
    fn test_disjoint_results_yield_empty() {
        let results = vec![
            result("chicken", Some(vec![meal("1", "One")])),
            result("garlic", Some(vec![meal("2", "Two")])),
        ];
        assert!(common_meals(&results).is_empty());
    }

    #[test]
    fn test_keeps_first_result_order() {
        let results = vec![
            result(
                "chicken",
                Some(vec![meal("9", "Nine"), meal("4", "Four"), meal("7", "Seven")]),
            ),
            result(
                "garlic",
                Some(vec![meal("7", "Seven"), meal("9", "Nine"), meal("4", "Four")]),
            ),
        ];

        let ids: Vec<String> = common_meals(&results)
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec!["9", "4", "7"]);
    }
}
