use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// Returns indices of matched items in relevance order (best match first).
/// If query is empty, returns all indices in original order.
pub fn fuzzy_filter<T, F>(items: &[T], query: &str, get_text: F) -> Vec<usize>
where
    F: Fn(&T) -> String,
{
    if query.is_empty() {
        return (0..items.len()).collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart);

    let mut scored: Vec<(usize, u32)> = items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| {
            let text = get_text(item);
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(&text, &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| (i, score))
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(i, _)| i).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter_strs(items: &[&str], query: &str) -> Vec<usize> {
        fuzzy_filter(items, query, |s| s.to_string())
    }

    #[test]
    fn test_empty_query_returns_all_indices() {
        let items = vec!["JFK New York", "CUN Cancun", "LHR London", "NRT Tokyo"];
        let result = filter_strs(&items, "");
        assert_eq!(result, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_exact_code_scores_highest() {
        let items = vec!["JFK New York", "CUN Cancun", "JNB Johannesburg"];
        let result = filter_strs(&items, "JFK");
        assert_eq!(result[0], 0);
    }

    #[test]
    fn test_city_name_matches() {
        let items = vec!["JFK New York", "CUN Cancun", "LHR London"];
        let result = filter_strs(&items, "lond");
        assert_eq!(result, vec![2]);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let items = vec!["JFK New York", "CUN Cancun"];
        let result = filter_strs(&items, "zzz");
        assert_eq!(result, Vec::<usize>::new());
    }

    #[test]
    fn test_case_insensitive() {
        let items = vec!["JFK New York", "LHR London"];
        let result = filter_strs(&items, "jfk");
        assert_eq!(result[0], 0);
    }

    #[test]
    fn test_partial_match_ranks_all_candidates() {
        let items = vec!["SFO San Francisco", "SAN San Diego", "LHR London"];
        let result = filter_strs(&items, "san");
        assert_eq!(result.len(), 2);
        assert!(result.contains(&0));
        assert!(result.contains(&1));
        assert!(!result.contains(&2));
    }

    #[test]
    fn test_with_struct_accessor() {
        struct Route {
            label: String,
        }

        let routes = vec![
            Route {
                label: "JFK → CUN 2026-03-10".to_string(),
            },
            Route {
                label: "LAX → NRT 2026-04-01".to_string(),
            },
        ];

        let result = fuzzy_filter(&routes, "cun", |r| r.label.clone());
        assert_eq!(result, vec![0]);
    }
}
