//! Collection validation functions

use std::collections::BTreeSet;

/// Number of distinct items that belong to `vocabulary`
///
/// Items outside the vocabulary are ignored, and repeats are counted once.
pub fn count_members<S: AsRef<str>>(items: &[S], vocabulary: &[&str]) -> usize {
    items
        .iter()
        .map(AsRef::as_ref)
        .filter(|item| vocabulary.contains(item))
        .collect::<BTreeSet<&str>>()
        .len()
}

/// Validates minimum number of vocabulary members in a collection
pub fn has_min_members<S: AsRef<str>>(items: &[S], vocabulary: &[&str], min: usize) -> bool {
    count_members(items, vocabulary) >= min
}

/// Drop repeated entries, keeping the first occurrence of each
pub fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOCAB: &[&str] = &["coding", "sports", "reading"];

    #[test]
    fn test_count_members() {
        assert_eq!(count_members::<&str>(&[], VOCAB), 0);
        assert_eq!(count_members(&["coding"], VOCAB), 1);
        assert_eq!(count_members(&["coding", "sports", "reading"], VOCAB), 3);
        assert_eq!(count_members(&["knitting"], VOCAB), 0);
        assert_eq!(count_members(&["coding", "coding"], VOCAB), 1);
    }

    #[test]
    fn test_min_members() {
        assert!(has_min_members(&["reading".to_string()], VOCAB, 1));
        assert!(!has_min_members::<String>(&[], VOCAB, 1));
        assert!(!has_min_members(&["knitting".to_string()], VOCAB, 1));
    }

    #[test]
    fn test_dedup_preserving_order() {
        let items = vec![
            "sports".to_string(),
            "coding".to_string(),
            "sports".to_string(),
        ];
        assert_eq!(
            dedup_preserving_order(items),
            vec!["sports".to_string(), "coding".to_string()]
        );
    }
}
