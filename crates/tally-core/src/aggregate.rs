//! Group-and-count helpers.
//!
//! Groups are kept in first-encountered order so that "the largest group"
//! is deterministic: on equal counts the group seen first wins.

use std::collections::HashMap;
use std::hash::Hash;

/// Count items per key, preserving the order in which keys first appear.
pub fn count_by<'a, T, K, F>(items: impl IntoIterator<Item = &'a T>, mut key: F) -> Vec<(K, usize)>
where
    T: 'a + ?Sized,
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, usize)> = Vec::new();

    for item in items {
        let k = key(item);
        match index.get(&k) {
            Some(&slot) => groups[slot].1 += 1,
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, 1));
            }
        }
    }

    groups
}

/// Largest group; ties go to the group encountered first.
pub fn max_by_count<K>(groups: &[(K, usize)]) -> Option<&(K, usize)> {
    groups.iter().fold(None, |best, group| match best {
        Some(current) if current.1 >= group.1 => Some(current),
        _ => Some(group),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_by_preserves_first_seen_order() {
        let words = ["b", "a", "b", "c", "a", "b"];
        let groups = count_by(words.iter(), |w: &&str| w.to_string());
        assert_eq!(
            groups,
            vec![
                ("b".to_string(), 3),
                ("a".to_string(), 2),
                ("c".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_max_by_count_prefers_first_on_tie() {
        let groups = vec![("x", 2), ("y", 1), ("z", 2)];
        assert_eq!(max_by_count(&groups), Some(&("x", 2)));
    }

    #[test]
    fn test_max_by_count_empty() {
        let groups: Vec<(String, usize)> = Vec::new();
        assert!(max_by_count(&groups).is_none());
    }
}
