use std::collections::HashMap;

/// Set of course ids with ASCII case-insensitive membership.
///
/// Each entry remembers the line it was first seen on so duplicates can be
/// reported against their original definition.
#[derive(Debug, Clone, Default)]
pub struct CourseIdSet {
    map: HashMap<String, u64>,
}

impl CourseIdSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `id` as seen on `line`.
    ///
    /// Returns the line of the earlier definition when `id` was already
    /// present; the earlier line is kept.
    pub fn insert(&mut self, id: &str, line: u64) -> Option<u64> {
        let key = id.to_ascii_lowercase();
        match self.map.get(&key) {
            Some(first) => Some(*first),
            None => {
                self.map.insert(key, line);
                None
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.map.contains_key(&id.to_ascii_lowercase())
    }

    pub fn first_line(&self, id: &str) -> Option<u64> {
        self.map.get(&id.to_ascii_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_folds_case() {
        let mut set = CourseIdSet::new();
        assert_eq!(set.insert("CSCI100", 1), None);
        assert!(set.contains("csci100"));
        assert!(!set.contains("CSCI101"));
    }

    #[test]
    fn duplicate_keeps_first_line() {
        let mut set = CourseIdSet::new();
        set.insert("MATH201", 3);
        assert_eq!(set.insert("math201", 9), Some(3));
        assert_eq!(set.first_line("Math201"), Some(3));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn empty_string_is_a_valid_member() {
        let mut set = CourseIdSet::new();
        assert!(!set.contains(""));
        set.insert("", 1);
        assert!(set.contains(""));
    }
}
