use std::collections::HashMap;

use log::{debug, trace};

use crate::config::SymSpellConfig;
use crate::delete_index::DeleteIndex;

#[derive(Default)]
pub struct Dictionary {
    words: HashMap<String, u64>,
    below_threshold_words: HashMap<String, u64>,
    deletes: DeleteIndex,
    max_length: usize,
    prefix_length: usize,
    max_dictionary_edit_distance: usize,
    count_threshold: u64,
}

impl Dictionary {
    pub fn new(config: &SymSpellConfig) -> Self {
        Self {
            words: HashMap::with_capacity(config.initial_capacity),
            below_threshold_words: HashMap::new(),
            deletes: DeleteIndex::new(config.compact_level),
            max_length: 0,
            prefix_length: config.prefix_length,
            max_dictionary_edit_distance: config.max_dictionary_edit_distance,
            count_threshold: config.count_threshold,
        }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn prefix_length(&self) -> usize {
        self.prefix_length
    }

    pub fn max_dictionary_edit_distance(&self) -> usize {
        self.max_dictionary_edit_distance
    }

    pub fn get(&self, term: &str) -> Option<u64> {
        self.words.get(term).copied()
    }

    pub fn deletes(&self) -> &DeleteIndex {
        &self.deletes
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    // count <= 0 is rejected outright when count_threshold > 0, else treated as 0
    pub fn create_entry(&mut self, key: &str, count: i64) -> bool {
        let mut count: u64 = if count <= 0 {
            if self.count_threshold > 0 {
                return false;
            }
            0
        } else {
            count as u64
        };

        if self.count_threshold > 1
            && let Some(&previous) = self.below_threshold_words.get(key)
        {
            count = previous.saturating_add(count);
            if count >= self.count_threshold {
                self.below_threshold_words.remove(key);
            } else {
                self.below_threshold_words.insert(key.to_string(), count);
                return false;
            }
            return self.insert_live(key, count);
        }

        if let Some(&previous) = self.words.get(key) {
            let updated = previous.saturating_add(count);
            self.words.insert(key.to_string(), updated);
            return false;
        }

        if count < self.count_threshold {
            self.below_threshold_words.insert(key.to_string(), count);
            return false;
        }

        self.insert_live(key, count)
    }

    fn insert_live(&mut self, key: &str, count: u64) -> bool {
        self.words.insert(key.to_string(), count);
        let char_count = key.chars().count();
        if char_count > self.max_length {
            self.max_length = char_count;
        }
        self.deletes
            .insert(key, self.prefix_length, self.max_dictionary_edit_distance);
        debug!("promoted '{key}' to live dictionary with count {count}");
        true
    }

    pub fn load_from_str(&mut self, contents: &str, term_index: usize, count_index: usize) {
        for line in contents.lines() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 2 {
                trace!("skipping short dictionary line: {line:?}");
                continue;
            }
            let (Some(term), Some(count_field)) =
                (fields.get(term_index), fields.get(count_index))
            else {
                trace!("skipping dictionary line missing a requested column: {line:?}");
                continue;
            };
            match crate::helpers::try_parse_int64(count_field) {
                Some(count) => {
                    self.create_entry(term, count);
                }
                None => trace!("skipping dictionary line with unparseable count: {line:?}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(count_threshold: u64) -> Dictionary {
        Dictionary::new(&SymSpellConfig {
            count_threshold,
            ..SymSpellConfig::default()
        })
    }

    #[test]
    fn entry_below_threshold_is_staged_then_promoted() {
        let mut d = dict(8);
        assert!(!d.create_entry("rare", 4));
        assert_eq!(d.get("rare"), None);
        assert!(d.create_entry("rare", 4));
        assert_eq!(d.get("rare"), Some(8));
    }

    #[test]
    fn entry_at_or_above_threshold_is_live_immediately() {
        let mut d = dict(1);
        assert!(d.create_entry("the", 100));
        assert_eq!(d.get("the"), Some(100));
    }

    #[test]
    fn repeated_insert_accumulates_and_saturates() {
        let mut d = dict(1);
        d.create_entry("the", 100);
        d.create_entry("the", 100);
        assert_eq!(d.get("the"), Some(200));

        d.create_entry("big", i64::MAX);
        d.create_entry("big", i64::MAX);
        d.create_entry("big", i64::MAX);
        assert_eq!(d.get("big"), Some(u64::MAX));
    }

    #[test]
    fn max_length_tracks_longest_live_term() {
        let mut d = dict(1);
        d.create_entry("a", 1);
        d.create_entry("alphabet", 1);
        d.create_entry("ab", 1);
        assert_eq!(d.max_length(), "alphabet".len());
    }

    #[test]
    fn load_from_str_skips_short_and_unparseable_lines() {
        let mut d = dict(1);
        d.load_from_str("the 100\nshort\nquick abc\nfox 5\n", 0, 1);
        assert_eq!(d.get("the"), Some(100));
        assert_eq!(d.get("quick"), None);
        assert_eq!(d.get("fox"), Some(5));
        assert_eq!(d.word_count(), 2);
    }
}
