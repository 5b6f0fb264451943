use std::collections::HashSet;
use std::path::Path;

use log::warn;
use rayon::prelude::*;

use crate::config::SymSpellConfig;
use crate::dictionary::Dictionary;
use crate::edit_distance;
use crate::error::SymSpellError;
use crate::helpers;
use crate::suggestion::{SuggestItem, Verbosity};

pub struct SpellCorrector {
    config: SymSpellConfig,
    dictionary: Dictionary,
}

impl SpellCorrector {
    pub fn new(config: SymSpellConfig) -> Result<Self, SymSpellError> {
        let config = config.validate()?;
        Ok(Self {
            dictionary: Dictionary::new(&config),
            config,
        })
    }

    pub fn with_defaults() -> Self {
        Self::new(SymSpellConfig::default()).expect("default config is always valid")
    }

    pub fn word_count(&self) -> usize {
        self.dictionary.word_count()
    }

    pub fn max_dictionary_edit_distance(&self) -> usize {
        self.config.max_dictionary_edit_distance
    }

    pub fn create_dictionary_entry(&mut self, term: &str, count: i64) -> bool {
        let key = term.to_lowercase();
        if key.is_empty() {
            return false;
        }
        self.dictionary.create_entry(&key, count)
    }

    // returns Ok(false) if path does not exist; malformed lines are skipped, not errors
    pub fn load_dictionary(
        &mut self,
        path: &Path,
        term_index: usize,
        count_index: usize,
    ) -> Result<bool, SymSpellError> {
        if !path.exists() {
            warn!("dictionary file not found: {}", path.display());
            return Ok(false);
        }
        let contents = std::fs::read_to_string(path).map_err(|source| SymSpellError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.dictionary.load_from_str(&contents, term_index, count_index);
        Ok(true)
    }

    pub fn lookup(
        &self,
        phrase: &str,
        verbosity: Verbosity,
        max_edit_distance: Option<usize>,
        include_unknown: bool,
    ) -> Result<Vec<SuggestItem>, SymSpellError> {
        let max_edit_distance = max_edit_distance.unwrap_or(self.config.max_dictionary_edit_distance);
        if max_edit_distance > self.config.max_dictionary_edit_distance {
            return Err(SymSpellError::DistanceTooLarge {
                requested: max_edit_distance,
                max: self.config.max_dictionary_edit_distance,
            });
        }

        let phrase = phrase.to_lowercase();
        Ok(self.lookup_internal(&phrase, verbosity, max_edit_distance, include_unknown))
    }

    fn finalize(
        &self,
        mut suggestions: Vec<SuggestItem>,
        phrase: &str,
        max_edit_distance: usize,
        include_unknown: bool,
    ) -> Vec<SuggestItem> {
        if suggestions.len() > 1 {
            suggestions.sort();
        }
        if include_unknown && suggestions.is_empty() {
            suggestions.push(SuggestItem::new(phrase, max_edit_distance as i64 + 1, 0));
        }
        suggestions
    }

    fn lookup_internal(
        &self,
        phrase: &str,
        verbosity: Verbosity,
        max_edit_distance: usize,
        include_unknown: bool,
    ) -> Vec<SuggestItem> {
        let mut suggestions: Vec<SuggestItem> = Vec::new();
        let phrase_chars: Vec<char> = phrase.chars().collect();
        let phrase_len = phrase_chars.len();

        if phrase_len as i64 - max_edit_distance as i64 > self.dictionary.max_length() as i64 {
            return self.finalize(suggestions, phrase, max_edit_distance, include_unknown);
        }

        if let Some(count) = self.dictionary.get(phrase) {
            suggestions.push(SuggestItem::new(phrase, 0, count));
            if verbosity != Verbosity::All {
                return self.finalize(suggestions, phrase, max_edit_distance, include_unknown);
            }
        }

        if max_edit_distance == 0 {
            return self.finalize(suggestions, phrase, max_edit_distance, include_unknown);
        }

        let prefix_length = self.dictionary.prefix_length();
        let mut considered_deletes: HashSet<String> = HashSet::new();
        let mut considered_suggestions: HashSet<String> = HashSet::new();
        considered_suggestions.insert(phrase.to_string());

        let mut max_edit_distance_2 = max_edit_distance as i64;
        let phrase_prefix_len = phrase_len.min(prefix_length);
        let initial_candidate: String = phrase_chars[..phrase_prefix_len].iter().collect();

        let mut candidates: Vec<String> = vec![initial_candidate];
        let mut candidate_pointer = 0;

        while candidate_pointer < candidates.len() {
            let candidate = candidates[candidate_pointer].clone();
            candidate_pointer += 1;
            let candidate_chars: Vec<char> = candidate.chars().collect();
            let candidate_len = candidate_chars.len();
            let len_diff = phrase_prefix_len as i64 - candidate_len as i64;

            if len_diff > max_edit_distance_2 {
                if verbosity == Verbosity::All {
                    continue;
                }
                break;
            }

            let hash = self.dictionary.deletes().hash(&candidate);
            if let Some(dict_suggestions) = self.dictionary.deletes().get(hash) {
                let dict_suggestions = dict_suggestions.to_vec();
                for suggestion in &dict_suggestions {
                    if suggestion == phrase {
                        continue;
                    }
                    let suggestion_chars: Vec<char> = suggestion.chars().collect();
                    let suggestion_len = suggestion_chars.len();

                    if (suggestion_len as i64 - phrase_len as i64).abs() > max_edit_distance_2
                        || suggestion_len < candidate_len
                        || (suggestion_len == candidate_len && suggestion != &candidate)
                    {
                        continue;
                    }

                    let suggestion_prefix_len = suggestion_len.min(prefix_length);
                    if suggestion_prefix_len > phrase_prefix_len
                        && (suggestion_prefix_len as i64 - candidate_len as i64) > max_edit_distance_2
                    {
                        continue;
                    }

                    let distance: i64;
                    if candidate_len == 0 {
                        distance = phrase_len.max(suggestion_len) as i64;
                        if distance > max_edit_distance_2 || considered_suggestions.contains(suggestion) {
                            continue;
                        }
                    } else if suggestion_len == 1 {
                        let suggestion_char = suggestion_chars[0];
                        distance = if phrase_chars.contains(&suggestion_char) {
                            phrase_len as i64 - 1
                        } else {
                            phrase_len as i64
                        };
                        if distance > max_edit_distance_2 || considered_suggestions.contains(suggestion) {
                            continue;
                        }
                    } else {
                        // The original comparer's tail-equality prefilter relies on
                        // Python's negative-index slice wraparound; we always fall
                        // through to the real comparer instead of reproducing it
                        // (a documented, correctness-preserving simplification).
                        if (verbosity != Verbosity::All
                            && !delete_in_suggestion_prefix(
                                &candidate_chars,
                                candidate_len,
                                &suggestion_chars,
                                suggestion_len,
                                prefix_length,
                            ))
                            || considered_suggestions.contains(suggestion)
                        {
                            continue;
                        }
                        considered_suggestions.insert(suggestion.clone());
                        let d = edit_distance::compare(phrase, suggestion, max_edit_distance_2);
                        if d < 0 {
                            continue;
                        }
                        distance = d;
                    }

                    if distance <= max_edit_distance_2 {
                        let count = self.dictionary.get(suggestion).unwrap_or(0);
                        let si = SuggestItem::new(suggestion.clone(), distance, count);
                        if !suggestions.is_empty() {
                            match verbosity {
                                Verbosity::Closest => {
                                    if distance < max_edit_distance_2 {
                                        suggestions.clear();
                                    }
                                }
                                Verbosity::Top => {
                                    if distance < max_edit_distance_2 || count > suggestions[0].count {
                                        max_edit_distance_2 = distance;
                                        suggestions[0] = si;
                                    }
                                    continue;
                                }
                                Verbosity::All => {}
                            }
                        }
                        if verbosity != Verbosity::All {
                            max_edit_distance_2 = distance;
                        }
                        suggestions.push(si);
                    }
                }
            }

            if len_diff < max_edit_distance as i64 && candidate_len <= prefix_length {
                if verbosity != Verbosity::All && len_diff >= max_edit_distance_2 {
                    continue;
                }
                for i in 0..candidate_len {
                    let mut deleted = String::with_capacity(candidate.len());
                    deleted.extend(candidate_chars[..i].iter());
                    deleted.extend(candidate_chars[i + 1..].iter());
                    if considered_deletes.insert(deleted.clone()) {
                        candidates.push(deleted);
                    }
                }
            }
        }

        self.finalize(suggestions, phrase, max_edit_distance, include_unknown)
    }

    pub fn lookup_batch(
        &self,
        words: &[String],
        verbosity: Verbosity,
        max_edit_distance: Option<usize>,
    ) -> Result<Vec<Vec<SuggestItem>>, SymSpellError> {
        let max_edit_distance = max_edit_distance.unwrap_or(self.config.max_dictionary_edit_distance);
        if max_edit_distance > self.config.max_dictionary_edit_distance {
            return Err(SymSpellError::DistanceTooLarge {
                requested: max_edit_distance,
                max: self.config.max_dictionary_edit_distance,
            });
        }
        Ok(words
            .par_iter()
            .map(|word| {
                let word = word.to_lowercase();
                self.lookup_internal(&word, verbosity, max_edit_distance, false)
            })
            .collect())
    }

    // merges words that should not have been split, splits words missing a space,
    // corrects single-word typos in between; always returns exactly one reconstruction
    pub fn lookup_compound(&self, phrase: &str, max_edit_distance: usize) -> Vec<SuggestItem> {
        let terms = helpers::parse_words(phrase, false);
        let mut suggestion_parts: Vec<SuggestItem> = Vec::new();
        let mut is_last_combi = false;

        for (i, term) in terms.iter().enumerate() {
            let sug = self.lookup_internal(term, Verbosity::Top, max_edit_distance, false);

            if i > 0 && !is_last_combi {
                let combined = format!("{}{}", terms[i - 1], term);
                let sug_combi =
                    self.lookup_internal(&combined, Verbosity::Top, max_edit_distance, false);
                if let Some(combi_best) = sug_combi.first() {
                    let best_1 = suggestion_parts.last().expect("i > 0 implies a previous part");
                    let best_2 = sug
                        .first()
                        .cloned()
                        .unwrap_or_else(|| SuggestItem::new(term.clone(), max_edit_distance as i64 + 1, 0));
                    let split_candidate = format!("{} {}", terms[i - 1], term);
                    let merged_candidate = format!("{} {}", best_1.term.to_lowercase(), best_2.term);
                    let d_split =
                        edit_distance::compare(&split_candidate, &merged_candidate, max_edit_distance as i64);
                    if d_split >= 0 && combi_best.distance + 1 < d_split {
                        let bumped = SuggestItem::new(
                            combi_best.term.clone(),
                            combi_best.distance + 1,
                            combi_best.count,
                        );
                        *suggestion_parts.last_mut().expect("checked above") = bumped;
                        is_last_combi = true;
                        continue;
                    }
                }
            }
            is_last_combi = false;

            if sug.first().is_some_and(|s| s.distance == 0) || term.chars().count() == 1 {
                suggestion_parts.push(sug.into_iter().next().unwrap_or_else(|| {
                    SuggestItem::new(term.clone(), max_edit_distance as i64 + 1, 0)
                }));
                continue;
            }

            suggestion_parts.push(self.best_split(term, &sug, max_edit_distance));
        }

        let joined_terms: Vec<&str> = suggestion_parts.iter().map(|s| s.term.as_str()).collect();
        let joined = joined_terms.join(" ");
        let joined_count = suggestion_parts.iter().map(|s| s.count).min().unwrap_or(0);
        let distance = edit_distance::compare(phrase, &joined, i64::MAX);

        vec![SuggestItem::new(joined, distance, joined_count)]
    }

    // tries every split point inside term, falling back to sug's best item
    // or the unknown-term sentinel
    fn best_split(&self, term: &str, sug: &[SuggestItem], max_edit_distance: usize) -> SuggestItem {
        let term_chars: Vec<char> = term.chars().collect();
        let mut candidates: Vec<SuggestItem> = Vec::new();
        if let Some(top) = sug.first() {
            candidates.push(top.clone());
        }

        if term_chars.len() > 1 {
            for j in 1..term_chars.len() {
                let part_1: String = term_chars[..j].iter().collect();
                let part_2: String = term_chars[j..].iter().collect();

                let sug_1 = self.lookup_internal(&part_1, Verbosity::Top, max_edit_distance, false);
                let Some(best_1) = sug_1.first() else {
                    continue;
                };
                if sug.first().is_some_and(|s| s.term == best_1.term) {
                    break;
                }

                let sug_2 = self.lookup_internal(&part_2, Verbosity::Top, max_edit_distance, false);
                let Some(best_2) = sug_2.first() else {
                    continue;
                };
                if sug.first().is_some_and(|s| s.term == best_2.term) {
                    break;
                }

                let combined = format!("{} {}", best_1.term, best_2.term);
                let mut distance = edit_distance::compare(term, &combined, max_edit_distance as i64);
                if distance < 0 {
                    distance = max_edit_distance as i64 + 1;
                }
                let count = best_1.count.min(best_2.count);
                let split = SuggestItem::new(combined, distance, count);
                let is_distance_one = split.distance == 1;
                candidates.push(split);
                if is_distance_one {
                    break;
                }
            }
        }

        candidates
            .into_iter()
            .min()
            .unwrap_or_else(|| SuggestItem::new(term.to_string(), max_edit_distance as i64 + 1, 0))
    }
}

// true iff every character of delete appears, in order, within suggestion's
// first prefix_length characters
fn delete_in_suggestion_prefix(
    delete: &[char],
    delete_len: usize,
    suggestion: &[char],
    suggestion_len: usize,
    prefix_length: usize,
) -> bool {
    if delete_len == 0 {
        return true;
    }
    let suggestion_len = suggestion_len.min(prefix_length);
    let mut j = 0;
    for &del_char in &delete[..delete_len] {
        while j < suggestion_len && del_char != suggestion[j] {
            j += 1;
        }
        if j == suggestion_len {
            return false;
        }
    }
    true
}
