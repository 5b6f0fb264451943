use regex::Regex;
use std::sync::LazyLock;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\W_]+['’]*[^\W_]*").expect("static regex is valid"));

static ACRONYM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{2,}$").expect("static regex is valid"));

pub fn parse_words(phrase: &str, preserve_case: bool) -> Vec<String> {
    let folded;
    let haystack = if preserve_case {
        phrase
    } else {
        folded = phrase.to_lowercase();
        &folded
    };
    WORD_RE
        .find_iter(haystack)
        .map(|m| m.as_str().to_string())
        .collect()
}

// returns (len_a, len_b, start): remaining lengths after trimming, and the
// offset where the untrimmed middle begins
pub fn prefix_suffix_prep(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut len_a = a.len();
    let mut len_b = b.len();
    while len_a != 0 && a[len_a - 1] == b[len_b - 1] {
        len_a -= 1;
        len_b -= 1;
    }
    let mut start = 0;
    while start != len_a && a[start] == b[start] {
        start += 1;
    }
    if start != 0 {
        len_a -= start;
        len_b -= start;
    }
    (len_a, len_b, start)
}

pub fn try_parse_int64(s: &str) -> Option<i64> {
    s.parse::<i64>().ok()
}

pub fn is_acronym(word: &str) -> bool {
    ACRONYM_RE.is_match(word)
}
