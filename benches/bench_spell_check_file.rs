use std::fs;
use std::path::Path;
use std::time::Instant;

use spellcheck::{SpellCorrector, SymSpellConfig, Verbosity};

fn main() {
    let dict_file = "words_100k.txt";
    let text_file = "benches/test_text.txt";
    let max_edit_distance = 3;

    let text_content = fs::read_to_string(text_file).expect(
        "Unable to read text file, please ensure you have a file named test_text.txt in the current directory with any text contents.",
    );

    let mut spell_corrector = SpellCorrector::new(SymSpellConfig {
        max_dictionary_edit_distance: max_edit_distance,
        ..SymSpellConfig::default()
    })
    .unwrap();
    spell_corrector
        .load_dictionary(Path::new(dict_file), 0, 1)
        .expect("failed to read dictionary file");

    let words: Vec<String> = text_content
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect();

    let start_time = Instant::now();

    let _ = spell_corrector.lookup_batch(&words, Verbosity::Closest, None);

    let elapsed_time = start_time.elapsed();
    println!("Elapsed time for spell checking: {elapsed_time:?}");
    println!(
        "Words corrected per second: {}",
        words.len() as f64 / elapsed_time.as_secs_f64()
    );
}
