use std::path::Path;

use criterion::{Criterion, criterion_group, criterion_main};
use spellcheck::{SpellCorrector, SymSpellConfig, Verbosity};

fn bench_spell_check_string(c: &mut Criterion) {
    let dict_file = "words_100k.txt";
    let max_edit_distance = 2;

    let text_content = "This is a short sntence with some misspelled wrds. It is used for testing the spell checker functionality.".to_string();

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

    c.bench_function("spell_check_words", |b| {
        b.iter(|| {
            let _ = spell_corrector.lookup_batch(&words, Verbosity::Closest, None);
        })
    });
}

criterion_group!(benches, bench_spell_check_string);
criterion_main!(benches);
