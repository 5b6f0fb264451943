use std::io::{self, Write};
use std::path::Path;

use spellcheck::{SpellCorrector, SymSpellConfig, Verbosity};

const MAX_EDIT_DISTANCE: usize = 2;

fn main() -> io::Result<()> {
    env_logger::init();

    let dict_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "words_100k.txt".into());

    if !Path::new(&dict_path).exists() {
        eprintln!("Dictionary file not found: {dict_path}");
        std::process::exit(1);
    }

    let mut corrector = SpellCorrector::new(SymSpellConfig {
        max_dictionary_edit_distance: MAX_EDIT_DISTANCE,
        ..SymSpellConfig::default()
    })
    .expect("default config with a fixed max edit distance is always valid");

    corrector
        .load_dictionary(Path::new(&dict_path), 0, 1)
        .expect("failed to read dictionary file");

    println!(
        "SymSpell REPL - dictionary: {dict_path} ({} terms)\n:type text, :q to quit",
        corrector.word_count()
    );

    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        if input.trim() == ":q" {
            break;
        }
        if input.trim().is_empty() {
            continue;
        }

        let corrected = corrector.lookup_compound(input.trim(), MAX_EDIT_DISTANCE);
        if let Some(best) = corrected.first() {
            println!("  {}", best.term);
        }

        for token in input.split_whitespace() {
            let word = token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            if word.is_empty() {
                continue;
            }
            match corrector.lookup(&word, Verbosity::Closest, None, false) {
                Ok(suggestions) if !suggestions.is_empty() => {
                    let words: Vec<_> = suggestions.iter().map(|s| s.term.as_str()).collect();
                    println!("    {word} -> {}", words.join(", "));
                }
                Ok(_) => {}
                Err(err) => eprintln!("    {word}: {err}"),
            }
        }
    }
    Ok(())
}
