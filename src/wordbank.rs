use crate::score::is_isogram;
use rand::prelude::IndexedRandom;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

pub const DEFAULT_MIN_WORD_LEN: usize = 4;
pub const DEFAULT_MAX_WORD_LEN: usize = 6;

/// Checks the word-length bounds before any loading happens. A zero minimum
/// or an inverted range is a startup error.
pub fn validate_bounds(min_len: usize, max_len: usize) -> Result<(), String> {
    if min_len == 0 {
        return Err("minimum word length must be at least 1".to_string());
    }
    if min_len > max_len {
        return Err(format!(
            "minimum word length {min_len} exceeds maximum {max_len}"
        ));
    }
    Ok(())
}

fn is_playable(word: &str, min_len: usize, max_len: usize) -> bool {
    word.len() >= min_len
        && word.len() <= max_len
        && word.chars().all(|c| c.is_ascii_alphabetic())
        && is_isogram(word)
}

pub fn load_wordbank_from_str(data: &str, min_len: usize, max_len: usize) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_uppercase())
        .filter(|word| is_playable(word, min_len, max_len))
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(
    path: P,
    min_len: usize,
    max_len: usize,
) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_uppercase();
        if is_playable(&word, min_len, max_len) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Picks the hidden word for a round, uniformly at random.
pub fn pick_hidden_word(wordbank: &[String]) -> Option<&String> {
    wordbank.choose(&mut rand::rng())
}
