/// Result of scoring one guess: letters matched in place (bulls) and
/// letters present at a different position (cows).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BullCowCount {
    pub bulls: u32,
    pub cows: u32,
}

/// Returns true when no letter occurs twice. Comparison is
/// case-insensitive; empty and one-letter words count as isograms.
pub fn is_isogram(word: &str) -> bool {
    let letters: Vec<char> = word.chars().map(|c| c.to_ascii_uppercase()).collect();
    for (i, a) in letters.iter().enumerate() {
        if letters[i + 1..].contains(a) {
            return false;
        }
    }
    true
}

/// Scores a guess against the hidden word. Both strings must have the same
/// length; the game validates length before calling this.
pub fn score_guess(guess: &str, hidden: &str) -> BullCowCount {
    debug_assert_eq!(guess.len(), hidden.len());
    let hidden_chars: Vec<char> = hidden.chars().collect();
    let mut count = BullCowCount::default();
    for (i, g) in guess.chars().enumerate() {
        if hidden_chars[i] == g {
            count.bulls += 1;
        } else if hidden_chars.contains(&g) {
            count.cows += 1;
        }
    }
    count
}
