// Library interface for bull-cow-game
// This allows integration tests to access internal modules

pub mod cli;
pub mod game;
pub mod logging;
pub mod score;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use game::{Game, GameInterface, GuessOutcome, UserAction, game_loop};
pub use score::{BullCowCount, is_isogram, score_guess};
pub use wordbank::{
    DEFAULT_MAX_WORD_LEN, DEFAULT_MIN_WORD_LEN, EMBEDDED_WORDBANK, load_wordbank_from_file,
    load_wordbank_from_str, pick_hidden_word, validate_bounds,
};
