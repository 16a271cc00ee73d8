use crate::game::{GameInterface, UserAction};
use crate::score::BullCowCount;
use crate::wordbank::{DEFAULT_MAX_WORD_LEN, DEFAULT_MIN_WORD_LEN};
use clap::Parser;
use std::io::BufRead;

/// Bulls and Cows CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Shortest playable word length
    #[arg(long = "min-len", default_value_t = DEFAULT_MIN_WORD_LEN)]
    pub min_len: usize,

    /// Longest playable word length
    #[arg(long = "max-len", default_value_t = DEFAULT_MAX_WORD_LEN)]
    pub max_len: usize,

    /// Play in the full-screen terminal UI instead of line-based prompts
    #[arg(short = 't', long = "tui")]
    pub tui: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Line-based implementation of the `GameInterface` trait, wrapping any
/// `BufRead` source so tests can drive it with a `Cursor`.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_welcome(&mut self, word_len: usize, lives: u32) {
        println!("\nWelcome to the Bull Cow word guessing game!");
        println!("Guess the {word_len} letter word! You have {lives} lives.");
        println!("Type your guess and press enter ('exit' quits, 'next' starts over)...");
    }

    fn read_input(&mut self) -> Option<UserAction> {
        let mut input = String::new();
        if self.reader.read_line(&mut input).is_err() || input.is_empty() {
            // EOF or broken pipe ends the session
            return Some(UserAction::Exit);
        }
        let input = input.trim().to_uppercase();

        match input.as_str() {
            "EXIT" => Some(UserAction::Exit),
            "NEXT" => Some(UserAction::NewGame),
            // The game validates length and letters; empty input restarts a
            // finished round ("press enter to play again")
            _ => Some(UserAction::Guess(input)),
        }
    }

    fn display_wrong_length(&mut self, expected: usize, lives: u32) {
        println!("The word has {expected} letters. You still have {lives} lives remaining.");
        println!("Try again!");
    }

    fn display_repeated_letters(&mut self, lives: u32) {
        println!("No repeating letters! You still have {lives} lives remaining.");
        println!("Guess again!");
    }

    fn display_score(&mut self, _guess: &str, score: BullCowCount, lives: u32) {
        println!("You got {} Bull(s) and {} Cow(s).", score.bulls, score.cows);
        if lives == 1 {
            println!("You have 1 life remaining... Use it wisely!");
        } else {
            println!("You have {lives} lives remaining... Try again!");
        }
    }

    fn display_win(&mut self, _hidden_word: &str) {
        println!("You have won!");
        println!("Press enter to play again, or type 'exit' to quit...");
    }

    fn display_loss(&mut self, _guess: &str, score: BullCowCount, hidden_word: &str) {
        println!("You got {} Bull(s) and {} Cow(s).", score.bulls, score.cows);
        println!("Sorry, you've run out of lives.");
        println!("The word you were looking for was \"{hidden_word}\".");
        println!("Press enter to play again, or type 'exit' to quit...");
    }

    fn display_exit_message(&mut self) {
        println!("Goodbye!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_one(input: &str) -> Option<UserAction> {
        let mut interface = CliInterface::new(Cursor::new(input));
        interface.read_input()
    }

    #[test]
    fn test_read_input_guess_uppercased() {
        assert_eq!(
            read_one("cake\n"),
            Some(UserAction::Guess("CAKE".to_string()))
        );
    }

    #[test]
    fn test_read_input_trims_whitespace() {
        assert_eq!(
            read_one("  MINT  \n"),
            Some(UserAction::Guess("MINT".to_string()))
        );
    }

    #[test]
    fn test_read_input_exit_case_insensitive() {
        assert_eq!(read_one("exit\n"), Some(UserAction::Exit));
        assert_eq!(read_one("EXIT\n"), Some(UserAction::Exit));
    }

    #[test]
    fn test_read_input_next_starts_new_game() {
        assert_eq!(read_one("next\n"), Some(UserAction::NewGame));
    }

    #[test]
    fn test_read_input_empty_line_is_empty_guess() {
        // Restarts a finished round, otherwise fails the length check
        assert_eq!(read_one("\n"), Some(UserAction::Guess(String::new())));
    }

    #[test]
    fn test_read_input_eof_exits() {
        assert_eq!(read_one(""), Some(UserAction::Exit));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli {
            wordbank_path: None,
            min_len: DEFAULT_MIN_WORD_LEN,
            max_len: DEFAULT_MAX_WORD_LEN,
            tui: false,
        };
        assert_eq!(cli.min_len, 4);
        assert_eq!(cli.max_len, 6);
        assert!(!cli.tui);
    }
}
