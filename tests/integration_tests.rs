// Integration tests for the bull-cow-game application
// These tests verify that all modules work together correctly

use bull_cow_game::cli::CliInterface;
use bull_cow_game::*;
use std::io::Cursor;

// Single-word banks make the randomly chosen hidden word deterministic.
fn bank(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

#[test]
fn test_end_to_end_win() {
    let wordbank = bank(&["CAKE"]);
    // Miss once, then guess the word, then quit
    let input = "LAKE\nCAKE\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    // This should complete without panicking
    game_loop(&wordbank, &mut interface);
}

#[test]
fn test_end_to_end_loss() {
    let wordbank = bank(&["CAKE"]);
    // Four valid misses exhaust the four lives
    let input = "MINT\nGOLD\nMINT\nGOLD\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    game_loop(&wordbank, &mut interface);
}

#[test]
fn test_invalid_guesses_then_win() {
    let wordbank = bank(&["CAKE"]);
    // Too short, repeated letters, then the answer
    let input = "CAK\nPEEP\nCAKE\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    game_loop(&wordbank, &mut interface);
}

#[test]
fn test_enter_restarts_after_win() {
    let wordbank = bank(&["CAKE"]);
    // Win, press enter for a new round, win again, quit
    let input = "CAKE\n\nCAKE\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    game_loop(&wordbank, &mut interface);
}

#[test]
fn test_next_restarts_mid_round() {
    let wordbank = bank(&["CAKE"]);
    let input = "MINT\nnext\nCAKE\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    game_loop(&wordbank, &mut interface);
}

#[test]
fn test_eof_ends_session() {
    let wordbank = bank(&["CAKE"]);
    let mut interface = CliInterface::new(Cursor::new(""));

    game_loop(&wordbank, &mut interface);
}

#[test]
fn test_lowercase_guess_accepted() {
    let wordbank = bank(&["CAKE"]);
    let input = "cake\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    game_loop(&wordbank, &mut interface);
}

#[test]
fn test_empty_wordbank_is_a_noop() {
    let wordbank: Vec<String> = Vec::new();
    let mut interface = CliInterface::new(Cursor::new("CAKE\nexit\n"));

    // Must return immediately without reading input
    game_loop(&wordbank, &mut interface);
}

#[test]
fn test_wordbank_loading_feeds_game() {
    // Only CRANE survives the filter: APPLE repeats a letter, CAT is short
    let wordbank = load_wordbank_from_str("APPLE\ncrane\nCAT\n", 4, 6);
    assert_eq!(wordbank, vec!["CRANE".to_string()]);

    let input = "CRANE\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    game_loop(&wordbank, &mut interface);
}

// Scripted frontend that records every display call, so the outcome
// sequence driven through the GameInterface seam can be asserted exactly.
#[derive(Default)]
struct ScriptedInterface {
    actions: Vec<Option<UserAction>>,
    events: Vec<String>,
}

impl ScriptedInterface {
    fn new(actions: Vec<Option<UserAction>>) -> Self {
        Self {
            actions,
            events: Vec::new(),
        }
    }
}

impl GameInterface for ScriptedInterface {
    fn display_welcome(&mut self, word_len: usize, lives: u32) {
        self.events.push(format!("welcome {word_len} {lives}"));
    }

    fn read_input(&mut self) -> Option<UserAction> {
        if self.actions.is_empty() {
            Some(UserAction::Exit)
        } else {
            self.actions.remove(0)
        }
    }

    fn display_wrong_length(&mut self, expected: usize, lives: u32) {
        self.events.push(format!("wrong_length {expected} {lives}"));
    }

    fn display_repeated_letters(&mut self, lives: u32) {
        self.events.push(format!("repeated {lives}"));
    }

    fn display_score(&mut self, guess: &str, score: BullCowCount, lives: u32) {
        self.events
            .push(format!("score {guess} {}b {}c {lives}", score.bulls, score.cows));
    }

    fn display_win(&mut self, hidden_word: &str) {
        self.events.push(format!("win {hidden_word}"));
    }

    fn display_loss(&mut self, guess: &str, score: BullCowCount, hidden_word: &str) {
        self.events.push(format!(
            "loss {guess} {}b {}c {hidden_word}",
            score.bulls, score.cows
        ));
    }

    fn display_exit_message(&mut self) {
        self.events.push("exit".to_string());
    }
}

fn guess(word: &str) -> Option<UserAction> {
    Some(UserAction::Guess(word.to_string()))
}

#[test]
fn test_win_round_event_sequence() {
    let wordbank = bank(&["CAKE"]);
    let mut interface = ScriptedInterface::new(vec![
        guess("CAK"),
        guess("PEEP"),
        guess("LAKE"),
        guess("CAKE"),
        Some(UserAction::Exit),
    ]);

    game_loop(&wordbank, &mut interface);

    assert_eq!(
        interface.events,
        vec![
            "welcome 4 4",
            "wrong_length 4 4",
            "repeated 4",
            "score LAKE 3b 0c 3",
            "win CAKE",
            "exit",
        ]
    );
}

#[test]
fn test_loss_round_event_sequence() {
    let wordbank = bank(&["CAKE"]);
    let mut interface = ScriptedInterface::new(vec![
        guess("MINT"),
        guess("TALE"),
        guess("GOLD"),
        guess("MINT"),
        Some(UserAction::Exit),
    ]);

    game_loop(&wordbank, &mut interface);

    assert_eq!(
        interface.events,
        vec![
            "welcome 4 4",
            "score MINT 0b 0c 3",
            "score TALE 2b 0c 2",
            "score GOLD 0b 0c 1",
            "loss MINT 0b 0c CAKE",
            "exit",
        ]
    );
}

#[test]
fn test_loss_reports_final_guess_score() {
    let wordbank = bank(&["CAKE"]);
    let mut interface = ScriptedInterface::new(vec![
        guess("MINT"),
        guess("GOLD"),
        guess("MINT"),
        guess("TALE"),
        Some(UserAction::Exit),
    ]);

    game_loop(&wordbank, &mut interface);

    // The last guess keeps its Bull/Cow feedback even though it loses
    assert_eq!(
        interface.events,
        vec![
            "welcome 4 4",
            "score MINT 0b 0c 3",
            "score GOLD 0b 0c 2",
            "score MINT 0b 0c 1",
            "loss TALE 2b 0c CAKE",
            "exit",
        ]
    );
}

#[test]
fn test_idle_polls_are_retried() {
    let wordbank = bank(&["CAKE"]);
    // None models an event poll that timed out with no action ready
    let mut interface = ScriptedInterface::new(vec![
        None,
        None,
        guess("CAKE"),
        Some(UserAction::Exit),
    ]);

    game_loop(&wordbank, &mut interface);

    assert_eq!(interface.events, vec!["welcome 4 4", "win CAKE", "exit"]);
}

#[test]
fn test_guess_after_loss_starts_new_round() {
    let wordbank = bank(&["CAKE"]);
    let mut interface = ScriptedInterface::new(vec![
        guess("MINT"),
        guess("MINT"),
        guess("MINT"),
        guess("MINT"),
        // Round is over; this input only restarts, it is not a guess
        guess(""),
        guess("CAKE"),
        Some(UserAction::Exit),
    ]);

    game_loop(&wordbank, &mut interface);

    assert_eq!(
        interface.events,
        vec![
            "welcome 4 4",
            "score MINT 0b 0c 3",
            "score MINT 0b 0c 2",
            "score MINT 0b 0c 1",
            "loss MINT 0b 0c CAKE",
            "welcome 4 4",
            "win CAKE",
            "exit",
        ]
    );
}

#[test]
fn test_new_game_resets_lives() {
    let wordbank = bank(&["CAKE"]);
    let mut interface = ScriptedInterface::new(vec![
        guess("MINT"),
        guess("MINT"),
        Some(UserAction::NewGame),
        guess("MINT"),
        Some(UserAction::Exit),
    ]);

    game_loop(&wordbank, &mut interface);

    assert_eq!(
        interface.events,
        vec![
            "welcome 4 4",
            "score MINT 0b 0c 3",
            "score MINT 0b 0c 2",
            "welcome 4 4",
            "score MINT 0b 0c 3",
            "exit",
        ]
    );
}

#[test]
fn test_six_letter_round_has_six_lives() {
    let wordbank = bank(&["PLANET"]);
    let mut interface = ScriptedInterface::new(vec![guess("PLANET"), Some(UserAction::Exit)]);

    game_loop(&wordbank, &mut interface);

    assert_eq!(interface.events, vec!["welcome 6 6", "win PLANET", "exit"]);
}
