use crate::debug_log;
use crate::score::{BullCowCount, is_isogram, score_guess};
use crate::wordbank::pick_hidden_word;

/// State of one round: the hidden word, lives remaining, and whether the
/// round has ended. Mutated only through `process_guess`.
pub struct Game {
    hidden_word: String,
    lives: u32,
    game_over: bool,
}

/// Result of handing one guess to the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Guess matched the hidden word. Round over.
    Win,
    /// Guess had the wrong number of letters. No life lost.
    WrongLength { expected: usize },
    /// Guess contained a repeated letter. No life lost.
    RepeatedLetters,
    /// Valid guess that missed. One life spent, bulls and cows reported.
    Scored { score: BullCowCount, lives: u32 },
    /// The last life was spent. The guess is still scored, then the round
    /// ends and the hidden word is revealed.
    Defeat {
        score: BullCowCount,
        hidden_word: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    NewGame,
    Exit,
}

impl Game {
    /// Starts a round with a known hidden word. Lives equal the word's length.
    pub fn new(hidden_word: String) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let lives = hidden_word.len() as u32;
        debug_log!("New round: hidden word is '{}', {} lives", hidden_word, lives);
        Self {
            hidden_word,
            lives,
            game_over: false,
        }
    }

    /// Starts a round with a randomly chosen hidden word, or `None` when the
    /// wordbank is empty.
    pub fn random(wordbank: &[String]) -> Option<Self> {
        pick_hidden_word(wordbank).map(|word| Self::new(word.clone()))
    }

    pub fn hidden_word(&self) -> &str {
        &self.hidden_word
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn word_len(&self) -> usize {
        self.hidden_word.len()
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// The single input handler. A correct guess wins even before the length
    /// check runs; malformed guesses never cost a life.
    pub fn process_guess(&mut self, guess: &str) -> GuessOutcome {
        if guess == self.hidden_word {
            self.game_over = true;
            return GuessOutcome::Win;
        }

        if guess.len() != self.hidden_word.len() {
            return GuessOutcome::WrongLength {
                expected: self.hidden_word.len(),
            };
        }

        if !is_isogram(guess) {
            return GuessOutcome::RepeatedLetters;
        }

        self.lives -= 1;
        let score = score_guess(guess, &self.hidden_word);
        if self.lives == 0 {
            self.game_over = true;
            return GuessOutcome::Defeat {
                score,
                hidden_word: self.hidden_word.clone(),
            };
        }

        GuessOutcome::Scored {
            score,
            lives: self.lives,
        }
    }
}

/// Seam between the round loop and a frontend (line-based CLI or TUI).
pub trait GameInterface {
    fn display_welcome(&mut self, word_len: usize, lives: u32);
    /// `None` means no action is ready yet (an event poll timed out); the
    /// round loop simply asks again.
    fn read_input(&mut self) -> Option<UserAction>;
    fn display_wrong_length(&mut self, expected: usize, lives: u32);
    fn display_repeated_letters(&mut self, lives: u32);
    fn display_score(&mut self, guess: &str, score: BullCowCount, lives: u32);
    fn display_win(&mut self, hidden_word: &str);
    fn display_loss(&mut self, guess: &str, score: BullCowCount, hidden_word: &str);
    fn display_exit_message(&mut self);
}

/// Drives rounds until the player exits. Once a round ends, the next guess
/// input starts a fresh round with a new word.
pub fn game_loop<I: GameInterface>(wordbank: &[String], interface: &mut I) {
    let Some(mut game) = Game::random(wordbank) else {
        return;
    };
    interface.display_welcome(game.word_len(), game.lives());

    loop {
        let Some(action) = interface.read_input() else {
            continue;
        };

        let guess = match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewGame => {
                // Unwrap is safe: the bank was non-empty above
                game = Game::random(wordbank).unwrap();
                interface.display_welcome(game.word_len(), game.lives());
                continue;
            }
            UserAction::Guess(g) => g,
        };

        if game.is_over() {
            game = Game::random(wordbank).unwrap();
            interface.display_welcome(game.word_len(), game.lives());
            continue;
        }

        match game.process_guess(&guess) {
            GuessOutcome::Win => interface.display_win(game.hidden_word()),
            GuessOutcome::WrongLength { expected } => {
                interface.display_wrong_length(expected, game.lives());
            }
            GuessOutcome::RepeatedLetters => interface.display_repeated_letters(game.lives()),
            GuessOutcome::Scored { score, lives } => {
                interface.display_score(&guess, score, lives);
            }
            GuessOutcome::Defeat { score, hidden_word } => {
                interface.display_loss(&guess, score, &hidden_word);
            }
        }
    }
}
