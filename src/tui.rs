//! Full-screen terminal frontend built on Ratatui.
//!
//! Renders the round as a board of past guesses annotated with their Bull
//! and Cow counts, with lives in the status bar.
//!
//! # State Machine
//! - `EnteringGuess`: letters accumulate in the input row, ENTER submits
//! - `RoundOver`: the round was won or lost; N/ENTER starts a new round

use crate::game::{GameInterface, UserAction};
use crate::score::BullCowCount;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 2;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Debug)]
struct GuessRow {
    word: String,
    score: BullCowCount,
    won: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TuiState {
    EnteringGuess,
    RoundOver,
}

/// Main TUI component.
///
/// Manages terminal rendering, input handling, and round display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    word_len: usize,
    lives: u32,
    guesses: Vec<GuessRow>,
    current_input: String,
    state: TuiState,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: alternate screen, raw mode, cursor hidden");

        Ok(Self {
            terminal,
            word_len: 0,
            lives: 0,
            guesses: Vec::new(),
            current_input: String::new(),
            state: TuiState::EnteringGuess,
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let word_len = self.word_len;
        let guesses = &self.guesses;
        let current_input = &self.current_input;
        let state = self.state;
        let message = &self.message;
        let error_message = &self.error_message;
        let status = &self.status;

        self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3), // Title
                    Constraint::Min(8),    // Board
                    Constraint::Length(6), // Messages
                    Constraint::Length(3), // Status line
                    Constraint::Length(3), // Instructions
                ])
                .split(f.area());

            Self::render_title(f, chunks[0]);
            Self::render_board(f, chunks[1], guesses, current_input, word_len, state);
            Self::render_messages(f, chunks[2], message, error_message);
            Self::render_status(f, chunks[3], status);
            Self::render_instructions(f, chunks[4], state);
        })?;
        Ok(())
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("BULLS & COWS")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(
        f: &mut Frame,
        area: Rect,
        guesses: &[GuessRow],
        current_input: &str,
        word_len: usize,
        state: TuiState,
    ) {
        let block = Block::default().title("Guesses").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let available_rows = (inner.height / ROW_SPACING) as usize;
        let showing_input = state == TuiState::EnteringGuess;
        let rows_needed = guesses.len() + usize::from(showing_input);

        // Prioritize the most recent guesses when the board overflows
        let skip_count = rows_needed.saturating_sub(available_rows);

        let mut display_index = 0;
        for guess in guesses.iter().skip(skip_count) {
            Self::render_guess_row(f, inner, display_index, guess, word_len);
            display_index += 1;
        }

        if showing_input {
            Self::render_current_input(f, inner, display_index, current_input, word_len);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn row_area(area: Rect, row_index: usize) -> Option<u16> {
        let y = area.y + (row_index as u16 * ROW_SPACING);
        if y >= area.y + area.height { None } else { Some(y) }
    }

    fn render_guess_row(f: &mut Frame, area: Rect, row_index: usize, guess: &GuessRow, word_len: usize) {
        let Some(y) = Self::row_area(area, row_index) else {
            return;
        };

        let cell_style = if guess.won {
            Style::default().fg(Color::Black).bg(Color::Green)
        } else {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        };

        let mut spans = vec![Span::raw("  ")];
        for i in 0..word_len {
            let letter = guess.word.chars().nth(i).unwrap_or(' ');
            spans.push(Span::styled(format!(" {letter} "), cell_style));
            spans.push(Span::raw(" "));
        }
        if guess.won {
            spans.push(Span::styled(" Got it!", SUCCESS_STYLE));
        } else {
            spans.push(Span::raw(format!(
                " {} Bull(s), {} Cow(s)",
                guess.score.bulls, guess.score.cows
            )));
        }

        Self::render_line(f, area, y, spans);
    }

    fn render_current_input(
        f: &mut Frame,
        area: Rect,
        row_index: usize,
        current_input: &str,
        word_len: usize,
    ) {
        let Some(y) = Self::row_area(area, row_index) else {
            return;
        };

        let mut spans = vec![Span::raw("  ")];
        for i in 0..word_len {
            let letter = current_input.chars().nth(i).unwrap_or(' ');
            spans.push(Span::styled(
                format!(" {letter} "),
                Style::default().fg(Color::White).bg(Color::Blue),
            ));
            spans.push(Span::raw(" "));
        }

        Self::render_line(f, area, y, spans);
    }

    fn render_line(f: &mut Frame, area: Rect, y: u16, spans: Vec<Span>) {
        let line = Line::from(spans);
        let paragraph = Paragraph::new(line);
        f.render_widget(
            paragraph,
            Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            },
        );
    }

    fn render_messages(f: &mut Frame, area: Rect, message: &str, error_message: &str) {
        let mut lines = Vec::new();
        if !message.is_empty() {
            lines.push(Line::from(vec![Span::styled(message, MESSAGE_STYLE)]));
        }
        if !error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Messages").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::EnteringGuess => "Type your guess | ENTER: Submit | ESC: Quit",
            TuiState::RoundOver => "N or ENTER: New round | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        // Poll with a timeout so the loop can keep redrawing
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let event = event::read()?;
        debug_log!("handle_input() - Event received: {:?}", event);

        // Filter out non-key events (mouse, focus, resize, paste)
        let Event::Key(key) = event else {
            return Ok(None);
        };

        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != event::KeyEventKind::Press {
            return Ok(None);
        }

        // Filter out garbage characters that come from terminal escape
        // sequences (alt-tab): replacement and control characters
        if let KeyCode::Char(c) = key.code {
            if c == '\u{FFFD}'
                || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD && c != '\t' && c != '\n' && c != '\r'
            {
                debug_log!("handle_input() - Ignoring escape-sequence character: {:?}", c);
                return Ok(None);
            }
        }

        match self.state {
            TuiState::EnteringGuess => Ok(self.handle_guess_input(key)),
            TuiState::RoundOver => Ok(Self::handle_round_over_input(key)),
        }
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();

        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() && self.current_input.len() < self.word_len => {
                // Shift is fine for uppercase; Alt/Control combos are not input
                if Self::has_modifier_keys(&key) {
                    debug_log!("handle_guess_input() - Ignoring modified key: {:?}", key.modifiers);
                } else {
                    self.current_input.push(c.to_ascii_uppercase());
                }
            }
            KeyCode::Backspace if !self.current_input.is_empty() => {
                self.current_input.pop();
            }
            KeyCode::Enter => {
                // Submit whatever is typed; the game reports short guesses
                let guess = std::mem::take(&mut self.current_input);
                info_log!("handle_guess_input() - Submitting guess: '{}'", guess);
                return Some(UserAction::Guess(guess));
            }
            KeyCode::Esc => {
                return Some(UserAction::Exit);
            }
            KeyCode::Char(c) if !c.is_ascii_alphabetic() => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
            }
            _ => {
                debug_log!("handle_guess_input() - Ignoring key: {:?}", key.code);
            }
        }
        None
    }

    fn handle_round_over_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('n' | 'N') | KeyCode::Enter => Some(UserAction::NewGame),
            KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(event::KeyModifiers::ALT)
            || key.modifiers.contains(event::KeyModifiers::CONTROL)
    }

    fn end_round(&mut self) {
        self.state = TuiState::RoundOver;
        self.current_input.clear();
    }

    fn lives_status(&self) -> String {
        if self.lives == 1 {
            "1 life remaining... Use it wisely!".to_string()
        } else {
            format!("{} lives remaining", self.lives)
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_welcome(&mut self, word_len: usize, lives: u32) {
        self.word_len = word_len;
        self.lives = lives;
        self.guesses.clear();
        self.current_input.clear();
        self.state = TuiState::EnteringGuess;
        self.message = format!("Guess the {word_len} letter word! You have {lives} lives.");
        self.error_message.clear();
        self.status = self.lives_status();
        self.draw_or_log();
    }

    fn read_input(&mut self) -> Option<UserAction> {
        if self.draw().is_err() {
            info_log!("read_input() - Draw failed, returning Exit");
            return Some(UserAction::Exit);
        }

        match self.handle_input() {
            Ok(Some(action)) => {
                info_log!("read_input() - Action received: {:?}", action);
                Some(action)
            }
            // Poll timed out or the event was filtered; the loop calls again
            Ok(None) => None,
            Err(_e) => {
                info_log!("read_input() - Input error, returning Exit");
                Some(UserAction::Exit)
            }
        }
    }

    fn display_wrong_length(&mut self, expected: usize, lives: u32) {
        self.error_message =
            format!("The word has {expected} letters. You still have {lives} lives.");
        self.draw_or_log();
    }

    fn display_repeated_letters(&mut self, lives: u32) {
        self.error_message = format!("No repeating letters! You still have {lives} lives.");
        self.draw_or_log();
    }

    fn display_score(&mut self, guess: &str, score: BullCowCount, lives: u32) {
        self.lives = lives;
        self.guesses.push(GuessRow {
            word: guess.to_string(),
            score,
            won: false,
        });
        self.message = format!("You got {} Bull(s) and {} Cow(s).", score.bulls, score.cows);
        self.status = self.lives_status();
        self.draw_or_log();
    }

    fn display_win(&mut self, hidden_word: &str) {
        self.guesses.push(GuessRow {
            word: hidden_word.to_string(),
            score: BullCowCount::default(),
            won: true,
        });
        self.end_round();
        self.message = "You have won!".to_string();
        self.status = "Round over - you won".to_string();
        self.draw_or_log();
    }

    fn display_loss(&mut self, guess: &str, score: BullCowCount, hidden_word: &str) {
        // The final guess keeps its score on the board
        self.lives = 0;
        self.guesses.push(GuessRow {
            word: guess.to_string(),
            score,
            won: false,
        });
        self.end_round();
        self.message = format!(
            "You got {} Bull(s) and {} Cow(s). Out of lives! The word was \"{hidden_word}\".",
            score.bulls, score.cows
        );
        self.status = "Round over - out of lives".to_string();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.message = "Goodbye!".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
