mod cli;
mod game;
mod logging;
mod score;
mod tui;
mod wordbank;

use cli::{CliInterface, parse_cli};
use game::game_loop;
use std::io;
use tui::TuiInterface;
use wordbank::{EMBEDDED_WORDBANK, load_wordbank_from_file, load_wordbank_from_str, validate_bounds};

fn main() {
    logging::init();
    let cli = parse_cli();

    if let Err(e) = validate_bounds(cli.min_len, cli.max_len) {
        eprintln!("Invalid word length bounds: {e}");
        return;
    }

    let wordbank = match &cli.wordbank_path {
        Some(path) => match load_wordbank_from_file(path, cli.min_len, cli.max_len) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Failed to load word list from '{path}': {e}");
                return;
            }
        },
        None => load_wordbank_from_str(EMBEDDED_WORDBANK, cli.min_len, cli.max_len),
    };

    if wordbank.is_empty() {
        eprintln!(
            "No playable words: need isograms of {}-{} letters.",
            cli.min_len, cli.max_len
        );
        return;
    }

    if cli.tui {
        match TuiInterface::new() {
            Ok(mut interface) => game_loop(&wordbank, &mut interface),
            Err(e) => eprintln!("Failed to start terminal UI: {e}"),
        }
    } else {
        println!("Loaded {} playable words.", wordbank.len());
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&wordbank, &mut interface);
    }
}
