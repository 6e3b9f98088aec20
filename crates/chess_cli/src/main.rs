//! Two-player chess in the terminal
//!
//! Renders the board, asks the current player for an origin square, shows
//! where that piece may go, then asks for the destination. Rejected moves
//! come back as messages and the prompt repeats; the loop ends on checkmate
//! or when a player types 'quit'.

mod config;
mod display;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use chess_rules::{parse_square, ChessMatch, Position};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::DisplayConfig;
use display::Renderer;

const CONFIG_PATH: &str = "chess_cli.toml";

fn main() -> Result<()> {
    // Logs go to stderr so the board rendering owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = DisplayConfig::load(CONFIG_PATH);
    let renderer = Renderer::new(config);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut m = ChessMatch::new();
    info!("match started");

    while !m.terminated() {
        renderer.clear_screen();
        renderer.render_match(&m);

        let origin = match prompt_square(&mut lines, "Piece to move (e.g. e2, or 'quit'): ")? {
            Some(pos) => pos,
            None => return Ok(()),
        };
        let destinations = match m.legal_destinations_from(origin) {
            Ok(destinations) => destinations,
            Err(e) => {
                debug!("rejected origin {}: {}", origin, e);
                println!("{}", e);
                pause(&mut lines)?;
                continue;
            }
        };

        renderer.clear_screen();
        renderer.render_board(&m, Some(&destinations));
        println!();
        let destination = match prompt_square(&mut lines, "Move to: ")? {
            Some(pos) => pos,
            None => return Ok(()),
        };

        match m.play_turn(origin, destination) {
            Ok(captured) => {
                info!(turn = m.turn(), "played {} -> {}", origin, destination);
                if let Some(id) = captured {
                    debug!("captured a {:?}", m.board().piece(id).kind());
                }
            }
            Err(e) => {
                debug!("rejected {} -> {}: {}", origin, destination, e);
                println!("{}", e);
                pause(&mut lines)?;
            }
        }
    }

    renderer.clear_screen();
    renderer.render_match(&m);
    info!(turn = m.turn(), "checkmate, {} wins", m.current_player());
    println!("CHECKMATE. {} wins.", m.current_player());
    Ok(())
}

/// Asks until a well-formed square arrives. Returns None on 'quit' or when
/// stdin closes.
fn prompt_square(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Result<Option<Position>> {
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(None),
        };
        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        match parse_square(input) {
            Some(pos) => return Ok(Some(pos)),
            None => println!("Squares look like 'e2'."),
        }
    }
}

fn pause(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<()> {
    print!("Press Enter to continue.");
    io::stdout().flush()?;
    lines.next().transpose()?;
    Ok(())
}
