// Simple command-line application to play chess

use gridchess::{board::PrettyStyle, Color, Coord, Game};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

fn main() {
    env_logger::init();

    let mut stdin = io::stdin().lock();
    let mut game = Game::new();

    loop {
        if let Some(outcome) = game.outcome() {
            println!("{}", game.board().pretty(PrettyStyle::Ascii));
            println!("Game finished: {}", outcome);
            println!("Notation:");
            println!("{}", game);
            break;
        }

        println!("{}", game.board().pretty(PrettyStyle::Ascii));
        let side = match game.side() {
            Color::White => "White",
            Color::Black => "Black",
        };
        print!("{} move ({}): ", side, game.move_number());
        io::stdout().flush().unwrap();
        let mut s = String::new();
        if stdin.read_line(&mut s).unwrap() == 0 {
            break;
        }
        let s = s.trim();

        match s {
            "undo" => {
                if game.pop().is_none() {
                    println!("Nothing to undo");
                }
                println!();
                continue;
            }
            "quit" => break,
            _ => {}
        }

        // A bare square lists the moves of the piece standing there
        if let Ok(src) = Coord::from_str(s) {
            let moves: Vec<_> = game.legal_moves(src).iter().map(|m| m.to_string()).collect();
            println!("Moves from {}: {}", src, moves.join(" "));
            println!();
            continue;
        }

        if let Err(e) = game.push_uci(s) {
            println!("Bad move: {}", e);
        }
        println!();
    }
}
