//! Remap one path from the command line.
//!
//! ```text
//! cargo run --example remap -- "M0 0 L10 0 L10 10 Z" "0 0 10 10" "100 200 50 50"
//! ```
//!
//! The frames are given in viewBox form. With a fourth argument `board=WxH`
//! the shape goes through [`Board::place`] instead, passing through
//! unchanged when its frame already matches the board.

use std::env;
use std::error::Error;
use std::process;

use boardpath::{Board, Frame, Remapper};

fn usage() -> ! {
    eprintln!("usage: remap <path data> <source viewBox> <dest frame> [board=WxH]");
    process::exit(2);
}

fn parse_board(arg: &str) -> Option<Board> {
    let (w, h) = arg.strip_prefix("board=")?.split_once('x')?;
    Some(Board::new(w.parse().ok()?, h.parse().ok()?))
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 3 {
        usage();
    }
    let source: Frame = args[1].parse()?;
    let dest: Frame = args[2].parse()?;
    let out = match args.get(3) {
        Some(arg) => {
            let Some(board) = parse_board(arg) else {
                usage();
            };
            board.place(&args[0], Some(source), Some(dest))?.into_owned()
        }
        None => {
            let remapper = Remapper::new(source, dest)?;
            println!(
                "# scale {}, translation {}",
                remapper.transform().scale(),
                remapper.transform().translation()
            );
            remapper.remap(&args[0])?
        }
    };
    println!("{out}");
    Ok(())
}
