use std::io::{self, BufRead, BufWriter, Write};

use clap::Parser;
use passmask::io_utils::simple_cli_error;
use passmask::wordlist::is_space;
use passmask::{ClassMode, Mask};

#[derive(Parser)]
#[command(about = "Print the mask of each word")]
struct Args {
    /// Words to mask; reads stdin lines when empty
    words: Vec<String>,
    /// Classify only ASCII letters and digits
    #[arg(long)]
    ascii: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mode = if args.ascii { ClassMode::Ascii } else { ClassMode::Unicode };
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args.words.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.map_err(|e| simple_cli_error(&format!("Error reading stdin: {e}")))?;
            let word = line.trim_matches(is_space);
            writeln!(out, "{}\t{}", Mask::of(word, mode), word)?;
        }
    } else {
        for word in &args.words {
            writeln!(out, "{}\t{}", Mask::of(word, mode), word)?;
        }
    }
    out.flush()?;
    Ok(())
}
