use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use passmask::config::{DEFAULT_TOP, DEFAULT_WORDLIST, NO_LIMIT};
use passmask::io_utils::{mask_cli_error, CliError};
use passmask::progress::{print_stats, IngestProgress};
use passmask::{
    count_path, count_with_progress, rank, write_report, ClassMode, Config, CountOptions,
    Encoding, LengthBasis, LengthFilter, MaskError, OutputFormat, TopN,
};

const PROGRESS_INTERVAL: u64 = 1 << 16;

#[derive(Parser)]
#[command(name = "passmask", about = "Report the most common password masks in a wordlist")]
struct Args {
    /// Wordlist to analyze; `-` reads stdin
    #[arg(short = 'f', long = "file", default_value = DEFAULT_WORDLIST)]
    wordlist: PathBuf,
    /// How many of the most common masks to print; -1 prints all
    #[arg(short = 'n', long = "number", default_value_t = DEFAULT_TOP, allow_negative_numbers = true)]
    number: i64,
    /// Wordlist encoding; try latin-1 if utf-8 fails to decode
    #[arg(short = 'e', long = "encoding", default_value = "utf-8")]
    encoding: String,
    /// Only analyze lines of at least this length; -1 analyzes everything
    #[arg(short = 'l', long = "length", default_value_t = NO_LIMIT, allow_negative_numbers = true)]
    length: i64,
    /// Measure the length filter on the raw line or the stripped word
    #[arg(long, value_enum, default_value_t = LengthBasis::Raw)]
    length_basis: LengthBasis,
    /// Classify only ASCII letters and digits; everything else is a symbol
    #[arg(long)]
    ascii: bool,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Show a progress spinner on stderr
    #[arg(long)]
    progress: bool,
    /// Print an ingestion summary on stderr
    #[arg(long)]
    stats: bool,
}

impl Args {
    fn into_config(self) -> Result<(Config, OutputFormat), CliError> {
        let invalid = |e: MaskError| mask_cli_error("parsing arguments", e);
        let count = CountOptions {
            encoding: self.encoding.parse::<Encoding>().map_err(invalid)?,
            min_length: LengthFilter::from_arg(self.length).map_err(invalid)?,
            length_basis: self.length_basis,
            class_mode: if self.ascii { ClassMode::Ascii } else { ClassMode::Unicode },
            progress_interval: if self.progress { PROGRESS_INTERVAL } else { 0 },
        };
        let config = Config {
            wordlist: self.wordlist,
            top: TopN::from_arg(self.number).map_err(invalid)?,
            count,
            stats: self.stats,
        };
        Ok((config, self.format))
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (config, format) = Args::parse().into_config()?;

    let progress = IngestProgress::new(config.count.progress_interval);
    let counts = if config.reads_stdin() {
        count_with_progress(io::stdin().lock(), &config.count, &progress)
    } else {
        count_path(&config.wordlist, &config.count, &progress)
    }
    .map_err(|e| mask_cli_error("reading wordlist", e))?;

    if config.stats {
        print_stats(&counts, progress.elapsed());
    }

    let ranked = rank(&counts, config.top);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_report(&mut out, format, &ranked, &counts, config.top)
        .map_err(|e| mask_cli_error("writing report", e))?;
    out.flush()?;
    Ok(())
}
