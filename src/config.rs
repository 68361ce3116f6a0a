use std::path::PathBuf;

use crate::encoding::Encoding;
use crate::error::MaskError;
use crate::mask::ClassMode;

/// Default wordlist location on Kali.
pub const DEFAULT_WORDLIST: &str = "/usr/share/wordlists/rockyou.txt";
/// Number of masks reported when no `-n` is given.
pub const DEFAULT_TOP: i64 = 3;
/// Sentinel accepted by `-n` and `-l` meaning "no limit".
pub const NO_LIMIT: i64 = -1;

/// How many ranked masks to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopN {
    All,
    Count(usize),
}

impl TopN {
    /// Interpret a `-n` value. `-1` selects every mask; other negatives and
    /// zero are rejected.
    pub fn from_arg(value: i64) -> Result<Self, MaskError> {
        match value {
            NO_LIMIT => Ok(TopN::All),
            v if v > 0 => usize::try_from(v)
                .map(TopN::Count)
                .map_err(|_| MaskError::InvalidArgument(format!("number {v} is too large"))),
            v => Err(MaskError::InvalidArgument(format!(
                "number must be positive or -1 for all masks, got {v}"
            ))),
        }
    }

    pub fn limit(self) -> Option<usize> {
        match self {
            TopN::All => None,
            TopN::Count(n) => Some(n),
        }
    }
}

/// Minimum-length filter applied before a line is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthFilter {
    #[default]
    Any,
    AtLeast(usize),
}

impl LengthFilter {
    /// Interpret a `-l` value. `-1` disables filtering.
    pub fn from_arg(value: i64) -> Result<Self, MaskError> {
        match value {
            NO_LIMIT => Ok(LengthFilter::Any),
            v if v >= 0 => usize::try_from(v)
                .map(LengthFilter::AtLeast)
                .map_err(|_| MaskError::InvalidArgument(format!("length {v} is too large"))),
            v => Err(MaskError::InvalidArgument(format!(
                "length must be non-negative or -1 for no filter, got {v}"
            ))),
        }
    }

    pub fn accepts(self, len: usize) -> bool {
        match self {
            LengthFilter::Any => true,
            LengthFilter::AtLeast(min) => len >= min,
        }
    }
}

/// What the length filter measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LengthBasis {
    /// Decoded line including its terminator, which counts as one char.
    #[default]
    Raw,
    /// The word after whitespace stripping.
    Word,
}

/// Parameters of a single ingestion run.
#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    pub encoding: Encoding,
    pub min_length: LengthFilter,
    pub length_basis: LengthBasis,
    pub class_mode: ClassMode,
    /// Update the progress spinner every this many lines; 0 disables it.
    pub progress_interval: u64,
}

/// Runtime configuration for the `passmask` binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Wordlist path; `-` reads standard input.
    pub wordlist: PathBuf,
    pub top: TopN,
    pub count: CountOptions,
    /// Print an ingestion summary on stderr.
    pub stats: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wordlist: PathBuf::from(DEFAULT_WORDLIST),
            top: TopN::Count(DEFAULT_TOP as usize),
            count: CountOptions::default(),
            stats: false,
        }
    }
}

impl Config {
    pub fn reads_stdin(&self) -> bool {
        self.wordlist.as_os_str() == "-"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_values() {
        assert_eq!(TopN::from_arg(-1).unwrap(), TopN::All);
        assert_eq!(TopN::from_arg(5).unwrap(), TopN::Count(5));
        assert_eq!(LengthFilter::from_arg(-1).unwrap(), LengthFilter::Any);
        assert_eq!(LengthFilter::from_arg(0).unwrap(), LengthFilter::AtLeast(0));
    }

    #[test]
    fn rejects_nonsense_numbers() {
        assert!(matches!(TopN::from_arg(0), Err(MaskError::InvalidArgument(_))));
        assert!(matches!(TopN::from_arg(-2), Err(MaskError::InvalidArgument(_))));
        assert!(matches!(LengthFilter::from_arg(-7), Err(MaskError::InvalidArgument(_))));
    }

    #[test]
    fn length_filter_bounds() {
        assert!(LengthFilter::Any.accepts(0));
        assert!(LengthFilter::AtLeast(3).accepts(3));
        assert!(!LengthFilter::AtLeast(3).accepts(2));
    }

    #[test]
    fn defaults_match_cli() {
        let cfg = Config::default();
        assert_eq!(cfg.wordlist, PathBuf::from(DEFAULT_WORDLIST));
        assert_eq!(cfg.top, TopN::Count(3));
        assert_eq!(cfg.count.min_length, LengthFilter::Any);
        assert!(!cfg.reads_stdin());
    }
}
