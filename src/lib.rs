//! Password mask frequency analysis.
//!
//! Each wordlist entry is reduced to its character-class mask (`?l`, `?u`,
//! `?d`, `?s`), masks are counted in one streaming pass, and the most common
//! ones are ranked with a bucket sort over their counts.

pub mod config;
pub mod counter;
pub mod encoding;
pub mod error;
pub mod io_utils;
pub mod mask;
pub mod progress;
pub mod rank;
pub mod report;
pub mod wordlist;

pub use config::{Config, CountOptions, LengthBasis, LengthFilter, TopN};
pub use counter::{count, count_path, count_with_progress, MaskCounter, MaskCounts};
pub use encoding::Encoding;
pub use error::MaskError;
pub use mask::{classify, CharClass, ClassMode, Mask};
pub use rank::{rank, FrequencyBuckets, RankedMask};
pub use report::{write_report, OutputFormat};
