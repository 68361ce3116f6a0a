use std::fmt;
use std::io;
use std::path::Path;

use crate::error::MaskError;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        BrokenPipe => "The output stream was closed early.",
        _ => "Check that the path names a readable file.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Simple CLI error from string.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert a library error into a CLI error with a hint.
pub fn mask_cli_error(context: &str, err: MaskError) -> CliError {
    match err {
        MaskError::Io { path, source } => io_cli_error(context, &path, source),
        err => CliError {
            msg: format!("Error {}: {}", context, cli_hint(&err)),
            source: Some(Box::new(err)),
        },
    }
}

/// Return an actionable hint for a library error variant.
pub fn cli_hint(err: &MaskError) -> String {
    use MaskError::*;
    match err {
        NotFound { path } => format!(
            "'{}' does not exist. Pass the wordlist location with -f/--file.",
            path.display()
        ),
        Io { path, source } => format!("'{}': {source}", path.display()),
        Decode { .. } => format!("{err}. Try a different encoding, e.g. -e latin-1."),
        UnknownEncoding(label) => format!(
            "unknown encoding '{label}'. Use a label such as utf-8, utf-16, cp1252 or latin-1."
        ),
        InvalidArgument(msg) => format!("{msg}. Check the command line."),
        Report(msg) => format!("{msg}. Failed while writing the report."),
        Stream(io) => format!("{io}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn decode_hint_suggests_latin1() {
        let err = MaskError::Decode {
            line: 4,
            offset: 10,
            encoding: "utf-8",
        };
        let cli = mask_cli_error("reading wordlist", err);
        assert!(cli.msg.contains("line 4"));
        assert!(cli.msg.contains("latin-1"));
        assert!(std::error::Error::source(&cli).is_some());
    }

    #[test]
    fn io_errors_keep_path() {
        let err = MaskError::Io {
            path: PathBuf::from("/tmp/words"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let cli = mask_cli_error("reading wordlist", err);
        assert!(cli.msg.contains("/tmp/words"));
        assert!(cli.msg.contains("Check permissions"));
    }

    #[test]
    fn unknown_encoding_lists_labels() {
        let hint = cli_hint(&MaskError::UnknownEncoding("klingon".into()));
        assert!(hint.contains("unknown encoding 'klingon'"));
        assert!(hint.contains("cp1252"));
    }

    #[test]
    fn not_found_mentions_flag() {
        let err = MaskError::NotFound {
            path: PathBuf::from("missing.txt"),
        };
        assert!(cli_hint(&err).contains("-f/--file"));
    }
}
