use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::HashKeysError;

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
        InvalidData => "The file is not valid text.",
        _ => "Check the path and try again.",
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
pub fn hashkeys_cli_error(context: &str, err: HashKeysError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for an error variant.
pub fn cli_hint(err: &HashKeysError) -> String {
    use HashKeysError::*;
    match err {
        Config(msg) => format!("{msg}. Invalid configuration."),
        Seed(msg) => format!("{msg}. The input file must hold the seed on its first line."),
        Checkpoint(msg) => format!("{msg}. Delete the checkpoint to start over."),
        Csv(e) => format!("{e}"),
        Io(e) => format!("{e}"),
    }
}

/// Extract the seed from puzzle input text: the first non-empty line, trimmed.
pub fn parse_seed(text: &str) -> Result<String, HashKeysError> {
    let seed = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .ok_or_else(|| HashKeysError::Seed("input is empty".into()))?;
    if !seed.is_ascii() {
        return Err(HashKeysError::Seed(format!("seed '{seed}' is not ASCII")));
    }
    Ok(seed.to_string())
}

/// Read and parse the seed stored in `path`.
pub fn read_seed(path: &Path) -> Result<String, CliError> {
    let text = fs::read_to_string(path).map_err(|e| io_cli_error("reading input file", path, e))?;
    parse_seed(&text).map_err(|e| hashkeys_cli_error("invalid input", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_first_non_empty_line() {
        assert_eq!(parse_seed("abc\n").unwrap(), "abc");
        assert_eq!(parse_seed("\n  qzyelonm  \nignored\n").unwrap(), "qzyelonm");
    }

    #[test]
    fn empty_or_non_ascii_input_is_rejected() {
        assert!(matches!(parse_seed(""), Err(HashKeysError::Seed(_))));
        assert!(matches!(parse_seed(" \n\t\n"), Err(HashKeysError::Seed(_))));
        assert!(matches!(parse_seed("sälz"), Err(HashKeysError::Seed(_))));
    }

    #[test]
    fn missing_file_has_suggestion() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_seed(&dir.path().join("missing.txt")).unwrap_err();
        assert!(err.msg.contains("Check that the file exists"));
    }
}
