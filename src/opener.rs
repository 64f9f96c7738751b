use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use crate::alert::{Alert, empty_file_message, open_failure_message, undecodable_line_message};
use crate::model::{FileEntry, OpenSummary};

/// Shell status values at or below this are error codes, not instance handles.
pub const SHELL_SUCCESS_THRESHOLD: isize = 32;

#[derive(Debug)]
pub enum OpenError {
    /// The shell returned an error status (no association, missing file, ...).
    Rejected(isize),
    Launch(io::Error),
}

impl fmt::Display for OpenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenError::Rejected(code) => write!(f, "shell returned status {}", code),
            OpenError::Launch(err) => write!(f, "failed to launch handler: {}", err),
        }
    }
}

impl std::error::Error for OpenError {}

impl From<io::Error> for OpenError {
    fn from(err: io::Error) -> Self {
        OpenError::Launch(err)
    }
}

/// The OS "open this URL/document with its default handler" facility.
pub trait UrlHandler {
    fn open(&self, target: &str) -> Result<(), OpenError>;
}

/// Maps a raw shell status to success or [`OpenError::Rejected`].
pub fn check_shell_status(status: isize) -> Result<(), OpenError> {
    if status <= SHELL_SUCCESS_THRESHOLD {
        Err(OpenError::Rejected(status))
    } else {
        Ok(())
    }
}

/// Sends every line of the entry's backing file to `handler`, in file order.
///
/// Lines go out verbatim; blank lines are counted but not sent. A failing
/// line is reported with its 1-based line number and processing continues.
/// A file with no lines at all is reported as empty.
pub fn open_entry(
    entry: &FileEntry,
    extension: &str,
    handler: &dyn UrlHandler,
    alert: &dyn Alert,
) -> OpenSummary {
    let path = entry.backing_file(extension);
    let mut summary = OpenSummary::default();

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(err) => {
            log::warn!("Could not open {:?}: {}", path, err);
            alert.alert(&format!("Could not read {}: {}", entry.file_name(extension), err));
            return summary;
        }
    };

    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    loop {
        let line = match read_raw_line(&mut reader, &mut buf) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => break,
            Err(err) => {
                log::warn!(
                    "Stopped reading {:?} after line {}: {}",
                    path,
                    summary.lines_read,
                    err
                );
                alert.alert(&format!(
                    "Could not read {} after line {}: {}",
                    entry.file_name(extension),
                    summary.lines_read,
                    err
                ));
                return summary;
            }
        };
        summary.lines_read += 1;

        let line = match std::str::from_utf8(line) {
            Ok(line) => line,
            Err(err) => {
                summary.failed += 1;
                log::warn!(
                    "Line {} of {:?} is not valid UTF-8: {}",
                    summary.lines_read,
                    path,
                    err
                );
                alert.alert(&undecodable_line_message(
                    &String::from_utf8_lossy(line),
                    &entry.label,
                    summary.lines_read,
                ));
                continue;
            }
        };

        if line.is_empty() {
            continue;
        }

        log::debug!("Opening {:?} ({}:{})", line, entry.label, summary.lines_read);
        match handler.open(line) {
            Ok(()) => summary.opened += 1,
            Err(err) => {
                summary.failed += 1;
                log::warn!(
                    "Could not open {:?} from {} line {}: {}",
                    line,
                    entry.label,
                    summary.lines_read,
                    err
                );
                alert.alert(&open_failure_message(
                    line,
                    &entry.label,
                    summary.lines_read,
                ));
            }
        }
    }

    if summary.is_empty_file() {
        alert.alert(&empty_file_message(&entry.label));
    }

    log::info!(
        "Processed {}: {} opened, {} failed",
        entry.label,
        summary.opened,
        summary.failed
    );
    summary
}

/// Reads the next line into `buf` as raw bytes, without its `\n` or `\r\n`.
/// Returns `None` at end of file.
fn read_raw_line<'a, R: BufRead>(
    reader: &mut R,
    buf: &'a mut Vec<u8>,
) -> io::Result<Option<&'a [u8]>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    let mut line = &buf[..];
    if let Some(rest) = line.strip_suffix(b"\n") {
        line = rest.strip_suffix(b"\r").unwrap_or(rest);
    }
    Ok(Some(line))
}
