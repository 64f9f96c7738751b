//! User-facing error reporting.
//!
//! Every error the launcher shows, fatal or not, goes through [`Alert`]. The
//! native implementation blocks in a modal dialog until it is acknowledged.

pub const ALERT_CAPTION: &str = "Error";

pub trait Alert {
    /// Shows `message` and returns once the user dismissed it.
    fn alert(&self, message: &str);
}

pub fn overflow_message(max_entries: usize) -> String {
    format!("Only {} files will be shown", max_entries)
}

pub fn open_failure_message(url: &str, file_name: &str, line_number: usize) -> String {
    format!(
        "Could not open URL:\n{}\nin {} at line {}",
        url, file_name, line_number
    )
}

pub fn undecodable_line_message(text: &str, file_name: &str, line_number: usize) -> String {
    format!(
        "Could not decode URL:\n{}\nin {} at line {}",
        text, file_name, line_number
    )
}

pub fn empty_file_message(file_name: &str) -> String {
    format!("{} is empty", file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        assert_eq!(overflow_message(9), "Only 9 files will be shown");
        assert_eq!(
            open_failure_message("bogus://x", "Work", 3),
            "Could not open URL:\nbogus://x\nin Work at line 3"
        );
        assert_eq!(
            undecodable_line_message("caf\u{fffd}", "Work", 2),
            "Could not decode URL:\ncaf\u{fffd}\nin Work at line 2"
        );
        assert_eq!(empty_file_message("Work"), "Work is empty");
    }
}
