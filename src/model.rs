use std::path::PathBuf;

/// A marker-extension file found in the launcher directory. One button each.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileEntry {
    pub label: String,
    pub directory: PathBuf,
}

impl FileEntry {
    pub fn new(label: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            directory: directory.into(),
        }
    }

    /// Name of the backing file, rebuilt from the label.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.label, extension)
    }

    pub fn backing_file(&self, extension: &str) -> PathBuf {
        self.directory.join(self.file_name(extension))
    }
}

/// Window messages the launcher reacts to, already decoded by the platform layer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WindowEvent {
    Destroy,
    Paint,
    /// Activation of the button at this position in the button list.
    Command(usize),
}

/// Side effects requested by the dispatcher. The platform layer performs them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Effect {
    FillBackground,
    OpenEntry(usize),
    Quit(i32),
}

/// Launcher lifecycle, in order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub enum Phase {
    #[default]
    Uninitialized,
    WindowCreated,
    ButtonsPlaced,
    Running,
    Terminated,
}

/// Outcome of one open sequence over a file.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct OpenSummary {
    pub lines_read: usize,
    pub opened: usize,
    pub failed: usize,
}

impl OpenSummary {
    pub fn is_empty_file(&self) -> bool {
        self.lines_read == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backing_file_appends_extension_to_label() {
        let entry = FileEntry::new("Example", "/tmp/links");
        assert_eq!(entry.file_name("txt"), "Example.txt");
        assert_eq!(
            entry.backing_file("txt"),
            PathBuf::from("/tmp/links").join("Example.txt")
        );
    }

    #[test]
    fn dotted_labels_keep_inner_dots() {
        let entry = FileEntry::new("work.daily", ".");
        assert_eq!(entry.file_name("txt"), "work.daily.txt");
    }
}
