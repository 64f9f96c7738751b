use std::cell::Cell;
use std::env;

use anyhow::{Context, Result, bail};

use crate::alert::Alert;
use crate::config::{LauncherConfig, load_and_validate_config};
use crate::model::{Effect, FileEntry, OpenSummary, Phase, WindowEvent};
use crate::opener::{UrlHandler, open_entry};
use crate::platform::current::alert::NativeAlert;
use crate::platform::current::shell::ShellHandler;
use crate::platform::current::window::run_launcher;
use crate::scan::scan_directory;

pub const EXIT_OK: i32 = 0;
pub const EXIT_FATAL: i32 = 1;

/// Everything the window procedure needs, built once before the message loop.
///
/// Entries and buttons are index-aligned: button `n` opens `entries[n]`.
#[derive(Debug)]
pub struct Launcher {
    pub config: LauncherConfig,
    pub entries: Vec<FileEntry>,
    phase: Cell<Phase>,
}

impl Launcher {
    pub fn new(config: LauncherConfig, entries: Vec<FileEntry>) -> Self {
        Self {
            config,
            entries,
            phase: Cell::new(Phase::Uninitialized),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    /// Moves to the next startup phase. Startup phases only ever go forward.
    pub fn advance(&self, next: Phase) {
        let current = self.phase.get();
        if next <= current {
            log::warn!("Ignoring phase change {:?} -> {:?}", current, next);
            return;
        }
        log::debug!("Launcher phase {:?} -> {:?}", current, next);
        self.phase.set(next);
    }

    /// Runs `event` through [`dispatch`] and records the resulting phase.
    ///
    /// The phase is stored before the effects are returned, so a click that
    /// arrives while an alert is pumping messages is already ignored.
    pub fn handle(&self, event: WindowEvent) -> Vec<Effect> {
        let (next, effects) = dispatch(self.phase.get(), event, self.entries.len());
        if next != self.phase.get() {
            log::debug!("{:?} moved launcher to {:?}", event, next);
        }
        self.phase.set(next);
        effects
    }

    pub fn open(
        &self,
        index: usize,
        handler: &dyn UrlHandler,
        alert: &dyn Alert,
    ) -> Option<OpenSummary> {
        let entry = self.entries.get(index)?;
        log::info!("Opening links from {}", entry.file_name(&self.config.scan.extension));
        Some(open_entry(
            entry,
            &self.config.scan.extension,
            handler,
            alert,
        ))
    }
}

/// Pure event handling: current phase plus event in, next phase plus effects out.
///
/// A button activation is only honored while running and for an index that
/// has an entry. It opens that entry and then ends the process.
pub fn dispatch(phase: Phase, event: WindowEvent, entry_count: usize) -> (Phase, Vec<Effect>) {
    match event {
        WindowEvent::Destroy => (Phase::Terminated, vec![Effect::Quit(EXIT_OK)]),
        WindowEvent::Paint => (phase, vec![Effect::FillBackground]),
        WindowEvent::Command(index) if phase == Phase::Running && index < entry_count => (
            Phase::Terminated,
            vec![Effect::OpenEntry(index), Effect::Quit(EXIT_OK)],
        ),
        WindowEvent::Command(index) => {
            log::debug!(
                "Ignoring command for button {} in phase {:?} ({} buttons)",
                index,
                phase,
                entry_count
            );
            (phase, Vec::new())
        }
    }
}

/// Interprets a `GetMessage`-style return: positive means keep pumping, zero
/// means the quit message arrived, negative is a failure of the loop itself.
pub fn pump_status(status: i32) -> Result<bool> {
    match status {
        s if s > 0 => Ok(true),
        0 => Ok(false),
        s => bail!("Message loop failed with status {}", s),
    }
}

/// Program entry: returns the process exit code.
pub fn run() -> i32 {
    let alert = NativeAlert::new();
    match start(&alert) {
        Ok(code) => code,
        Err(err) => {
            log::error!("Fatal startup error: {:#}", err);
            alert.alert(&format!("{:#}", err));
            EXIT_FATAL
        }
    }
}

fn start(alert: &NativeAlert) -> Result<i32> {
    let directory = env::current_dir().context("Could not determine the working directory")?;
    let config = load_and_validate_config(&directory).context("Could not load urlo.json")?;

    let entries = scan_directory(&directory, &config.scan, alert)?;
    log::info!(
        "Found {} link file(s) in {}",
        entries.len(),
        directory.display()
    );

    let launcher = Launcher::new(config, entries);
    run_launcher(&launcher, &ShellHandler, alert)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingAlert, RecordingHandler};
    use std::fs;

    fn running_launcher(labels: &[&str]) -> Launcher {
        let entries = labels.iter().map(|l| FileEntry::new(*l, ".")).collect();
        let launcher = Launcher::new(LauncherConfig::default(), entries);
        launcher.advance(Phase::WindowCreated);
        launcher.advance(Phase::ButtonsPlaced);
        launcher.advance(Phase::Running);
        launcher
    }

    #[test]
    fn destroy_quits_normally() {
        let (phase, effects) = dispatch(Phase::Running, WindowEvent::Destroy, 3);
        assert_eq!(phase, Phase::Terminated);
        assert_eq!(effects, vec![Effect::Quit(0)]);
    }

    #[test]
    fn paint_fills_background_without_state_change() {
        let (phase, effects) = dispatch(Phase::Running, WindowEvent::Paint, 3);
        assert_eq!(phase, Phase::Running);
        assert_eq!(effects, vec![Effect::FillBackground]);
    }

    #[test]
    fn click_opens_then_quits() {
        let (phase, effects) = dispatch(Phase::Running, WindowEvent::Command(1), 3);
        assert_eq!(phase, Phase::Terminated);
        assert_eq!(effects, vec![Effect::OpenEntry(1), Effect::Quit(0)]);
    }

    #[test]
    fn unknown_or_late_clicks_are_ignored() {
        let (phase, effects) = dispatch(Phase::Running, WindowEvent::Command(3), 3);
        assert_eq!(phase, Phase::Running);
        assert!(effects.is_empty());

        let (phase, effects) = dispatch(Phase::Terminated, WindowEvent::Command(0), 3);
        assert_eq!(phase, Phase::Terminated);
        assert!(effects.is_empty());

        let (_, effects) = dispatch(Phase::ButtonsPlaced, WindowEvent::Command(0), 3);
        assert!(effects.is_empty());
    }

    #[test]
    fn message_loop_status_mapping() {
        assert!(pump_status(1).unwrap());
        assert!(!pump_status(0).unwrap());
        let err = pump_status(-1).unwrap_err();
        assert_eq!(err.to_string(), "Message loop failed with status -1");
    }

    #[test]
    fn startup_phases_only_move_forward() {
        let launcher = Launcher::new(LauncherConfig::default(), Vec::new());
        assert_eq!(launcher.phase(), Phase::Uninitialized);
        launcher.advance(Phase::WindowCreated);
        launcher.advance(Phase::Uninitialized);
        assert_eq!(launcher.phase(), Phase::WindowCreated);
    }

    #[test]
    fn second_click_after_first_is_ignored() {
        let launcher = running_launcher(&["A", "B"]);
        assert_eq!(
            launcher.handle(WindowEvent::Command(0)),
            vec![Effect::OpenEntry(0), Effect::Quit(0)]
        );
        assert_eq!(launcher.phase(), Phase::Terminated);
        assert!(launcher.handle(WindowEvent::Command(1)).is_empty());
    }

    #[test]
    fn open_uses_the_clicked_entry() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("A.txt"), "https://a.example\n").unwrap();
        fs::write(dir.path().join("B.txt"), "https://b.example\n").unwrap();
        let entries = vec![FileEntry::new("A", dir.path()), FileEntry::new("B", dir.path())];
        let launcher = Launcher::new(LauncherConfig::default(), entries);

        let handler = RecordingHandler::default();
        let alert = RecordingAlert::default();
        let summary = launcher.open(1, &handler, &alert).unwrap();

        assert_eq!(handler.requests(), vec!["https://b.example"]);
        assert_eq!(summary.opened, 1);
        assert!(launcher.open(2, &handler, &alert).is_none());
    }
}
