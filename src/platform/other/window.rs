//! The launcher window is built from Win32 push buttons. Other desktops get
//! a fatal startup error instead of a partial UI.

use anyhow::{Result, bail};

use crate::app::Launcher;
use crate::opener::UrlHandler;
use crate::platform::other::alert::NativeAlert;

pub fn run_launcher(
    launcher: &Launcher,
    _handler: &dyn UrlHandler,
    _alert: &NativeAlert,
) -> Result<i32> {
    log::debug!(
        "{} link file(s) found but no native window is available",
        launcher.entries.len()
    );
    bail!("Could not create parent window: the launcher window requires Windows")
}
