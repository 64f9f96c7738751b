//! Default-handler dispatch using ShellExecuteW

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Shell::ShellExecuteW;
use windows::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;
use windows::core::{HSTRING, PCWSTR};

use crate::opener::{OpenError, UrlHandler, check_shell_status};

/// Hands targets to the shell's default verb. No process is spawned by us.
#[derive(Debug, Default)]
pub struct ShellHandler;

impl UrlHandler for ShellHandler {
    fn open(&self, target: &str) -> Result<(), OpenError> {
        // SAFETY: all string arguments are null or NUL-terminated HSTRINGs
        // that outlive the call.
        let instance = unsafe {
            ShellExecuteW(
                HWND::default(),
                PCWSTR::null(),
                &HSTRING::from(target),
                PCWSTR::null(),
                PCWSTR::null(),
                SW_SHOWNORMAL,
            )
        };
        check_shell_status(instance.0 as isize)
    }
}
