//! Modal error alerts using MessageBoxW

use std::cell::Cell;

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{MB_OK, MessageBoxW};
use windows::core::HSTRING;

use crate::alert::{ALERT_CAPTION, Alert};

/// Message box owned by the launcher window once it exists, unowned before.
#[derive(Debug, Default)]
pub struct NativeAlert {
    owner: Cell<HWND>,
}

impl NativeAlert {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_owner(&self, owner: HWND) {
        self.owner.set(owner);
    }
}

impl Alert for NativeAlert {
    fn alert(&self, message: &str) {
        log::warn!("Alert: {}", message.replace('\n', " "));
        // SAFETY: the owner is either null or the live launcher window.
        unsafe {
            MessageBoxW(
                self.owner.get(),
                &HSTRING::from(message),
                &HSTRING::from(ALERT_CAPTION),
                MB_OK,
            );
        }
    }
}
