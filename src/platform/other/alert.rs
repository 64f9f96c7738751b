//! Modal error alerts using the desktop's native message dialog

use rfd::{MessageButtons, MessageDialog, MessageLevel};

use crate::alert::{ALERT_CAPTION, Alert};

#[derive(Debug, Default)]
pub struct NativeAlert;

impl NativeAlert {
    pub fn new() -> Self {
        Self
    }
}

impl Alert for NativeAlert {
    fn alert(&self, message: &str) {
        log::warn!("Alert: {}", message.replace('\n', " "));
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(ALERT_CAPTION)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
