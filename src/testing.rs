//! Recording fakes for the alert and URL-handler seams.

use std::cell::RefCell;
use std::collections::HashSet;

use crate::alert::Alert;
use crate::opener::{OpenError, UrlHandler};

#[derive(Default)]
pub struct RecordingAlert {
    pub messages: RefCell<Vec<String>>,
}

impl RecordingAlert {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Alert for RecordingAlert {
    fn alert(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Accepts every target except the ones listed as unhandled.
#[derive(Default)]
pub struct RecordingHandler {
    pub requests: RefCell<Vec<String>>,
    pub unhandled: HashSet<String>,
}

impl RecordingHandler {
    pub fn rejecting(targets: &[&str]) -> Self {
        Self {
            requests: RefCell::default(),
            unhandled: targets.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl UrlHandler for RecordingHandler {
    fn open(&self, target: &str) -> Result<(), OpenError> {
        self.requests.borrow_mut().push(target.to_string());
        if self.unhandled.contains(target) {
            Err(OpenError::Rejected(31))
        } else {
            Ok(())
        }
    }
}
