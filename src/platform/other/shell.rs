//! Default-handler dispatch using the `open` crate

use crate::opener::{OpenError, UrlHandler};

#[derive(Debug, Default)]
pub struct ShellHandler;

impl UrlHandler for ShellHandler {
    fn open(&self, target: &str) -> Result<(), OpenError> {
        open::that(target)?;
        Ok(())
    }
}
