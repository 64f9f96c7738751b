//! Platform abstraction layer
//!
//! This module provides platform-specific implementations for:
//! - The modal error alert
//! - The shell "open with default handler" request
//! - The launcher window and its message loop

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(not(target_os = "windows"))]
pub mod other;

// Re-export the current platform's modules
#[cfg(target_os = "windows")]
pub use windows as current;

#[cfg(not(target_os = "windows"))]
pub use other as current;
