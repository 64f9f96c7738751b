pub mod app;
pub use app::run;

pub mod alert;
pub mod config;
pub mod model;
pub mod opener;
pub mod scan;

// Platform abstraction layer
pub mod platform;

// UI modules (cross-platform)
pub mod ui {
    pub mod layout;
}

#[cfg(test)]
mod testing;
