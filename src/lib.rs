//! Joint trajectory log viewer.
//!
//! Loads the log files of one legged-robot experiment, trims them to a common
//! window and shows desired against measured joint signals, one window per
//! leg and quantity.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod figure;
pub mod layout;
pub mod state;
pub mod ui;
