//! Skyglance Library
//!
//! Weather data clients, forecast normalization and the terminal UI, exposed
//! for the binary and for integration tests.

pub mod app;
pub mod cli;
pub mod data;
pub mod fetch;
pub mod logging;
pub mod theme;
pub mod ui;
