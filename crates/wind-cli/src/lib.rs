//! Library side of the `wind-check` dataset checker.
//!
//! The binary is a thin shell: it loads dataset locations from [`config`],
//! runs postcodes through the shared dataset cache with [`check`], and prints
//! the text from [`report`].

pub mod check;
pub mod config;
pub mod logging;
pub mod report;
