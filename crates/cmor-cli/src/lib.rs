//! Library components of the `cmor-dims` command-line tool.

pub mod config;
pub mod dataset;
pub mod logging;
