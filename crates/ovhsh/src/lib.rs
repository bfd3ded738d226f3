//! Command shell built on a mergeable command graph.
//!
//! `graph` is the registration and dispatch engine; feature modules in
//! `modules` register their paths into it and `shell` runs the result.

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod modules;
pub mod shell;
#[cfg(test)]
mod test_utils;
