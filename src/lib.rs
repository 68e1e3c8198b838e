// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod rules;

pub mod collect;
pub mod csv;
pub mod file;
pub mod merge;
pub mod progress;
pub mod store;

pub mod data;
pub mod insight;

#[cfg(feature = "cli")]
pub mod cli;
pub mod gui;
