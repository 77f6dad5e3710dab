// src/lib.rs
// #![allow(dead_code)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod data;
pub mod file;
pub mod progress;
pub mod runner;
pub mod table;

pub use data::{ EnrichedRecord, MovieRecord };
pub use error::{ Error, FetchError };
