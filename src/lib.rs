// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod catalogue;
pub mod cli;
pub mod compare;
pub mod config;
pub mod core;
pub mod specs;

pub mod csv;
pub mod file;
pub mod gui;
pub mod source;
pub mod store;
