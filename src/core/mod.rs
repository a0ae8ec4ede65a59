// src/core/mod.rs
pub mod label;
pub mod value;
