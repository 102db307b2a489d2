//! Dataset access

pub mod client;

pub use client::*;
