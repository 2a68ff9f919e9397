//! Board-agnostic core logic for the Thermograph firmware
//!
//! This crate contains all pipeline logic that does not depend on
//! specific hardware implementations:
//!
//! - Sliding history buffers (filter window and graph columns)
//! - Windowed moving-average filter
//! - Graph column encoding and full-frame rendering
//! - Serial command parsing for the averaging window
//! - Deterministic random-walk reading source
//! - Display surface trait

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod filter;
pub mod graph;
pub mod history;
pub mod rng;
pub mod sensor;
pub mod traits;
