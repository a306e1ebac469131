//! Step definitions for client type resolution scenarios.

pub mod world;

mod given;
mod when;
