//! Workspace facade: re-exports `roomfinder-core` so the demos can use
//! `roomfinder_rs::prelude::*`.

pub use roomfinder_core::*;
