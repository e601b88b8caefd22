//! roomfinder-cli
//! ==============
//!
//! Command-line interface for the `roomfinder-core` room index.
//!
//! The binary (`roomfinder`) is the deliverable; this library target only
//! exists so the crate has a rendered documentation page.
//!
//! ```text
//! roomfinder stats
//! roomfinder find pa5
//! roomfinder suggest pa1 --limit 3
//! roomfinder locate "PA 05"
//! roomfinder --input rooms.json build --out rooms.bin
//! ```
//!
//! For programmatic access use the `roomfinder-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
