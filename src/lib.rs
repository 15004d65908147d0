//! Webtris (workspace facade crate).
//!
//! This package keeps the `webtris::{core,persist,types}` public API stable
//! while the implementation lives in dedicated crates under `crates/`.

pub use webtris_core as core;
pub use webtris_persist as persist;
pub use webtris_types as types;
