//! glassfall (workspace facade crate).
//!
//! This package keeps a stable `glassfall::{core,input,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use glassfall_core as core;
pub use glassfall_input as input;
pub use glassfall_term as term;
pub use glassfall_types as types;
