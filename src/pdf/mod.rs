//! Single-page PDF rendering and atomic file export.
//!
//! The renderer assumes its input already satisfies every invariant of a
//! finalized [`Invoice`](crate::core::Invoice) — it performs no validation
//! of its own.

mod export;
mod layout;

pub use export::*;
pub use layout::*;
