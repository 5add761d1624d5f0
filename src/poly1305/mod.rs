//! Poly1305 one-time message authentication code (RFC 8439 §2.5).
//!
//! This module is the complete cryptographic core of the crate: key
//! scheduling, streaming block absorption, the polynomial evaluation over
//! GF(2^130 - 5), final reduction, and tag emission. Everything here runs
//! synchronously on the caller's thread, performs no I/O, and allocates
//! nothing.
//!
//! The implementation is split by concern:
//!
//! - `codec`   — little-endian limb load/store
//! - `wipe`    — guaranteed secret zeroing
//! - `context` — the [`Context`] data model and the chunk assembler that
//!               buffers input bytes between `update` calls
//! - `block`   — `poly_block`, the `h ← (h + c) · r mod (2^130 - 5)` step
//! - `core`    — init / update / final / one-shot, i.e. the four operations
//!               this module exposes
//!
//! This split mirrors the arithmetic bounds documented component-by-component
//! in the reference model: each file owns the bound it is responsible for
//! preserving.

mod block;
mod codec;
pub mod core;
mod context;
mod wipe;

pub use context::Context;
pub use core::{poly1305, poly1305_final, poly1305_init, poly1305_update};
