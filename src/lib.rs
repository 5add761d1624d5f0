//! Poly1305 reference model (RFC 8439 §2.5).
//!
//! This crate is a software model of the Poly1305 one-time message
//! authentication code. It exists to produce byte-exact test vectors and
//! intermediate-state traces for validating a hardware implementation of
//! the same primitive, so byte/limb exactness and the visibility of
//! internal state transitions are load-bearing properties, not incidental.
//!
//! # Module overview
//!
//! - `poly1305`
//!   The entire cryptographic core: key scheduling (clamping `r`, capturing
//!   `s`), streaming block absorption, the polynomial evaluation
//!   `h ← (h + c) · r (mod 2^130 - 5)`, final carry propagation with
//!   conditional subtraction of the modulus, and addition of the one-time
//!   pad. State is kept in five 32-bit limbs throughout, mirroring the
//!   32-bit datapaths of the hardware this model validates.
//!
//! - `diagnostics` (feature `diagnostics`)
//!   A hex/state dump of a [`poly1305::Context`], used while exercising the
//!   hardware test harness. It carries no cryptographic logic and is not
//!   part of the crate's stable contract.
//!
//! # Design goals
//!
//! - No heap allocations, anywhere.
//! - A 32-bit limb representation, not a wider bigint type, because the
//!   model shadows 32-bit hardware datapaths.
//! - Totality: every well-typed input produces a defined output. There are
//!   no recoverable error conditions in the core.

pub mod poly1305;

#[cfg(any(test, feature = "diagnostics"))]
pub mod diagnostics;

pub use poly1305::{Context, poly1305, poly1305_final, poly1305_init, poly1305_update};
