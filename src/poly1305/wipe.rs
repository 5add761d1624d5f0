//! Secret wipe (component C2).
//!
//! A naive zeroing loop can be proven dead by an optimiser that sees the
//! memory is never read again, and elided entirely. `zeroize` gives the
//! volatile-write guarantee this needs without a hand-rolled unsafe loop.

use zeroize::Zeroize;

/// Zeroes every byte of `region`. The writes are guaranteed observable and
/// cannot be optimised away, even though `region` is about to be dropped.
#[inline(always)]
pub(super) fn wipe(region: &mut impl Zeroize) {
    region.zeroize();
}
