//! State-dump formatter for the Poly1305 context.
//!
//! This is the Rust equivalent of the reference model's `print_context`/
//! `print_hexdata` — glue used while building and debugging the hardware
//! test harness, not cryptographic logic. It is compiled into test builds
//! unconditionally and into library builds only under the `diagnostics`
//! feature; it is not part of the crate's stable public contract and may
//! change shape without a semver bump.

use core::fmt;

/// A read-only, point-in-time snapshot of a [`crate::poly1305::Context`]'s
/// limbs, suitable for printing as a hex trace while validating a hardware
/// implementation against this model step by step.
///
/// Unlike the context itself, a `ContextTrace` does not implement any
/// zeroizing behaviour: it is a diagnostic copy, not secret state under
/// management, and the caller decides how long to keep it around.
#[derive(Clone, Copy)]
pub struct ContextTrace {
    pub r: [u32; 4],
    pub h: [u32; 5],
    pub c: [u32; 5],
    pub s: [u32; 4],
    pub c_idx: usize,
}

impl fmt::Debug for ContextTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "r:     0x{:08x}_{:08x}_{:08x}_{:08x}",
            self.r[0], self.r[1], self.r[2], self.r[3]
        )?;
        writeln!(
            f,
            "h:     0x{:08x}_{:08x}_{:08x}_{:08x}_{:08x}",
            self.h[0], self.h[1], self.h[2], self.h[3], self.h[4]
        )?;
        writeln!(
            f,
            "c:     0x{:08x}_{:08x}_{:08x}_{:08x}_{:08x}",
            self.c[0], self.c[1], self.c[2], self.c[3], self.c[4]
        )?;
        writeln!(
            f,
            "s:     0x{:08x}_{:08x}_{:08x}_{:08x}",
            self.s[0], self.s[1], self.s[2], self.s[3]
        )?;
        write!(f, "c_idx: 0x{:08x}", self.c_idx)
    }
}

/// Formats an arbitrary byte slice as a hex dump, one byte at a time with no
/// separators beyond a trailing newline — the companion of `print_hexdata`
/// for dumping raw message/tag bytes alongside a `ContextTrace`.
pub fn hexdump(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 2);
    for byte in data {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hexdump_formats_bytes() {
        assert_eq!(hexdump(&[0xDE, 0xAD, 0xBE, 0xEF]), "deadbeef");
        assert_eq!(hexdump(&[]), "");
    }

    #[test]
    fn trace_debug_is_non_empty() {
        let trace = ContextTrace {
            r: [1, 2, 3, 4],
            h: [5, 6, 7, 8, 9],
            c: [10, 11, 12, 13, 14],
            s: [15, 16, 17, 18],
            c_idx: 3,
        };
        let rendered = format!("{trace:?}");
        assert!(rendered.contains("c_idx: 0x00000003"));
    }
}
