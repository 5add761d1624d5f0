//! The block function `poly_block` (component C3).
//!
//! Evaluates one step of `h ← (h + c) · r mod (2^130 - 5)` on the chunk
//! currently buffered in the context. This is the arithmetic heart of
//! Poly1305 and the component the reference model's own bound comments
//! concentrate on: every intermediate value below carries the bound the
//! monocypher model documents for it, so a reviewer can check this against
//! that model limb by limb.
//!
//! Preconditions the caller must uphold: `r` has been clamped (see
//! `core::poly1305_init`), `h` was produced by a previous call to this same
//! function (or is all-zero), and `c` holds either a full absorbed block
//! with `c[4] = 1` or the final padded residue with `c[4]` set accordingly.
//! Postcondition: `h[4] <= 4`.

use super::context::Context;

impl Context {
    /// `h ← (h + c) · r mod (2^130 - 5)`.
    pub(super) fn poly_block(&mut self) {
        // s = h + c, without carry propagation.
        // s0..s3 <= 0x1_FFFFFFFE, s4 <= 5.
        let s0 = self.h[0] as u64 + self.c[0] as u64;
        let s1 = self.h[1] as u64 + self.c[1] as u64;
        let s2 = self.h[2] as u64 + self.c[2] as u64;
        let s3 = self.h[3] as u64 + self.c[3] as u64;
        let s4 = self.h[4].wrapping_add(self.c[4]);

        let r0 = self.r[0]; // <= 0x0fffffff
        let r1 = self.r[1]; // <= 0x0ffffffc
        let r2 = self.r[2]; // <= 0x0ffffffc
        let r3 = self.r[3]; // <= 0x0ffffffc

        // rr_i == 5 * (r_i >> 2); r1..r3 lost their two low bits to
        // clamping, so "(r_i >> 2) + r_i" recovers the same value as a
        // multiply by 5 without one.
        let rr0 = (r0 >> 2).wrapping_mul(5); // <= 0x13fffffb
        let rr1 = (r1 >> 2).wrapping_add(r1); // <= 0x13fffffb
        let rr2 = (r2 >> 2).wrapping_add(r2); // <= 0x13fffffb
        let rr3 = (r3 >> 2).wrapping_add(r3); // <= 0x13fffffb

        let r0 = r0 as u64;
        let r1 = r1 as u64;
        let r2 = r2 as u64;
        let r3 = r3 as u64;
        let rr0 = rr0 as u64;
        let rr1 = rr1 as u64;
        let rr2 = rr2 as u64;
        let rr3 = rr3 as u64;
        let s4_64 = s4 as u64;

        // (h + c) * r, schoolbook, without intermediate carry.
        let x0 = s0 * r0 + s1 * rr3 + s2 * rr2 + s3 * rr1 + s4_64 * rr0;
        let x1 = s0 * r1 + s1 * r0 + s2 * rr3 + s3 * rr2 + s4_64 * rr1;
        let x2 = s0 * r2 + s1 * r1 + s2 * r0 + s3 * rr3 + s4_64 * rr2;
        let x3 = s0 * r3 + s1 * r2 + s2 * r1 + s3 * r0 + s4_64 * rr3;
        let x4 = s4.wrapping_mul((r0 as u32) & 3); // recovers the 2 bits `rr0` lost

        // Partial reduction modulo 2^130 - 5.
        let u5 = x4.wrapping_add((x3 >> 32) as u32); // <= 0x7ffffff5
        let u0 = ((u5 >> 2) as u64).wrapping_mul(5) + (x0 & 0xFFFF_FFFF);
        let u1 = (u0 >> 32) + (x1 & 0xFFFF_FFFF) + (x0 >> 32);
        let u2 = (u1 >> 32) + (x2 & 0xFFFF_FFFF) + (x1 >> 32);
        let u3 = (u2 >> 32) + (x3 & 0xFFFF_FFFF) + (x2 >> 32);
        let u4 = (u3 >> 32) + (u5 & 3) as u64;

        self.h[0] = u0 as u32;
        self.h[1] = u1 as u32;
        self.h[2] = u2 as u32;
        self.h[3] = u3 as u32;
        self.h[4] = u4 as u32; // <= 4
    }
}
