//! Key scheduling, streaming update, finalisation, and the one-shot
//! convenience wrapper (components C5, C6, C7, C8).
//!
//! These four functions are the crate's entire public contract, and map
//! 1:1 onto the reference model's `crypto_poly1305_init/_update/_final` and
//! `crypto_poly1305`.

use super::codec::{load32_le, store32_le};
use super::context::Context;
use super::wipe::wipe;

/// Initialises `ctx` from a 32-byte one-time key.
///
/// `key[0..16]` becomes the clamped multiplier `r`; `key[16..32]` becomes
/// the pad `s`, stored unclamped. The accumulator is zeroed and the
/// terminator limb is armed (`c[4] = 1`) so that streamed full blocks are
/// interpreted as `2^128 + little_endian(block)`.
pub fn poly1305_init(ctx: &mut Context, key: &[u8; 32]) {
    ctx.h = [0; 5];
    ctx.c[4] = 1;
    ctx.clear_c();

    ctx.r = [
        load32_le(&key[0..4]) & 0x0FFF_FFFF,
        load32_le(&key[4..8]) & 0x0FFF_FFFC,
        load32_le(&key[8..12]) & 0x0FFF_FFFC,
        load32_le(&key[12..16]) & 0x0FFF_FFFC,
    ];

    ctx.s = [
        load32_le(&key[16..20]),
        load32_le(&key[20..24]),
        load32_le(&key[24..28]),
        load32_le(&key[28..32]),
    ];
}

/// Number of bytes needed to bring `c_idx` up to the next 16-byte boundary,
/// or 0 if it is already on one. Precondition: `c_idx < 16`.
fn bytes_to_boundary(c_idx: usize) -> usize {
    (16 - c_idx) % 16
}

/// Absorbs `message` into `ctx`. May be called any number of times; the
/// residue left in the chunk buffer carries over between calls, so
/// `update(a); update(b)` is equivalent to a single `update(a ++ b)`.
pub fn poly1305_update(ctx: &mut Context, message: &[u8]) {
    debug_assert_eq!(
        ctx.c[4], 1,
        "poly1305_update called on an uninitialised or already-finalised context"
    );

    let mut message = message;

    // Phase 1: head alignment — deliver bytes until the chunk is either
    // full (run a block and clear) or the message runs out.
    let head = bytes_to_boundary(ctx.c_idx).min(message.len());
    for &byte in &message[..head] {
        ctx.take_input(byte);
        if ctx.c_idx == 16 {
            ctx.poly_block();
            ctx.clear_c();
        }
    }
    message = &message[head..];

    // Phase 2: bulk middle — whole blocks loaded directly, no byte-at-a-time
    // assembly.
    let mut processed_any = false;
    while message.len() >= 16 {
        ctx.c[0] = load32_le(&message[0..4]);
        ctx.c[1] = load32_le(&message[4..8]);
        ctx.c[2] = load32_le(&message[8..12]);
        ctx.c[3] = load32_le(&message[12..16]);
        ctx.poly_block();
        message = &message[16..];
        processed_any = true;
    }
    if processed_any {
        ctx.clear_c();
    }

    // Phase 3: tail — buffered for the next update or for final.
    for &byte in message {
        ctx.take_input(byte);
    }
}

/// Emits the 16-byte tag into `mac` and wipes `ctx`.
///
/// Must not be called twice on the same context: after this call `ctx` is
/// zeroed and any further use is a misuse condition (see module docs).
pub fn poly1305_final(ctx: &mut Context, mac: &mut [u8; 16]) {
    debug_assert_eq!(
        ctx.c[4], 1,
        "poly1305_final called on an uninitialised or already-finalised context"
    );

    // Pad and absorb the residue, if any. The implicit terminator bit for a
    // partial L-byte block is 2^(8L), so it is placed by the padding byte
    // itself landing at position c_idx, not by the (now-zero) c[4] limb.
    if ctx.c_idx != 0 {
        ctx.c[4] = 0;
        ctx.take_input(1);
        ctx.poly_block();
    }

    // Does h >= 2^130 - 5? Adding 5 and propagating carry through h[4]
    // answers that without a secret-dependent branch: u4 >> 2 is 1 iff the
    // subtraction of the modulus is required.
    let u0 = 5u64 + ctx.h[0] as u64;
    let u1 = (u0 >> 32) + ctx.h[1] as u64;
    let u2 = (u1 >> 32) + ctx.h[2] as u64;
    let u3 = (u2 >> 32) + ctx.h[3] as u64;
    let u4 = (u3 >> 32) + ctx.h[4] as u64;

    // h + s, minus (2^130 - 5) if u4 indicated an overflow — folded into one
    // unconditional pass so there is no secret-dependent branch.
    let carry = (u4 >> 2) * 5;
    let uu0 = carry + ctx.h[0] as u64 + ctx.s[0] as u64;
    let uu1 = (uu0 >> 32) + ctx.h[1] as u64 + ctx.s[1] as u64;
    let uu2 = (uu1 >> 32) + ctx.h[2] as u64 + ctx.s[2] as u64;
    let uu3 = (uu2 >> 32) + ctx.h[3] as u64 + ctx.s[3] as u64;

    store32_le(&mut mac[0..4], uu0 as u32);
    store32_le(&mut mac[4..8], uu1 as u32);
    store32_le(&mut mac[8..12], uu2 as u32);
    store32_le(&mut mac[12..16], uu3 as u32);

    wipe(ctx);
}

/// One-shot tag computation: init, update once, final. `message` may be
/// empty, in which case the tag equals `s` (`key[16..32]`) verbatim.
pub fn poly1305(mac: &mut [u8; 16], message: &[u8], key: &[u8; 32]) {
    let mut ctx = Context::default();
    poly1305_init(&mut ctx, key);
    poly1305_update(&mut ctx, message);
    poly1305_final(&mut ctx, mac);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// P7: after `final`, every byte of the context is zero.
    #[test]
    fn final_wipes_the_context() {
        let key = [0x11u8; 32];
        let mut ctx = Context::default();
        poly1305_init(&mut ctx, &key);
        poly1305_update(&mut ctx, b"some message that is not block aligned");

        let mut mac = [0u8; 16];
        poly1305_final(&mut ctx, &mut mac);

        assert_eq!(ctx.r, [0; 4]);
        assert_eq!(ctx.h, [0; 5]);
        assert_eq!(ctx.c, [0; 5]);
        assert_eq!(ctx.s, [0; 4]);
        assert_eq!(ctx.c_idx, 0);
    }

    /// P3: clamping zeroes exactly the bits RFC 8439 reserves.
    #[test]
    fn init_clamps_r() {
        let key = [0xFFu8; 32];
        let mut ctx = Context::default();
        poly1305_init(&mut ctx, &key);

        assert_eq!(ctx.r[0] & 0xF000_0000, 0);
        for limb in &ctx.r[1..4] {
            assert_eq!(limb & 0xF000_0003, 0);
        }
    }

    /// Scenario 2 / P5: an empty message's tag is exactly `s`.
    #[test]
    fn empty_message_tag_is_s() {
        let key: [u8; 32] = [
            0x85, 0xd6, 0xbe, 0x78, 0x57, 0x55, 0x6d, 0x33, 0x7f, 0x44, 0x52, 0xfe, 0x42, 0xd5,
            0x06, 0xa8, 0x01, 0x03, 0x80, 0x8a, 0xfb, 0x0d, 0xb2, 0xfd, 0x4a, 0xbf, 0xf6, 0xaf,
            0x41, 0x49, 0xf5, 0x1b,
        ];
        let mut mac = [0u8; 16];
        poly1305(&mut mac, b"", &key);
        assert_eq!(mac, key[16..32]);
    }

    /// Scenario 5: drive the accumulator to exactly `2^130 - 5` and confirm
    /// the branchless conditional-subtraction path in `final` fires — the
    /// tag must come out as `s` mod `2^128`, not as `h + s` unreduced.
    ///
    /// `h` is set directly rather than hunting for a colliding
    /// key/message pair: the context can genuinely hold this exact bit
    /// pattern (the block function only partially reduces, see
    /// `block::poly_block`), so this is the state `final` must handle, not
    /// a state that can never occur.
    #[test]
    fn final_subtracts_modulus_at_the_exact_boundary() {
        let mut ctx = Context::default();
        ctx.r = [0; 4];
        ctx.s = [0; 4];
        ctx.c = [0, 0, 0, 0, 1];
        ctx.c_idx = 0;
        // h == 2^130 - 5 == p, stored as the five 32-bit limbs that
        // represent it exactly.
        ctx.h = [0xFFFF_FFFB, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 3];

        let mut mac = [0u8; 16];
        poly1305_final(&mut ctx, &mut mac);

        assert_eq!(mac, [0u8; 16]);
    }
}
