//! Hash functions usable as the index's injected `Mixer`
//!
//! A `Mixer` is any `Fn(&[u8]) -> u64`. The index itself never hard-codes a
//! choice; [`lookup3`] is offered as a ready-made default because it matches
//! the reference implementation's `JenkinsHash` bit-for-bit, which is useful
//! when porting fingerprints computed elsewhere. [`xxhash`] is provided as a
//! faster alternative with no compatibility requirement to uphold.

use std::hash::Hasher;
use twox_hash::XxHash64;

/// XXHash 64-bit implementation
///
/// XXHash is an extremely fast non-cryptographic hash function designed by
/// Yann Collet. Prefer this over [`lookup3`] unless bit-compatibility with
/// the reference `JenkinsHash` mixer matters.
///
/// # Examples
/// ```
/// use simdex::common::hash::xxhash;
///
/// let hash = xxhash(b"hello world", 0);
/// println!("Hash: {}", hash);
/// ```
pub fn xxhash(data: &[u8], seed: u64) -> u64 {
    let mut hasher = XxHash64::with_seed(seed);
    hasher.write(data);
    hasher.finish()
}

#[inline(always)]
fn rot(x: u32, k: u32) -> u32 {
    x.rotate_left(k)
}

/// Mixes three 32-bit values reversibly (Jenkins' `mix`).
#[inline(always)]
fn mix(a: &mut u32, b: &mut u32, c: &mut u32) {
    *a = a.wrapping_sub(*c);
    *a ^= rot(*c, 4);
    *c = c.wrapping_add(*b);
    *b = b.wrapping_sub(*a);
    *b ^= rot(*a, 6);
    *a = a.wrapping_add(*c);
    *c = c.wrapping_sub(*b);
    *c ^= rot(*b, 8);
    *b = b.wrapping_add(*a);
    *a = a.wrapping_sub(*c);
    *a ^= rot(*c, 16);
    *c = c.wrapping_add(*b);
    *b = b.wrapping_sub(*a);
    *b ^= rot(*a, 19);
    *a = a.wrapping_add(*c);
    *c = c.wrapping_sub(*b);
    *c ^= rot(*b, 4);
    *b = b.wrapping_add(*a);
}

/// Final avalanche mixing of three 32-bit values into `c` (Jenkins' `final`).
#[inline(always)]
fn final_mix(a: &mut u32, b: &mut u32, c: &mut u32) {
    *c ^= *b;
    *c = c.wrapping_sub(rot(*b, 14));
    *a ^= *c;
    *a = a.wrapping_sub(rot(*c, 11));
    *b ^= *a;
    *b = b.wrapping_sub(rot(*a, 25));
    *c ^= *b;
    *c = c.wrapping_sub(rot(*b, 16));
    *a ^= *c;
    *a = a.wrapping_sub(rot(*c, 4));
    *b ^= *a;
    *b = b.wrapping_sub(rot(*a, 14));
    *c ^= *b;
    *c = c.wrapping_sub(rot(*b, 24));
}

/// Jenkins' `hashlittle2`: hashes `k` into two 32-bit values seeded by `pc`/`pb`.
fn hashlittle2(mut k: &[u8], pc: u32, pb: u32) -> (u32, u32) {
    let mut a = 0xdeadbeef_u32.wrapping_add(k.len() as u32).wrapping_add(pc);
    let mut b = a;
    let mut c = a.wrapping_add(pb);

    while k.len() > 12 {
        a = a.wrapping_add(k[0] as u32);
        a = a.wrapping_add((k[1] as u32) << 8);
        a = a.wrapping_add((k[2] as u32) << 16);
        a = a.wrapping_add((k[3] as u32) << 24);
        b = b.wrapping_add(k[4] as u32);
        b = b.wrapping_add((k[5] as u32) << 8);
        b = b.wrapping_add((k[6] as u32) << 16);
        b = b.wrapping_add((k[7] as u32) << 24);
        c = c.wrapping_add(k[8] as u32);
        c = c.wrapping_add((k[9] as u32) << 8);
        c = c.wrapping_add((k[10] as u32) << 16);
        c = c.wrapping_add((k[11] as u32) << 24);
        mix(&mut a, &mut b, &mut c);
        k = &k[12..];
    }

    let remaining = k.len();
    if remaining >= 12 {
        c = c.wrapping_add((k[11] as u32) << 24);
    }
    if remaining >= 11 {
        c = c.wrapping_add((k[10] as u32) << 16);
    }
    if remaining >= 10 {
        c = c.wrapping_add((k[9] as u32) << 8);
    }
    if remaining >= 9 {
        c = c.wrapping_add(k[8] as u32);
    }
    if remaining >= 8 {
        b = b.wrapping_add((k[7] as u32) << 24);
    }
    if remaining >= 7 {
        b = b.wrapping_add((k[6] as u32) << 16);
    }
    if remaining >= 6 {
        b = b.wrapping_add((k[5] as u32) << 8);
    }
    if remaining >= 5 {
        b = b.wrapping_add(k[4] as u32);
    }
    if remaining >= 4 {
        a = a.wrapping_add((k[3] as u32) << 24);
    }
    if remaining >= 3 {
        a = a.wrapping_add((k[2] as u32) << 16);
    }
    if remaining >= 2 {
        a = a.wrapping_add((k[1] as u32) << 8);
    }
    if remaining >= 1 {
        a = a.wrapping_add(k[0] as u32);
        final_mix(&mut a, &mut b, &mut c);
    }

    (c, b)
}

/// Lookup3-style 64-bit mixer, matching the reference `JenkinsHash`.
///
/// `JenkinsHash(s)` in the reference implementation runs Jenkins'
/// `hashlittle2` with both seeds zeroed and packs the two 32-bit outputs as
/// `pc as u64 | (pb as u64) << 32`. This is the crate's default [`Mixer`](crate::fingerprint::Mixer).
///
/// # Examples
/// ```
/// use simdex::common::hash::lookup3;
///
/// assert_eq!(lookup3(b"ab"), 0x6B79A0F2FBB3A8DF);
/// assert_eq!(lookup3(b"ac"), 0x00460C21632E499E);
/// assert_eq!(lookup3(b"bb"), 0xFFF5901B5C901B03);
/// ```
pub fn lookup3(data: &[u8]) -> u64 {
    let (pc, pb) = hashlittle2(data, 0, 0);
    (pc as u64) | ((pb as u64) << 32)
}
