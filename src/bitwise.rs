//! 64-bit bit-mixing primitives and the per-block entropy estimator.
//!
//! Everything here is a pure function over wrapping 64-bit words. The three
//! nonlinear mixers (`fuse`, `diffuse`, `destr`) and the two diffusion
//! functions (`lambda0`, `lambda1`) are used by both the message-schedule
//! expansion and the compression round.

/// Rotates `x` right by `n` bits.
#[inline(always)]
pub fn rotr(x: u64, n: u32) -> u64 {
    x.rotate_right(n)
}

/// Rotates `x` left by `n` bits.
#[inline(always)]
pub fn rotl(x: u64, n: u32) -> u64 {
    x.rotate_left(n)
}

/// Majority-style combiner over four words.
#[inline(always)]
pub fn fuse(w: u64, x: u64, y: u64, z: u64) -> u64 {
    ((w & x) | (w & y)) ^ ((z & x) ^ (z & y))
}

/// Three-word nonlinear mixer built from nested complements.
#[inline(always)]
pub fn diffuse(x: u64, y: u64, z: u64) -> u64 {
    !(x & !(x & y)) & !(z & !(x & y))
}

/// Keyed destructuring mixer: each input word gates a rotated, key-perturbed
/// combination of the other two.
#[inline(always)]
pub fn destr(x: u64, y: u64, z: u64, k: u64) -> u64 {
    (x & rotl((x ^ k).wrapping_add(y & z), 11))
        ^ (y & rotl((y ^ k).wrapping_add(z & x), 17))
        ^ (z & rotl((z ^ k).wrapping_add(x & y), 23))
}

/// First diffusion function: AND of two rotations and a plain shift.
#[inline(always)]
pub fn lambda0(x: u64) -> u64 {
    rotr(x, 16) & rotr(x, 54) & (x >> 36)
}

/// Second diffusion function: AND of two rotations and a plain shift.
#[inline(always)]
pub fn lambda1(x: u64) -> u64 {
    rotl(x, 5) & rotl(x, 27) & (x << 7)
}

/// Entropy estimator over a raw block's bytes.
///
/// Counts every ASCII digit byte (`numbers`) and the subset whose nonzero
/// digit value evenly divides 48 (`factors`, digits 1, 2, 3, 4, 6 and 8).
/// Returns `factors / numbers` when that ratio lies strictly between 0 and 1,
/// and `0.0` otherwise. A block with no digit bytes is not an error; it yields
/// `0.0` without ever dividing by zero, and digit `0` is excluded from the
/// factor test before the divisibility check so `48 % 0` can never be
/// evaluated.
pub fn entropy_factor(block: &[u8]) -> f64 {
    let mut numbers = 0u32;
    let mut factors = 0u32;
    for &byte in block {
        if byte.is_ascii_digit() {
            numbers += 1;
            let digit = u32::from(byte - b'0');
            if digit != 0 && 48 % digit == 0 {
                factors += 1;
            }
        }
    }
    if numbers == 0 {
        return 0.0;
    }
    let p = f64::from(factors) / f64::from(numbers);
    if p > 0.0 && p < 1.0 {
        p
    } else {
        0.0
    }
}

#[cfg(test)]
pub mod test {
    use super::*;

    #[test]
    fn rotations_are_inverse() {
        let x = 0x0123_4567_89ab_cdefu64;
        assert_eq!(rotl(rotr(x, 13), 13), x);
        assert_eq!(rotr(rotl(x, 51), 51), x);
    }

    #[test]
    fn mixer_values() {
        let x = 0x0123_4567_89ab_cdef;
        assert_eq!(lambda0(x), 0x20000);
        assert_eq!(lambda1(x), 0x40_1000_1000);
        assert_eq!(
            fuse(0xdead_beef_cafe_f00d, x, 0xfedc_ba98_7654_3210, 0x0f0f_0f0f_0f0f_0f0f),
            0xd1a2_b1e0_c5f1_ff02
        );
        assert_eq!(
            diffuse(0xdead_beef_cafe_f00d, x, 0xfedc_ba98_7654_3210),
            0x0123_4567_89ab_cdef
        );
        assert_eq!(
            destr(0xdead_beef_cafe_f00d, x, 0xfedc_ba98_7654_3210, 0x0f0f_0f0f_0f0f_0f0f),
            0xeb2c_05d6_1d29_eb7f
        );
    }

    #[test]
    fn entropy_mixed_digits() {
        // 6 of the 10 digits divide 48.
        let mut block = [0u8; 128];
        block[..10].copy_from_slice(b"1234567890");
        assert_eq!(entropy_factor(&block), 0.6);
    }

    #[test]
    fn entropy_no_digits_is_zero() {
        assert_eq!(entropy_factor(&[0u8; 128]), 0.0);
        assert_eq!(entropy_factor(b"hello world"), 0.0);
    }

    #[test]
    fn entropy_degenerate_ratio_is_zero() {
        // Every digit divides 48, so the ratio is exactly 1 and is rejected.
        let block: Vec<u8> = b"1248".iter().copied().cycle().take(128).collect();
        assert_eq!(entropy_factor(&block), 0.0);
        // A lone zero digit: numbers = 1, factors = 0, ratio 0 is rejected too.
        assert_eq!(entropy_factor(b"0"), 0.0);
    }

    #[test]
    fn entropy_ignores_non_digit_bytes() {
        assert_eq!(entropy_factor(b"a5b5"), 0.0); // digit 5 never divides 48
        assert_eq!(entropy_factor(b"x3y5"), 0.5);
    }
}
