use byteorder::{BigEndian, ByteOrder};

use crate::bitwise::{destr, diffuse, entropy_factor, fuse, lambda0, lambda1, rotl, rotr};
use crate::constants::K;

/// Block size, in bytes, of the compression loop (1024 bits).
pub const BLOCK_SIZE: usize = 128;

/// Number of schedule words and compression rounds per block.
pub const ROUNDS: usize = 88;

/// Width of the chaining state, in 64-bit words.
pub const STATE_WORDS: usize = 12;

// Value the schedule-expansion loop counter is left holding once expansion
// finishes. Its residue mod 11 is 10, so under `ExpansionResidue` the
// register shuffle never fires.
const EXPANSION_RESIDUE: u64 = (ROUNDS - 1) as u64;

/// Selector feeding the periodic register shuffle inside the compression
/// round.
///
/// The reference implementation keys the shuffle on a value left over from
/// the schedule-expansion loop rather than the round counter, which makes
/// the condition effectively constant. `ExpansionResidue` reproduces that
/// behavior bit-for-bit and is the default; `RoundIndex` keys the shuffle on
/// the actual round index instead, so it fires on rounds where
/// `p % 11 < 2`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShuffleSelector {
    /// Use the residual schedule-expansion index (reference-compatible).
    #[default]
    ExpansionResidue,
    /// Use the true round index.
    RoundIndex,
}

// floor(log2(v + 3) * 10^6), or 0 when the logarithm argument would be
// non-positive. The sum is widened so v near u64::MAX cannot wrap.
fn log_term(v: u64) -> u64 {
    let arg = u128::from(v) + 3;
    if arg > 0 {
        ((arg as f64).log2() * 1_000_000.0) as u64
    } else {
        0
    }
}

// Folds the entropy factor into an exact integer accumulation the way the
// reference does: the sum is converted to f64, the factor added, and the
// result truncated toward zero (not rounded) before reduction mod 2^64.
fn blend_entropy(sum: u128, entropy: f64) -> u64 {
    ((sum as f64 + entropy) as u128) as u64
}

/// Expands a 1024-bit block into the 88-word message schedule.
///
/// Words 0..16 are the big-endian 64-bit words of the block; words 16..88
/// are seeded with 1 and overwritten in ascending order from the recurrence,
/// perturbed by the block's entropy factor.
pub fn expand(block: &[u8; BLOCK_SIZE], entropy: f64) -> [u64; ROUNDS] {
    let mut w = [1u64; ROUNDS];
    BigEndian::read_u64_into(block, &mut w[..16]);

    for i in 16..ROUNDS {
        let sum = u128::from(lambda0(w[i - 15]))
            + u128::from(rotl(w[i - 16], 12))
            + u128::from(log_term(w[i - 11]))
            + u128::from(lambda1(w[i - 2]))
            + u128::from(w[i - 16]);
        w[i] = blend_entropy(sum, entropy);
    }
    w
}

/// Runs the 88-round compression of one block over the chaining state.
///
/// The state is updated in place: each round derives three mixing words
/// (phi1..phi3) from the current registers, rewrites all twelve registers,
/// and then applies the selector-keyed shuffle.
pub fn compress_block(
    state: &mut [u64; STATE_WORDS],
    block: &[u8; BLOCK_SIZE],
    selector: ShuffleSelector,
) {
    let entropy = entropy_factor(block);
    let w = expand(block, entropy);
    // The factor is truncated on its own at every use inside the round.
    let ip = entropy as u64;

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h, mut i0, mut j, mut k, mut l] =
        *state;

    for p in 0..ROUNDS {
        let phi1 = ip.wrapping_add(lambda0(j)).wrapping_add(diffuse(i0, k, l));
        let phi2 = w[p]
            .wrapping_add(destr(a, b, c, K[p]))
            .wrapping_add(rotl(e ^ w[p], 11));
        let phi3 = rotr(e, 11).wrapping_add(fuse(a, b, c, l)).wrapping_add(K[p]);

        let nl = ip.wrapping_add(phi2);
        let nk = lambda0(nl);
        let nj = nl.wrapping_add(nk).wrapping_add(ip).wrapping_add(lambda0(nk));
        let ni = lambda1(nj).wrapping_add(phi3);
        let nh = (f ^ rotr(phi1.wrapping_add(ni), 7)).wrapping_add(destr(b, c, d, K[p]));
        let ng = nh.wrapping_add(phi2);
        let nf = phi1.wrapping_add(destr(ni, nj, nk, K[p]));
        let ne = ip.wrapping_add(phi3);
        let nd = ng.wrapping_add(a).wrapping_add(rotl(phi2, 13)) ^ lambda1(nk);
        let nc = nd;
        let nb = nd.wrapping_add(phi3);
        let na = phi1.wrapping_add(phi2).wrapping_add(phi3);

        a = na;
        b = nb;
        c = nc;
        d = nd;
        e = ne;
        f = nf;
        g = ng;
        h = nh;
        i0 = ni;
        j = nj;
        k = nk;
        l = nl;

        let sel = match selector {
            ShuffleSelector::ExpansionResidue => EXPANSION_RESIDUE,
            ShuffleSelector::RoundIndex => p as u64,
        };
        match sel % 11 {
            0 => {
                [a, b, c, d, e, f, g, h, i0, j, k, l] = [b, d, a, l, k, e, f, g, i0, h, c, j];
            }
            1 => {
                [a, b, c, d, e, f, g, h, i0, j, k, l] = [k, c, i0, a, b, f, h, g, e, d, j, l];
            }
            _ => {}
        }
    }

    *state = [a, b, c, d, e, f, g, h, i0, j, k, l];
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::constants::H;

    // pad(b"abc"): one full block.
    fn abc_block() -> [u8; BLOCK_SIZE] {
        let mut block = [0u8; BLOCK_SIZE];
        block[..3].copy_from_slice(b"abc");
        block[3] = 0x80;
        block[BLOCK_SIZE - 1] = 24; // 3 bytes * 8 bits
        block
    }

    #[test]
    fn schedule_expansion() {
        let block = abc_block();
        let w = expand(&block, entropy_factor(&block));

        assert_eq!(w[0], 0x6162_6380_0000_0000);
        assert_eq!(&w[1..15], &[0u64; 14]);
        assert_eq!(w[15], 24);
        assert_eq!(w[16], 0x879a_6380_0018_3800);
        assert_eq!(w[17], 0x0018_2f42);
        assert_eq!(w[18], 0x4000_001c_2f42);
        assert_eq!(w[19], 0x0018_2f42);
    }

    #[test]
    fn compression_golden() {
        let mut state = H;
        compress_block(&mut state, &abc_block(), ShuffleSelector::ExpansionResidue);
        assert_eq!(
            state,
            [
                0xf951_ee6d_6f00_0346,
                0x8c1e_81bf_b70a_f713,
                0x9719_1e93_b1ca_be93,
                0x9719_1e93_b1ca_be93,
                0xf505_632c_0540_3880,
                0xee0d_0bb9_6ce0_aa44,
                0x2b15_7e16_151d_e1c9,
                0x6f38_fdd7_2bae_2b3f,
                0x5705_6880_0616_7880,
                0xbbdc_803e_e987_be8d,
                0x0018_0803,
                0xbbdc_803e_e96f_b68a,
            ]
        );
    }

    #[test]
    fn selector_modes_diverge() {
        let block = abc_block();
        let mut s1 = H;
        let mut s2 = H;
        compress_block(&mut s1, &block, ShuffleSelector::ExpansionResidue);
        compress_block(&mut s2, &block, ShuffleSelector::RoundIndex);
        assert_ne!(s1, s2, "shuffle selector had no effect on the state");
    }

    #[test]
    fn chaining_state_depends_on_input_state() {
        let block = abc_block();
        let mut s1 = H;
        let mut s2 = [0u64; STATE_WORDS];
        compress_block(&mut s1, &block, ShuffleSelector::default());
        compress_block(&mut s2, &block, ShuffleSelector::default());
        assert_ne!(s1, s2);
    }
}
