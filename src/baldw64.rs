use crate::compress::{self, ShuffleSelector, BLOCK_SIZE, STATE_WORDS};
use crate::constants::H;
use anyhow::Result;
use byteorder::{BigEndian, ByteOrder};
use rand::{rngs::OsRng, CryptoRng, RngCore};
use std::fmt;
use std::fmt::Write as _;
use unicode_normalization::UnicodeNormalization;

/// Total width of every digest output, in hex characters (512 bits).
pub const TOTAL_HEX_CHARS: usize = 128;

/// Width of the leading size field, in hex characters.
pub const SIZE_FIELD_CHARS: usize = 4;

// Hex characters left for digest body plus filler (496 bits).
const AVAILABLE_CHARS: usize = TOTAL_HEX_CHARS - SIZE_FIELD_CHARS;

/// The menu of selectable output bit-lengths, ascending.
pub const BIT_SIZES: [u64; 12] = [256, 272, 288, 304, 336, 384, 400, 416, 432, 464, 480, 496];

/// Error raised when the resolved output size would overflow the digest
/// budget. Unreachable through the fixed menu, whose maximum exactly fills
/// the budget, but kept as an invariant check.
#[derive(Debug)]
pub struct InvalidDigestSize {
    /// The offending output size in bits.
    pub desired_bits: u64,
}

impl fmt::Display for InvalidDigestSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "desired digest size of {} bits is too large, must be <= {} bits",
            self.desired_bits,
            AVAILABLE_CHARS * 4
        )
    }
}

impl std::error::Error for InvalidDigestSize {}

// digest context layout follows the same scheme as
// https://cs.opensource.google/go/go/+/refs/tags/go1.16.6:src/crypto/sha256/sha256.go
/// Streaming BALDW64 context.
///
/// Message bytes may be written incrementally; `sum` works on a copy of the
/// context so the caller can keep writing afterwards.
#[derive(Clone)]
pub struct Digest {
    h: [u64; STATE_WORDS], // hash chain (from last compression, or H)
    x: [u8; BLOCK_SIZE],   // data written since last compression
    nx: usize,             // number of input bytes buffered in x
    len: u64,              // total number of input bytes written overall
    selector: ShuffleSelector,
}

impl Default for Digest {
    fn default() -> Self {
        Self::new()
    }
}

impl Digest {
    /// Creates a context with the reference-compatible shuffle selector.
    pub fn new() -> Digest {
        Self::with_selector(ShuffleSelector::default())
    }

    /// Creates a context with an explicit shuffle selector.
    pub fn with_selector(selector: ShuffleSelector) -> Digest {
        Digest {
            h: H,
            x: [0; BLOCK_SIZE],
            nx: 0,
            len: 0,
            selector,
        }
    }

    /// Discards all written data and restarts from the initial chaining value.
    pub fn reset(&mut self) {
        self.h = H;
        self.nx = 0;
        self.len = 0;
    }

    /// Appends message bytes, compressing every completed 128-byte block.
    ///
    /// The total bit length recorded in the padding wraps at 2^64; messages
    /// that long are not defended against.
    pub fn write(&mut self, mut p: &[u8]) -> Result<usize> {
        let nn = p.len();
        self.len = self.len.wrapping_add(nn as u64);

        if self.nx > 0 {
            // continue with existing buffer, if nonempty
            let n = (BLOCK_SIZE - self.nx).min(p.len());
            self.x[self.nx..self.nx + n].copy_from_slice(&p[..n]);
            self.nx += n;
            if self.nx == BLOCK_SIZE {
                let block = self.x;
                compress::compress_block(&mut self.h, &block, self.selector);
                self.nx = 0;
            }
            p = &p[n..];
        }

        while p.len() >= BLOCK_SIZE {
            // handle any remaining full input blocks
            let block: &[u8; BLOCK_SIZE] = p[..BLOCK_SIZE].try_into()?;
            compress::compress_block(&mut self.h, block, self.selector);
            p = &p[BLOCK_SIZE..];
        }

        if !p.is_empty() {
            // handle any remaining input
            self.x[..p.len()].copy_from_slice(p);
            self.nx = p.len();
        }

        Ok(nn)
    }

    /// Finalizes against the verification string and formats the digest,
    /// drawing filler bytes from the operating system's secure source.
    pub fn sum(&self, verification: &str) -> Result<String> {
        self.sum_with_rng(verification, OsRng)
    }

    /// Finalizes like [`Digest::sum`] but with an injected filler source, so
    /// callers needing reproducible output (tests, golden vectors) can supply
    /// a deterministic generator.
    pub fn sum_with_rng<R: RngCore + CryptoRng>(
        &self,
        verification: &str,
        rng: R,
    ) -> Result<String> {
        // Make a copy so the caller can keep writing and summing.
        let mut d = self.clone();
        let state = d.check_sum()?;

        let sig = signature(verification);
        let mut signed = [0u64; STATE_WORDS];
        for (out, (seed, reg)) in signed.iter_mut().zip(H.iter().zip(state.iter())) {
            // The seed table is recombined with the final registers before
            // the signature is folded in.
            *out = seed.wrapping_add(*reg) ^ sig;
        }

        format_digest(&signed, select_digest_bits(verification), rng)
    }

    // Pads the remaining input and returns the final chaining state.
    fn check_sum(&mut self) -> Result<[u64; STATE_WORDS]> {
        let bitlen = self.len.wrapping_shl(3); // number of input bits written

        // Padding. Add a 0x80 byte and zero bytes until 112 bytes mod 128.
        let mut tmp = [0u8; BLOCK_SIZE];
        tmp[0] = 0x80;
        let rem = (self.len % BLOCK_SIZE as u64) as usize;
        let pad_len = if rem < 112 {
            112 - rem
        } else {
            BLOCK_SIZE + 112 - rem
        };
        self.write(&tmp[..pad_len])?;

        // Write the length in bits as two big-endian 64-bit words. The upper
        // word is always zero.
        let mut length_field = [0u8; 16];
        BigEndian::write_u64(&mut length_field[8..], bitlen);
        self.write(&length_field)?;

        debug_assert_eq!(self.nx, 0, "buffer must be empty after padding");

        Ok(self.h)
    }
}

/// Computes the BALDW64 digest of `message` keyed by `verification`.
///
/// The output is always [`TOTAL_HEX_CHARS`] hex characters: a 4-character
/// size field, the digest body, and random filler. Verifiers must compare
/// only the prefix delimited by the size field; see
/// [`comparable_prefix_len`].
pub fn digest(message: &[u8], verification: &str) -> Result<String> {
    digest_with_rng(message, verification, OsRng)
}

/// One-shot digest with an injected filler source.
pub fn digest_with_rng<R: RngCore + CryptoRng>(
    message: &[u8],
    verification: &str,
    rng: R,
) -> Result<String> {
    let mut d = Digest::new();
    d.write(message)?;
    d.sum_with_rng(verification, rng)
}

/// Normalizes a verification string: surrounding whitespace trimmed, case
/// folded to lowercase, then Unicode compatibility composition (NFKC).
pub fn normalize_verification(s: &str) -> String {
    s.trim().to_lowercase().nfkc().collect()
}

/// Derives the 64-bit verification signature by folding the normalized
/// string's code points into a rolling XOR/shift/add accumulator.
pub fn signature(verification: &str) -> u64 {
    let mut sig = 0u64;
    for ch in normalize_verification(verification).chars() {
        sig ^= (sig << 5)
            .wrapping_add(sig >> 2)
            .wrapping_add(u64::from(u32::from(ch)));
    }
    sig
}

/// Selects the output bit-length from the verification string: the menu
/// entry nearest to the (range-adjusted) code-point sum, ties broken toward
/// the smaller size. Depends only on the verification string, never on the
/// message.
pub fn select_digest_bits(verification: &str) -> u64 {
    let ord_sum: u64 = verification.chars().map(|c| u64::from(u32::from(c))).sum();
    let adjusted = if ord_sum > 480 { ord_sum / 4 } else { ord_sum };

    let mut best = BIT_SIZES[0];
    let mut best_diff = u64::MAX;
    for &bits in BIT_SIZES.iter() {
        let diff = bits.abs_diff(adjusted);
        if diff < best_diff {
            best = bits;
            best_diff = diff;
        }
    }
    best
}

/// Returns the length of the comparable prefix of a digest output (size
/// field plus body), or `None` if the leading size field does not decode.
/// Bytes past this prefix are filler and must never be compared.
pub fn comparable_prefix_len(output: &str) -> Option<usize> {
    let field = output.get(..SIZE_FIELD_CHARS)?;
    let bits = u64::from_str_radix(field, 16).ok()?;
    Some(SIZE_FIELD_CHARS + (bits / 4) as usize)
}

// Renders the final state: 4-char size field, truncated hex body, random
// filler out to the constant total width.
fn format_digest<R: RngCore + CryptoRng>(
    state: &[u64; STATE_WORDS],
    desired_bits: u64,
    mut rng: R,
) -> Result<String> {
    let digest_chars = (desired_bits / 4) as usize;
    if digest_chars > AVAILABLE_CHARS {
        return Err(InvalidDigestSize { desired_bits }.into());
    }

    let mut body = String::with_capacity(STATE_WORDS * 16);
    for word in state.iter() {
        write!(body, "{:016x}", word)?;
    }
    body.truncate(digest_chars);

    let mut filler_bytes = vec![0u8; (AVAILABLE_CHARS - digest_chars) / 2];
    rng.fill_bytes(&mut filler_bytes);

    Ok(format!(
        "{:04x}{}{}",
        desired_bits,
        body,
        hex::encode(&filler_bytes)
    ))
}
