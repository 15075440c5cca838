#![warn(missing_docs)]
//! A Rust implementation of the BALDW64 keyed, variable-length digest
//! function.
//!
//! BALDW64 combines a Merkle–Damgård-style 88-round compression loop over
//! 1024-bit blocks with a secondary "verification string" (typically an
//! identity token such as an email address) that perturbs the final state
//! and selects the output size. The output is always 128 hex characters: a
//! 4-character size field, a variable-length deterministic digest body, and
//! random filler that hides the body length. Verifiers must only ever
//! compare the prefix delimited by the size field.
//!
//! This crate reproduces the reference algorithm's observable behavior,
//! numeric quirks included; no collision or preimage resistance is claimed.
//!
//! # Example
//! ```
//! use baldw64::baldw64::{comparable_prefix_len, digest};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!   let output = digest(b"hello world", "user@example.com")?;
//!   println!("Result: {}", output);
//!
//!   let prefix = comparable_prefix_len(&output).unwrap();
//!   println!("Comparable part: {}", &output[..prefix]);
//!
//!   Ok(())
//! }
//! ```
/// `baldw64` is the digest surface: streaming context, one-shot entry
/// points, signature mixer and output formatting.
pub mod baldw64;
/// `bitwise` holds the 64-bit mixing primitives and the entropy estimator.
pub mod bitwise;
/// `compress` implements the schedule expansion and the 88-round
/// compression function performed on each message block.
pub mod compress;
/// `constants` carries the fixed `H` and `K` tables.
pub mod constants;
