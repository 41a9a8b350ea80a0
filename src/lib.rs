//! # factoradic
//!
//! Convert non-negative integers to and from the **factorial number
//! system** (factoradic), a mixed-radix positional representation where
//! the place value at index i is i! and the digit at index i may not
//! exceed i.
//!
//! The system has particular uses in combinatorics, most notably the
//! numbering of permutations (Lehmer codes). This crate provides:
//!
//! - **Arbitrary precision**: factorial place values outgrow any machine
//!   word almost immediately (13! exceeds 2^32, 21! exceeds 2^64), so all
//!   arithmetic runs on big integers
//! - **Minimal encodings**: encoding always yields the shortest sequence,
//!   while decoding also accepts sequences padded with trailing zeros
//! - **Total validation**: malformed input is rejected up front; no
//!   partial result ever accompanies an error
//!
//! ## Examples
//!
//! ```rust
//! use factoradic::{from_factoradic, to_factoradic, Factoradic};
//! use num_bigint::{BigInt, BigUint};
//!
//! // 349 = 2*5! + 4*4! + 2*3! + 0*2! + 1*1! + 0*0!
//! let coefficients = to_factoradic(&BigInt::from(349)).unwrap();
//! assert_eq!(coefficients, vec![0, 1, 0, 2, 4, 2]);
//!
//! let value = from_factoradic(&coefficients).unwrap();
//! assert_eq!(value, BigUint::from(349u32));
//!
//! // The wrapper type validates once and converts freely
//! let factoradic = Factoradic::from(349u64);
//! assert_eq!(factoradic.to_string(), "0 1 0 2 4 2");
//! ```
//!
//! ## Representation contract
//!
//! A coefficient sequence is stored index 0 first. Every valid sequence
//! has at least one element and satisfies `coefficients[i] <= i`; the
//! digit at index 0 is therefore always 0. The represented value is the
//! sum over i of `coefficients[i] * i!`.

pub(crate) mod decoder;
pub(crate) mod encoder;
pub(crate) mod error;
pub(crate) mod factoradic;

// Re-export main types and functions
pub use decoder::from_factoradic;
pub use encoder::to_factoradic;
pub use error::{ConvertError, ConvertResult};
pub use factoradic::Factoradic;
