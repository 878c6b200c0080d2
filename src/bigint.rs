/*
 * Copyright 2025 by the lsag authors
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Arbitrary-precision non-negative integer arithmetic (Component A).
//!
//! This wraps [`num_bigint::BigUint`] rather than hand-rolling limb
//! arithmetic: the multi-precision representation and low-level word
//! operations are exactly the "native arithmetic backend" the design treats
//! as an external capability (see the design notes on substituting a pure
//! big-integer library of the target ecosystem). What's specified here is the
//! operation set the rest of the crate is built against, and the
//! byte-encoding convention the wire format depends on.

use core::fmt;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand_core::RngCore;

/// An arbitrary-precision non-negative integer.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigInt(BigUint);

impl BigInt {
	/// The additive identity, `0`.
	pub fn zero() -> Self {
		BigInt(BigUint::zero())
	}

	/// The multiplicative identity, `1`.
	pub fn one() -> Self {
		BigInt(BigUint::one())
	}

	/// Whether this value is `0`.
	pub fn is_zero(&self) -> bool {
		self.0.is_zero()
	}

	/// Whether this value is even.
	pub fn is_even(&self) -> bool {
		self.0.is_even()
	}

	/// Whether this value is odd.
	pub fn is_odd(&self) -> bool {
		self.0.is_odd()
	}

	/// Integer division by two, rounding down.
	pub fn div2(&self) -> Self {
		BigInt(&self.0 >> 1u32)
	}

	/// Plain (unreduced) addition.
	pub fn add(&self, other: &Self) -> Self {
		BigInt(&self.0 + &other.0)
	}

	/// Plain (unreduced) subtraction. Panics if `other > self`, matching
	/// BigInt's non-negative-integer invariant.
	pub fn sub(&self, other: &Self) -> Self {
		BigInt(&self.0 - &other.0)
	}

	/// `(self + other) mod m`.
	pub fn add_mod(&self, other: &Self, m: &Self) -> Self {
		BigInt((&self.0 + &other.0) % &m.0)
	}

	/// `(self - other) mod m`, normalized into `[0, m)`.
	pub fn sub_mod(&self, other: &Self, m: &Self) -> Self {
		let a = &self.0 % &m.0;
		let b = &other.0 % &m.0;
		if a >= b {
			BigInt(a - b)
		} else {
			BigInt(&m.0 - (b - a))
		}
	}

	/// `(self * other) mod m`.
	pub fn mul_mod(&self, other: &Self, m: &Self) -> Self {
		BigInt((&self.0 * &other.0) % &m.0)
	}

	/// `self^e mod m`, computed in `O(log e)` multiplications.
	pub fn pow_mod(&self, e: &Self, m: &Self) -> Self {
		BigInt(self.0.modpow(&e.0, &m.0))
	}

	/// `self mod m`.
	pub fn rem(&self, m: &Self) -> Self {
		BigInt(&self.0 % &m.0)
	}

	/// Construct from a `u64`.
	pub fn from_u64(v: u64) -> Self {
		BigInt(BigUint::from(v))
	}

	/// Construct from a big-endian byte slice. An empty slice is `0`.
	pub fn from_bytes_be(bytes: &[u8]) -> Self {
		BigInt(BigUint::from_bytes_be(bytes))
	}

	/// Big-endian encoding with no leading zero padding. `0` encodes as the
	/// empty byte string.
	pub fn to_bytes_be_minimal(&self) -> Vec<u8> {
		if self.0.is_zero() {
			Vec::new()
		} else {
			self.0.to_bytes_be()
		}
	}

	/// Number of bits needed to represent this value (`0` has bit length 0).
	pub fn bit_len(&self) -> u64 {
		self.0.bits()
	}

	/// Draw a uniformly random value in `[0, bound)` using the supplied
	/// entropy source, by rejection sampling over the byte length of
	/// `bound`. `bound` must be nonzero.
	///
	/// The caller supplies the randomness (an injected capability): this
	/// function never reads from a global RNG and callers must not reuse an
	/// `R` draw sequence across independent signing operations.
	pub fn random_below<R: RngCore>(bound: &Self, rng: &mut R) -> Self {
		assert!(!bound.is_zero(), "random_below: bound must be nonzero");
		let byte_len = ((bound.bit_len() as usize) + 7) / 8;
		let byte_len = byte_len.max(1);
		loop {
			let mut buf = vec![0u8; byte_len];
			rng.fill_bytes(&mut buf);
			let candidate = BigInt::from_bytes_be(&buf);
			if candidate < *bound {
				return candidate;
			}
		}
	}

	/// Parses a string of hex digits (no `0x` prefix, upper or lower case)
	/// into a `BigInt`. An empty string is `0`.
	pub fn from_hex_digits(s: &str) -> Self {
		if s.is_empty() {
			return BigInt::zero();
		}
		let padded;
		let even = if s.len() % 2 == 1 {
			padded = format!("0{s}");
			&padded
		} else {
			s
		};
		let bytes = hex_decode(even);
		BigInt::from_bytes_be(&bytes)
	}
}

fn hex_decode(s: &str) -> Vec<u8> {
	let bytes = s.as_bytes();
	let mut out = Vec::with_capacity(bytes.len() / 2);
	let mut i = 0;
	while i + 2 <= bytes.len() {
		out.push((hex_val(bytes[i]) << 4) | hex_val(bytes[i + 1]));
		i += 2;
	}
	out
}

fn hex_val(c: u8) -> u8 {
	match c {
		b'0'..=b'9' => c - b'0',
		b'A'..=b'F' => c - b'A' + 10,
		b'a'..=b'f' => c - b'a' + 10,
		_ => panic!("invalid hex digit: {}", c as char),
	}
}

impl fmt::Display for BigInt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.0, f)
	}
}

impl fmt::UpperHex for BigInt {
	/// Uppercase hex, no `0x` prefix, no leading zeros, `0` formats as `"0"`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.0.is_zero() {
			return write!(f, "0");
		}
		write!(f, "{:X}", self.0)
	}
}

impl From<u64> for BigInt {
	fn from(v: u64) -> Self {
		BigInt::from_u64(v)
	}
}
