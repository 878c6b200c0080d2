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

//! Prime-field short Weierstrass curve parameters and the hash-to-field /
//! hash-to-point maps (Component C).

use core::fmt;
use std::sync::Arc;

use sha2::{Digest, Sha512};

use crate::bigint::BigInt;
use crate::error::{LsagError, Result};
use crate::field::modular_sqrt;
use crate::point::Point;

/// Raw parameters for a prime-field curve `y² = x³ + a·x + b (mod p)`, as
/// would be produced by parsing an `ECParameters` DER structure or a
/// named-curve table (see [`crate::der`]). This is the external "curve
/// parameter provider" boundary: everything past this struct is this
/// crate's own logic.
#[derive(Debug, Clone)]
pub struct CurveParams {
	/// Field modulus `p`.
	pub p: BigInt,
	/// Curve coefficient `a`.
	pub a: BigInt,
	/// Curve coefficient `b`.
	pub b: BigInt,
	/// Base point x-coordinate.
	pub gx: BigInt,
	/// Base point y-coordinate.
	pub gy: BigInt,
	/// Order `n` of the base point.
	pub n: BigInt,
	/// Cofactor `h`.
	pub h: BigInt,
}

/// An immutable prime-field short Weierstrass curve: `y² = x³ + a·x + b (mod
/// p)`, together with a distinguished base point `G` of prime order `n`.
///
/// Two `Curve` values are considered the same curve (for the purposes of
/// [`crate::error::LsagError::CurveMismatch`] checks) when their `(p, a, b,
/// n)` tuples match; callers normally share a single `Arc<Curve>` rather than
/// relying on this.
pub struct Curve {
	p: BigInt,
	a: BigInt,
	b: BigInt,
	n: BigInt,
	h: BigInt,
	bitlength: u64,
	g: (BigInt, BigInt),
}

impl fmt::Debug for Curve {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Curve")
			.field("p", &format_args!("{:X}", self.p))
			.field("a", &format_args!("{:X}", self.a))
			.field("b", &format_args!("{:X}", self.b))
			.field("n", &format_args!("{:X}", self.n))
			.field("h", &self.h)
			.field("bitlength", &self.bitlength)
			.finish()
	}
}

impl PartialEq for Curve {
	fn eq(&self, other: &Self) -> bool {
		self.p == other.p && self.a == other.a && self.b == other.b && self.n == other.n
	}
}
impl Eq for Curve {}

impl Curve {
	/// Builds a curve from raw parameters (the "curve parameter provider"
	/// output). Fails with [`LsagError::UnsupportedField`] only in
	/// the sense that binary-field parameters must never reach this
	/// constructor in the first place -- this crate has no representation for
	/// them, so the check here is a defensive assertion that `p` is odd
	/// (every binary-field modulus reaching this point would be a caller bug
	/// upstream in the parameter provider).
	pub fn from_params(params: CurveParams) -> Result<Self> {
		if params.p.is_even() {
			return Err(LsagError::UnsupportedField);
		}
		let bitlength = params.p.bit_len();
		Ok(Curve {
			p: params.p,
			a: params.a,
			b: params.b,
			n: params.n,
			h: params.h,
			bitlength,
			g: (params.gx, params.gy),
		})
	}

	/// Looks up a built-in named curve (currently `"secp256k1"` only).
	pub fn named(name: &str) -> Result<Self> {
		crate::der::named_curve_params(name).and_then(Curve::from_params)
	}

	/// Field modulus `p`.
	pub fn p(&self) -> &BigInt {
		&self.p
	}
	/// Curve coefficient `a`.
	pub fn a(&self) -> &BigInt {
		&self.a
	}
	/// Curve coefficient `b`.
	pub fn b(&self) -> &BigInt {
		&self.b
	}
	/// Order of the base point `G`.
	pub fn order(&self) -> &BigInt {
		&self.n
	}
	/// Cofactor `h`.
	pub fn cofactor(&self) -> &BigInt {
		&self.h
	}
	/// `⌈log₂(p)⌉`.
	pub fn bitlength(&self) -> u64 {
		self.bitlength
	}
	/// Coordinates of the base point `G`.
	pub fn base_point_coords(&self) -> (&BigInt, &BigInt) {
		(&self.g.0, &self.g.1)
	}

	/// `f(x) = x³ + a·x + b (mod p)`.
	pub fn rhs(&self, x: &BigInt) -> BigInt {
		let x2 = x.mul_mod(x, &self.p);
		let x3 = x2.mul_mod(x, &self.p);
		let ax = self.a.mul_mod(x, &self.p);
		x3.add_mod(&ax, &self.p).add_mod(&self.b, &self.p)
	}

	/// Whether `(x, y)` satisfies the curve equation.
	pub fn is_on_curve(&self, x: &BigInt, y: &BigInt) -> bool {
		let lhs = y.mul_mod(y, &self.p);
		lhs == self.rhs(x)
	}

	/// Hashes `msg` to an integer in `[0, 2^bitlength)`: SHA-512 the input,
	/// take the leading `⌈bitlength/4⌉` hex nibbles, interpret as a
	/// big-endian unsigned integer. This is the canonical leading-nibble
	/// slice; an off-by-one variant that indexes a single hex digit instead
	/// of slicing a prefix exists in some implementations and is not
	/// reproduced here.
	pub fn hash_to_field(&self, msg: &[u8]) -> BigInt {
		let digest = Sha512::digest(msg);
		let hex = hex_upper(&digest);
		let nibbles = ((self.bitlength as usize) + 3) / 4;
		let nibbles = nibbles.min(hex.len());
		let prefix = &hex[..nibbles];
		BigInt::from_hex_digits(prefix)
	}

	/// Try-and-increment hash-to-curve: starting from `hash_to_field(msg)`,
	/// scans `x, x+1, x+2, …` until `x³ + a·x + b` is a quadratic residue,
	/// and returns the resulting point.
	pub fn hash_to_point(self: &Arc<Self>, msg: &[u8]) -> Point {
		let mut x = self.hash_to_field(msg);
		let one = BigInt::one();
		loop {
			let f_x = self.rhs(&x);
			let y = modular_sqrt(&f_x, &self.p);
			if !y.is_zero() {
				return Point::affine_unchecked(self.clone(), x, y);
			}
			x = x.add(&one);
		}
	}
}

fn hex_upper(bytes: &[u8]) -> String {
	use core::fmt::Write;
	let mut s = String::with_capacity(bytes.len() * 2);
	for b in bytes {
		write!(s, "{:02X}", b).unwrap();
	}
	s
}

#[cfg(test)]
mod test {
	use super::*;
	use std::sync::Arc;

	#[test]
	fn hash_to_field_is_deterministic_and_bounded() {
		let curve = Arc::new(Curve::named("secp256k1").unwrap());
		let a = curve.hash_to_field(b"hello");
		let b = curve.hash_to_field(b"hello");
		assert_eq!(a, b);
		assert_ne!(a, curve.hash_to_field(b"world"));
		assert!(a.bit_len() <= curve.bitlength());
	}

	#[test]
	fn hash_to_point_lands_on_curve() {
		let curve = Arc::new(Curve::named("secp256k1").unwrap());
		let p = curve.hash_to_point(b"");
		let (x, y) = (p.x().unwrap().clone(), p.y().unwrap().clone());
		assert!(curve.is_on_curve(&x, &y));
	}

	#[test]
	fn secp256k1_base_point_is_on_curve() {
		let curve = Curve::named("secp256k1").unwrap();
		let (gx, gy) = curve.base_point_coords();
		assert!(curve.is_on_curve(gx, gy));
	}
}
