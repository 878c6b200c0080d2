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

//! The `Signature` value and its SEC1-style wire encoding helpers.

use crate::bigint::BigInt;
use crate::curve::Curve;
use crate::error::{LsagError, Result};
use crate::point::Point;

/// A complete LSAG signature: the ring it was produced over, the signed
/// message, the seed challenge `c₀`, the per-member response scalars, and
/// the link tag `Ỹ`. Signatures are self-contained and verifiable without
/// access to any signer's private key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
	pub(crate) ring: Vec<Point>,
	pub(crate) message: Vec<u8>,
	pub(crate) c0: BigInt,
	pub(crate) s: Vec<BigInt>,
	pub(crate) link_tag: Point,
}

impl Signature {
	/// Reassembles a signature from its raw parts, as a deserializer would
	/// after decoding each field off the wire. Performs no validation of its
	/// own; structural checks (response-vector length, on-curve link tag)
	/// happen inside [`crate::lsag::verify`] so that every validity rule
	/// lives in one place.
	pub fn from_parts(ring: Vec<Point>, message: Vec<u8>, c0: BigInt, s: Vec<BigInt>, link_tag: Point) -> Signature {
		Signature { ring, message, c0, s, link_tag }
	}

	/// The public ring this signature was produced over, in signing order.
	pub fn ring(&self) -> &[Point] {
		&self.ring
	}

	/// The signed message.
	pub fn message(&self) -> &[u8] {
		&self.message
	}

	/// The seed challenge `c₀`.
	pub fn c0(&self) -> &BigInt {
		&self.c0
	}

	/// The response scalars `[s₀, …, s_{k−1}]`, one per ring member.
	pub fn responses(&self) -> &[BigInt] {
		&self.s
	}

	/// The link tag `Ỹ = d_π · H(ring)`.
	pub fn link_tag(&self) -> &Point {
		&self.link_tag
	}

	/// Whether `self` and `other` were produced by the same private key:
	/// true iff their link tags are equal points. Two signatures can only be
	/// meaningfully compared this way when they were produced over the same
	/// ring; signatures over different rings that happen to carry equal
	/// link-tag coordinates are not a real collision but this check, being a
	/// plain point equality test, cannot distinguish that case.
	pub fn linked_with(&self, other: &Signature) -> bool {
		self.link_tag == other.link_tag
	}

	/// The length in bytes this signature would occupy under the
	/// recommended wire layout: each ring member and the link tag as
	/// uncompressed SEC1 points (`0x04 || X || Y`), `c₀` and each response
	/// scalar as minimal big-endian unsigned integers.
	pub fn encoded_len(&self) -> usize {
		let curve = self.link_tag.curve();
		let point_len = uncompressed_point_len(curve);
		let mut len = self.ring.len() * point_len;
		len += point_len; // Ỹ
		len += self.c0.to_bytes_be_minimal().len();
		len += self.s.iter().map(|s| s.to_bytes_be_minimal().len()).sum::<usize>();
		len
	}
}

/// `1 + 2·⌈bitlength/8⌉`: the tag byte plus two zero-padded coordinates.
fn uncompressed_point_len(curve: &Curve) -> usize {
	1 + 2 * coord_byte_len(curve)
}

fn coord_byte_len(curve: &Curve) -> usize {
	((curve.bitlength() as usize) + 7) / 8
}

/// Encodes a non-identity point as uncompressed SEC1: `0x04 || X || Y`, each
/// coordinate zero-padded to `⌈bitlength/8⌉` bytes. Fails with
/// [`LsagError::MalformedSignature`] for the identity point, which has no
/// SEC1 encoding.
pub fn encode_point_uncompressed(point: &Point) -> Result<Vec<u8>> {
	let (x, y) = match (point.x(), point.y()) {
		(Some(x), Some(y)) => (x, y),
		_ => return Err(LsagError::MalformedSignature { reason: "identity point has no SEC1 encoding" }),
	};
	let curve = point.curve();
	let coord_len = coord_byte_len(curve);
	let mut out = Vec::with_capacity(1 + 2 * coord_len);
	out.push(0x04);
	push_zero_padded(&mut out, x, coord_len);
	push_zero_padded(&mut out, y, coord_len);
	Ok(out)
}

fn push_zero_padded(out: &mut Vec<u8>, value: &BigInt, width: usize) {
	let bytes = value.to_bytes_be_minimal();
	let pad = width.saturating_sub(bytes.len());
	out.extend(std::iter::repeat(0u8).take(pad));
	out.extend(bytes);
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::curve::Curve;
	use std::sync::Arc;

	fn secp256k1() -> Arc<Curve> {
		Arc::new(Curve::named("secp256k1").unwrap())
	}

	#[test]
	fn uncompressed_encoding_has_the_expected_length() {
		let curve = secp256k1();
		let g = Point::generator(curve);
		let encoded = encode_point_uncompressed(&g).unwrap();
		assert_eq!(encoded.len(), 65);
		assert_eq!(encoded[0], 0x04);
	}

	#[test]
	fn identity_point_has_no_sec1_encoding() {
		let curve = secp256k1();
		let o = Point::identity(curve);
		assert!(matches!(encode_point_uncompressed(&o), Err(LsagError::MalformedSignature { .. })));
	}

	#[test]
	fn encoded_len_accounts_for_every_field() {
		let curve = secp256k1();
		let g = Point::generator(curve.clone());
		let sig = Signature {
			ring: vec![g.clone(), g.clone()],
			message: b"hi".to_vec(),
			c0: BigInt::from_u64(1),
			s: vec![BigInt::from_u64(2), BigInt::from_u64(3)],
			link_tag: g,
		};
		// 2 ring points + 1 link tag, each 65 bytes uncompressed, plus three
		// single-byte scalars.
		assert_eq!(sig.encoded_len(), 65 * 3 + 1 + 1 + 1);
	}
}
