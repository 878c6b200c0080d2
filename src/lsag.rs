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

//! The LSAG ring signature core: sign, verify, and the two hash functions
//! their rotation depends on (Component E).
//!
//! Both `sign` and `verify` perform the exact same per-member computation
//! (`z'_i = s_i·G + c_i·Q_i`, `z''_i = s_i·H + c_i·Ỹ`); the only difference
//! is where the scalars and challenges come from. Keep the two in lock-step
//! if you touch either — the rotation order and serialization strings below
//! are load-bearing, not incidental.

use std::sync::Arc;

use rand_core::RngCore;

use crate::bigint::BigInt;
use crate::curve::Curve;
use crate::error::{LsagError, Result};
use crate::keypair::KeyPair;
use crate::point::Point;
use crate::signature::Signature;

/// Signs `message` under the ring `ring[signer_index]`'s private key,
/// proving membership in `ring` without revealing which member signed.
///
/// Fails with [`LsagError::EmptyRing`] if the ring is empty,
/// [`LsagError::InvalidSignerIndex`] if `signer_index` is out of bounds,
/// [`LsagError::MissingPrivateKey`] if the member at that index is
/// public-only, or [`LsagError::CurveMismatch`] if the ring spans more than
/// one curve.
pub fn sign<R: RngCore>(
	ring: &[KeyPair],
	signer_index: usize,
	message: &[u8],
	rng: &mut R,
) -> Result<Signature> {
	let k = ring.len();
	if k == 0 {
		return Err(LsagError::EmptyRing);
	}
	if signer_index >= k {
		return Err(LsagError::InvalidSignerIndex { index: signer_index, ring_size: k });
	}

	let curve = ring[signer_index].curve().clone();
	for member in ring {
		if member.curve() != &curve {
			return Err(LsagError::CurveMismatch);
		}
		if member.public_key().is_identity() {
			return Err(LsagError::MalformedSignature { reason: "ring member is the identity point" });
		}
	}
	let d_pi = ring[signer_index].private_key().ok_or(LsagError::MissingPrivateKey)?.clone();

	let public_points: Vec<Point> = ring.iter().map(|kp| kp.public_key().clone()).collect();
	let ring_hash = curve.hash_to_field(&serialize_ring(&public_points)?);
	let h = h2(&curve, &public_points)?;
	let link_tag = h.scalar_mul(&d_pi);

	let n = curve.order().clone();
	let g = Point::generator(curve.clone());

	let mut cs = vec![BigInt::zero(); k];
	let mut ss = vec![BigInt::zero(); k];

	let u = BigInt::random_below(&n, rng);
	let pi_plus_1 = (signer_index + 1) % k;
	cs[pi_plus_1] =
		h1(&curve, &ring_hash, &link_tag, message, &g.scalar_mul(&u), &h.scalar_mul(&u))?;

	let mut i = pi_plus_1;
	for _ in 0..(k - 1) {
		let s_i = BigInt::random_below(&n, rng);
		let z1 = g.scalar_mul(&s_i).add(&public_points[i].scalar_mul(&cs[i])).expect("ring is single-curve by construction");
		let z2 = h.scalar_mul(&s_i).add(&link_tag.scalar_mul(&cs[i])).expect("ring is single-curve by construction");
		ss[i] = s_i;
		let next = (i + 1) % k;
		cs[next] = h1(&curve, &ring_hash, &link_tag, message, &z1, &z2)?;
		i = next;
	}
	debug_assert_eq!(i, signer_index);

	let c_pi = cs[signer_index].clone();
	ss[signer_index] = u.sub_mod(&d_pi.mul_mod(&c_pi, &n), &n);

	Ok(Signature {
		ring: public_points,
		message: message.to_vec(),
		c0: cs[0].clone(),
		s: ss,
		link_tag,
	})
}

/// Verifies a signature, returning `Ok(true)` iff the hash chain closes on
/// `c₀`. A hash mismatch is reported as `Ok(false)`, never as an error;
/// structural defects (wrong response count, off-curve link tag) are
/// reported as [`LsagError::MalformedSignature`].
pub fn verify(sig: &Signature) -> Result<bool> {
	let k = sig.ring.len();
	if k == 0 {
		return Err(LsagError::EmptyRing);
	}
	if sig.s.len() != k {
		return Err(LsagError::MalformedSignature { reason: "response vector length does not match ring size" });
	}

	let curve: Arc<Curve> = sig.link_tag.curve().clone();
	for member in &sig.ring {
		if member.curve() != &curve {
			return Err(LsagError::CurveMismatch);
		}
		if member.is_identity() {
			return Err(LsagError::MalformedSignature { reason: "ring member is the identity point" });
		}
	}
	match (sig.link_tag.x(), sig.link_tag.y()) {
		(Some(x), Some(y)) if curve.is_on_curve(x, y) => {}
		_ => return Err(LsagError::MalformedSignature { reason: "link tag is not a valid on-curve point" }),
	}

	let ring_hash = curve.hash_to_field(&serialize_ring(&sig.ring)?);
	let h = h2(&curve, &sig.ring)?;
	let g = Point::generator(curve.clone());

	let mut c = sig.c0.clone();
	let (mut last_z1, mut last_z2) = (None, None);
	for i in 0..k {
		let z1 = g.scalar_mul(&sig.s[i]).add(&sig.ring[i].scalar_mul(&c)).expect("checked same curve above");
		let z2 = h.scalar_mul(&sig.s[i]).add(&sig.link_tag.scalar_mul(&c)).expect("checked same curve above");
		if i < k - 1 {
			c = h1(&curve, &ring_hash, &sig.link_tag, &sig.message, &z1, &z2)?;
		} else {
			last_z1 = Some(z1);
			last_z2 = Some(z2);
		}
	}

	let c_check = h1(
		&curve,
		&ring_hash,
		&sig.link_tag,
		&sig.message,
		last_z1.as_ref().expect("k >= 1"),
		last_z2.as_ref().expect("k >= 1"),
	)?;
	Ok(c_check == sig.c0)
}

/// This point's affine coordinates, or [`LsagError::MalformedSignature`] if
/// it is the identity — every point this crate serializes into a hash input
/// (ring members, the link tag, the two running commitments) must be affine.
fn affine_coords(p: &Point) -> Result<(&BigInt, &BigInt)> {
	match (p.x(), p.y()) {
		(Some(x), Some(y)) => Ok((x, y)),
		_ => Err(LsagError::MalformedSignature { reason: "point is the identity where an affine point is required" }),
	}
}

/// `H2`: hashes the ring's public coordinates to a curve point.
fn h2(curve: &Arc<Curve>, ring: &[Point]) -> Result<Point> {
	let mut input = b"H2_salt".to_vec();
	input.extend(serialize_ring(ring)?);
	Ok(curve.hash_to_point(&input))
}

/// `H1`: hashes the ring hash, link tag, message, and the two running
/// commitments to a scalar. The wire format here is load-bearing: every
/// byte is part of the hash-chain contract between signer and verifier.
fn h1(curve: &Curve, ring_hash: &BigInt, link_tag: &Point, message: &[u8], p1: &Point, p2: &Point) -> Result<BigInt> {
	let (p1x, p1y) = affine_coords(p1)?;
	let (p2x, p2y) = affine_coords(p2)?;

	let mut input = b"H1_salt".to_vec();
	input.extend(ring_hash.to_string().into_bytes());
	input.push(b',');
	input.extend(point_repr(link_tag)?.into_bytes());
	input.push(b',');
	input.extend_from_slice(message);
	input.push(b',');
	input.extend(format!("{:X}", p1x).into_bytes());
	input.push(b',');
	input.extend(format!("{:X}", p1y).into_bytes());
	input.push(b',');
	input.extend(format!("{:X}", p2x).into_bytes());
	input.push(b',');
	input.extend(format!("{:X}", p2y).into_bytes());
	Ok(curve.hash_to_field(&input))
}

/// `"Point<0xX, 0xY>"`, the fixed textual form `H1` embeds for `Ỹ`.
fn point_repr(p: &Point) -> Result<String> {
	let (x, y) = affine_coords(p)?;
	Ok(format!("Point<0x{:X}, 0x{:X}>", x, y))
}

/// `"[(x0, y0), (x1, y1), ...]"`, decimal coordinates, the ring's wire form
/// for both `ringHash` (unsalted) and `H2` (`"H2_salt"`-prefixed).
fn serialize_ring(ring: &[Point]) -> Result<Vec<u8>> {
	let mut s = String::from("[");
	for (i, p) in ring.iter().enumerate() {
		if i > 0 {
			s.push_str(", ");
		}
		let (x, y) = affine_coords(p)?;
		s.push('(');
		s.push_str(&x.to_string());
		s.push_str(", ");
		s.push_str(&y.to_string());
		s.push(')');
	}
	s.push(']');
	Ok(s.into_bytes())
}

#[cfg(test)]
mod test {
	use super::*;
	use rand::rngs::StdRng;
	use rand::SeedableRng;

	fn secp256k1() -> Arc<Curve> {
		Arc::new(Curve::named("secp256k1").unwrap())
	}

	fn ring_of(size: usize, rng: &mut StdRng) -> Vec<KeyPair> {
		KeyPair::generate_ring(secp256k1(), size, rng)
	}

	#[test]
	fn round_trips_for_several_ring_sizes() {
		let mut rng = StdRng::seed_from_u64(7);
		for &k in &[1usize, 2, 3, 5, 10] {
			for pi in 0..k {
				let ring = ring_of(k, &mut rng);
				let sig = sign(&ring, pi, b"hello", &mut rng).unwrap();
				assert!(verify(&sig).unwrap(), "k={k} pi={pi}");
			}
		}
	}

	#[test]
	fn empty_ring_is_rejected() {
		let mut rng = StdRng::seed_from_u64(8);
		let ring: Vec<KeyPair> = vec![];
		assert_eq!(sign(&ring, 0, b"x", &mut rng).unwrap_err(), LsagError::EmptyRing);
	}

	#[test]
	fn out_of_range_signer_index_is_rejected() {
		let mut rng = StdRng::seed_from_u64(9);
		let ring = ring_of(3, &mut rng);
		assert_eq!(
			sign(&ring, 3, b"x", &mut rng).unwrap_err(),
			LsagError::InvalidSignerIndex { index: 3, ring_size: 3 }
		);
	}

	#[test]
	fn public_only_signer_index_is_rejected() {
		let mut rng = StdRng::seed_from_u64(10);
		let curve = secp256k1();
		let signer = KeyPair::generate(curve.clone(), &mut rng);
		let public_only = KeyPair::from_public_key(curve, signer.public_key().clone()).unwrap();
		let ring = vec![public_only, signer];
		assert_eq!(sign(&ring, 0, b"x", &mut rng).unwrap_err(), LsagError::MissingPrivateKey);
	}

	#[test]
	fn flipping_a_message_byte_breaks_verification() {
		let mut rng = StdRng::seed_from_u64(11);
		let ring = ring_of(4, &mut rng);
		let mut sig = sign(&ring, 1, b"hello", &mut rng).unwrap();
		let mut message = sig.message().to_vec();
		message[0] ^= 0x01;
		sig = Signature { message, ..sig };
		assert!(!verify(&sig).unwrap());
	}

	#[test]
	fn bumping_a_response_scalar_breaks_verification() {
		let mut rng = StdRng::seed_from_u64(12);
		let ring = ring_of(4, &mut rng);
		let sig = sign(&ring, 2, b"hello", &mut rng).unwrap();
		let n = secp256k1_order();
		let mut s = sig.responses().to_vec();
		s[0] = s[0].add_mod(&BigInt::one(), &n);
		let tampered = Signature { s, ..sig };
		assert!(!verify(&tampered).unwrap());
	}

	#[test]
	fn replacing_the_link_tag_with_the_generator_breaks_verification() {
		let mut rng = StdRng::seed_from_u64(13);
		let ring = ring_of(4, &mut rng);
		let sig = sign(&ring, 0, b"hello", &mut rng).unwrap();
		let g = Point::generator(secp256k1());
		let tampered = Signature { link_tag: g, ..sig };
		assert!(!verify(&tampered).unwrap());
	}

	#[test]
	fn flipping_c0_breaks_verification() {
		let mut rng = StdRng::seed_from_u64(14);
		let ring = ring_of(4, &mut rng);
		let sig = sign(&ring, 0, b"hello", &mut rng).unwrap();
		let mut bytes = sig.c0().to_bytes_be_minimal();
		if bytes.is_empty() {
			bytes.push(1);
		} else {
			let last = bytes.len() - 1;
			bytes[last] ^= 0x01;
		}
		let c0 = BigInt::from_bytes_be(&bytes);
		let tampered = Signature { c0, ..sig };
		assert!(!verify(&tampered).unwrap());
	}

	#[test]
	fn same_signer_same_ring_links_across_messages() {
		let mut rng = StdRng::seed_from_u64(15);
		let ring = ring_of(3, &mut rng);
		let sig_a = sign(&ring, 1, b"message a", &mut rng).unwrap();
		let sig_b = sign(&ring, 1, b"message b", &mut rng).unwrap();
		assert!(sig_a.linked_with(&sig_b));
	}

	#[test]
	fn different_signers_do_not_link() {
		let mut rng = StdRng::seed_from_u64(16);
		let ring = ring_of(3, &mut rng);
		let sig_a = sign(&ring, 0, b"same message", &mut rng).unwrap();
		let sig_b = sign(&ring, 1, b"same message", &mut rng).unwrap();
		assert!(!sig_a.linked_with(&sig_b));
	}

	#[test]
	fn identity_ring_member_is_rejected_by_sign() {
		let mut rng = StdRng::seed_from_u64(18);
		let curve = secp256k1();
		let signer = KeyPair::generate(curve.clone(), &mut rng);
		let identity_member = KeyPair::from_public_key(curve.clone(), Point::identity(curve)).unwrap();
		let ring = vec![signer, identity_member];
		assert!(matches!(sign(&ring, 0, b"x", &mut rng), Err(LsagError::MalformedSignature { .. })));
	}

	#[test]
	fn identity_ring_member_is_rejected_by_verify() {
		let mut rng = StdRng::seed_from_u64(19);
		let curve = secp256k1();
		let ring = ring_of(3, &mut rng);
		let sig = sign(&ring, 0, b"hello", &mut rng).unwrap();
		let mut tampered_ring = sig.ring().to_vec();
		tampered_ring[1] = Point::identity(curve);
		let tampered = Signature { ring: tampered_ring, ..sig };
		assert!(matches!(verify(&tampered), Err(LsagError::MalformedSignature { .. })));
	}

	#[test]
	fn malformed_response_length_is_rejected() {
		let mut rng = StdRng::seed_from_u64(17);
		let ring = ring_of(3, &mut rng);
		let sig = sign(&ring, 0, b"hello", &mut rng).unwrap();
		let mut s = sig.responses().to_vec();
		s.pop();
		let tampered = Signature { s, ..sig };
		assert!(matches!(verify(&tampered), Err(LsagError::MalformedSignature { .. })));
	}

	fn secp256k1_order() -> BigInt {
		secp256k1().order().clone()
	}
}
