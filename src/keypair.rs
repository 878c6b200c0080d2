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

//! Ring member keys: a private scalar and its derived public point.

use std::sync::Arc;

use rand_core::RngCore;

use crate::bigint::BigInt;
use crate::curve::Curve;
use crate::error::{LsagError, Result};
use crate::point::Point;

/// A `(d, Q)` pair with `Q = d·G`. A "public-only" key (`d = None`) may sit
/// in a ring as a non-signing member but cannot be passed as the signer's
/// key to [`crate::lsag::sign`].
#[derive(Clone, Debug)]
pub struct KeyPair {
	curve: Arc<Curve>,
	private_key: Option<BigInt>,
	public_key: Point,
}

impl KeyPair {
	/// Draws a private scalar uniformly from `[1, n)` and derives the public
	/// point `Q = d·G`.
	pub fn generate<R: RngCore>(curve: Arc<Curve>, rng: &mut R) -> Self {
		let n = curve.order().clone();
		let d = loop {
			let candidate = BigInt::random_below(&n, rng);
			if !candidate.is_zero() {
				break candidate;
			}
		};
		let public_key = Point::generator(curve.clone()).scalar_mul(&d);
		KeyPair { curve, private_key: Some(d), public_key }
	}

	/// Builds a keypair from a caller-supplied private scalar, deriving the
	/// public point. Fails with [`LsagError::InvalidScalar`] unless
	/// `0 < d < n`.
	pub fn from_private_key(curve: Arc<Curve>, d: BigInt) -> Result<Self> {
		if d.is_zero() || d >= *curve.order() {
			return Err(LsagError::InvalidScalar);
		}
		let public_key = Point::generator(curve.clone()).scalar_mul(&d);
		Ok(KeyPair { curve, private_key: Some(d), public_key })
	}

	/// Builds a public-only keypair from a known public point. The point
	/// must already lie on `curve`; callers that only have raw coordinates
	/// should go through [`Point::affine`] first.
	pub fn from_public_key(curve: Arc<Curve>, public_key: Point) -> Result<Self> {
		if *public_key.curve() != curve {
			return Err(LsagError::CurveMismatch);
		}
		Ok(KeyPair { curve, private_key: None, public_key })
	}

	/// Generates `size` fresh, distinct keypairs sharing `curve` — a
	/// convenience for building a ring to sign with or test against.
	pub fn generate_ring<R: RngCore>(curve: Arc<Curve>, size: usize, rng: &mut R) -> Vec<Self> {
		(0..size).map(|_| KeyPair::generate(curve.clone(), rng)).collect()
	}

	/// The curve this keypair's points belong to.
	pub fn curve(&self) -> &Arc<Curve> {
		&self.curve
	}

	/// The public point `Q`.
	pub fn public_key(&self) -> &Point {
		&self.public_key
	}

	/// The private scalar `d`, if this keypair holds one.
	pub fn private_key(&self) -> Option<&BigInt> {
		self.private_key.as_ref()
	}

	/// Whether this keypair can be used as a signer (holds a private key).
	pub fn can_sign(&self) -> bool {
		self.private_key.is_some()
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use rand::rngs::StdRng;
	use rand::SeedableRng;

	fn secp256k1() -> Arc<Curve> {
		Arc::new(Curve::named("secp256k1").unwrap())
	}

	#[test]
	fn generated_key_derives_public_from_private() {
		let curve = secp256k1();
		let mut rng = StdRng::seed_from_u64(1);
		let kp = KeyPair::generate(curve.clone(), &mut rng);
		let d = kp.private_key().unwrap();
		let expected = Point::generator(curve).scalar_mul(d);
		assert_eq!(*kp.public_key(), expected);
	}

	#[test]
	fn zero_private_key_is_rejected() {
		let curve = secp256k1();
		assert_eq!(KeyPair::from_private_key(curve, BigInt::zero()).unwrap_err(), LsagError::InvalidScalar);
	}

	#[test]
	fn private_key_at_or_above_order_is_rejected() {
		let curve = secp256k1();
		let n = curve.order().clone();
		assert!(KeyPair::from_private_key(curve, n).is_err());
	}

	#[test]
	fn public_only_key_cannot_sign() {
		let curve = secp256k1();
		let mut rng = StdRng::seed_from_u64(2);
		let kp = KeyPair::generate(curve.clone(), &mut rng);
		let public_only = KeyPair::from_public_key(curve, kp.public_key().clone()).unwrap();
		assert!(!public_only.can_sign());
	}

	#[test]
	fn generate_ring_produces_distinct_keys() {
		let curve = secp256k1();
		let mut rng = StdRng::seed_from_u64(3);
		let ring = KeyPair::generate_ring(curve, 5, &mut rng);
		assert_eq!(ring.len(), 5);
		for i in 0..ring.len() {
			for j in (i + 1)..ring.len() {
				assert_ne!(ring[i].public_key(), ring[j].public_key());
			}
		}
	}
}
