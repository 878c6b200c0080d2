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

//! Elliptic-curve points and group operations (Component D).

use std::sync::Arc;

use crate::bigint::BigInt;
use crate::curve::Curve;
use crate::error::{LsagError, Result};

#[derive(Clone, Debug)]
enum Coords {
	Identity,
	Affine(BigInt, BigInt),
}

/// A point on a [`Curve`]: either the identity element `O` or an affine
/// `(x, y)` pair satisfying the curve equation. Every `Point` carries a
/// reference to the curve it belongs to; operating on points from different
/// curves fails with [`LsagError::CurveMismatch`] rather than silently
/// producing nonsense.
#[derive(Clone, Debug)]
pub struct Point {
	curve: Arc<Curve>,
	coords: Coords,
}

impl Point {
	/// The identity element `O` of `curve`'s group.
	pub fn identity(curve: Arc<Curve>) -> Self {
		Point { curve, coords: Coords::Identity }
	}

	/// Builds an affine point, checking it lies on the curve.
	pub fn affine(curve: Arc<Curve>, x: BigInt, y: BigInt) -> Result<Self> {
		if !curve.is_on_curve(&x, &y) {
			return Err(LsagError::MalformedSignature { reason: "point is not on the curve" });
		}
		Ok(Point { curve, coords: Coords::Affine(x, y) })
	}

	/// Builds an affine point without checking the curve equation. Only
	/// callers that have already established `(x, y)` is on-curve by
	/// construction (e.g. [`Curve::hash_to_point`]) should use this.
	pub(crate) fn affine_unchecked(curve: Arc<Curve>, x: BigInt, y: BigInt) -> Self {
		Point { curve, coords: Coords::Affine(x, y) }
	}

	/// The base point `G` of `curve`.
	pub fn generator(curve: Arc<Curve>) -> Self {
		let (gx, gy) = curve.base_point_coords();
		let (gx, gy) = (gx.clone(), gy.clone());
		Point { curve, coords: Coords::Affine(gx, gy) }
	}

	/// The curve this point belongs to.
	pub fn curve(&self) -> &Arc<Curve> {
		&self.curve
	}

	/// Whether this is the identity element.
	pub fn is_identity(&self) -> bool {
		matches!(self.coords, Coords::Identity)
	}

	/// The x-coordinate, or `None` for the identity element.
	pub fn x(&self) -> Option<&BigInt> {
		match &self.coords {
			Coords::Identity => None,
			Coords::Affine(x, _) => Some(x),
		}
	}

	/// The y-coordinate, or `None` for the identity element.
	pub fn y(&self) -> Option<&BigInt> {
		match &self.coords {
			Coords::Identity => None,
			Coords::Affine(_, y) => Some(y),
		}
	}

	fn check_same_curve(&self, other: &Point) -> Result<()> {
		if self.curve != other.curve {
			Err(LsagError::CurveMismatch)
		} else {
			Ok(())
		}
	}

	/// This point's additive inverse: `(x, -y mod p)`, or `O` for `O`.
	pub fn negate(&self) -> Self {
		match &self.coords {
			Coords::Identity => self.clone(),
			Coords::Affine(x, y) => {
				let p = self.curve.p();
				let neg_y = BigInt::zero().sub_mod(y, p);
				Point { curve: self.curve.clone(), coords: Coords::Affine(x.clone(), neg_y) }
			}
		}
	}

	/// Elliptic-curve point addition, including the doubling and
	/// point-at-infinity special cases.
	pub fn add(&self, other: &Point) -> Result<Self> {
		self.check_same_curve(other)?;
		let (x1, y1) = match &self.coords {
			Coords::Identity => return Ok(other.clone()),
			Coords::Affine(x, y) => (x, y),
		};
		let (x2, y2) = match &other.coords {
			Coords::Identity => return Ok(self.clone()),
			Coords::Affine(x, y) => (x, y),
		};

		let p = self.curve.p();

		if x1 == x2 {
			if y1 != y2 || y1.is_zero() {
				// P + (-P) = O, and the vertical tangent at y = 0.
				return Ok(Point::identity(self.curve.clone()));
			}
			return Ok(self.double_nonzero(x1, y1));
		}

		let num = y2.sub_mod(y1, p);
		let den = x2.sub_mod(x1, p);
		let den_inv = mod_inverse(&den, p);
		let lambda = num.mul_mod(&den_inv, p);

		let x3 = lambda.mul_mod(&lambda, p).sub_mod(x1, p).sub_mod(x2, p);
		let y3 = lambda.mul_mod(&x1.sub_mod(&x3, p), p).sub_mod(y1, p);
		Ok(Point { curve: self.curve.clone(), coords: Coords::Affine(x3, y3) })
	}

	fn double_nonzero(&self, x: &BigInt, y: &BigInt) -> Self {
		let p = self.curve.p();
		let three = BigInt::from_u64(3);
		let two = BigInt::from_u64(2);

		let num = three.mul_mod(&x.mul_mod(x, p), p).add_mod(self.curve.a(), p);
		let den = two.mul_mod(y, p);
		let den_inv = mod_inverse(&den, p);
		let lambda = num.mul_mod(&den_inv, p);

		let x3 = lambda.mul_mod(&lambda, p).sub_mod(&two.mul_mod(x, p), p);
		let y3 = lambda.mul_mod(&x.sub_mod(&x3, p), p).sub_mod(y, p);
		Point { curve: self.curve.clone(), coords: Coords::Affine(x3, y3) }
	}

	/// Point doubling, `2·P`.
	pub fn double(&self) -> Self {
		match &self.coords {
			Coords::Identity => self.clone(),
			Coords::Affine(_, y) if y.is_zero() => Point::identity(self.curve.clone()),
			Coords::Affine(x, y) => self.double_nonzero(x, y),
		}
	}

	/// Scalar multiplication `k·P` via double-and-add, scanning the scalar's
	/// bits from least to most significant.
	pub fn scalar_mul(&self, k: &BigInt) -> Self {
		let mut result = Point::identity(self.curve.clone());
		let mut addend = self.clone();
		let mut k = k.clone();
		while !k.is_zero() {
			if k.is_odd() {
				result = result.add(&addend).expect("same curve by construction");
			}
			addend = addend.double();
			k = k.div2();
		}
		result
	}
}

impl PartialEq for Point {
	fn eq(&self, other: &Self) -> bool {
		if self.curve != other.curve {
			return false;
		}
		match (&self.coords, &other.coords) {
			(Coords::Identity, Coords::Identity) => true,
			(Coords::Affine(x1, y1), Coords::Affine(x2, y2)) => x1 == x2 && y1 == y2,
			_ => false,
		}
	}
}
impl Eq for Point {}

/// `a⁻¹ mod p` via Fermat's little theorem (`p` prime): `a^(p-2) mod p`.
fn mod_inverse(a: &BigInt, p: &BigInt) -> BigInt {
	let two = BigInt::from_u64(2);
	let exp = p.sub(&two);
	a.pow_mod(&exp, p)
}
