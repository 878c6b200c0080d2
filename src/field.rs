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

//! Modular square root and Legendre symbol over `ℤ_p` (Component B).
//!
//! Signer and verifier both reach [`modular_sqrt`] only through
//! [`crate::curve::Curve::hash_to_point`], so any deviation in the step
//! ordering below breaks hash-to-point agreement between them.

use crate::bigint::BigInt;

/// The Legendre symbol `L(a, p) = a^((p-1)/2) mod p`, interpreted as `+1` if
/// `a` is a nonzero quadratic residue mod `p`, `-1` if it is a non-residue,
/// and `0` if `p` divides `a`. `p` must be an odd prime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Legendre {
	/// `a` is a nonzero quadratic residue mod `p`.
	Residue,
	/// `a` is a quadratic non-residue mod `p`.
	NonResidue,
	/// `p` divides `a`.
	Zero,
}

/// Computes the Legendre symbol of `a` modulo the odd prime `p`.
pub fn legendre_symbol(a: &BigInt, p: &BigInt) -> Legendre {
	let a = a.rem(p);
	if a.is_zero() {
		return Legendre::Zero;
	}
	let one = BigInt::one();
	let p_minus_one = p.sub(&one);
	let exp = p_minus_one.div2();
	let ls = a.pow_mod(&exp, p);
	if ls == p_minus_one {
		Legendre::NonResidue
	} else {
		Legendre::Residue
	}
}

/// Finds `x` such that `x² ≡ a (mod p)` for odd prime `p`, or `BigInt::zero()`
/// if no such `x` exists. Either root may be returned; `p - x` is also a
/// root. Implements Tonelli–Shanks.
pub fn modular_sqrt(a: &BigInt, p: &BigInt) -> BigInt {
	let one = BigInt::one();
	let two = BigInt::from_u64(2);

	if legendre_symbol(a, p) != Legendre::Residue {
		return BigInt::zero();
	}
	if a.is_zero() {
		return BigInt::zero();
	}
	if *p == two {
		return a.rem(p);
	}
	if p.rem(&BigInt::from_u64(4)) == BigInt::from_u64(3) {
		let exp = p.add(&one).div2().div2();
		return a.pow_mod(&exp, p);
	}

	// Factor p - 1 = s * 2^e with s odd.
	let mut s = p.sub(&one);
	let mut e: u64 = 0;
	while s.is_even() {
		s = s.div2();
		e += 1;
	}

	// Smallest n >= 2 with L(n, p) = -1.
	let mut n = two.clone();
	while legendre_symbol(&n, p) != Legendre::NonResidue {
		n = n.add_mod(&one, p);
	}

	let s_plus_1_over_2 = s.add(&one).div2();
	let mut x = a.pow_mod(&s_plus_1_over_2, p);
	let mut b = a.pow_mod(&s, p);
	let mut g = n.pow_mod(&s, p);
	let mut r = e;

	loop {
		let mut t = b.clone();
		let mut m: u64 = 0;
		while m < r {
			if t == one {
				break;
			}
			t = t.mul_mod(&t, p);
			m += 1;
		}

		if m == 0 {
			return x;
		}

		// gs = g^(2^(r - m - 1)) mod p, via repeated squaring from g.
		let mut gs = g.clone();
		for _ in 0..(r - m - 1) {
			gs = gs.mul_mod(&gs, p);
		}
		g = gs.mul_mod(&gs, p);
		x = x.mul_mod(&gs, p);
		b = b.mul_mod(&g, p);
		r = m;
	}
}
