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

//! Minimal named-curve parameter provider.
//!
//! This is deliberately not a general SEC1/X9.62 `ECParameters` DER parser:
//! the design treats "parse curve parameters from DER/PEM" as an external
//! capability and only asks this crate to consume the resulting `(p, a, b,
//! G, n, h)` tuple (see [`crate::curve::CurveParams`]). What lives here is
//! the one named curve this crate ships built in, keyed by the name a caller
//! would find in an X9.62 `namedCurve` OID table.

use crate::bigint::BigInt;
use crate::curve::CurveParams;
use crate::error::{LsagError, Result};

/// Looks up a built-in curve by name. Currently only `"secp256k1"` is
/// recognized.
pub fn named_curve_params(name: &str) -> Result<CurveParams> {
	match name {
		"secp256k1" => Ok(secp256k1()),
		_ => Err(LsagError::UnsupportedField),
	}
}

/// The secp256k1 domain parameters (SEC 2, section 2.4.1).
fn secp256k1() -> CurveParams {
	CurveParams {
		p: hex("FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE FFFFFC2F"),
		a: BigInt::zero(),
		b: BigInt::from_u64(7),
		gx: hex("79BE667E F9DCBBAC 55A06295 CE870B07 029BFCDB 2DCE28D9 59F2815B 16F81798"),
		gy: hex("483ADA77 26A3C465 5DA4FBFC 0E1108A8 FD17B448 A6855419 9C47D08F FB10D4B8"),
		n: hex("FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE BAAEDCE6 AF48A03B BFD25E8C D0364141"),
		h: BigInt::one(),
	}
}

fn hex(s: &str) -> BigInt {
	let mut cleaned = std::string::String::with_capacity(s.len());
	for c in s.chars() {
		if !c.is_whitespace() {
			cleaned.push(c);
		}
	}
	BigInt::from_hex_digits(&cleaned)
}
