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

//! Linkable Spontaneous Anonymous Group (LSAG) ring signatures over a
//! prime-field short Weierstrass curve.
//!
//! A signer holding one private key out of a public ring of `n` keys can
//! produce a signature that proves membership in the ring without
//! revealing which key signed, while exposing a link tag so that two
//! signatures from the same key over the same ring can be recognized as
//! linked. See [`lsag::sign`] and [`lsag::verify`] for the entry points.
//!
//! ```
//! use lsag::{Curve, KeyPair};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let curve = std::sync::Arc::new(Curve::named("secp256k1").unwrap());
//! let mut rng = StdRng::seed_from_u64(42);
//! let ring = KeyPair::generate_ring(curve, 5, &mut rng);
//! let signature = lsag::sign(&ring, 2, b"hello", &mut rng).unwrap();
//! assert!(lsag::verify(&signature).unwrap());
//! ```

#![warn(unused, future_incompatible, nonstandard_style, rust_2018_idioms, rust_2021_compatibility)]
#![deny(unsafe_code)]

pub mod bigint;
pub mod curve;
pub mod der;
pub mod error;
pub mod field;
pub mod keypair;
pub mod lsag;
pub mod point;
pub mod signature;

pub use bigint::BigInt;
pub use curve::{Curve, CurveParams};
pub use error::{LsagError, Result};
pub use keypair::KeyPair;
pub use lsag::{sign, verify};
pub use point::Point;
pub use signature::Signature;
