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

//! Crate-wide error type.
//!
//! Every fatal error kind from the design's error table is a variant here.
//! `VerificationFailed` is deliberately absent: a failed verification is
//! reported as `Ok(false)`, never as an `Err` (see [`crate::lsag::verify`]).

use thiserror::Error;

/// Errors raised by curve construction, group operations, and the LSAG
/// sign/verify flow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LsagError {
	/// Curve construction was attempted over a field this crate does not
	/// support (only prime fields are implemented).
	#[error("curve is not defined over a prime field")]
	UnsupportedField,

	/// A group operation was attempted between points belonging to two
	/// different curves.
	#[error("operands belong to different curves")]
	CurveMismatch,

	/// A scalar supplied to scalar multiplication was negative or otherwise
	/// out of contract.
	#[error("scalar is negative or otherwise invalid")]
	InvalidScalar,

	/// The signer index passed to `sign` was not a valid index into the ring.
	#[error("signer index {index} is out of bounds for a ring of size {ring_size}")]
	InvalidSignerIndex {
		/// The offending index.
		index: usize,
		/// The size of the ring it was checked against.
		ring_size: usize,
	},

	/// The ring member at the signer index has no private scalar.
	#[error("the ring member at the signer index has no private key")]
	MissingPrivateKey,

	/// Sign or verify was called with a ring of size zero.
	#[error("ring must contain at least one member")]
	EmptyRing,

	/// A signature failed a structural check (wrong response-vector length,
	/// or an off-curve link tag) rather than a hash-chain mismatch.
	#[error("signature is structurally malformed: {reason}")]
	MalformedSignature {
		/// Human-readable description of which structural check failed.
		reason: &'static str,
	},
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, LsagError>;
