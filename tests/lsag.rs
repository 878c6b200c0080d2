//! Integration tests exercising the public API end to end.

use std::sync::Arc;

use lsag::{BigInt, Curve, KeyPair, Point, Signature};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn secp256k1() -> Arc<Curve> {
	Arc::new(Curve::named("secp256k1").unwrap())
}

#[test]
fn round_trip_across_ring_sizes() {
	let mut rng = StdRng::seed_from_u64(1000);
	for &k in &[1usize, 2, 3, 5, 10, 100] {
		let ring = KeyPair::generate_ring(secp256k1(), k, &mut rng);
		for pi in 0..k {
			let sig = lsag::sign(&ring, pi, b"integration message", &mut rng).unwrap();
			assert!(lsag::verify(&sig).unwrap(), "round trip failed for k={k}, pi={pi}");
		}
	}
}

#[test]
fn empty_ring_raises_empty_ring_error() {
	let mut rng = StdRng::seed_from_u64(1001);
	let ring: Vec<KeyPair> = vec![];
	let err = lsag::sign(&ring, 0, b"x", &mut rng).unwrap_err();
	assert_eq!(err, lsag::LsagError::EmptyRing);
}

#[test]
fn singleton_ring_verifies() {
	let mut rng = StdRng::seed_from_u64(1002);
	let ring = KeyPair::generate_ring(secp256k1(), 1, &mut rng);
	let sig = lsag::sign(&ring, 0, b"hello", &mut rng).unwrap();
	assert!(lsag::verify(&sig).unwrap());
}

#[test]
fn tonelli_shanks_edge_case() {
	let root = lsag::field::modular_sqrt(&BigInt::from_u64(10), &BigInt::from_u64(13));
	assert!(root == BigInt::from_u64(6) || root == BigInt::from_u64(7));
	assert_eq!(lsag::field::modular_sqrt(&BigInt::from_u64(5), &BigInt::from_u64(13)), BigInt::zero());
}

#[test]
fn legendre_symbol_concrete_values() {
	use lsag::field::{legendre_symbol, Legendre};
	assert_eq!(legendre_symbol(&BigInt::from_u64(2), &BigInt::from_u64(7)), Legendre::Residue);
	assert_eq!(legendre_symbol(&BigInt::from_u64(3), &BigInt::from_u64(7)), Legendre::NonResidue);
	assert_eq!(legendre_symbol(&BigInt::from_u64(7), &BigInt::from_u64(7)), Legendre::Zero);
}

#[test]
fn hash_to_point_on_secp256k1_lands_on_curve() {
	let curve = secp256k1();
	let p = curve.hash_to_point(b"");
	assert!(curve.is_on_curve(p.x().unwrap(), p.y().unwrap()));
}

#[test]
fn ring_of_ten_survives_minimal_byte_round_trip() {
	let mut rng = StdRng::seed_from_u64(1003);
	let curve = secp256k1();
	let ring = KeyPair::generate_ring(curve.clone(), 10, &mut rng);
	let sig = lsag::sign(&ring, 4, b"re-serialize me", &mut rng).unwrap();

	// Push every scalar and point through the minimal big-endian helper and
	// back, exactly as a caller persisting and reloading a signature would.
	let c0 = BigInt::from_bytes_be(&sig.c0().to_bytes_be_minimal());
	let s: Vec<BigInt> =
		sig.responses().iter().map(|v| BigInt::from_bytes_be(&v.to_bytes_be_minimal())).collect();
	let ring_points: Vec<Point> = sig
		.ring()
		.iter()
		.map(|p| {
			let x = BigInt::from_bytes_be(&p.x().unwrap().to_bytes_be_minimal());
			let y = BigInt::from_bytes_be(&p.y().unwrap().to_bytes_be_minimal());
			Point::affine(curve.clone(), x, y).unwrap()
		})
		.collect();
	let link_tag = {
		let x = BigInt::from_bytes_be(&sig.link_tag().x().unwrap().to_bytes_be_minimal());
		let y = BigInt::from_bytes_be(&sig.link_tag().y().unwrap().to_bytes_be_minimal());
		Point::affine(curve, x, y).unwrap()
	};

	let rebuilt = reconstruct_signature(ring_points, sig.message().to_vec(), c0, s, link_tag);
	assert!(lsag::verify(&rebuilt).unwrap());
}

#[test]
fn linkage_distinguishes_same_and_different_signers() {
	let mut rng = StdRng::seed_from_u64(1004);
	let ring = KeyPair::generate_ring(secp256k1(), 6, &mut rng);

	let a1 = lsag::sign(&ring, 3, b"message one", &mut rng).unwrap();
	let a2 = lsag::sign(&ring, 3, b"message two", &mut rng).unwrap();
	assert!(a1.linked_with(&a2));

	let b1 = lsag::sign(&ring, 5, b"message one", &mut rng).unwrap();
	assert!(!a1.linked_with(&b1));
}

fn reconstruct_signature(
	ring: Vec<Point>,
	message: Vec<u8>,
	c0: BigInt,
	s: Vec<BigInt>,
	link_tag: Point,
) -> Signature {
	Signature::from_parts(ring, message, c0, s, link_tag)
}
