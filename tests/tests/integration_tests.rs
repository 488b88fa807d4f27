// Word-sized helpers from the common crate
use capicrypto_common::math_common::{gcd, isqrt, mod_exp, mod_inv, mod_mul};

// Big-integer field arithmetic
use capicrypto_algorithms::field;

// Facade re-exports
use capicrypto::prelude::*;

use num_traits::ToPrimitive;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn big(n: u64) -> BigUint {
    BigUint::from(n)
}

#[test]
fn test_word_and_big_arithmetic_agree() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let p = 19_891u64;

    for _ in 0..1_000 {
        let a = rng.gen_range(0..p);
        let b = rng.gen_range(0..p);
        let e = rng.gen::<u32>() as u64;

        assert_eq!(field::mul_mod(&big(a), &big(b), &big(p)), big(mod_mul(a, b, p)));
        assert_eq!(field::power(&big(a), &big(e), &big(p)), big(mod_exp(a, e, p)));
        assert_eq!(field::gcd(&big(a), &big(b)), big(gcd(a, b)));
        assert_eq!(field::inverse(&big(a), &big(p)), mod_inv(a, p).map(big));
    }
}

#[test]
fn test_isqrt_agrees() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..1_000 {
        let n: u64 = rng.gen();
        assert_eq!(field::isqrt(&big(n)).to_u64(), Some(isqrt(n)));
    }
}

#[test]
fn test_square_roots_on_both_residue_classes() {
    // 383 ≡ 3 (mod 4); 12421 and 10601 ≡ 1 (mod 4)
    for p in [383u64, 12421, 10601] {
        let modulus = big(p);
        for n in 1..p {
            let n = big(n);
            match mod_sqrt(&n, &modulus) {
                Ok(root) => {
                    assert!(is_quadratic_residue(&n, &modulus));
                    assert_eq!(field::mul_mod(&root, &root, &modulus), n);
                }
                Err(Error::NonResidue { .. }) => assert!(!is_quadratic_residue(&n, &modulus)),
                Err(e) => panic!("unexpected error: {e}"),
            }
        }
    }
}

#[test]
fn test_prelude_end_to_end() {
    let params = new_curve(big(727), big(1), big(1)).unwrap();
    let g = find_generator(&params, &big(1000)).unwrap();
    assert_eq!(g.to_string(), "(5, 536)");

    let n = find_order(&g, &params, &big(200)).unwrap();
    assert_eq!(n, big(691));
    assert!(is_prime(&n));

    let curve = Curve::new(params, g, n).unwrap();
    let trace = scalar_mul_traced(curve.params(), curve.generator(), &big(691 * 3)).unwrap();
    assert!(trace.annihilates());
    assert_eq!(
        point_order(curve.generator(), curve.params(), &big(691 * 3)).unwrap(),
        big(691)
    );
}

#[test]
fn test_error_context() {
    let params = new_curve(big(383), big(121), big(11)).unwrap();
    let off_curve = Point::Affine { x: big(2), y: big(1) };

    let err = find_order(&off_curve, &params, &big(10))
        .with_context("order lookup")
        .unwrap_err();
    match err {
        Error::InvalidParameter { context, .. } => assert_eq!(context, "order lookup"),
        other => panic!("expected InvalidParameter, got {other:?}"),
    }
}
