//! End-to-end scenarios on fixed curves: the 383 toy curve, singular
//! parameters and a 256-bit curve whose order is out of reach.

use capicrypto::prelude::*;
use capicrypto_algorithms::search::search_order;
use capicrypto_params::demo::DEMO_256;
use capicrypto_params::toy::capicua::{CAPICUA_383, CAPICUA_383_TRACE};
use num_traits::One;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn big(n: u64) -> BigUint {
    BigUint::from(n)
}

fn affine(x: u64, y: u64) -> Point {
    Point::Affine { x: big(x), y: big(y) }
}

fn demo_params() -> CurveParams {
    CurveParams::try_from(&DEMO_256).unwrap()
}

#[test]
fn test_toy_curve_from_scratch() {
    let params = new_curve(big(383), big(121), big(11)).unwrap();
    let g = find_generator(&params, &big(1000)).unwrap();
    assert_eq!(g, affine(CAPICUA_383.g_x, CAPICUA_383.g_y));

    let found = search_order(&g, &params, &big(200)).unwrap();
    assert_eq!(found.order, big(CAPICUA_383.n));
    assert_eq!(found.trace(), BigInt::from(CAPICUA_383_TRACE));
    assert!(is_prime(&found.order));

    let curve = Curve::new(params, g, found.order).unwrap();
    assert_eq!(curve.order().unwrap(), &big(353));
    assert!(curve.cofactor().is_one());
}

#[test]
fn test_toy_curve_multiples() {
    let curve = Curve::try_from(&CAPICUA_383).unwrap();
    let params = curve.params();
    let g = curve.generator();

    let g2 = double(params, g).unwrap();
    assert_eq!(g2, affine(185, 116));
    let g3 = add(params, &g2, g).unwrap();
    assert_eq!(g3, affine(339, 61));
    assert_eq!(curve.mul_generator(&big(3)).unwrap(), g3);

    // (n - 1)·G = -G
    let last = curve.mul_generator(&big(352)).unwrap();
    assert_eq!(last, negate(params, g));
    assert!(add(params, &last, g).unwrap().is_identity());

    assert!(curve.mul_generator(&big(353)).is_err());
    assert!(scalar_mul(params, g, &big(353)).unwrap().is_identity());
}

#[test]
fn test_toy_curve_keypair() {
    let curve = Curve::try_from(&CAPICUA_383).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(383);

    for _ in 0..16 {
        let (secret, public) = curve.keypair(&mut rng).unwrap();
        assert!(secret >= BigUint::one() && secret < big(353));
        assert!(curve.params().contains(&public));
        assert_eq!(scalar_mul(curve.params(), curve.generator(), &secret).unwrap(), public);
    }
}

#[test]
fn test_singular_parameters_are_rejected() {
    let err = new_curve(big(383), big(0), big(0)).unwrap_err();
    assert!(matches!(err, Error::SingularCurve { .. }));

    // 4·(-3)³ + 27·2² = -108 + 108
    let err = new_curve(big(383), big(380), big(2)).unwrap_err();
    assert!(matches!(err, Error::SingularCurve { .. }));

    // Same curve written with a negative coefficient
    let a = reduce(&BigInt::from(-3), &big(383));
    assert!(matches!(
        new_curve(big(383), a, big(2)),
        Err(Error::SingularCurve { .. })
    ));
}

#[test]
fn test_composite_modulus_is_rejected() {
    for p in [0u64, 1, 2, 3, 4, 9, 14841] {
        let err = new_curve(big(p), big(1), big(1)).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { .. }), "p = {p}");
    }
}

#[test]
fn test_demo_curve_has_a_point() {
    let params = demo_params();
    assert_eq!(params.p().bits(), 256);

    let g = find_generator(&params, &big(1000)).unwrap();
    let g_y = BigUint::from_bytes_be(&DEMO_256.g_y);
    assert_eq!(g, Point::Affine { x: big(DEMO_256.g_x), y: g_y });
    assert!(params.contains(&g));
}

#[test]
fn test_demo_curve_square_roots() {
    let params = demo_params();
    let p = params.p();

    let rhs = params.rhs(&big(DEMO_256.g_x));
    assert!(is_quadratic_residue(&rhs, p));
    let root = mod_sqrt(&rhs, p).unwrap();
    assert_eq!(power(&root, &big(2), p), rhs);
    assert_eq!(root, BigUint::from_bytes_be(&DEMO_256.g_y));
}

#[test]
fn test_demo_curve_order_out_of_reach() {
    let params = demo_params();
    let g = find_generator(&params, &big(1000)).unwrap();

    let err = find_order(&g, &params, &big(3)).unwrap_err();
    assert_eq!(err, Error::NoOrderFound { radius: big(3) });
    assert!(err.is_search_exhausted());
}

#[test]
fn test_demo_curve_approximate_order_is_opt_in() {
    let params = demo_params();
    let strict = CurveOptions {
        search_radius: big(3),
        ..CurveOptions::default()
    };
    assert!(matches!(
        Curve::build(params.clone(), &strict),
        Err(Error::NoOrderFound { .. })
    ));

    let lenient = CurveOptions {
        allow_approximate_order: true,
        ..strict
    };
    let curve = Curve::build(params.clone(), &lenient).unwrap();
    assert_eq!(
        curve.order_status(),
        &OrderStatus::Approximate(params.p() + 1u32)
    );
    assert!(!curve.order_status().is_verified());
    assert!(curve.order().is_err());
    assert!(curve.mul_generator(&big(2)).is_err());

    // Plain arithmetic does not need the order
    let g = curve.generator();
    assert_eq!(
        scalar_mul(&params, g, &big(2)).unwrap(),
        double(&params, g).unwrap()
    );
}
