//! Exhaustive curve computations for small fields

use capicrypto_algorithms::ec::{add, CurveParams, Point};
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use std::collections::HashMap;

/// Largest modulus the helpers accept; they run in `O(p)` memory and time
pub const MAX_MODULUS: u64 = 1 << 16;

fn small_modulus(params: &CurveParams) -> u64 {
    params
        .p()
        .to_u64()
        .filter(|&p| p <= MAX_MODULUS)
        .unwrap_or_else(|| panic!("brute force needs p <= {MAX_MODULUS}, got {}", params.p()))
}

/// Every affine point, ordered by `x` then `y`
pub fn affine_points(params: &CurveParams) -> Vec<Point> {
    let p = small_modulus(params);

    let mut roots: HashMap<u64, Vec<u64>> = HashMap::new();
    for y in 0..p {
        roots.entry(y * y % p).or_default().push(y);
    }

    let mut points = Vec::new();
    for x in 0..p {
        let rhs = params
            .rhs(&BigUint::from(x))
            .to_u64()
            .unwrap_or_default();
        if let Some(ys) = roots.get(&rhs) {
            for &y in ys {
                points.push(Point::Affine {
                    x: BigUint::from(x),
                    y: BigUint::from(y),
                });
            }
        }
    }
    points
}

/// Number of points, `∞` included
pub fn group_order(params: &CurveParams) -> u64 {
    affine_points(params).len() as u64 + 1
}

/// Order of `point` by repeated addition
pub fn naive_order(params: &CurveParams, point: &Point) -> u64 {
    let bound = 2 * small_modulus(params) + 2;
    let mut acc = point.clone();
    let mut k = 1u64;
    while !acc.is_identity() {
        acc = add(params, &acc, point).expect("addition on a prime field never fails");
        k += 1;
        assert!(k <= bound, "no order found for {point}");
    }
    k
}

/// `k·P` by repeated addition
pub fn naive_mul(params: &CurveParams, point: &Point, k: u64) -> Point {
    let mut acc = Point::Infinity;
    for _ in 0..k {
        acc = add(params, &acc, point).expect("addition on a prime field never fails");
    }
    acc
}
