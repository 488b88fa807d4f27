//! Point discovery by scanning x-coordinates

use crate::ec::{CurveParams, Point};
use crate::error::{Error, Result};
use crate::field::{is_quadratic_residue, mod_sqrt};
use num_bigint::BigUint;

/// First `x` tried by the scan; `x = 0` and `x = 1` are skipped
const FIRST_X: u32 = 2;

/// The first point found scanning `x = 2, 3, …` while `x < min(x_max, p)`.
///
/// For each `x` whose right-hand side is a non-zero quadratic residue the
/// root from [`mod_sqrt`] is taken and the point re-checked against the
/// curve equation. Exhausting the range is [`Error::NoGeneratorFound`].
///
/// On a prime-order curve every affine point generates the group. On other
/// curves the point returned may generate a proper subgroup only.
pub fn find_generator(params: &CurveParams, x_max: &BigUint) -> Result<Point> {
    let mut points = ScanPoints::new(params, x_max);
    match points.next() {
        Some(point) => point,
        None => Err(Error::NoGeneratorFound {
            x_max: x_max.clone(),
        }),
    }
}

/// Up to `limit` points in scan order, one per x-coordinate
pub fn find_points(params: &CurveParams, x_max: &BigUint, limit: usize) -> Result<Vec<Point>> {
    ScanPoints::new(params, x_max).take(limit).collect()
}

struct ScanPoints<'a> {
    params: &'a CurveParams,
    x: BigUint,
    end: BigUint,
}

impl<'a> ScanPoints<'a> {
    fn new(params: &'a CurveParams, x_max: &BigUint) -> Self {
        let end = x_max.min(params.p()).clone();
        Self {
            params,
            x: BigUint::from(FIRST_X),
            end,
        }
    }
}

impl Iterator for ScanPoints<'_> {
    type Item = Result<Point>;

    fn next(&mut self) -> Option<Self::Item> {
        let p = self.params.p();
        while self.x < self.end {
            let x = self.x.clone();
            self.x += 1u32;

            let rhs = self.params.rhs(&x);
            if !is_quadratic_residue(&rhs, p) {
                continue;
            }
            let y = match mod_sqrt(&rhs, p) {
                Ok(y) => y,
                Err(e) => return Some(Err(e)),
            };
            if self.params.is_on_curve(&x, &y) {
                return Some(Ok(Point::Affine { x, y }));
            }
        }
        None
    }
}
