//! §4.7 Tetrahedral: 6-simplex decomposition of the unit cell.
//!
//! The six cases are distinguished purely by the ordering of the fractional
//! offsets `(tx, ty, tz)`; ties on the ordering hyperplanes are resolved by
//! the fixed `if`/`else if` chain below, which is allowed to pick either
//! adjacent case as long as it is consistent within a run (§4.2, §8
//! invariant 6 on the source's tetrahedral ordering).

use super::{clamp_result, corner, preamble};
use crate::backend::Backend;
use crate::grid::{Grid, Triple};

pub fn tetrahedral<B: Backend>(
    backend: &B,
    grid: &Grid<B::Scalar>,
    query: &Triple<B::Scalar>,
) -> Triple<B::Scalar> {
    let (_clamped, pre) = preamble(backend, grid, query);

    let c000 = corner(grid, &pre, 0, 0, 0);
    let c100 = corner(grid, &pre, 1, 0, 0);
    let c010 = corner(grid, &pre, 0, 1, 0);
    let c110 = corner(grid, &pre, 1, 1, 0);
    let c001 = corner(grid, &pre, 0, 0, 1);
    let c101 = corner(grid, &pre, 1, 0, 1);
    let c011 = corner(grid, &pre, 0, 1, 1);
    let c111 = corner(grid, &pre, 1, 1, 1);

    let tx = &pre.tx;
    let ty = &pre.ty;
    let tz = &pre.tz;

    // Six cases per the §4.7 table, anchored at c000 throughout.
    let (e1, e2, e3, s1, s2, s3) = if tx.ge(ty) {
        if ty.ge(tz) {
            // tx >= ty >= tz
            (c100.sub(&c000), c110.sub(&c100), c111.sub(&c110), tx.clone(), ty.clone(), tz.clone())
        } else if tx.ge(tz) {
            // tx >= tz > ty
            (c100.sub(&c000), c101.sub(&c100), c111.sub(&c101), tx.clone(), tz.clone(), ty.clone())
        } else {
            // tz > tx >= ty
            (c001.sub(&c000), c101.sub(&c001), c111.sub(&c101), tz.clone(), tx.clone(), ty.clone())
        }
    } else if tz.gt(ty) {
        // tz > ty > tx
        (c001.sub(&c000), c011.sub(&c001), c111.sub(&c011), tz.clone(), ty.clone(), tx.clone())
    } else if tz.gt(tx) {
        // ty >= tz > tx
        (c010.sub(&c000), c011.sub(&c010), c111.sub(&c011), ty.clone(), tz.clone(), tx.clone())
    } else {
        // ty > tx >= tz
        (c010.sub(&c000), c110.sub(&c010), c111.sub(&c110), ty.clone(), tx.clone(), tz.clone())
    };

    let result = c000.add(&e1.scale(&s1)).add(&e2.scale(&s2)).add(&e3.scale(&s3));
    clamp_result(grid, result)
}
