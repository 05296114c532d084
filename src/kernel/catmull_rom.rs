//! The Catmull-Rom cubic convolution kernel shared by every cubic-family
//! interpolator (§4.8-4.11).

use crate::backend::Backend;
use crate::scalar::ScalarOps;

/// `K(u; a = -0.5)`, the cubic convolution kernel with compact support
/// `[-2, 2]`.
///
/// ```text
/// |u| <= 1 : (a+2)|u|^3 - (a+3)|u|^2 + 1
/// 1 < |u| < 2 : a|u|^3 - 5a|u|^2 + 8a|u| - 4a
/// otherwise : 0
/// ```
pub fn weight<B: Backend>(backend: &B, u: &B::Scalar) -> B::Scalar {
    let a = backend.literal(-0.5);
    let one = backend.literal(1.0);
    let two = backend.literal(2.0);
    let abs_u = u.abs();

    if abs_u.le(&one) {
        let u2 = abs_u.clone() * abs_u.clone();
        let u3 = u2.clone() * abs_u.clone();
        (a.clone() + two.clone()) * u3 - (a + backend.literal(3.0)) * u2 + one
    } else if abs_u.lt(&two) {
        let u2 = abs_u.clone() * abs_u.clone();
        let u3 = u2.clone() * abs_u.clone();
        a.clone() * u3 - backend.literal(5.0) * a.clone() * u2 + backend.literal(8.0) * a.clone() * abs_u
            - backend.literal(4.0) * a
    } else {
        backend.literal(0.0)
    }
}

/// The four weights `(K(t+1), K(t), K(t-1), K(t-2))` for a 4-wide
/// Catmull-Rom neighbourhood anchored one sample below the integer part of
/// the coordinate (§4.8, §4.9, §4.10).
pub fn weights4<B: Backend>(backend: &B, t: &B::Scalar) -> [B::Scalar; 4] {
    let one = backend.literal(1.0);
    let two = backend.literal(2.0);
    [
        weight(backend, &(t.clone() + one.clone())),
        weight(backend, t),
        weight(backend, &(t.clone() - one)),
        weight(backend, &(t.clone() - two)),
    ]
}

/// The six weights `(K(t+2), K(t+1), K(t), K(t-1), K(t-2), K(t-3))` for the
/// conceptual 6-wide kernel (§4.11).
pub fn weights6<B: Backend>(backend: &B, t: &B::Scalar) -> [B::Scalar; 6] {
    let one = backend.literal(1.0);
    let two = backend.literal(2.0);
    let three = backend.literal(3.0);
    [
        weight(backend, &(t.clone() + two.clone())),
        weight(backend, &(t.clone() + one.clone())),
        weight(backend, t),
        weight(backend, &(t.clone() - one)),
        weight(backend, &(t.clone() - two)),
        weight(backend, &(t.clone() - three)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::d64::D64;

    #[test]
    fn unit_sum_at_arbitrary_offset() {
        for t in [0.0, 0.13, 0.37, 0.5, 0.81, 0.999] {
            let w = weights4(&D64, &t);
            let sum: f64 = w.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "sum({t}) = {sum}");
        }
    }

    #[test]
    fn weight_is_one_at_zero_and_zero_at_support_boundary() {
        assert!((weight(&D64, &0.0) - 1.0).abs() < 1e-12);
        assert!(weight(&D64, &2.0).abs() < 1e-12);
        assert!(weight(&D64, &-2.0).abs() < 1e-12);
    }
}
