//! Math utility functions.

use euclid::default::Vector3D;
use num_traits::Float;

use crate::color::{Component, Components};

type Vector = Vector3D<Component>;

/// Coefficients for the relative luminance of linear sRGB components.
/// <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>
pub const LUMINANCE_WEIGHTS: Components = Components(0.2126, 0.7152, 0.0722);

/// Multiply each of the 3 components with its weight and sum the results.
pub fn weighted_sum(weights: &Components, value: &Components) -> Component {
    let weights = Vector::new(weights.0, weights.1, weights.2);
    weights.dot(Vector::new(value.0, value.1, value.2))
}

/// Bring a value that drifted at most one unit outside of `[0, 1]` back into
/// range. Only a single correction is applied, values further out stay out of
/// range.
pub fn wrap_unit<T: Float>(value: T) -> T {
    if value < T::zero() {
        value + T::one()
    } else if value > T::one() {
        value - T::one()
    } else {
        value
    }
}

/// Same as [`wrap_unit`], but for a hue in degrees.
pub fn wrap_degrees<T: Float>(degrees: T) -> T {
    let full = T::from(360.0).unwrap_or_else(T::max_value);
    if degrees < T::zero() {
        degrees + full
    } else if degrees >= full {
        degrees - full
    } else {
        degrees
    }
}

/// Blend two channel values. `amount` is in the range `[-100, 100]` and
/// weighs the `left` side. Both weighted values are averaged, so at `0` the
/// result is the mean of both sides.
pub fn weighted_blend<T: Float>(left: T, right: T, amount: T) -> T {
    let hundred = T::from(100.0).unwrap_or_else(T::max_value);
    let two = T::one() + T::one();

    let left_weight = (amount + hundred) / hundred;
    let right_weight = two - left_weight;

    (left * left_weight + right * right_weight) / two
}
