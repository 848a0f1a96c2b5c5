//! Rounding shared by the calculators

/// Round to the nearest integer, ties toward positive infinity
///
/// `f64::round` sends -2.5 to -3; calorie remainders can be negative, and
/// every rounding step must agree with the form's results on ties.
/// Comparing the fractional part avoids `value + 0.5` rounding up
/// 0.49999999999999994 to 1.0.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// `round_half_up` as whole calories or grams, saturating at the i32 range
pub fn round_to_i32(value: f64) -> i32 {
    round_half_up(value) as i32
}
