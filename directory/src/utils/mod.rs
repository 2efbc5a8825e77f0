pub mod display;
pub mod geo;
pub mod schedule;

/// Raises `value` to `min`, then lowers it to `max`.
///
/// With `min > max` the result is always `max`.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    let raised = if value < min { min } else { value };
    if raised > max {
        max
    } else {
        raised
    }
}
