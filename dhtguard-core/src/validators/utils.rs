//! Shared range-check helpers

/// Inclusive range check that also rejects NaN and infinities
pub fn within(value: f32, min: f32, max: f32) -> bool {
    value.is_finite() && value >= min && value <= max
}
