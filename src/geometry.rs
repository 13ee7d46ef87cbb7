//! Rectangle value type with derived area and perimeter.
//! The dimensions carry no unit, so callers must supply both sides in the
//! same unit for the derived values to stay meaningful.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("dimension must be a finite number, got {0}")]
    NonFiniteDimension(f64),
}

/// A rectangle described by its two side lengths.
///
/// The fields are public and unvalidated: zero and negative dimensions are
/// accepted and flow through the arithmetic unchanged. Use
/// [`Rectangle::try_new`] at boundaries where non-finite input should be
/// rejected instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub length: f64,
    pub width: f64,
}

impl Rectangle {
    /// Creates a rectangle, storing both side lengths unchanged.
    pub fn new(length: f64, width: f64) -> Self {
        Self { length, width }
    }

    /// Creates a rectangle, rejecting NaN and infinite side lengths.
    pub fn try_new(length: f64, width: f64) -> Result<Self, GeometryError> {
        for value in [length, width] {
            if !value.is_finite() {
                return Err(GeometryError::NonFiniteDimension(value));
            }
        }
        Ok(Self::new(length, width))
    }

    /// Returns the area of this rectangle.
    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    /// Returns the perimeter length of this rectangle.
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.length + self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::Rectangle;
    use serde_json::json;

    #[test]
    fn computes_area_and_perimeter() {
        let rect = Rectangle::new(2.0, 5.0);
        assert_eq!(rect.area(), 10.0);
        assert_eq!(rect.perimeter(), 14.0);
    }

    #[test]
    fn passes_zero_and_negative_dimensions_through() {
        let flat = Rectangle::new(0.0, 4.0);
        assert_eq!(flat.area(), 0.0);
        assert_eq!(flat.perimeter(), 8.0);

        let inverted = Rectangle::new(-2.0, 5.0);
        assert_eq!(inverted.area(), -10.0);
        assert_eq!(inverted.perimeter(), 6.0);
    }

    #[test]
    fn checked_constructor_rejects_non_finite_dimensions() {
        let err = Rectangle::try_new(f64::NAN, 1.0).unwrap_err();
        assert!(format!("{err}").contains("finite"));
        assert!(Rectangle::try_new(1.0, f64::INFINITY).is_err());
        assert!(Rectangle::try_new(-3.0, 0.0).is_ok());
    }

    #[test]
    fn serializes_as_plain_fields() {
        let rect = Rectangle::new(2.0, 5.0);
        let value = serde_json::to_value(rect).expect("serialization should succeed");
        assert_eq!(value, json!({ "length": 2.0, "width": 5.0 }));
    }

    #[test]
    fn repeated_calls_return_identical_results() {
        let rect = Rectangle::new(3.5, 1.25);
        assert_eq!(rect.area(), rect.area());
        assert_eq!(rect.perimeter(), rect.perimeter());
    }
}
