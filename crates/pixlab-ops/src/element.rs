//! Structuring elements for morphological operations.
//!
//! A structuring element is the set of `(dx, dy)` offsets around the
//! origin that make up each pixel's neighborhood. Elements are built once
//! per morphology invocation and only read during the scan.
//!
//! # Shapes
//!
//! - [`ElementShape::Rectangle`] - full `(2r+1) x (2r+1)` grid
//! - [`ElementShape::Cross`] - the row and column through the origin
//!
//! with `r = size / 2` (integer division), so even sizes round up to the
//! next odd extent.
//!
//! # Example
//!
//! ```rust
//! use pixlab_ops::element::{ElementShape, StructuringElement};
//!
//! let rect = StructuringElement::new(ElementShape::Rectangle, 3).unwrap();
//! assert_eq!(rect.len(), 9);
//!
//! let cross: ElementShape = "cross".parse().unwrap();
//! assert_eq!(StructuringElement::new(cross, 3).unwrap().len(), 5);
//! ```

use crate::{OpsError, OpsResult};
use std::fmt;
use std::str::FromStr;

/// Shape of a structuring element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ElementShape {
    /// Square neighborhood.
    #[default]
    Rectangle,
    /// Plus-shaped neighborhood, arms of width 1.
    Cross,
}

impl FromStr for ElementShape {
    type Err = OpsError;

    fn from_str(s: &str) -> OpsResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "rect" | "rectangle" => Ok(Self::Rectangle),
            "cross" => Ok(Self::Cross),
            other => Err(OpsError::InvalidParameter(format!(
                "unknown structuring element '{}' (expected rect or cross)",
                other
            ))),
        }
    }
}

impl fmt::Display for ElementShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rectangle => f.write_str("rect"),
            Self::Cross => f.write_str("cross"),
        }
    }
}

/// A neighborhood shape as a list of offsets relative to the origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuringElement {
    shape: ElementShape,
    size: usize,
    offsets: Vec<(i32, i32)>,
}

impl StructuringElement {
    /// Builds an element of the given shape and size.
    ///
    /// Offsets are listed row by row (`dy` outer, `dx` inner).
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidParameter`] if `size` is 0 or too large
    /// to address.
    pub fn new(shape: ElementShape, size: usize) -> OpsResult<Self> {
        if size == 0 {
            return Err(OpsError::InvalidParameter(
                "structuring element size must be at least 1".into(),
            ));
        }
        let radius = i32::try_from(size / 2).map_err(|_| {
            OpsError::InvalidParameter(format!("structuring element size {} is too large", size))
        })?;

        let mut offsets = Vec::new();
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let keep = match shape {
                    ElementShape::Rectangle => true,
                    ElementShape::Cross => dx == 0 || dy == 0,
                };
                if keep {
                    offsets.push((dx, dy));
                }
            }
        }

        Ok(Self { shape, size, offsets })
    }

    /// Returns the shape this element was built from.
    #[inline]
    pub fn shape(&self) -> ElementShape {
        self.shape
    }

    /// Returns the requested size.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the arm length, `size / 2`.
    #[inline]
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    /// Offsets as `(dx, dy)` pairs.
    #[inline]
    pub fn offsets(&self) -> &[(i32, i32)] {
        &self.offsets
    }

    /// Number of offsets.
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns `true` if the element has no offsets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_offsets() {
        let se = StructuringElement::new(ElementShape::Rectangle, 3).unwrap();
        assert_eq!(se.len(), 9);
        assert!(se.offsets().contains(&(0, 0)));
        assert!(se.offsets().contains(&(-1, -1)));
        assert!(se.offsets().contains(&(1, 1)));
        assert_eq!(se.offsets()[0], (-1, -1));
        assert_eq!(se.offsets()[1], (0, -1));
    }

    #[test]
    fn test_cross_offsets() {
        let se = StructuringElement::new(ElementShape::Cross, 3).unwrap();
        assert_eq!(se.len(), 5);
        for o in [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)] {
            assert!(se.offsets().contains(&o));
        }
        assert!(!se.offsets().contains(&(-1, -1)));
        assert!(!se.offsets().contains(&(1, 1)));
    }

    #[test]
    fn test_size_one_is_origin() {
        for shape in [ElementShape::Rectangle, ElementShape::Cross] {
            let se = StructuringElement::new(shape, 1).unwrap();
            assert_eq!(se.offsets(), &[(0, 0)]);
            assert_eq!(se.radius(), 0);
        }
    }

    #[test]
    fn test_even_size_rounds_up() {
        let rect = StructuringElement::new(ElementShape::Rectangle, 4).unwrap();
        assert_eq!(rect.radius(), 2);
        assert_eq!(rect.len(), 25);

        let cross = StructuringElement::new(ElementShape::Cross, 4).unwrap();
        assert_eq!(cross.len(), 9);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(StructuringElement::new(ElementShape::Rectangle, 0).is_err());
        assert!(StructuringElement::new(ElementShape::Cross, 0).is_err());
    }

    #[test]
    fn test_parse_shape() {
        assert_eq!("rect".parse::<ElementShape>().unwrap(), ElementShape::Rectangle);
        assert_eq!("Rectangle".parse::<ElementShape>().unwrap(), ElementShape::Rectangle);
        assert_eq!("CROSS".parse::<ElementShape>().unwrap(), ElementShape::Cross);

        let err = "disk".parse::<ElementShape>().unwrap_err();
        assert!(err.to_string().contains("disk"));
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for shape in [ElementShape::Rectangle, ElementShape::Cross] {
            assert_eq!(shape.to_string().parse::<ElementShape>().unwrap(), shape);
        }
    }
}
