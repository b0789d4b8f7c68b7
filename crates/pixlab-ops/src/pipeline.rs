//! Processing modes.
//!
//! The sandbox offers three modes over one set of parameters:
//!
//! - [`Method::Morphology`] - grayscale, then erosion or dilation
//! - [`Method::Pixelwise`] - brightness, contrast, invert
//! - [`Method::Contrast`] - pixelwise, then linear contrast stretch
//!
//! With the `parallel` feature the morphology and pixelwise scans run on
//! the Rayon pool; output is identical either way.
//!
//! # Example
//!
//! ```rust
//! use pixlab_core::PixelBuffer;
//! use pixlab_ops::{process, Method, ProcessingParameters};
//!
//! let src = PixelBuffer::filled(4, 4, [60, 80, 100, 255]).unwrap();
//! let params = ProcessingParameters { brightness: 10, ..Default::default() };
//! let out = process(&src, Method::Pixelwise, &params).unwrap();
//! assert_eq!(out.get_pixel(0, 0), Some([70, 90, 110, 255]));
//! ```

use crate::element::{ElementShape, StructuringElement};
use crate::morphology::MorphOp;
use crate::pixelwise::PixelwiseParams;
use crate::stretch::linear_contrast_stretch;
use crate::{OpsError, OpsResult};
use pixlab_core::PixelBuffer;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Processing mode selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// Grayscale morphology.
    #[default]
    Morphology,
    /// Brightness, contrast and invert.
    Pixelwise,
    /// Pixelwise followed by linear contrast stretch.
    Contrast,
}

impl FromStr for Method {
    type Err = OpsError;

    fn from_str(s: &str) -> OpsResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "morphology" | "morph" => Ok(Self::Morphology),
            "pixelwise" => Ok(Self::Pixelwise),
            "contrast" => Ok(Self::Contrast),
            other => Err(OpsError::InvalidParameter(format!(
                "unknown processing method '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Morphology => f.write_str("morphology"),
            Self::Pixelwise => f.write_str("pixelwise"),
            Self::Contrast => f.write_str("contrast"),
        }
    }
}

/// Every knob the sandbox exposes, supplied per invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessingParameters {
    /// Brightness delta.
    pub brightness: i32,
    /// Contrast factor, 0 = unchanged.
    pub contrast: f64,
    /// Invert colors last.
    pub invert: bool,
    /// Erosion or dilation.
    pub op: MorphOp,
    /// Structuring element shape.
    pub shape: ElementShape,
    /// Structuring element size.
    pub size: usize,
}

impl Default for ProcessingParameters {
    fn default() -> Self {
        Self {
            brightness: 0,
            contrast: 0.0,
            invert: false,
            op: MorphOp::Erosion,
            shape: ElementShape::Rectangle,
            size: 3,
        }
    }
}

impl ProcessingParameters {
    /// The pixelwise subset of these parameters.
    pub fn pixelwise(&self) -> PixelwiseParams {
        PixelwiseParams {
            brightness: self.brightness,
            contrast: self.contrast,
            invert: self.invert,
        }
    }

    /// Builds the structuring element these parameters describe.
    pub fn element(&self) -> OpsResult<StructuringElement> {
        StructuringElement::new(self.shape, self.size)
    }
}

/// Runs one processing mode on `src`.
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`] for a zero element size in
/// morphology mode.
pub fn process(src: &PixelBuffer, method: Method, params: &ProcessingParameters) -> OpsResult<PixelBuffer> {
    debug!(%method, width = src.width(), height = src.height(), "process");

    match method {
        Method::Morphology => {
            let se = params.element()?;
            morphology(src, params.op, &se)
        }
        Method::Pixelwise => pixelwise(src, &params.pixelwise()),
        Method::Contrast => {
            let adjusted = pixelwise(src, &params.pixelwise())?;
            Ok(linear_contrast_stretch(&adjusted))
        }
    }
}

#[cfg(feature = "parallel")]
fn morphology(src: &PixelBuffer, op: MorphOp, se: &StructuringElement) -> OpsResult<PixelBuffer> {
    crate::parallel::morphology(src, op, se)
}

#[cfg(not(feature = "parallel"))]
fn morphology(src: &PixelBuffer, op: MorphOp, se: &StructuringElement) -> OpsResult<PixelBuffer> {
    crate::morphology::morphology(src, op, se)
}

#[cfg(feature = "parallel")]
fn pixelwise(src: &PixelBuffer, params: &PixelwiseParams) -> OpsResult<PixelBuffer> {
    crate::parallel::apply_pixelwise(src, params)
}

#[cfg(not(feature = "parallel"))]
fn pixelwise(src: &PixelBuffer, params: &PixelwiseParams) -> OpsResult<PixelBuffer> {
    Ok(crate::pixelwise::apply_pixelwise(src, params))
}
