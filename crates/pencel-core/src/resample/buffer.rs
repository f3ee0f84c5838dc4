//! Owned RGB24 pixel buffer.

use super::error::ResampleError;
use super::kernel::KernelKind;
use crate::color::Argb32;

/// Bytes per RGB24 pixel.
pub const CHANNELS: usize = 3;

/// `width * height * 3`, or `None` on overflow.
#[inline]
pub(crate) fn rgb24_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(CHANNELS)
}

/// A row-major grid of 8-bit RGB samples with no row padding.
///
/// The length is always `width * height * 3` and both dimensions are
/// non-zero.
///
/// # Example
///
/// ```
/// use pencel_core::{KernelKind, PixelBuffer};
///
/// let checker = PixelBuffer::new(vec![0, 0, 0, 255, 255, 255], 2, 1).unwrap();
/// let wide = checker.resample(3, 1, KernelKind::Bilinear).unwrap();
///
/// assert_eq!(wide.as_bytes(), &[0, 0, 0, 127, 127, 127, 255, 255, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Wrap raw RGB24 bytes.
    ///
    /// # Errors
    ///
    /// [`ResampleError::InvalidParameter`] when a dimension is zero or the
    /// length is not `width * height * 3`.
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Result<Self, ResampleError> {
        if width == 0 || height == 0 {
            return Err(ResampleError::InvalidParameter("image dimensions must be non-zero"));
        }
        let expected = rgb24_len(width, height)
            .ok_or(ResampleError::InvalidParameter("image dimensions overflow"))?;
        if data.len() != expected {
            return Err(ResampleError::InvalidParameter(
                "buffer length does not match width * height * 3",
            ));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Fill a new buffer with a single color.
    pub fn filled(width: u32, height: u32, color: Argb32) -> Result<Self, ResampleError> {
        let len = rgb24_len(width, height)
            .ok_or(ResampleError::InvalidParameter("image dimensions overflow"))?;
        let data = color.rgb().into_iter().cycle().take(len).collect();
        Self::new(data, width, height)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// The `[R, G, B]` sample at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the image.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        let at = (y as usize * self.width as usize + x as usize) * CHANNELS;
        [self.data[at], self.data[at + 1], self.data[at + 2]]
    }

    /// Every pixel as a packed color, row 0 left to right, then row 1, ...
    pub fn pixels(&self) -> impl ExactSizeIterator<Item = Argb32> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|px| Argb32::from_rgb(px[0], px[1], px[2]))
    }

    /// Resample to `width` x `height` with the given kernel.
    ///
    /// See [`resample_rgb24`](super::resample_rgb24) for the algorithm.
    pub fn resample(
        &self,
        width: u32,
        height: u32,
        kernel: KernelKind,
    ) -> Result<PixelBuffer, ResampleError> {
        let data = super::resample_rgb24(
            &self.data,
            self.width,
            self.height,
            width,
            height,
            kernel,
        )?;
        Ok(PixelBuffer {
            data,
            width,
            height,
        })
    }
}
