//! Separable two-pass image resampling.
//!
//! The horizontal pass resizes every source row to the destination width,
//! producing a `dst_width x src_height` intermediate buffer. The vertical
//! pass then resizes every column of that buffer to the destination height.
//! This costs `O(dst_w * src_h + dst_w * dst_h)` samples instead of
//! `O(dst_w * dst_h * kernel_area)` for a direct 2D kernel.
//!
//! Coordinates map the first and last destination samples onto the first
//! and last source samples (`ratio = (src - 1) / (dst - 1)`), so corners are
//! always preserved exactly.
//!
//! With the `parallel` feature each pass splits its output rows across a
//! rayon pool. The result is byte-identical to the sequential path.

mod buffer;
mod error;
mod kernel;

pub use buffer::{PixelBuffer, CHANNELS};
pub use error::ResampleError;
pub use kernel::{KernelKind, UnknownKernel};

use buffer::rgb24_len;
use kernel::{Sampler, Taps};

/// Resample a packed RGB24 image.
///
/// Returns a freshly allocated `dst_width * dst_height * 3` buffer. The
/// source is only read.
///
/// # Errors
///
/// - [`ResampleError::InvalidParameter`]: a zero dimension, or `src` is not
///   `src_width * src_height * 3` bytes long.
/// - [`ResampleError::UnsupportedKernel`]: `kernel` has no sampling strategy.
///   This is checked before the same-size shortcut, so an unsupported kernel
///   is rejected even when nothing would need interpolating.
///
/// When the sizes already match, the source is copied bit for bit.
///
/// # Example
///
/// ```
/// use pencel_core::{resample_rgb24, KernelKind, ResampleError};
///
/// let src = [10u8, 20, 30, 40, 50, 60];
/// let out = resample_rgb24(&src, 2, 1, 1, 1, KernelKind::Bilinear).unwrap();
/// assert_eq!(out, vec![10, 20, 30]);
///
/// let err = resample_rgb24(&src, 2, 1, 4, 4, KernelKind::Lanczos3).unwrap_err();
/// assert_eq!(err, ResampleError::UnsupportedKernel(KernelKind::Lanczos3));
/// ```
pub fn resample_rgb24(
    src: &[u8],
    src_width: u32,
    src_height: u32,
    dst_width: u32,
    dst_height: u32,
    kernel: KernelKind,
) -> Result<Vec<u8>, ResampleError> {
    if src_width == 0 || src_height == 0 || dst_width == 0 || dst_height == 0 {
        return Err(ResampleError::InvalidParameter(
            "source and destination dimensions must be non-zero",
        ));
    }
    let src_len = rgb24_len(src_width, src_height)
        .ok_or(ResampleError::InvalidParameter("source dimensions overflow"))?;
    if src.len() != src_len {
        return Err(ResampleError::InvalidParameter(
            "source length does not match width * height * 3",
        ));
    }
    let dst_len = rgb24_len(dst_width, dst_height)
        .ok_or(ResampleError::InvalidParameter("destination dimensions overflow"))?;
    let temp_len = rgb24_len(dst_width, src_height)
        .ok_or(ResampleError::InvalidParameter("intermediate dimensions overflow"))?;

    let sampler = kernel.sampler()?;

    if src_width == dst_width && src_height == dst_height {
        return Ok(src.to_vec());
    }

    let (sw, sh) = (src_width as usize, src_height as usize);
    let (dw, dh) = (dst_width as usize, dst_height as usize);

    let h_taps = axis_taps(sampler, sw, dw);
    let v_taps = axis_taps(sampler, sh, dh);

    let mut temp = vec![0u8; temp_len];
    horizontal_pass(sampler, src, sw, &mut temp, dw, &h_taps);

    let mut dst = vec![0u8; dst_len];
    vertical_pass(sampler, &temp, dw, &mut dst, &v_taps);

    Ok(dst)
}

/// Continuous source coordinate for destination index `i`.
///
/// Equivalent to `i * (src - 1) / (dst - 1)`, with a ratio of 1.0 for a
/// single-sample destination.
#[inline]
fn source_coordinate(i: usize, src_len: usize, dst_len: usize) -> f32 {
    if dst_len == 1 {
        i as f32
    } else {
        (i as f32 * (src_len - 1) as f32) / (dst_len - 1) as f32
    }
}

fn axis_taps(sampler: Sampler, src_len: usize, dst_len: usize) -> Vec<Taps> {
    (0..dst_len)
        .map(|i| sampler.taps(source_coordinate(i, src_len, dst_len), src_len))
        .collect()
}

#[inline]
fn resample_row_horizontal(sampler: Sampler, src_row: &[u8], out_row: &mut [u8], taps: &[Taps]) {
    for (out, &t) in out_row.chunks_exact_mut(CHANNELS).zip(taps) {
        let a = &src_row[t.first * CHANNELS..];
        let b = &src_row[t.second * CHANNELS..];
        sampler.blend(t, a, b, out);
    }
}

#[inline]
fn resample_row_vertical(sampler: Sampler, temp: &[u8], width: usize, out_row: &mut [u8], t: Taps) {
    let stride = width * CHANNELS;
    let row_a = &temp[t.first * stride..(t.first + 1) * stride];
    let row_b = &temp[t.second * stride..(t.second + 1) * stride];
    for ((out, a), b) in out_row
        .chunks_exact_mut(CHANNELS)
        .zip(row_a.chunks_exact(CHANNELS))
        .zip(row_b.chunks_exact(CHANNELS))
    {
        sampler.blend(t, a, b, out);
    }
}

fn horizontal_pass(
    sampler: Sampler,
    src: &[u8],
    src_width: usize,
    temp: &mut [u8],
    dst_width: usize,
    taps: &[Taps],
) {
    let src_stride = src_width * CHANNELS;
    let temp_stride = dst_width * CHANNELS;

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        temp.par_chunks_mut(temp_stride)
            .zip(src.par_chunks(src_stride))
            .for_each(|(out_row, src_row)| {
                resample_row_horizontal(sampler, src_row, out_row, taps);
            });
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (out_row, src_row) in temp
            .chunks_exact_mut(temp_stride)
            .zip(src.chunks_exact(src_stride))
        {
            resample_row_horizontal(sampler, src_row, out_row, taps);
        }
    }
}

fn vertical_pass(sampler: Sampler, temp: &[u8], width: usize, dst: &mut [u8], taps: &[Taps]) {
    let stride = width * CHANNELS;

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        dst.par_chunks_mut(stride)
            .zip(taps.par_iter())
            .for_each(|(out_row, &t)| {
                resample_row_vertical(sampler, temp, width, out_row, t);
            });
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (out_row, &t) in dst.chunks_exact_mut(stride).zip(taps) {
            resample_row_vertical(sampler, temp, width, out_row, t);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn gradient(width: u32, height: u32) -> Vec<u8> {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                data.push((x * 255 / width.max(2).saturating_sub(1).max(1)) as u8);
                data.push((y * 255 / height.max(2).saturating_sub(1).max(1)) as u8);
                data.push(((x + y) * 7 % 256) as u8);
            }
        }
        data
    }

    #[test]
    fn test_identity_is_exact_copy() {
        let src = gradient(5, 4);
        let out = resample_rgb24(&src, 5, 4, 5, 4, KernelKind::Bilinear).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn test_output_length() {
        let src = gradient(7, 3);
        for (w, h) in [(1, 1), (2, 9), (14, 6), (3, 3), (7, 1), (1, 3)] {
            let out = resample_rgb24(&src, 7, 3, w, h, KernelKind::Bilinear).unwrap();
            assert_eq!(out.len(), (w * h * 3) as usize, "{w}x{h}");
        }
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let src = gradient(2, 2);
        for (sw, sh, dw, dh) in [(0, 2, 2, 2), (2, 0, 2, 2), (2, 2, 0, 2), (2, 2, 2, 0)] {
            assert!(
                matches!(
                    resample_rgb24(&src, sw, sh, dw, dh, KernelKind::Bilinear),
                    Err(ResampleError::InvalidParameter(_))
                ),
                "{sw}x{sh} -> {dw}x{dh}"
            );
        }
    }

    #[test]
    fn test_short_source_rejected() {
        let src = vec![0u8; 11];
        assert!(matches!(
            resample_rgb24(&src, 2, 2, 4, 4, KernelKind::Bilinear),
            Err(ResampleError::InvalidParameter(_))
        ));
        assert!(matches!(
            resample_rgb24(&[], 1, 1, 4, 4, KernelKind::Bilinear),
            Err(ResampleError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_unsupported_kernels_rejected_even_at_identity_size() {
        let src = gradient(3, 3);
        for kind in KernelKind::ALL {
            if kind == KernelKind::Bilinear {
                continue;
            }
            assert_eq!(
                resample_rgb24(&src, 3, 3, 6, 6, kind),
                Err(ResampleError::UnsupportedKernel(kind))
            );
            assert_eq!(
                resample_rgb24(&src, 3, 3, 3, 3, kind),
                Err(ResampleError::UnsupportedKernel(kind))
            );
        }
    }

    #[test]
    fn test_horizontal_midpoint() {
        let src = [0u8, 0, 0, 255, 255, 255];
        let out = resample_rgb24(&src, 2, 1, 3, 1, KernelKind::Bilinear).unwrap();
        assert_eq!(out, vec![0, 0, 0, 127, 127, 127, 255, 255, 255]);
    }

    #[test]
    fn test_vertical_midpoint() {
        let src = [0u8, 100, 200, 200, 100, 0];
        let out = resample_rgb24(&src, 1, 2, 1, 3, KernelKind::Bilinear).unwrap();
        assert_eq!(out, vec![0, 100, 200, 100, 100, 100, 200, 100, 0]);
    }

    #[test]
    fn test_single_pixel_destination_samples_origin() {
        let src = gradient(6, 5);
        let out = resample_rgb24(&src, 6, 5, 1, 1, KernelKind::Bilinear).unwrap();
        assert_eq!(out, src[0..3].to_vec());
    }

    #[test]
    fn test_single_column_destination_samples_first_column() {
        let src = gradient(4, 3);
        let out = resample_rgb24(&src, 4, 3, 1, 3, KernelKind::Bilinear).unwrap();
        let first_column: Vec<u8> = src
            .chunks_exact(4 * 3)
            .flat_map(|row| row[0..3].to_vec())
            .collect();
        assert_eq!(out, first_column);
    }

    #[test]
    fn test_uniform_stays_uniform() {
        let src: Vec<u8> = [37u8, 142, 251].repeat(5 * 3);
        for (w, h) in [(11, 2), (2, 11), (3, 1), (9, 9)] {
            let out = resample_rgb24(&src, 5, 3, w, h, KernelKind::Bilinear).unwrap();
            assert!(
                out.chunks_exact(3).all(|px| px == [37, 142, 251]),
                "{w}x{h} not uniform"
            );
        }
    }

    #[test]
    fn test_downscale_keeps_corners() {
        let src = gradient(9, 7);
        let out = resample_rgb24(&src, 9, 7, 4, 3, KernelKind::Bilinear).unwrap();
        let corner = |data: &[u8], w: usize, x: usize, y: usize| {
            let at = (y * w + x) * 3;
            data[at..at + 3].to_vec()
        };
        assert_eq!(corner(&out, 4, 0, 0), corner(&src, 9, 0, 0));
        assert_eq!(corner(&out, 4, 3, 0), corner(&src, 9, 8, 0));
        assert_eq!(corner(&out, 4, 0, 2), corner(&src, 9, 0, 6));
        assert_eq!(corner(&out, 4, 3, 2), corner(&src, 9, 8, 6));
    }

    #[test]
    fn test_source_coordinate_spans_axis() {
        assert_eq!(source_coordinate(0, 10, 4), 0.0);
        assert_eq!(source_coordinate(3, 10, 4), 9.0);
        assert_eq!(source_coordinate(0, 10, 1), 0.0);
        assert_eq!(source_coordinate(1, 2, 3), 0.5);
    }
}
