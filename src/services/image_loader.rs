//! PNG decoding into RGB24 pixel buffers.

use std::io::Cursor;
use std::path::Path;

use pencel_core::PixelBuffer;

use crate::error::LoadError;

/// Decode a PNG file from disk.
pub fn decode_png_file(path: &Path) -> Result<PixelBuffer, LoadError> {
    let bytes = std::fs::read(path)?;
    let image = decode_png(&bytes)?;
    tracing::info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Decoded image"
    );
    Ok(image)
}

/// Decode PNG bytes to 8-bit RGB.
///
/// Indexed and low bit-depth images are expanded, 16-bit samples are
/// stripped to 8 bits, grey is replicated to three channels, and alpha is
/// dropped.
pub fn decode_png(bytes: &[u8]) -> Result<PixelBuffer, LoadError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;

    if info.width == 0 || info.height == 0 {
        return Err(LoadError::EmptyImage {
            width: info.width,
            height: info.height,
        });
    }

    let channels = info.color_type.samples();
    let pixel_count = info.width as usize * info.height as usize;
    tracing::debug!(
        color_type = ?info.color_type,
        bit_depth = ?info.bit_depth,
        line_size = info.line_size,
        "PNG frame"
    );

    let mut rgb = Vec::with_capacity(pixel_count * 3);
    for row in buf.chunks_exact(info.line_size).take(info.height as usize) {
        for px in row[..info.width as usize * channels].chunks_exact(channels) {
            match info.color_type {
                png::ColorType::Rgb | png::ColorType::Rgba => rgb.extend_from_slice(&px[..3]),
                png::ColorType::Grayscale | png::ColorType::GrayscaleAlpha => {
                    rgb.extend_from_slice(&[px[0], px[0], px[0]])
                }
                png::ColorType::Indexed => {
                    return Err(LoadError::ImageDecode(
                        "indexed image was not expanded to RGB".to_string(),
                    ))
                }
            }
        }
    }

    PixelBuffer::new(rgb, info.width, info.height)
        .map_err(|e| LoadError::ImageDecode(e.to_string()))
}
