//! Oklab perceptual color space
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use super::argb::Argb32;

/// A color in the Oklab perceptual color space.
///
/// Euclidean distances in Oklab track perceived color difference far better
/// than distances over raw sRGB bytes.
///
/// - `l`: lightness (0.0 black, 1.0 white)
/// - `a`: green-red axis
/// - `b`: blue-yellow axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl Oklab {
    #[inline]
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Euclidean distance to `other`.
    ///
    /// ```
    /// use pencel_core::Oklab;
    ///
    /// let white = Oklab::new(1.0, 0.0, 0.0);
    /// let black = Oklab::new(0.0, 0.0, 0.0);
    /// assert!((white.distance(black) - 1.0).abs() < 1e-6);
    /// ```
    #[inline]
    pub fn distance(self, other: Oklab) -> f32 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    /// Convert from linear-light RGB components (0.0..=1.0).
    pub fn from_linear(r: f32, g: f32, b: f32) -> Self {
        let l = 0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b;
        let m = 0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b;
        let s = 0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b;

        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        Oklab {
            l: 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
            a: 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
            b: 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
        }
    }
}

/// IEC 61966-2-1 transfer function: 8-bit sRGB to linear light.
#[inline]
fn srgb_to_linear(channel: u8) -> f32 {
    let c = channel as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl From<Argb32> for Oklab {
    fn from(color: Argb32) -> Self {
        Oklab::from_linear(
            srgb_to_linear(color.r()),
            srgb_to_linear(color.g()),
            srgb_to_linear(color.b()),
        )
    }
}
