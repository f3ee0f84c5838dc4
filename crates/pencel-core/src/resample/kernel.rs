//! Resampling kernel identifiers and their sampling strategies.

use std::fmt;
use std::str::FromStr;

use super::error::ResampleError;

/// Every kernel identifier the resampler knows about.
///
/// Only [`KernelKind::Bilinear`] has a sampling strategy. The others are
/// valid names that [`resample_rgb24`](super::resample_rgb24) rejects with
/// [`ResampleError::UnsupportedKernel`] instead of degrading quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KernelKind {
    Nearest,
    Average,
    #[default]
    Bilinear,
    Bicubic,
    Mitchell,
    Cardinal,
    BSpline,
    Lanczos,
    Lanczos2,
    Lanczos3,
    Lanczos4,
    Lanczos5,
    CatmullRom,
    Gaussian,
}

impl KernelKind {
    /// All kernel identifiers, in declaration order.
    pub const ALL: [KernelKind; 14] = [
        KernelKind::Nearest,
        KernelKind::Average,
        KernelKind::Bilinear,
        KernelKind::Bicubic,
        KernelKind::Mitchell,
        KernelKind::Cardinal,
        KernelKind::BSpline,
        KernelKind::Lanczos,
        KernelKind::Lanczos2,
        KernelKind::Lanczos3,
        KernelKind::Lanczos4,
        KernelKind::Lanczos5,
        KernelKind::CatmullRom,
        KernelKind::Gaussian,
    ];

    /// Kebab-case identifier, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            KernelKind::Nearest => "nearest",
            KernelKind::Average => "average",
            KernelKind::Bilinear => "bilinear",
            KernelKind::Bicubic => "bicubic",
            KernelKind::Mitchell => "mitchell",
            KernelKind::Cardinal => "cardinal",
            KernelKind::BSpline => "b-spline",
            KernelKind::Lanczos => "lanczos",
            KernelKind::Lanczos2 => "lanczos2",
            KernelKind::Lanczos3 => "lanczos3",
            KernelKind::Lanczos4 => "lanczos4",
            KernelKind::Lanczos5 => "lanczos5",
            KernelKind::CatmullRom => "catmull-rom",
            KernelKind::Gaussian => "gaussian",
        }
    }

    /// True when the kernel has a working sampling strategy.
    #[inline]
    pub fn is_supported(self) -> bool {
        self.sampler().is_ok()
    }

    /// Resolve the sampling strategy for this kernel.
    ///
    /// New kernels get a [`Sampler`] variant and an arm here together.
    pub(crate) fn sampler(self) -> Result<Sampler, ResampleError> {
        match self {
            KernelKind::Bilinear => Ok(Sampler::Bilinear),
            KernelKind::Nearest
            | KernelKind::Average
            | KernelKind::Bicubic
            | KernelKind::Mitchell
            | KernelKind::Cardinal
            | KernelKind::BSpline
            | KernelKind::Lanczos
            | KernelKind::Lanczos2
            | KernelKind::Lanczos3
            | KernelKind::Lanczos4
            | KernelKind::Lanczos5
            | KernelKind::CatmullRom
            | KernelKind::Gaussian => Err(ResampleError::UnsupportedKernel(self)),
        }
    }
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a kernel name is not recognized at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKernel(pub String);

impl fmt::Display for UnknownKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown kernel '{}'", self.0)
    }
}

impl std::error::Error for UnknownKernel {}

impl FromStr for KernelKind {
    type Err = UnknownKernel;

    /// Case-insensitive. `_` and `-` are interchangeable, and the separator
    /// is optional (`catmull-rom`, `catmull_rom`, `CatmullRom`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        KernelKind::ALL
            .into_iter()
            .find(|kind| kind.name().replace('-', "") == wanted)
            .ok_or_else(|| UnknownKernel(s.to_string()))
    }
}

/// Two source samples along one axis and the weight of the second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Taps {
    pub first: usize,
    pub second: usize,
    pub weight: f32,
}

/// Sampling strategies that actually exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sampler {
    Bilinear,
}

impl Sampler {
    /// Source taps for continuous coordinate `f` on an axis of `len` samples.
    ///
    /// `f` is never negative. Both taps are clamped to `0..len`.
    #[inline]
    pub fn taps(self, f: f32, len: usize) -> Taps {
        match self {
            Sampler::Bilinear => {
                let s = f as usize;
                let last = len - 1;
                Taps {
                    first: s.min(last),
                    second: (s + 1).min(last),
                    weight: f - s as f32,
                }
            }
        }
    }

    /// Blend two RGB texels into `out` with the given taps weight.
    ///
    /// Each channel is truncated toward zero. When both taps point at the
    /// same sample, or the weight is zero, the first texel is copied as is.
    /// The result never leaves the range spanned by the two inputs, so f32
    /// rounding cannot turn `v * (1 - d) + v * d` into `v - 1`.
    #[inline]
    pub fn blend(self, taps: Taps, a: &[u8], b: &[u8], out: &mut [u8]) {
        match self {
            Sampler::Bilinear => {
                if taps.first == taps.second || taps.weight == 0.0 {
                    out[..3].copy_from_slice(&a[..3]);
                    return;
                }
                let d = taps.weight;
                for c in 0..3 {
                    let lerp = (a[c] as f32 * (1.0 - d) + b[c] as f32 * d) as u8;
                    out[c] = lerp.clamp(a[c].min(b[c]), a[c].max(b[c]));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_bilinear_is_supported() {
        for kind in KernelKind::ALL {
            assert_eq!(
                kind.is_supported(),
                kind == KernelKind::Bilinear,
                "{kind} support flag"
            );
        }
        assert_eq!(
            KernelKind::Lanczos3.sampler(),
            Err(ResampleError::UnsupportedKernel(KernelKind::Lanczos3))
        );
    }

    #[test]
    fn test_names_parse_back() {
        for kind in KernelKind::ALL {
            assert_eq!(kind.to_string().parse::<KernelKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_separators() {
        assert_eq!("Bilinear".parse(), Ok(KernelKind::Bilinear));
        assert_eq!("catmull_rom".parse(), Ok(KernelKind::CatmullRom));
        assert_eq!("CatmullRom".parse(), Ok(KernelKind::CatmullRom));
        assert_eq!("bspline".parse(), Ok(KernelKind::BSpline));
        assert_eq!(" LANCZOS3 ".parse(), Ok(KernelKind::Lanczos3));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "sinc".parse::<KernelKind>(),
            Err(UnknownKernel("sinc".to_string()))
        );
        assert!("".parse::<KernelKind>().is_err());
        assert!("lanczos6".parse::<KernelKind>().is_err());
    }

    #[test]
    fn test_bilinear_taps_clamp() {
        let taps = Sampler::Bilinear.taps(2.25, 3);
        assert_eq!(taps.first, 2);
        assert_eq!(taps.second, 2);
        assert!((taps.weight - 0.25).abs() < 1e-6);

        let taps = Sampler::Bilinear.taps(0.5, 3);
        assert_eq!((taps.first, taps.second), (0, 1));
    }

    #[test]
    fn test_blend_truncates() {
        let mut out = [0u8; 3];
        let taps = Taps {
            first: 0,
            second: 1,
            weight: 0.5,
        };
        Sampler::Bilinear.blend(taps, &[0, 10, 255], &[255, 11, 0], &mut out);
        assert_eq!(out, [127, 10, 127]);
    }
}
