//! Test fixtures and constants.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Palette text used across tests
pub mod palettes {
    /// Four pencils covering dark, light, red and blue
    pub const BASIC: &str = "\
graphite 202020 909090
paper    FAFAFA D8D8D8
scarlet  #D01010 #F0A0A0
cobalt   0x1030C0 0xA0B0F0
";

    /// Two entries that tie on pure red; the first must win
    pub const TIE: &str = "A FF0000 FF0000\nB FF0000 000000\n";

    /// Second line lacks the light color
    pub const MISSING_FIELD: &str = "ink 000000 444444\npaper FFFFFF\n";
}

/// Encode RGB24 pixels as an 8-bit RGB PNG
pub fn encode_rgb_png(width: u32, height: u32, rgb: &[u8]) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("PNG header");
        writer.write_image_data(rgb).expect("PNG data");
    }
    buf.into_inner()
}

/// Horizontal split: left half `left`, right half `right`
pub fn split_image(width: u32, height: u32, left: [u8; 3], right: [u8; 3]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity((width * height * 3) as usize);
    for _ in 0..height {
        for x in 0..width {
            let px = if x < width / 2 { left } else { right };
            rgb.extend_from_slice(&px);
        }
    }
    rgb
}

/// A temporary directory holding the files of one test run
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("write fixture");
        path
    }

    pub fn write_png(&self, name: &str, width: u32, height: u32, rgb: &[u8]) -> PathBuf {
        self.write(name, encode_rgb_png(width, height, rgb))
    }
}
