//! Terminal output for swatch grids, pixel buffers and palettes.
//!
//! Colors are drawn with 24-bit ANSI foreground escapes
//! (`ESC[38;2;R;G;Bm`). Every line ends with `ESC[0m`. Two glyphs per cell
//! keep the cells roughly square in a typical terminal font.

use std::fmt;

use pencel_core::{Argb32, KernelKind, PencilPalette, PixelBuffer, SwatchGrid};

/// Escape that resets all attributes.
pub const RESET: &str = "\x1b[0m";

/// Glyph drawn for one grid cell.
pub const CELL: &str = "HH";

/// How colors are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleStyle {
    /// 24-bit ANSI escapes
    #[default]
    TrueColor,
    /// `#RRGGBB` codes, no escapes
    Plain,
}

struct Fg(Argb32);

impl fmt::Display for Fg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0.rgb();
        write!(f, "\x1b[38;2;{r};{g};{b}m")
    }
}

fn write_rows<I>(f: &mut fmt::Formatter<'_>, rows: I, style: ConsoleStyle) -> fmt::Result
where
    I: Iterator,
    I::Item: IntoIterator<Item = Argb32>,
{
    for row in rows {
        match style {
            ConsoleStyle::TrueColor => {
                for color in row {
                    write!(f, "{}{CELL}", Fg(color))?;
                }
                writeln!(f, "{RESET}")?;
            }
            ConsoleStyle::Plain => {
                let mut first = true;
                for color in row {
                    if !first {
                        f.write_str(" ")?;
                    }
                    write!(f, "{color}")?;
                    first = false;
                }
                writeln!(f)?;
            }
        }
    }
    Ok(())
}

/// A [`SwatchGrid`] formatted for the terminal, one line per grid row.
pub struct GridView<'a> {
    pub grid: &'a SwatchGrid,
    pub style: ConsoleStyle,
}

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let palette = self.grid.palette();
        let rows = self
            .grid
            .rows()
            .map(move |row| row.iter().map(move |m| palette.color(m)));
        write_rows(f, rows, self.style)
    }
}

/// A [`PixelBuffer`] formatted like a grid, one cell per pixel.
pub struct PixelView<'a> {
    pub buffer: &'a PixelBuffer,
    pub style: ConsoleStyle,
}

impl fmt::Display for PixelView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.buffer.width() as usize;
        let colors: Vec<Argb32> = self.buffer.pixels().collect();
        let rows = colors.chunks(width.max(1)).map(|row| row.iter().copied());
        write_rows(f, rows, self.style)
    }
}

/// A palette listing: heavy swatch, light swatch, name.
pub struct PaletteView<'a> {
    pub palette: &'a PencilPalette,
    pub style: ConsoleStyle,
}

impl fmt::Display for PaletteView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.palette.entries() {
            match self.style {
                ConsoleStyle::TrueColor => writeln!(
                    f,
                    "{}HH {}LL {RESET}{}",
                    Fg(entry.heavy),
                    Fg(entry.light),
                    entry.name
                )?,
                ConsoleStyle::Plain => {
                    writeln!(f, "{} {} {}", entry.heavy, entry.light, entry.name)?
                }
            }
        }
        Ok(())
    }
}

pub fn render_grid(grid: &SwatchGrid, style: ConsoleStyle) -> String {
    GridView { grid, style }.to_string()
}

pub fn render_pixels(buffer: &PixelBuffer, style: ConsoleStyle) -> String {
    PixelView { buffer, style }.to_string()
}

pub fn render_palette(palette: &PencilPalette, style: ConsoleStyle) -> String {
    PaletteView { palette, style }.to_string()
}

/// Every kernel name, marking the implemented ones.
pub fn render_kernels() -> String {
    KernelKind::ALL
        .iter()
        .map(|kind| {
            let status = if kind.is_supported() {
                "supported"
            } else {
                "not implemented"
            };
            format!("{:<12} {status}\n", kind.name())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pencel_core::{MatchResult, Tone};
    use pretty_assertions::assert_eq;

    fn palette() -> PencilPalette {
        PencilPalette::from_hex(&[("ink", "#000000", "#808080"), ("red", "#FF0000", "#FF8080")])
            .unwrap()
    }

    fn grid() -> SwatchGrid {
        let m = |index, tone| MatchResult {
            index,
            tone,
            distance: 0.0,
        };
        SwatchGrid::new(
            vec![m(0, Tone::Heavy), m(1, Tone::Light), m(1, Tone::Heavy), m(0, Tone::Light)],
            2,
            2,
            palette(),
        )
    }

    #[test]
    fn test_render_grid_true_color() {
        let out = render_grid(&grid(), ConsoleStyle::TrueColor);
        assert_eq!(
            out,
            "\x1b[38;2;0;0;0mHH\x1b[38;2;255;128;128mHH\x1b[0m\n\
             \x1b[38;2;255;0;0mHH\x1b[38;2;128;128;128mHH\x1b[0m\n"
        );
    }

    #[test]
    fn test_render_grid_plain() {
        let out = render_grid(&grid(), ConsoleStyle::Plain);
        assert_eq!(out, "#000000 #FF8080\n#FF0000 #808080\n");
    }

    #[test]
    fn test_render_grid_one_line_per_row() {
        let out = render_grid(&grid(), ConsoleStyle::TrueColor);
        assert_eq!(out.lines().count(), 2);
        assert!(out.lines().all(|line| line.ends_with(RESET)));
        assert_eq!(out.matches(CELL).count(), 4);
    }

    #[test]
    fn test_render_pixels() {
        let buffer = PixelBuffer::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 9], 1, 3).unwrap();
        let out = render_pixels(&buffer, ConsoleStyle::Plain);
        assert_eq!(out, "#010203\n#040506\n#070809\n");

        let out = render_pixels(&buffer, ConsoleStyle::TrueColor);
        assert!(out.starts_with("\x1b[38;2;1;2;3mHH\x1b[0m\n"));
    }

    #[test]
    fn test_render_palette() {
        let out = render_palette(&palette(), ConsoleStyle::TrueColor);
        assert_eq!(
            out,
            "\x1b[38;2;0;0;0mHH \x1b[38;2;128;128;128mLL \x1b[0mink\n\
             \x1b[38;2;255;0;0mHH \x1b[38;2;255;128;128mLL \x1b[0mred\n"
        );

        let out = render_palette(&palette(), ConsoleStyle::Plain);
        assert_eq!(out, "#000000 #808080 ink\n#FF0000 #FF8080 red\n");
    }

    #[test]
    fn test_render_kernels() {
        let out = render_kernels();
        assert_eq!(out.lines().count(), KernelKind::ALL.len());
        assert!(out.contains("bilinear     supported\n"));
        assert!(out.contains("lanczos3     not implemented\n"));
    }
}
