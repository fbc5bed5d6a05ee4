//! Seven-segment glyphs
//!
//! A glyph is drawn like a digital clock digit: up to seven cuboid segments,
//! each a unit cube scaled to `width x height x depth` and placed on a
//! 3-unit-high grid. Segment naming follows the usual convention:
//!
//! ```text
//!  aaa
//! f   b
//! f   b
//!  ggg
//! e   c
//! e   c
//!  ddd
//! ```
//!
//! The glyph origin is the centre of segment `d`, so the glyph stands on the
//! XZ plane and is centred on X.

use bitflags::bitflags;
use glyph3d_math::{rotation_degrees, scaling, translation, Axis, Mat4, Vec3};

bitflags! {
    /// Lit segments of a seven-segment glyph
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Segments: u8 {
        /// Top
        const A = 1 << 0;
        /// Top right
        const B = 1 << 1;
        /// Bottom right
        const C = 1 << 2;
        /// Bottom
        const D = 1 << 3;
        /// Bottom left
        const E = 1 << 4;
        /// Top left
        const F = 1 << 5;
        /// Middle
        const G = 1 << 6;
    }
}

/// Order in which segment matrices are emitted
pub const SEGMENT_ORDER: [Segments; 7] = [
    Segments::A,
    Segments::B,
    Segments::C,
    Segments::D,
    Segments::E,
    Segments::F,
    Segments::G,
];

impl Segments {
    /// Build from per-segment flags in `a..g` order (non-zero = lit)
    pub fn from_flags(flags: [u8; 7]) -> Self {
        SEGMENT_ORDER
            .iter()
            .zip(flags)
            .filter(|(_, flag)| *flag != 0)
            .fold(Segments::empty(), |acc, (segment, _)| acc | *segment)
    }

    /// Segments for a displayable character
    ///
    /// Digits and the letters that read well on seven segments are supported.
    /// Where only one case of a letter can be shown (`b`, `d`, `P`, ...), the
    /// other case maps to it.
    pub fn for_char(c: char) -> Option<Self> {
        Self::lookup(c).or_else(|| {
            let swapped = if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            };
            Self::lookup(swapped)
        })
    }

    fn lookup(c: char) -> Option<Self> {
        let s = match c {
            '0' | 'O' => "abcdef",
            '1' => "bc",
            '2' => "abdeg",
            '3' => "abcdg",
            '4' => "bcfg",
            '5' | 'S' => "acdfg",
            '6' => "acdefg",
            '7' => "abc",
            '8' => "abcdefg",
            '9' => "abcdfg",
            'A' => "abcefg",
            'b' => "cdefg",
            'C' => "adef",
            'c' => "deg",
            'd' => "bcdeg",
            'E' => "adefg",
            'F' => "aefg",
            'G' => "acdef",
            'H' => "bcefg",
            'h' => "cefg",
            'I' => "ef",
            'J' => "bcde",
            'L' => "def",
            'n' => "ceg",
            'o' => "cdeg",
            'P' => "abefg",
            'r' => "eg",
            't' => "defg",
            'U' => "bcdef",
            'u' => "cde",
            'y' => "bcdfg",
            '-' => "g",
            _ => return None,
        };
        Some(Self::from_letters(s))
    }

    fn from_letters(letters: &str) -> Self {
        letters.bytes().fold(Segments::empty(), |acc, b| {
            let index = (b - b'a') as usize;
            acc | SEGMENT_ORDER[index]
        })
    }
}

/// Dimensions of a glyph's segments
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentGeometry {
    /// Segment thickness across its length
    pub width: f32,
    /// Segment thickness along Z
    pub depth: f32,
    /// Grid spacing; a segment is three grid units long
    pub grid_unit: f32,
}

impl Default for SegmentGeometry {
    fn default() -> Self {
        Self {
            width: 0.1,
            depth: 0.1,
            grid_unit: 0.2,
        }
    }
}

impl SegmentGeometry {
    /// Length of one segment
    pub fn height(&self) -> f32 {
        self.grid_unit * 3.0
    }
}

/// Model matrix for a single segment
///
/// `segment` must be exactly one flag; anything else yields `None`.
pub fn segment_matrix(segment: Segments, geometry: &SegmentGeometry) -> Option<Mat4> {
    let h = geometry.height();
    let size = scaling(Vec3::new(geometry.width, h, geometry.depth));
    let horizontal = rotation_degrees(Axis::Z, 90.0);

    let m = match segment {
        s if s == Segments::A => translation(Vec3::new(0.0, h * 2.0, 0.0)) * horizontal * size,
        s if s == Segments::B => translation(Vec3::new(h / 2.0, h + h / 2.0, 0.0)) * size,
        s if s == Segments::C => translation(Vec3::new(h / 2.0, h / 2.0, 0.0)) * size,
        s if s == Segments::D => translation(Vec3::ZERO) * horizontal * size,
        s if s == Segments::E => translation(Vec3::new(-h / 2.0, h / 2.0, 0.0)) * size,
        s if s == Segments::F => translation(Vec3::new(-h / 2.0, h + h / 2.0, 0.0)) * size,
        s if s == Segments::G => translation(Vec3::new(0.0, h, 0.0)) * horizontal * size,
        _ => return None,
    };
    Some(m)
}

/// Model matrices for every lit segment, in `a..g` order
pub fn seven_segment_model(segments: Segments, geometry: &SegmentGeometry) -> Vec<Mat4> {
    SEGMENT_ORDER
        .iter()
        .filter(|s| segments.contains(**s))
        .filter_map(|s| segment_matrix(*s, geometry))
        .collect()
}
