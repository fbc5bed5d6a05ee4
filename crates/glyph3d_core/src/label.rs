//! Label layout
//!
//! A label such as `"PE 28"` becomes one glyph per character, laid out along
//! +X. Positions are measured in grid units from the model origin.

use std::fmt;

use glyph3d_math::{translate_all, Mat4, Vec3};

use crate::segment::{seven_segment_model, SegmentGeometry, Segments};

/// Grid units from the model origin to the first glyph
pub const LABEL_START: f32 = 5.0;

/// Grid units between consecutive glyphs
pub const GLYPH_ADVANCE: f32 = 5.0;

/// Extra grid units inserted by a space
pub const SPACE_ADVANCE: f32 = 2.0;

/// Error type for label construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlyphError {
    /// Character has no seven-segment representation
    UnsupportedCharacter(char),
    /// Label contains no drawable glyphs
    EmptyLabel,
}

impl fmt::Display for GlyphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlyphError::UnsupportedCharacter(c) => {
                write!(f, "Character {:?} cannot be shown on seven segments", c)
            }
            GlyphError::EmptyLabel => write!(f, "Label has no drawable glyphs"),
        }
    }
}

impl std::error::Error for GlyphError {}

/// Build the segment matrices for every glyph of `text`
///
/// Returns one matrix list per drawable character, in reading order.
pub fn build_label(text: &str, geometry: &SegmentGeometry) -> Result<Vec<Vec<Mat4>>, GlyphError> {
    let mut glyphs = Vec::new();
    let mut cursor = LABEL_START;

    for c in text.chars() {
        if c == ' ' {
            cursor += SPACE_ADVANCE;
            continue;
        }

        let segments = Segments::for_char(c).ok_or(GlyphError::UnsupportedCharacter(c))?;
        let model = seven_segment_model(segments, geometry);
        let offset = Vec3::new(cursor * geometry.grid_unit, 0.0, 0.0);
        glyphs.push(translate_all(model.as_slice(), offset));
        cursor += GLYPH_ADVANCE;
    }

    if glyphs.is_empty() {
        return Err(GlyphError::EmptyLabel);
    }

    log::debug!("Built label {:?}: {} glyphs", text, glyphs.len());
    Ok(glyphs)
}
