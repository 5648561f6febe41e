use crate::{LayoutError, Pt, Vector};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};

/// Per-glyph placement information, in points.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct GlyphMetrics {
    /// How far the cursor moves after drawing the glyph. Only `x` is used
    /// when breaking lines.
    pub advance: Vector,
    /// Offset of the glyph's bottom-left corner from the cursor on the
    /// baseline. `y` is negative for glyphs that descend below the baseline.
    pub bearing: Vector,
}

/// Everything the line layout needs to know about a font.
///
/// Implementations must be total over the characters they will be asked to
/// lay out; what a font reports for a character it does not cover is up to
/// the implementation.
pub trait FontMetrics {
    /// Placement metrics of the glyph used for `ch`
    fn metrics(&self, ch: char) -> GlyphMetrics;

    /// Height of the rendered glyph used for `ch`
    fn sprite_height(&self, ch: char) -> Pt;

    /// Distance between the baselines of two consecutive lines
    fn line_spacing(&self) -> Pt;
}

impl<F: FontMetrics + ?Sized> FontMetrics for &F {
    fn metrics(&self, ch: char) -> GlyphMetrics {
        (**self).metrics(ch)
    }

    fn sprite_height(&self, ch: char) -> Pt {
        (**self).sprite_height(ch)
    }

    fn line_spacing(&self) -> Pt {
        (**self).line_spacing()
    }
}

/// A parsed TrueType or OpenType font.
///
/// A `Font` is size-independent; use [Font::sized] to obtain the
/// [FontMetrics] of the font at a given point size.
pub struct Font {
    pub face: OwnedFace,
    replacement: GlyphId,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed or has no glyph to substitute for missing characters
    pub fn load(bytes: Vec<u8>) -> Result<Font, LayoutError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        let replacement = face
            .as_face_ref()
            .glyph_index('\u{FFFD}')
            .or_else(|| face.as_face_ref().glyph_index('?'))
            .ok_or(LayoutError::NoReplacementGlyph)?;

        tracing::debug!(
            glyphs = face.as_face_ref().number_of_glyphs(),
            units_per_em = face.as_face_ref().units_per_em(),
            "loaded font face"
        );

        Ok(Font { face, replacement })
    }

    fn scaling(&self, size: Pt) -> f32 {
        size.0 / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        Pt(self.scaling(size) * self.face.as_face_ref().ascender() as f32)
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        Pt(self.scaling(size) * self.face.as_face_ref().descender() as f32)
    }

    /// Calculate the leading (extra space between lines) for the given font size
    pub fn leading(&self, size: Pt) -> Pt {
        Pt(self.scaling(size) * self.face.as_face_ref().line_gap() as f32)
    }

    /// Calculate the default line height of the font for the given size. The returned value is
    /// how much to vertically offset a second row of text below a first row of text.
    pub fn line_height(&self, size: Pt) -> Pt {
        self.leading(size) + self.ascent(size) - self.descent(size)
    }

    /// The font at a given point size
    pub fn sized(&self, size: Pt) -> SizedFont<'_> {
        SizedFont { font: self, size }
    }

    fn glyph_id(&self, ch: char) -> GlyphId {
        self.face
            .as_face_ref()
            .glyph_index(ch)
            .unwrap_or(self.replacement)
    }
}

/// A [Font] scaled to a point size, ready to be used for layout.
#[derive(Copy, Clone)]
pub struct SizedFont<'a> {
    font: &'a Font,
    size: Pt,
}

impl SizedFont<'_> {
    pub fn size(&self) -> Pt {
        self.size
    }
}

impl FontMetrics for SizedFont<'_> {
    fn metrics(&self, ch: char) -> GlyphMetrics {
        let face = self.font.face.as_face_ref();
        let scaling = self.font.scaling(self.size);
        let gid = self.font.glyph_id(ch);

        let advance = face.glyph_hor_advance(gid).unwrap_or_default() as f32 * scaling;
        let bearing = face
            .glyph_bounding_box(gid)
            .map(|bbox| {
                Vector::new(
                    Pt(bbox.x_min as f32 * scaling),
                    Pt(bbox.y_min as f32 * scaling),
                )
            })
            .unwrap_or_default();

        GlyphMetrics {
            advance: Vector::new(Pt(advance), Pt::ZERO),
            bearing,
        }
    }

    fn sprite_height(&self, ch: char) -> Pt {
        let face = self.font.face.as_face_ref();
        let scaling = self.font.scaling(self.size);

        face.glyph_bounding_box(self.font.glyph_id(ch))
            .map(|bbox| Pt((bbox.y_max as f32 - bbox.y_min as f32) * scaling))
            .unwrap_or_default()
    }

    fn line_spacing(&self) -> Pt {
        self.font.line_height(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{width_of_text, HorizontalAlign, TextLayout};
    use crate::Size;

    const DEJAVU: &[u8] = include_bytes!("../assets/DejaVuSansMono.ttf");

    fn dejavu() -> Font {
        Font::load(DEJAVU.to_vec()).expect("can load font")
    }

    fn close(a: Pt, b: Pt) -> bool {
        (a.0 - b.0).abs() < 1e-3
    }

    #[test]
    fn metrics_scale_with_size() {
        let font = dejavu();
        let small = font.sized(Pt(12.0));
        let large = font.sized(Pt(24.0));
        assert_eq!(small.size(), Pt(12.0));

        for ch in ['A', 'g', 'W', '.'] {
            let s = small.metrics(ch);
            let l = large.metrics(ch);
            assert!(s.advance.x > Pt::ZERO);
            assert_eq!(s.advance.y, Pt::ZERO);
            assert!(close(l.advance.x, s.advance.x * 2.0));
            assert!(close(l.bearing.x, s.bearing.x * 2.0));
            assert!(close(l.bearing.y, s.bearing.y * 2.0));
            assert!(close(large.sprite_height(ch), small.sprite_height(ch) * 2.0));
        }
    }

    #[test]
    fn glyph_extents() {
        let font = dejavu();
        let sized = font.sized(Pt(12.0));

        // monospaced: every glyph advances the same
        assert_eq!(sized.metrics('i').advance.x, sized.metrics('W').advance.x);

        assert!(sized.metrics('g').bearing.y < Pt::ZERO);
        assert!(close(sized.metrics('A').bearing.y, Pt::ZERO));
        let top = sized.sprite_height('A') + sized.metrics('A').bearing.y;
        assert!(top > Pt::ZERO && top <= font.ascent(Pt(12.0)));

        assert_eq!(sized.sprite_height(' '), Pt::ZERO);
        assert_eq!(sized.metrics(' ').bearing, Vector::default());
        assert!(sized.metrics(' ').advance.x > Pt::ZERO);
    }

    #[test]
    fn uncovered_characters_use_the_replacement_glyph() {
        let font = dejavu();
        let sized = font.sized(Pt(12.0));
        let stand_in = if font.face.as_face_ref().glyph_index('\u{FFFD}').is_some() {
            '\u{FFFD}'
        } else {
            '?'
        };

        assert!(font.face.as_face_ref().glyph_index('\u{10FFFF}').is_none());
        assert_eq!(sized.metrics('\u{10FFFF}'), sized.metrics(stand_in));
        assert_eq!(sized.sprite_height('\u{10FFFF}'), sized.sprite_height(stand_in));
        assert!(sized.sprite_height('\u{10FFFF}') > Pt::ZERO);
    }

    #[test]
    fn line_spacing_is_line_height() {
        let font = dejavu();
        let size = Pt(12.0);
        assert_eq!(font.sized(size).line_spacing(), font.line_height(size));
        assert!(font.descent(size) < Pt::ZERO);
        assert!(font.leading(size) >= Pt::ZERO);
        assert!(close(
            font.line_height(size),
            font.leading(size) + font.ascent(size) - font.descent(size)
        ));
    }

    #[test]
    fn lays_out_inside_the_box() {
        let font = dejavu();
        let sized = font.sized(Pt(12.0));
        let text = lipsum::lipsum(80);
        let size = Size::new(Pt(150.0), Pt(1000.0));
        let layout = TextLayout::new(&sized, &text, size, HorizontalAlign::Right);

        let lines: Vec<_> = layout.lines().collect();
        assert!(lines.len() > 3);
        for line in lines {
            assert!(line.width >= Pt::ZERO && line.width <= size.width);
            assert!(close(line.width, width_of_text(line.text, &sized)));
            assert!(line.left + line.width <= size.width + Pt(1e-3));
            assert!(line.ascent > Pt::ZERO);
        }
    }

    #[test]
    fn rejects_garbage() {
        let err = Font::load(vec![0, 1, 2, 3]).err().expect("garbage is not a font");
        assert!(matches!(err, LayoutError::FaceParsingError(_)));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(Font::load(Vec::new()).is_err());
    }

    struct Fixed;

    impl FontMetrics for Fixed {
        fn metrics(&self, _ch: char) -> GlyphMetrics {
            GlyphMetrics {
                advance: Vector::new(Pt(7.0), Pt::ZERO),
                bearing: Vector::new(Pt::ZERO, Pt(-2.0)),
            }
        }

        fn sprite_height(&self, _ch: char) -> Pt {
            Pt(9.0)
        }

        fn line_spacing(&self) -> Pt {
            Pt(11.0)
        }
    }

    #[test]
    fn references_forward_to_the_font() {
        fn through<F: FontMetrics>(font: F) -> (GlyphMetrics, Pt, Pt) {
            (font.metrics('x'), font.sprite_height('x'), font.line_spacing())
        }

        let (metrics, height, spacing) = through(&Fixed);
        assert_eq!(metrics.advance.x, Pt(7.0));
        assert_eq!(metrics.bearing.y, Pt(-2.0));
        assert_eq!(height, Pt(9.0));
        assert_eq!(spacing, Pt(11.0));
    }
}
