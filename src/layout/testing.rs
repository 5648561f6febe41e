use crate::{FontMetrics, GlyphMetrics, Pt, Vector};

/// Every glyph advances by 10pt. Spaces have no sprite, capitals reach 16pt
/// above the baseline, descenders 8pt, everything else 12pt.
pub(crate) struct Mono;

impl FontMetrics for Mono {
    fn metrics(&self, ch: char) -> GlyphMetrics {
        let bearing = match ch {
            'g' | 'j' | 'p' | 'q' | 'y' => Pt(-4.0),
            _ => Pt::ZERO,
        };
        GlyphMetrics {
            advance: Vector::new(Pt(10.0), Pt::ZERO),
            bearing: Vector::new(Pt::ZERO, bearing),
        }
    }

    fn sprite_height(&self, ch: char) -> Pt {
        match ch {
            ' ' => Pt::ZERO,
            c if c.is_uppercase() => Pt(16.0),
            _ => Pt(12.0),
        }
    }

    fn line_spacing(&self) -> Pt {
        Pt(14.0)
    }
}
