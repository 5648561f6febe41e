#![allow(dead_code)]

use text_layout::{FontMetrics, GlyphMetrics, Pt, Vector};

/// Every character advances 10pt and reaches 12pt above the baseline, except
/// capitals, which reach 16pt.
pub struct Mono;

impl FontMetrics for Mono {
    fn metrics(&self, _ch: char) -> GlyphMetrics {
        GlyphMetrics {
            advance: Vector::new(Pt(10.0), Pt(0.0)),
            bearing: Vector::default(),
        }
    }

    fn sprite_height(&self, ch: char) -> Pt {
        if ch.is_uppercase() {
            Pt(16.0)
        } else {
            Pt(12.0)
        }
    }

    fn line_spacing(&self) -> Pt {
        Pt(14.0)
    }
}

/// Narrow glyphs for `i`, `l` and `.`, wide ones for `m` and `w`, and 5pt
/// for everything else.
pub struct Proportional;

impl FontMetrics for Proportional {
    fn metrics(&self, ch: char) -> GlyphMetrics {
        let advance = match ch {
            'i' | 'l' | '.' | ',' => 2.5,
            'm' | 'w' | 'M' | 'W' => 8.0,
            _ => 5.0,
        };
        GlyphMetrics {
            advance: Vector::new(Pt(advance), Pt(0.0)),
            bearing: Vector::default(),
        }
    }

    fn sprite_height(&self, _ch: char) -> Pt {
        Pt(7.0)
    }

    fn line_spacing(&self) -> Pt {
        Pt(9.0)
    }
}
