use text_layout::layout::{normalize_text, HorizontalAlign, TextLayout};
use text_layout::{Font, FontMetrics, GlyphMetrics, Pt, Size, Vector};

/// Stand-in for a terminal cell grid: every character is one column wide.
struct Cells;

impl FontMetrics for Cells {
    fn metrics(&self, _ch: char) -> GlyphMetrics {
        GlyphMetrics {
            advance: Vector::new(Pt(1.0), Pt(0.0)),
            bearing: Vector::default(),
        }
    }

    fn sprite_height(&self, _ch: char) -> Pt {
        Pt(1.0)
    }

    fn line_spacing(&self) -> Pt {
        Pt(1.0)
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let text = format!("{}\n\n\tSecond paragraph.", lipsum::lipsum(60));
    let text = normalize_text(&text);

    // pass a font file to measure with real glyphs instead of cells
    let font = std::env::args().nth(1).map(|path| {
        let bytes = std::fs::read(path).expect("can read font file");
        Font::load(bytes).expect("can load font")
    });

    match &font {
        Some(font) => {
            let sized = font.sized(Pt(12.0));
            let layout = TextLayout::new(
                &sized,
                &text,
                Size::new(Pt(300.0), Pt(200.0)),
                HorizontalAlign::Center,
            );
            let arrangement = layout.arrange();
            for placed in &arrangement.lines {
                println!(
                    "({:>7.2}, {:>7.2}) {}",
                    placed.origin.0 .0, placed.origin.1 .0, placed.line.text
                );
            }
            if let Some(offset) = arrangement.remainder {
                println!("... {} bytes did not fit", text.len() - offset);
            }
        }
        None => {
            let width = 40;
            let layout = TextLayout::new(
                &Cells,
                &text,
                Size::new(Pt(width as f32), Pt(100.0)),
                HorizontalAlign::Center,
            );
            println!("+{}+", "-".repeat(width));
            for line in layout.lines() {
                let left = line.left.0 as usize;
                let right = width - left - line.width.0 as usize;
                println!("|{}{}{}|", " ".repeat(left), line.text, " ".repeat(right));
            }
            println!("+{}+", "-".repeat(width));
        }
    }
}
