//! Line breaking and line metrics for text laid out inside a fixed box.
//!
//! A [`TextLayout`](crate::layout::TextLayout) borrows a piece of text and a
//! font and answers, for the line starting at any offset in the text:
//!
//! - how wide the line is ([`line_width`](crate::layout::TextLayout::line_width)),
//! - where it starts horizontally ([`line_left`](crate::layout::TextLayout::line_left)),
//! - how far its tallest glyph reaches above the baseline
//!   ([`line_ascent`](crate::layout::TextLayout::line_ascent)),
//! - where the following line starts ([`line_break`](crate::layout::TextLayout::line_break)).
//!
//! [`lines`](crate::layout::TextLayout::lines) walks every line of the text and
//! [`arrange`](crate::layout::TextLayout::arrange) stacks them inside the box.
//!
//! # Example
//!
//! ```
//! use text_layout::{FontMetrics, GlyphMetrics, Pt, Size, Vector};
//! use text_layout::layout::{HorizontalAlign, TextLayout};
//!
//! struct Monospace;
//!
//! impl FontMetrics for Monospace {
//!     fn metrics(&self, _ch: char) -> GlyphMetrics {
//!         GlyphMetrics {
//!             advance: Vector::new(Pt(10.0), Pt(0.0)),
//!             bearing: Vector::default(),
//!         }
//!     }
//!
//!     fn sprite_height(&self, _ch: char) -> Pt {
//!         Pt(12.0)
//!     }
//!
//!     fn line_spacing(&self) -> Pt {
//!         Pt(14.0)
//!     }
//! }
//!
//! let size = Size::new(Pt(25.0), Pt(100.0));
//! let layout = TextLayout::new(&Monospace, "ab cde", size, HorizontalAlign::Center);
//!
//! assert_eq!(layout.line_width(0), Pt(20.0));
//! assert_eq!(layout.line_left(0), Pt(2.0));
//! assert_eq!(layout.line_ascent(0), Pt(12.0));
//!
//! let lines: Vec<&str> = layout.lines().map(|line| line.text).collect();
//! assert_eq!(lines, vec!["ab", "cd", "e"]);
//! ```

mod align;
mod lines;
mod text;

#[cfg(test)]
pub(crate) mod testing;

pub use align::*;
pub use lines::*;
pub use text::*;
