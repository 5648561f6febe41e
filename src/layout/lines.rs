use std::ops::Range;

use crate::font::FontMetrics;
use crate::layout::{BreakReason, TextLayout};
use crate::units::Pt;

/// A single visual line of laid out text.
#[derive(Debug, Clone, PartialEq)]
pub struct Line<'a> {
    /// The visible text of the line, without leading or trailing spaces
    pub text: &'a str,
    /// Where [Line::text] sits in the laid out text
    pub range: Range<usize>,
    pub width: Pt,
    /// Offset of the line from the left edge of the box
    pub left: Pt,
    /// Height of the tallest glyph above the baseline
    pub ascent: Pt,
    /// Depth of the lowest glyph below the baseline
    pub descent: Pt,
    pub reason: BreakReason,
}

/// A [Line] positioned inside its box.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine<'a> {
    pub line: Line<'a>,
    /// Where the line's baseline starts, measured from the bottom-left corner
    /// of the box with y pointing up
    pub origin: (Pt, Pt),
}

/// The result of stacking lines into a box.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Arrangement<'a> {
    pub lines: Vec<PlacedLine<'a>>,
    /// Offset of the first line that did not fit below the others, if any.
    /// Lay out the text from this offset in another box to continue.
    pub remainder: Option<usize>,
}

impl<'a, F: FontMetrics + ?Sized> TextLayout<'a, F> {
    /// The line starting at `start`, along with the offset of the line after it
    pub fn line(&self, start: usize) -> (Line<'a>, usize) {
        let brk = self.line_break(start);
        let line = Line {
            text: &self.text[brk.range()],
            range: brk.range(),
            width: brk.width,
            left: self.left_of(&brk),
            ascent: self.ascent_of(&brk),
            descent: self.descent_of(&brk),
            reason: brk.reason,
        };
        (line, brk.next)
    }

    /// Iterate over every line of the text, from the top
    pub fn lines(&self) -> Lines<'_, 'a, F> {
        Lines {
            layout: self,
            offset: 0,
        }
    }

    /// How far below the top of the box the first baseline sits: far enough
    /// for the first line with any glyphs on it to touch the top, counting
    /// the blank lines stacked above it.
    fn first_baseline_depth(&self) -> Pt {
        let spacing = self.font.line_spacing();
        let mut depth = Pt::ZERO;
        for (index, line) in self.lines().enumerate() {
            depth = depth.max(line.ascent - spacing * index as f32);
            if !line.text.is_empty() {
                break;
            }
        }
        depth
    }

    /// Stack the lines of the text from the top of the box down, one line
    /// spacing apart, until the text runs out or the next line's descenders
    /// would fall below the bottom of the box.
    ///
    /// The first baseline is placed so that the tallest glyph of the first
    /// non-blank line touches the top of the box.
    pub fn arrange(&self) -> Arrangement<'a> {
        let mut arrangement = Arrangement::default();
        let mut baseline: Option<Pt> = None;
        let mut offset = 0;

        while offset < self.text.len() {
            let (line, next) = self.line(offset);
            let y = match baseline {
                None => self.size.height - self.first_baseline_depth(),
                Some(previous) => previous - self.font.line_spacing(),
            };

            if y - line.descent < Pt::ZERO {
                tracing::trace!(
                    offset,
                    placed = arrangement.lines.len(),
                    "text overflows the bottom of the box"
                );
                arrangement.remainder = Some(offset);
                break;
            }

            baseline = Some(y);
            arrangement.lines.push(PlacedLine {
                origin: (line.left, y),
                line,
            });
            offset = next;
        }

        arrangement
    }
}

/// Iterator over the lines of a [TextLayout], see [TextLayout::lines].
pub struct Lines<'l, 'a, F: ?Sized> {
    layout: &'l TextLayout<'a, F>,
    offset: usize,
}

impl<'a, F: FontMetrics + ?Sized> Iterator for Lines<'_, 'a, F> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.layout.text.len() {
            return None;
        }

        let (line, next) = self.layout.line(self.offset);
        self.offset = next;
        Some(line)
    }
}
