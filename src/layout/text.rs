use std::borrow::Cow;
use std::ops::Range;

use crate::font::FontMetrics;
use crate::geometry::Size;
use crate::layout::HorizontalAlign;
use crate::units::Pt;

const TABSIZE: usize = 4;

/// Why a line ended where it did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BreakReason {
    /// The line ran into a `\n`
    Newline,
    /// The line ran into the end of the text
    EndOfText,
    /// The next character would have overflowed the box
    Wrap,
}

/// Where a single line of text starts and stops.
#[derive(Debug, Clone, PartialEq)]
pub struct LineBreak {
    /// Byte offset of the first visible character of the line
    pub start: usize,
    /// Byte offset just past the last visible character of the line. Trailing
    /// spaces are not visible.
    pub end: usize,
    /// Byte offset at which the following line starts
    pub next: usize,
    /// The sum of the advances of the visible characters
    pub width: Pt,
    pub reason: BreakReason,
}

impl LineBreak {
    /// The visible part of the line
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Breaks a borrowed piece of text into lines that fit the width of a box.
///
/// Lines are broken greedily: as many words as fit are put on a line, and the
/// first word that does not fit starts the next line. A word that is wider
/// than the box on its own is split at the last character that fits. `\n`
/// always ends a line. Spaces at the start or end of a line are not part of
/// it.
///
/// Every query rescans the text from the offset it is given; nothing is
/// cached, so the layout is cheap to create and can be shared freely.
///
/// Offsets are byte offsets into the text. An offset that does not fall on a
/// character boundary is moved forward to the next one, and an offset past
/// the end of the text describes an empty line.
///
/// If the first character of a line is wider than the whole box, that line is
/// empty and the character is skipped when moving on to the next line.
pub struct TextLayout<'a, F: ?Sized> {
    pub(crate) font: &'a F,
    pub(crate) text: &'a str,
    pub(crate) size: Size,
    pub(crate) align: HorizontalAlign,
}

impl<'a, F: FontMetrics + ?Sized> TextLayout<'a, F> {
    pub fn new(font: &'a F, text: &'a str, size: Size, align: HorizontalAlign) -> Self {
        TextLayout {
            font,
            text,
            size,
            align,
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn align(&self) -> HorizontalAlign {
        self.align
    }

    /// The width lines are broken at. A negative box is treated as having no
    /// room at all.
    fn available_width(&self) -> Pt {
        self.size.width.max(Pt::ZERO)
    }

    /// Works out where the line starting at `start` ends, and where the line
    /// after it starts.
    pub fn line_break(&self, start: usize) -> LineBreak {
        let text = self.text;
        let first = skip_spaces(text, char_boundary(text, start));
        let limit = self.available_width();

        let mut candidate = Pt::ZERO;
        let mut reason = BreakReason::EndOfText;
        let mut last = text.len();
        let mut in_space_run = false;
        // the last place the line can end without splitting a word
        let mut boundary: Option<(usize, Pt)> = None;

        for (offset, ch) in text[first..].char_indices() {
            let pos = first + offset;
            if ch == '\n' {
                reason = BreakReason::Newline;
                last = pos;
                break;
            }

            if ch == ' ' {
                if !in_space_run {
                    in_space_run = true;
                    boundary = Some((pos, candidate));
                }
            } else {
                in_space_run = false;
            }

            let advance = self.font.metrics(ch).advance.x;
            if candidate + advance > limit {
                reason = BreakReason::Wrap;
                last = pos;
                break;
            }

            candidate += advance;
        }

        // trailing spaces never count, and a word that overflows goes to the
        // next line if there is an earlier place to break
        let (end, width) = match boundary {
            Some(boundary) if in_space_run || reason == BreakReason::Wrap => boundary,
            _ => (last, candidate),
        };

        debug_assert!(width >= Pt::ZERO, "line width {width} is negative");
        debug_assert!(width <= limit, "line width {width} overflows {limit}");

        let next = match reason {
            BreakReason::Newline => last + 1,
            BreakReason::EndOfText => text.len(),
            BreakReason::Wrap if end == first => {
                let skipped = text[first..].chars().next().map_or(0, char::len_utf8);
                tracing::debug!(
                    offset = first,
                    character = ?&text[first..first + skipped],
                    box_width = %limit,
                    "glyph is wider than the box, skipping it"
                );
                first + skipped
            }
            BreakReason::Wrap => {
                let after = skip_spaces(text, end);
                if text[after..].starts_with('\n') {
                    after + 1
                } else {
                    after
                }
            }
        };

        LineBreak {
            start: first,
            end,
            next,
            width,
            reason,
        }
    }

    /// How much of the box's width the line starting at `start` takes up
    pub fn line_width(&self, start: usize) -> Pt {
        self.line_break(start).width
    }

    /// How far from the left edge of the box the line starting at `start`
    /// begins, according to the alignment
    pub fn line_left(&self, start: usize) -> Pt {
        match self.align {
            HorizontalAlign::Left => Pt::ZERO,
            align => align.offset(self.available_width() - self.line_width(start)),
        }
    }

    /// How far above the baseline the tallest glyph of the line starting at
    /// `start` reaches. Empty lines have no height.
    pub fn line_ascent(&self, start: usize) -> Pt {
        self.ascent_of(&self.line_break(start))
    }

    pub(crate) fn ascent_of(&self, line: &LineBreak) -> Pt {
        self.text[line.range()]
            .chars()
            .map(|ch| self.font.sprite_height(ch) + self.font.metrics(ch).bearing.y)
            .fold(Pt::ZERO, Pt::max)
    }

    /// How far below the baseline the lowest glyph of the line starting at
    /// `start` reaches. Lines without descenders have no descent.
    pub fn line_descent(&self, start: usize) -> Pt {
        self.descent_of(&self.line_break(start))
    }

    pub(crate) fn descent_of(&self, line: &LineBreak) -> Pt {
        self.text[line.range()]
            .chars()
            .map(|ch| Pt::ZERO - self.font.metrics(ch).bearing.y)
            .fold(Pt::ZERO, Pt::max)
    }

    pub(crate) fn left_of(&self, line: &LineBreak) -> Pt {
        self.align.offset(self.available_width() - line.width)
    }
}

fn char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset += 1;
    }
    offset
}

fn skip_spaces(text: &str, from: usize) -> usize {
    text[from..]
        .find(|ch: char| ch != ' ')
        .map_or(text.len(), |skipped| from + skipped)
}

/// Prepares text for layout: tabs are expanded to four spaces and `\r\n` and
/// `\r` line endings become `\n`. The text is only copied if it changes.
pub fn normalize_text(text: &str) -> Cow<'_, str> {
    if !text.contains(['\t', '\r']) {
        return Cow::Borrowed(text);
    }

    let text = text.replace('\t', &" ".repeat(TABSIZE));
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    Cow::Owned(text)
}

/// Calculate the width of a given string of text, ignoring line breaks
pub fn width_of_text<F: FontMetrics + ?Sized>(text: &str, font: &F) -> Pt {
    text.chars().map(|ch| font.metrics(ch).advance.x).sum()
}
