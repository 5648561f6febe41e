use crate::units::Pt;
use derive_more::Display;

/// Where a line sits horizontally when it is narrower than its box.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Display)]
pub enum HorizontalAlign {
    #[default]
    #[display("left")]
    Left,
    #[display("center")]
    Center,
    #[display("right")]
    Right,
}

impl HorizontalAlign {
    /// The offset from the left edge of the box at which a line starts, given
    /// the space left over on that line.
    ///
    /// Centered lines are truncated toward zero so that lines of the same
    /// width always land on the same offset.
    pub fn offset(self, remaining: Pt) -> Pt {
        match self {
            HorizontalAlign::Left => Pt::ZERO,
            HorizontalAlign::Center => (remaining / 2.0).trunc(),
            HorizontalAlign::Right => remaining,
        }
    }
}
