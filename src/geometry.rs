use crate::units::*;

/// A two-dimensional extent, used for the box text is laid out in.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Size {
    pub width: Pt,
    pub height: Pt,
}

impl Size {
    pub fn new(width: Pt, height: Pt) -> Size {
        Size { width, height }
    }
}

impl From<(Pt, Pt)> for Size {
    fn from((width, height): (Pt, Pt)) -> Self {
        Size { width, height }
    }
}

/// A two-dimensional offset, such as a glyph's advance or bearing.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector {
    pub x: Pt,
    pub y: Pt,
}

impl Vector {
    pub fn new(x: Pt, y: Pt) -> Vector {
        Vector { x, y }
    }
}
