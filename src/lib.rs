mod error;
pub use error::*;

mod font;
pub use font::*;

mod geometry;
pub use geometry::*;

/// Line breaking and line metrics for text inside a box
pub mod layout;

mod units;
pub use units::*;

/// Re-export the font parser, mostly for direct access to [Font::face]
pub use owned_ttf_parser;
