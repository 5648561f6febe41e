use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error("font has neither a replacement character (U+FFFD) nor a question mark glyph")]
    /// The font has no glyph to stand in for characters it does not cover
    NoReplacementGlyph,
}
