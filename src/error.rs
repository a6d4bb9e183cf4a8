use miette::Diagnostic;
use thiserror::Error;

/// Main error type for bitmap operations
#[derive(Error, Diagnostic, Debug)]
pub enum BitmapError {
    #[error("Cannot allocate a {width}x{height} bitmap")]
    #[diagnostic(
        code(bitmap::alloc),
        help("Bitmaps are limited to 1 GiB of pixel data")
    )]
    Allocation { width: u32, height: u32 },

    #[error("Pixel ({x}, {y}) is outside a {width}x{height} bitmap")]
    #[diagnostic(code(bitmap::bounds))]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("Invalid transform: {message}")]
    #[diagnostic(code(bitmap::transform))]
    InvalidTransform { message: String },

    #[error("Draw error: {message}")]
    #[diagnostic(code(bitmap::draw))]
    Draw {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(bitmap::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, BitmapError>;
