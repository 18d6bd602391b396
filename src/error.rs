use miette::Diagnostic;
use thiserror::Error;

/// Main error type for spritegen operations
#[derive(Error, Diagnostic, Debug)]
pub enum SpriteError {
    #[error("IO error: {0}")]
    #[diagnostic(code(spritegen::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(spritegen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid canvas dimensions {width}x{height}")]
    #[diagnostic(
        code(spritegen::dimensions),
        help("Canvas width and height must both be greater than zero")
    )]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Frame {index} is {actual_width}x{actual_height}, expected {width}x{height}")]
    #[diagnostic(
        code(spritegen::sheet),
        help("Every frame of a sheet must have the same size")
    )]
    FrameMismatch {
        index: usize,
        width: u32,
        height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    #[error("Scaling {width}x{height} by {factor} overflows the canvas size")]
    #[diagnostic(
        code(spritegen::dimensions),
        help("Use a smaller scale factor")
    )]
    ScaleOverflow { width: u32, height: u32, factor: u32 },

    #[error("Cannot compose a sheet from zero frames")]
    #[diagnostic(code(spritegen::sheet))]
    EmptySheet,

    #[error("Encode error: {message}")]
    #[diagnostic(code(spritegen::encode))]
    Encode { message: String },

    #[error("Corrupt PNG: {message}")]
    #[diagnostic(code(spritegen::corrupt))]
    Corrupt { message: String },

    #[error("Config error: {message}")]
    #[diagnostic(code(spritegen::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(spritegen::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Verification failed: {message}")]
    #[diagnostic(code(spritegen::verify))]
    Verify {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, SpriteError>;
