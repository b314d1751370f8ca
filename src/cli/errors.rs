use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No source image found.")]
    NoSourceImage { candidates: Vec<PathBuf> },

    #[error("Source image not found: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Invalid smoothness: {value}. Must be a positive number")]
    InvalidSmoothness { value: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Library(#[from] squircle_iconset::Error),
}

impl AppError {
    /// Extra guidance printed below the error message.
    pub fn hint(&self) -> Option<String> {
        match self {
            AppError::NoSourceImage { candidates } => {
                let mut hint = String::from("Usage: squircle-iconset [SOURCE_IMAGE]\nLooked for:");
                for candidate in candidates {
                    hint.push_str(&format!("\n  {}", candidate.display()));
                }
                Some(hint)
            }
            AppError::SourceNotFound { .. } => {
                Some("Usage: squircle-iconset [SOURCE_IMAGE]".to_string())
            }
            _ => None,
        }
    }
}
