//! Errores del harness y de los generadores.

use std::path::PathBuf;
use thiserror::Error;

/// Fallos reportados por un backend de generación.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("generator failed: {0}")]
    Failed(String),
    #[error("generator produced no artifact at {}", .0.display())]
    MissingArtifact(PathBuf),
    #[error("could not encode input image: {0}")]
    Encode(String),
    #[error("generator io: {0}")]
    Io(#[from] std::io::Error),
}

/// Errores observables de `DemoHarness`.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("image could not be decoded: {0}")]
    Decode(#[from] image::ImageError),
    #[error("invalid run id: {0}")]
    InvalidRunId(String),
    #[error("output directory unavailable: {0}")]
    OutputDir(#[source] std::io::Error),
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}
