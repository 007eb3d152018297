use scene_core::HarnessError;
use thiserror::Error;

/// Errores de la capa de aplicación (CLI, servidor de líneas, wiring).
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Harness(#[from] HarnessError),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Uso incorrecto: {0}")]
    Usage(String),
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON inválido: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Código de salida del binario para este error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Usage(_) => 2,
            AppError::Config(_) => 3,
            AppError::Harness(_) | AppError::Io(_) | AppError::Json(_) => 5,
        }
    }
}
