//! Referencia al asset 3D producido por el generador.
//!
//! El harness no interpreta el contenido: devuelve al cliente exactamente lo
//! que el generador entregó. Crear, retener o borrar el archivo queda fuera
//! de su responsabilidad.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{ARTIFACT_EXTENSION, ARTIFACT_PREFIX};
use crate::run_id::RunId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneArtifact {
    pub path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>, // información del backend (no usada por el harness)
}

impl SceneArtifact {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), metadata: None }
    }
}

/// `<dir>/gradio_<id>.ply`; única fuente de nombres de salida.
pub fn artifact_path(output_dir: &Path, run_id: &RunId) -> PathBuf {
    output_dir.join(format!("{ARTIFACT_PREFIX}{run_id}.{ARTIFACT_EXTENSION}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_follows_naming_convention() {
        let id = RunId::parse("a1b2c3").expect("valid");
        assert_eq!(artifact_path(Path::new("outputs"), &id), PathBuf::from("outputs/gradio_a1b2c3.ply"));
    }

    #[test]
    fn metadata_is_optional_in_json() {
        let json = serde_json::to_value(SceneArtifact::at("outputs/gradio_a1b2c3.ply")).expect("json");
        assert!(json.get("metadata").is_none());
    }
}
