use std::path::PathBuf;

use image::DynamicImage;
use serde_json::json;

use crate::constants::HARNESS_VERSION;
use crate::hashing::hash_value;
use crate::model::params::GenerationParams;
use crate::run_id::RunId;

/// Una invocación concreta del generador: lo que el harness le entrega.
#[derive(Debug, Clone)]
pub struct GenerationJob {
    pub run_id: RunId,
    pub image: DynamicImage,
    pub prompt: String,
    pub output_path: PathBuf,
    pub params: GenerationParams,
}

impl GenerationJob {
    /// blake3 del JSON canónico de todo salvo los píxeles. Solo correlaciona
    /// líneas de log; no identifica contenido.
    pub fn fingerprint(&self) -> String {
        hash_value(&json!({
            "harness_version": HARNESS_VERSION,
            "run_id": self.run_id.as_str(),
            "prompt": self.prompt,
            "output_path": self.output_path.to_string_lossy(),
            "params": self.params,
            "image": [self.image.width(), self.image.height()],
        }))
    }
}
