//! Contrato con el generador externo de escenas.
//!
//! El harness trata al generador como una función opaca y síncrona desde el
//! punto de vista de la petición: recibe un `GenerationJob`, escribe el asset
//! en `job.output_path` (o donde decida) y devuelve la referencia.
use std::io::Cursor;

use async_trait::async_trait;
use image::{DynamicImage, ImageFormat};

use crate::errors::GeneratorError;
use crate::model::{GenerationJob, SceneArtifact};

pub mod command;
pub mod mock;

pub use command::CommandSceneGenerator;
pub use mock::MockSceneGenerator;

#[async_trait]
pub trait SceneGenerator: Send + Sync {
    fn name(&self) -> &str;
    fn version(&self) -> &str;

    async fn generate_scene(&self, job: &GenerationJob) -> Result<SceneArtifact, GeneratorError>;
}

/// Serializa el bitmap a PNG para entregarlo a un proceso o intérprete
/// externo.
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, GeneratorError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
         .map_err(|e| GeneratorError::Encode(e.to_string()))?;
    Ok(bytes)
}
