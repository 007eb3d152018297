//! scene-engine: backend `SceneGenerator` que ejecuta el `generate_scene` de
//! Python dentro del proceso vía pyo3.
use async_trait::async_trait;
use log::debug;
use pyo3::PyErr;
use scene_core::generator::encode_png;
use scene_core::{GenerationJob, GeneratorError, SceneArtifact, SceneGenerator};
use thiserror::Error;

pub mod core;
pub use core::BridgeCall;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Error inicializando Python: {0}")]
    Init(PyErr),
    #[error("Error en generate_scene: {0}")]
    Generate(PyErr),
}

impl From<EngineError> for GeneratorError {
    fn from(err: EngineError) -> Self {
        GeneratorError::Failed(err.to_string())
    }
}

pub struct PythonSceneGenerator {
    module: String,
}

impl PythonSceneGenerator {
    /// Inicializa el intérprete y fija el módulo que expone `generate_scene`.
    pub fn init(module: impl Into<String>, search_path: &str) -> Result<Self, EngineError> {
        core::init_python(search_path).map_err(EngineError::Init)?;
        Ok(Self { module: module.into() })
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn bridge_call(&self, job: &GenerationJob) -> Result<BridgeCall, GeneratorError> {
        Ok(BridgeCall { module: self.module.clone(),
                        png: encode_png(&job.image)?,
                        prompt: job.prompt.clone(),
                        output_path: job.output_path.to_string_lossy().into_owned(),
                        mode: job.params.mode.as_str(),
                        seed: job.params.seed,
                        max_resolution: job.params.max_resolution })
    }
}

#[async_trait]
impl SceneGenerator for PythonSceneGenerator {
    fn name(&self) -> &str {
        "python"
    }

    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    async fn generate_scene(&self, job: &GenerationJob) -> Result<SceneArtifact, GeneratorError> {
        let call = self.bridge_call(job)?;
        debug!("python:start run_id={} module={}", job.run_id, call.module);
        let path = tokio::task::spawn_blocking(move || core::generate_scene(&call))
            .await
            .map_err(|e| GeneratorError::Failed(format!("python worker: {e}")))?
            .map_err(EngineError::Generate)?;
        debug!("python:done run_id={} artifact={path}", job.run_id);
        Ok(SceneArtifact::at(path))
    }
}
