//! `DemoHarness`: traduce una petición (imagen + prompt) en exactamente una
//! llamada al generador.
//!
//! Flujo por petición:
//! 1. nuevo `RunId` según la estrategia configurada;
//! 2. ruta `<output_dir>/gradio_<id>.ply`;
//! 3. asegurar que `output_dir` existe;
//! 4. invocar al generador con `GenerationParams::demo()`;
//! 5. devolver su `SceneArtifact` sin modificar.
//!
//! No hay reintentos ni validación del prompt; cualquier error del generador
//! sube tal cual al llamador.
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, error, info};

use crate::constants::DEFAULT_OUTPUT_DIR;
use crate::errors::HarnessError;
use crate::generator::SceneGenerator;
use crate::model::{artifact_path, GenerationJob, GenerationParams, SceneArtifact, SceneRequest};
use crate::run_id::{RunIdGenerator, RunIdStrategy};

#[derive(Clone)]
pub struct DemoHarness {
    generator: Arc<dyn SceneGenerator>,
    output_dir: PathBuf,
    run_ids: RunIdGenerator,
}

impl DemoHarness {
    /// Harness con directorio `outputs` e ids aleatorios.
    pub fn new(generator: Arc<dyn SceneGenerator>) -> Self {
        Self { generator, output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR), run_ids: RunIdGenerator::default() }
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_run_id_strategy(mut self, strategy: RunIdStrategy) -> Self {
        self.run_ids = RunIdGenerator::new(strategy);
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub async fn handle_request(&self, request: SceneRequest) -> Result<SceneArtifact, HarnessError> {
        let run_id = self.run_ids.next_id();
        let job = GenerationJob { output_path: artifact_path(&self.output_dir, &run_id),
                                  run_id,
                                  image: request.image,
                                  prompt: request.prompt,
                                  params: GenerationParams::demo() };
        debug!("harness:start run_id={} fingerprint={} generator={}@{} output={}",
               job.run_id,
               job.fingerprint(),
               self.generator.name(),
               self.generator.version(),
               job.output_path.display());

        tokio::fs::create_dir_all(&self.output_dir).await.map_err(HarnessError::OutputDir)?;

        match self.generator.generate_scene(&job).await {
            Ok(artifact) => {
                info!("harness:done run_id={} artifact={}", job.run_id, artifact.path.display());
                Ok(artifact)
            }
            Err(e) => {
                error!("harness:generator error run_id={} err={e}", job.run_id);
                Err(e.into())
            }
        }
    }

    /// Decodifica los bytes subidos y procesa la petición. Si la imagen no
    /// decodifica no se genera id ni se toca el disco.
    pub async fn handle_upload(&self, bytes: &[u8], prompt: &str) -> Result<SceneArtifact, HarnessError> {
        let request = SceneRequest::decode(bytes, prompt).inspect_err(|e| debug!("harness:decode failed err={e}"))?;
        self.handle_request(request).await
    }
}
