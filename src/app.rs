//! Wiring: configuración → backend de generación → `DemoHarness`, y las
//! operaciones de alto nivel que usa el binario.
use std::path::Path;
use std::sync::Arc;

use log::{info, warn};
use scene_core::catalog::{self, DemoExample};
use scene_core::{CommandSceneGenerator, DemoHarness, SceneArtifact, SceneGenerator};

use crate::config::{AppConfig, GeneratorBackend};
use crate::errors::AppError;

/// Construye el backend configurado.
pub fn build_generator(backend: &GeneratorBackend) -> Result<Arc<dyn SceneGenerator>, AppError> {
    match backend {
        GeneratorBackend::Command { program, args } => Ok(Arc::new(CommandSceneGenerator::new(program.clone(), args.clone()))),
        #[cfg(feature = "python")]
        GeneratorBackend::Python { module } => {
            let gen = scene_engine::PythonSceneGenerator::init(module.clone(), ".").map_err(|e| AppError::Config(e.to_string()))?;
            Ok(Arc::new(gen))
        }
        #[cfg(not(feature = "python"))]
        GeneratorBackend::Python { .. } => {
            Err(AppError::Config("backend python no disponible: compilar con --features python".into()))
        }
    }
}

/// Harness según la configuración, con el generador indicado.
pub fn build_harness(config: &AppConfig, generator: Arc<dyn SceneGenerator>) -> DemoHarness {
    DemoHarness::new(generator).with_output_dir(&config.output_dir).with_run_id_strategy(config.run_ids)
}

/// Lee la imagen del disco y la envía al harness.
pub async fn generate_from_file(harness: &DemoHarness, image: &Path, prompt: &str) -> Result<SceneArtifact, AppError> {
    let bytes = tokio::fs::read(image).await.inspect_err(|e| warn!("app:read failed path={} err={e}", image.display()))?;
    info!("app:request image={} bytes={} prompt_len={}", image.display(), bytes.len(), prompt.len());
    Ok(harness.handle_upload(&bytes, prompt).await?)
}

/// Ejecuta el ejemplo `number` (1-based) del catálogo.
pub async fn run_example(harness: &DemoHarness, examples_dir: &Path, number: usize) -> Result<SceneArtifact, AppError> {
    let example = catalog::example(number).ok_or_else(|| {
                                               AppError::Usage(format!("ejemplo {number} fuera de rango (1..={})",
                                                                       catalog::EXAMPLES.len()))
                                           })?;
    generate_from_file(harness, &example.image_path(examples_dir), example.prompt).await
}

/// Texto del listado de `scenestitch examples`.
pub fn render_catalog() -> String {
    let mut out = format!("{}\n\n{}\n\nTips:\n", catalog::TITLE, catalog::DESCRIPTION);
    for tip in catalog::TIPS {
        out.push_str(&format!("  - {tip}\n"));
    }
    out.push_str("\nExamples:\n");
    for (i, DemoExample { image, prompt }) in catalog::EXAMPLES.iter().enumerate() {
        out.push_str(&format!("  {:>2}. {prompt}  [{image}]\n", i + 1));
    }
    out
}
