//! Generador de pruebas: registra cada job y escribe una nube de puntos PLY
//! ASCII mínima (un vértice por celda muestreada, profundidad constante).
use std::fmt::Write as _;
use std::sync::Mutex;

use async_trait::async_trait;
use image::GenericImageView;
use serde_json::json;

use super::SceneGenerator;
use crate::errors::GeneratorError;
use crate::model::{GenerationJob, GenerationParams, SceneArtifact};
use crate::run_id::RunId;

/// Lo que el mock recibió en una llamada.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub run_id: RunId,
    pub prompt: String,
    pub output_path: std::path::PathBuf,
    pub params: GenerationParams,
    pub image_size: (u32, u32),
}

pub struct MockSceneGenerator {
    pub name: String,
    pub version: String,
    failure: Option<String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockSceneGenerator {
    pub fn new(name: String, version: String) -> Self {
        Self { name, version, failure: None, calls: Mutex::new(Vec::new()) }
    }

    /// Mock que falla siempre con `message`, sin escribir nada.
    pub fn failing(message: impl Into<String>) -> Self {
        Self { failure: Some(message.into()), ..Self::new("mock".into(), "0.0.0".into()) }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_else(|p| p.into_inner().clone())
    }
}

impl Default for MockSceneGenerator {
    fn default() -> Self {
        Self::new("mock".into(), "0.0.0".into())
    }
}

const GRID: u32 = 16;

fn render_ply(job: &GenerationJob) -> (String, usize) {
    let (w, h) = job.image.dimensions();
    let step = (w / GRID).max(h / GRID).max(1) as usize;
    let mut body = String::new();
    let mut count = 0usize;
    for y in (0..h).step_by(step) {
        for x in (0..w).step_by(step) {
            let p = job.image.get_pixel(x, y).0;
            let _ = writeln!(body, "{} {} 1.0 {} {} {}", x as f32 / w as f32, y as f32 / h as f32, p[0], p[1], p[2]);
            count += 1;
        }
    }
    let header = format!("ply\nformat ascii 1.0\ncomment {}\nelement vertex {count}\nproperty float x\nproperty float y\n\
                          property float z\nproperty uchar red\nproperty uchar green\nproperty uchar blue\nend_header\n",
                         job.run_id);
    (header + &body, count)
}

#[async_trait]
impl SceneGenerator for MockSceneGenerator {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }

    async fn generate_scene(&self, job: &GenerationJob) -> Result<SceneArtifact, GeneratorError> {
        let call = RecordedCall { run_id: job.run_id.clone(),
                                  prompt: job.prompt.clone(),
                                  output_path: job.output_path.clone(),
                                  params: job.params,
                                  image_size: job.image.dimensions() };
        match self.calls.lock() {
            Ok(mut calls) => calls.push(call),
            Err(poisoned) => poisoned.into_inner().push(call),
        }
        if let Some(msg) = &self.failure {
            return Err(GeneratorError::Failed(msg.clone()));
        }

        let (ply, vertices) = render_ply(job);
        tokio::fs::write(&job.output_path, ply).await?;
        Ok(SceneArtifact { path: job.output_path.clone(),
                           metadata: Some(json!({ "generator": self.name, "vertices": vertices })) })
    }
}
