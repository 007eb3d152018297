//! Servidor de líneas JSON sobre stdin/stdout.
//!
//! Cada línea de entrada es `{"image": "<ruta>", "prompt": "<texto>"}` y
//! produce exactamente una línea de respuesta, en el mismo orden:
//! `{"status":"ok","artifact":{...},"elapsed_ms":N}` o
//! `{"status":"error","message":"..."}`. Un error en una petición se
//! muestra al cliente y el servidor sigue con la siguiente.
use std::path::PathBuf;

use chrono::Utc;
use log::{debug, warn};
use scene_core::{DemoHarness, SceneArtifact};
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::app::generate_from_file;
use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct ServeRequest {
    pub image: PathBuf,
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ServeResponse {
    Ok { artifact: SceneArtifact, elapsed_ms: i64 },
    Error { message: String },
}

async fn answer(harness: &DemoHarness, line: &str) -> ServeResponse {
    let request: ServeRequest = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => return ServeResponse::Error { message: AppError::from(e).to_string() },
    };
    let started = Utc::now();
    match generate_from_file(harness, &request.image, &request.prompt).await {
        Ok(artifact) => ServeResponse::Ok { artifact, elapsed_ms: (Utc::now() - started).num_milliseconds() },
        Err(e) => {
            warn!("serve:request failed image={} err={e}", request.image.display());
            ServeResponse::Error { message: e.to_string() }
        }
    }
}

/// Atiende peticiones hasta EOF; devuelve cuántas se respondieron.
pub async fn serve_lines<R, W>(harness: &DemoHarness, reader: R, mut writer: W) -> Result<usize, AppError>
    where R: AsyncBufRead + Unpin,
          W: AsyncWrite + Unpin
{
    let mut lines = reader.lines();
    let mut served = 0usize;
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let response = answer(harness, &line).await;
        let mut out = serde_json::to_string(&response)?;
        out.push('\n');
        writer.write_all(out.as_bytes()).await?;
        writer.flush().await?;
        served += 1;
        debug!("serve:answered count={served}");
    }
    Ok(served)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene_core::MockSceneGenerator;
    use std::sync::Arc;

    #[tokio::test]
    async fn malformed_line_gets_error_response() {
        let harness = DemoHarness::new(Arc::new(MockSceneGenerator::default()));
        let mut out = Vec::new();
        let served = serve_lines(&harness, &b"{not json}\n\n"[..], &mut out).await.expect("io ok");
        assert_eq!(served, 1);
        let reply: serde_json::Value = serde_json::from_slice(&out).expect("json line");
        assert_eq!(reply["status"], "error");
    }
}
