//! Backend que delega en un programa externo (por defecto `python3 run.py`).
//!
//! Protocolo:
//! - el bitmap se deja como PNG en `<output>.input.png` y se borra al final;
//! - argumentos: `--image <png> --prompt <p> --output <ply> --mode stage
//!   --seed 0 --max-resolution 1000`;
//! - salida != 0 es un fallo con el stderr del proceso;
//! - stdout es libre (logs); solo una línea `artifact=<ruta>` declara otra
//!   ruta de artifact, y gana la última. Sin marcador se asume
//!   `job.output_path`. El archivo debe existir.
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use log::{debug, warn};
use tokio::process::Command;

use super::{encode_png, SceneGenerator};
use crate::errors::GeneratorError;
use crate::model::{GenerationJob, SceneArtifact};

#[derive(Debug, Clone)]
pub struct CommandSceneGenerator {
    program: String,
    args: Vec<String>,
}

impl CommandSceneGenerator {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self { program: program.into(), args }
    }

    /// Argumentos completos para un job (sin el programa).
    pub fn command_args(&self, job: &GenerationJob, input_png: &Path) -> Vec<String> {
        let mut args = self.args.clone();
        args.extend([
            "--image".to_string(),
            input_png.to_string_lossy().into_owned(),
            "--prompt".to_string(),
            job.prompt.clone(),
            "--output".to_string(),
            job.output_path.to_string_lossy().into_owned(),
            "--mode".to_string(),
            job.params.mode.to_string(),
            "--seed".to_string(),
            job.params.seed.to_string(),
            "--max-resolution".to_string(),
            job.params.max_resolution.to_string(),
        ]);
        args
    }
}

fn staged_input_path(output: &Path) -> PathBuf {
    let mut name = output.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".input.png");
    output.with_file_name(name)
}

const ARTIFACT_MARKER: &str = "artifact=";

fn reported_artifact(stdout: &str) -> Option<PathBuf> {
    stdout.lines()
          .filter_map(|l| l.trim().strip_prefix(ARTIFACT_MARKER))
          .map(str::trim)
          .filter(|p| !p.is_empty())
          .last()
          .map(PathBuf::from)
}

#[async_trait]
impl SceneGenerator for CommandSceneGenerator {
    fn name(&self) -> &str {
        "command"
    }

    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    async fn generate_scene(&self, job: &GenerationJob) -> Result<SceneArtifact, GeneratorError> {
        let input_png = staged_input_path(&job.output_path);
        tokio::fs::write(&input_png, encode_png(&job.image)?).await?;

        let args = self.command_args(job, &input_png);
        debug!("command:start run_id={} program={} args={:?}", job.run_id, self.program, args);
        let output = Command::new(&self.program).args(&args)
                                                .stdin(Stdio::null())
                                                .output()
                                                .await;

        if let Err(e) = tokio::fs::remove_file(&input_png).await {
            debug!("command:cleanup skipped path={} err={e}", input_png.display());
        }
        let output = output?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!("command:failed run_id={} status={}", job.run_id, output.status);
            return Err(GeneratorError::Failed(format!("{} exited with {}: {}", self.program, output.status, stderr)));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let path = reported_artifact(&stdout).unwrap_or_else(|| job.output_path.clone());
        if !tokio::fs::try_exists(&path).await? {
            return Err(GeneratorError::MissingArtifact(path));
        }
        debug!("command:done run_id={} artifact={}", job.run_id, path.display());
        Ok(SceneArtifact::at(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GenerationParams;
    use crate::run_id::RunId;
    use image::{DynamicImage, RgbImage};

    fn job(dir: &Path, prompt: &str) -> GenerationJob {
        GenerationJob { run_id: RunId::parse("c0ffee").expect("valid"),
                        image: DynamicImage::ImageRgb8(RgbImage::new(2, 2)),
                        prompt: prompt.to_string(),
                        output_path: dir.join("gradio_c0ffee.ply"),
                        params: GenerationParams::demo() }
    }

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("scene-core-cmd-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("temp dir");
        dir
    }

    #[test]
    fn args_carry_fixed_params() {
        let gen = CommandSceneGenerator::new("python3", vec!["run.py".into()]);
        let j = job(Path::new("outputs"), "a cozy bedroom");
        let args = gen.command_args(&j, Path::new("outputs/in.png"));
        assert_eq!(args,
                   ["run.py", "--image", "outputs/in.png", "--prompt", "a cozy bedroom", "--output",
                    "outputs/gradio_c0ffee.ply", "--mode", "stage", "--seed", "0", "--max-resolution", "1000"]);
    }

    #[test]
    fn staged_input_sits_next_to_output() {
        assert_eq!(staged_input_path(Path::new("outputs/gradio_c0ffee.ply")),
                   PathBuf::from("outputs/gradio_c0ffee.ply.input.png"));
    }

    #[test]
    fn only_marked_lines_report_artifacts() {
        assert_eq!(reported_artifact("loading\nartifact=out/a.ply\nSaved point cloud. Done.\n"),
                   Some(PathBuf::from("out/a.ply")));
        assert_eq!(reported_artifact("artifact=out/a.ply\nartifact= out/b.ply \n"), Some(PathBuf::from("out/b.ply")));
        assert_eq!(reported_artifact("out/a.ply\n"), None);
        assert_eq!(reported_artifact("artifact=\n  \n"), None);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn shell_generator_writes_artifact() {
        let dir = temp_dir();
        let script = "while [ $# -gt 0 ]; do if [ \"$1\" = --output ]; then out=\"$2\"; fi; shift; done; \
                      echo ply > \"$out\"; echo \"artifact=$out\"";
        let gen = CommandSceneGenerator::new("sh", vec!["-c".into(), script.into(), "gen".into()]);
        let j = job(&dir, "");
        let artifact = gen.generate_scene(&j).await.expect("generator succeeds");
        assert_eq!(artifact.path, j.output_path);
        assert!(j.output_path.exists());
        assert!(!staged_input_path(&j.output_path).exists(), "staged input must be removed");
        let _ = std::fs::remove_dir_all(dir);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn trailing_log_line_after_writing_keeps_requested_path() {
        let dir = temp_dir();
        let script = "while [ $# -gt 0 ]; do if [ \"$1\" = --output ]; then out=\"$2\"; fi; shift; done; \
                      echo ply > \"$out\"; echo 'Saved point cloud. Done.'";
        let gen = CommandSceneGenerator::new("sh", vec!["-c".into(), script.into(), "gen".into()]);
        let j = job(&dir, "a view of Zion National Park");
        let artifact = gen.generate_scene(&j).await.expect("log output must not hide the artifact");
        assert_eq!(artifact.path, j.output_path);
        assert!(artifact.path.exists());
        let _ = std::fs::remove_dir_all(dir);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_zero_exit_is_reported_with_stderr() {
        let dir = temp_dir();
        let gen = CommandSceneGenerator::new("sh", vec!["-c".into(), "echo CUDA out of memory >&2; exit 3".into()]);
        let err = gen.generate_scene(&job(&dir, "x")).await.unwrap_err();
        match err {
            GeneratorError::Failed(msg) => assert!(msg.contains("CUDA out of memory"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
        let _ = std::fs::remove_dir_all(dir);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn silent_success_without_file_is_missing_artifact() {
        let dir = temp_dir();
        let gen = CommandSceneGenerator::new("true", vec![]);
        let err = gen.generate_scene(&job(&dir, "x")).await.unwrap_err();
        assert!(matches!(err, GeneratorError::MissingArtifact(_)));
        let _ = std::fs::remove_dir_all(dir);
    }
}
