//! Tipos de datos intercambiados entre cliente, harness y generador.

pub mod artifact;
pub mod job;
pub mod params;
pub mod request;

pub use artifact::{artifact_path, SceneArtifact};
pub use job::GenerationJob;
pub use params::{GenerationMode, GenerationParams};
pub use request::SceneRequest;
