//! scene-core: harness de demo para alucinación de escenas 3D.
pub mod catalog;
pub mod constants;
pub mod errors;
pub mod generator;
pub mod harness;
pub mod hashing;
pub mod model;
pub mod run_id;

pub use errors::{GeneratorError, HarnessError};
pub use generator::{CommandSceneGenerator, MockSceneGenerator, SceneGenerator};
pub use harness::DemoHarness;
pub use model::{GenerationJob, GenerationMode, GenerationParams, SceneArtifact, SceneRequest};
pub use run_id::{RunId, RunIdGenerator, RunIdStrategy};
