//! scenestitch
//!
//! Front-end de la demo "Invisible Stitch":
//! - `config`: variables `SCENESTITCH_*` y `.env`.
//! - `app`: construye el backend y el `DemoHarness`.
//! - `cli` / `serve`: superficies de entrada (comando único o servidor de
//!   líneas JSON).
//!
//! El trabajo real (profundidad, inpainting, fusión de la nube) lo hace el
//! `generate_scene` externo.

pub mod app;
pub mod cli;
pub mod config;
pub mod errors;
pub mod serve;

pub use errors::AppError;
pub use scene_core;
