//! Constantes del harness de demo.
//!
//! Agrupa los valores fijos que determinan la forma de las rutas de salida y
//! la configuración con la que se invoca al generador. Cambiarlos altera el
//! contrato observable del harness (nombres de archivo y parámetros), por lo
//! que se mantienen fuera de la configuración por entorno.

/// Directorio relativo convencional donde se escriben los artifacts.
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

/// Prefijo de cada artifact generado por la demo.
pub const ARTIFACT_PREFIX: &str = "gradio_";

/// Extensión del artifact serializado (nube de puntos PLY).
pub const ARTIFACT_EXTENSION: &str = "ply";

/// Longitud en caracteres hex del identificador de ejecución.
pub const RUN_ID_LEN: usize = 6;

/// Resolución máxima con la que se limita la salida (latencia de la demo).
pub const MAX_RESOLUTION: u32 = 1000;

/// Semilla fija para reproducibilidad del generador.
pub const DEFAULT_SEED: u64 = 0;

/// Versión lógica del harness; entra en el fingerprint de cada job.
pub const HARNESS_VERSION: &str = "H1.0";
