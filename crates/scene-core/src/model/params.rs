use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SEED, MAX_RESOLUTION};

/// Perfil de procesamiento del generador. La demo solo usa `Stage`
/// (baja resolución, sin densificación ni optimización de la nube).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    Stage,
}

impl GenerationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMode::Stage => "stage",
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parámetros fijos con los que el harness invoca al generador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub mode: GenerationMode,
    pub seed: u64,
    pub max_resolution: u32,
}

impl GenerationParams {
    /// Configuración de la demo: `stage`, semilla 0, resolución máxima 1000.
    pub const fn demo() -> Self {
        Self { mode: GenerationMode::Stage, seed: DEFAULT_SEED, max_resolution: MAX_RESOLUTION }
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self::demo()
    }
}
