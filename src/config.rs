//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) una sola vez y construye `AppConfig`
//! (`from_env`, `from_lookup`). Los parámetros de generación no son
//! configurables.
use std::env::VarError;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use scene_core::constants::DEFAULT_OUTPUT_DIR;
use scene_core::RunIdStrategy;

use crate::errors::AppError;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenvy::dotenv(); // ignora error si no existe .env
});

/// Backend que ejecuta `generate_scene`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorBackend {
    /// Programa externo (`python3 run.py ...`).
    Command { program: String, args: Vec<String> },
    /// Intérprete embebido vía pyo3 (feature `python`).
    Python { module: String },
}

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub output_dir: PathBuf,
    pub examples_dir: PathBuf,
    pub run_ids: RunIdStrategy,
    pub generator: GeneratorBackend,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
               examples_dir: PathBuf::from("examples"),
               run_ids: RunIdStrategy::default(),
               generator: GeneratorBackend::Command { program: "python3".into(), args: vec!["run.py".into()] } }
    }
}

impl AppConfig {
    /// Lee `SCENESTITCH_*` del entorno (tras cargar `.env`).
    pub fn from_env() -> Result<Self, AppError> {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env_value(key, std::env::var(key)))
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria.
    pub fn from_lookup(lookup: impl Fn(&str) -> Result<Option<String>, AppError>) -> Result<Self, AppError> {
        let defaults = Self::default();
        let var = |key: &str| -> Result<Option<String>, AppError> {
            Ok(lookup(key)?.filter(|v| !v.trim().is_empty()))
        };

        let run_ids = match var("SCENESTITCH_RUN_ID")? {
            Some(raw) => raw.parse::<RunIdStrategy>().map_err(AppError::Config)?,
            None => defaults.run_ids,
        };

        let generator = match var("SCENESTITCH_GENERATOR")?.as_deref().map(str::trim) {
            None | Some("command") => {
                let program = var("SCENESTITCH_GENERATOR_PROGRAM")?.unwrap_or_else(|| "python3".into());
                let args = var("SCENESTITCH_GENERATOR_ARGS")?.map(|a| a.split_whitespace().map(String::from).collect())
                                                            .unwrap_or_else(|| vec!["run.py".into()]);
                GeneratorBackend::Command { program, args }
            }
            Some("python") => {
                GeneratorBackend::Python { module: var("SCENESTITCH_PYTHON_MODULE")?.unwrap_or_else(|| "run".into()) }
            }
            Some(other) => return Err(AppError::Config(format!("SCENESTITCH_GENERATOR desconocido: {other}"))),
        };

        Ok(Self { output_dir: var("SCENESTITCH_OUTPUT_DIR")?.map(PathBuf::from).unwrap_or(defaults.output_dir),
                  examples_dir: var("SCENESTITCH_EXAMPLES_DIR")?.map(PathBuf::from).unwrap_or(defaults.examples_dir),
                  run_ids,
                  generator })
    }
}

/// Variable ausente → `None`; valor que no es UTF-8 → error de configuración.
fn env_value(key: &str, value: Result<String, VarError>) -> Result<Option<String>, AppError> {
    match value {
        Ok(v) => Ok(Some(v)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(AppError::Config(format!("{key} no es UTF-8: {}", raw.to_string_lossy()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::ffi::OsString;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Result<Option<String>, AppError> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| Ok(map.get(k).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let cfg = AppConfig::from_lookup(lookup(&[])).expect("defaults");
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.output_dir, PathBuf::from("outputs"));
        assert_eq!(cfg.examples_dir, PathBuf::from("examples"));
        assert_eq!(cfg.run_ids, RunIdStrategy::Random);
    }

    #[test]
    fn command_backend_from_env() {
        let cfg = AppConfig::from_lookup(lookup(&[("SCENESTITCH_GENERATOR_PROGRAM", "/opt/venv/bin/python"),
                                                  ("SCENESTITCH_GENERATOR_ARGS", "run.py  --fast"),
                                                  ("SCENESTITCH_OUTPUT_DIR", "/tmp/scenes"),
                                                  ("SCENESTITCH_RUN_ID", "timestamp")]))
                     .expect("valid");
        assert_eq!(cfg.generator,
                   GeneratorBackend::Command { program: "/opt/venv/bin/python".into(),
                                               args: vec!["run.py".into(), "--fast".into()] });
        assert_eq!(cfg.output_dir, PathBuf::from("/tmp/scenes"));
        assert_eq!(cfg.run_ids, RunIdStrategy::Timestamp);
    }

    #[test]
    fn python_backend_module() {
        let cfg = AppConfig::from_lookup(lookup(&[("SCENESTITCH_GENERATOR", "python"),
                                                  ("SCENESTITCH_PYTHON_MODULE", "invisible_stitch.run")]))
                     .expect("valid");
        assert_eq!(cfg.generator, GeneratorBackend::Python { module: "invisible_stitch.run".into() });
    }

    #[test]
    fn invalid_values_are_config_errors() {
        let err = AppConfig::from_lookup(lookup(&[("SCENESTITCH_RUN_ID", "counter")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        let err = AppConfig::from_lookup(lookup(&[("SCENESTITCH_GENERATOR", "grpc")])).unwrap_err();
        assert!(matches!(err, AppError::Config(ref m) if m.contains("grpc")));
    }

    #[test]
    fn env_value_maps_absent_and_non_utf8() {
        assert_eq!(env_value("K", Ok("v".into())).expect("present"), Some("v".into()));
        assert_eq!(env_value("K", Err(VarError::NotPresent)).expect("absent"), None);
        let err = env_value("SCENESTITCH_OUTPUT_DIR", Err(VarError::NotUnicode(OsString::from("x")))).unwrap_err();
        assert!(matches!(err, AppError::Config(ref m) if m.contains("SCENESTITCH_OUTPUT_DIR")));
    }

    #[test]
    fn unreadable_variable_is_not_treated_as_unset() {
        let err = AppConfig::from_lookup(|k| match k {
                      "SCENESTITCH_OUTPUT_DIR" => Err(AppError::Config(format!("{k} no es UTF-8"))),
                      _ => Ok(None),
                  }).unwrap_err();
        assert!(matches!(err, AppError::Config(ref m) if m.contains("SCENESTITCH_OUTPUT_DIR")));
    }
}
