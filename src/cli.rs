//! Parseo mínimo de argumentos:
//!
//! ```text
//! scenestitch generate --image <PATH> --prompt <TXT>
//! scenestitch examples
//! scenestitch example <N>
//! scenestitch serve
//! ```
use std::path::PathBuf;

use crate::errors::AppError;

pub const USAGE: &str = "Uso: scenestitch generate --image <PATH> --prompt <TXT> | examples | example <N> | serve";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Generate { image: PathBuf, prompt: String },
    Examples,
    Example { number: usize },
    Serve,
}

/// `args` sin el nombre del programa.
pub fn parse_args(args: &[String]) -> Result<Command, AppError> {
    let usage = |msg: &str| AppError::Usage(format!("{msg}\n{USAGE}"));
    match args.first().map(String::as_str) {
        Some("generate") => {
            let mut image: Option<PathBuf> = None;
            let mut prompt: Option<String> = None;
            let mut i = 1;
            while i < args.len() {
                match args[i].as_str() {
                    "--image" => {
                        i += 1;
                        image = args.get(i).map(PathBuf::from);
                    }
                    "--prompt" => {
                        i += 1;
                        prompt = args.get(i).cloned();
                    }
                    other => return Err(usage(&format!("argumento desconocido: {other}"))),
                }
                i += 1;
            }
            let image = image.ok_or_else(|| usage("falta --image"))?;
            // prompt vacío permitido; solo exige que la opción aparezca con valor
            let prompt = prompt.ok_or_else(|| usage("falta --prompt"))?;
            Ok(Command::Generate { image, prompt })
        }
        Some("examples") => Ok(Command::Examples),
        Some("example") => {
            let number = args.get(1).and_then(|n| n.parse::<usize>().ok())
                             .ok_or_else(|| usage("example requiere un número"))?;
            Ok(Command::Example { number })
        }
        Some("serve") => Ok(Command::Serve),
        Some(other) => Err(usage(&format!("comando desconocido: {other}"))),
        None => Err(usage("falta el comando")),
    }
}
