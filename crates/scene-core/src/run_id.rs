//! Identificadores de ejecución.
//!
//! Un `RunId` es un token hex corto que solo sirve para evitar colisiones de
//! nombres de archivo en `outputs/`. No es globalmente único: son 24 bits y
//! ninguna estrategia detecta colisiones.
//!
//! Estrategias:
//! - `Timestamp`: SHA-1 del instante local en ISO-8601 (microsegundos solo si
//!   no son cero), truncado. Dos peticiones en el mismo tick del reloj
//!   obtienen el mismo id.
//! - `Random` (por defecto): prefijo de un UUID v4, independiente del reloj.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::RUN_ID_LEN;
use crate::errors::HarnessError;
use crate::hashing::sha1_hex;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RunId(String);

impl RunId {
    /// Acepta exactamente `RUN_ID_LEN` caracteres hex en minúscula.
    pub fn parse(raw: &str) -> Result<Self, HarnessError> {
        let valid = raw.len() == RUN_ID_LEN && raw.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'));
        if valid {
            Ok(Self(raw.to_owned()))
        } else {
            Err(HarnessError::InvalidRunId(raw.to_owned()))
        }
    }

    /// Id derivado de un instante; función pura del timestamp.
    pub fn from_timestamp(ts: &NaiveDateTime) -> Self {
        let mut hex = sha1_hex(iso_timestamp(ts).as_bytes());
        hex.truncate(RUN_ID_LEN);
        Self(hex)
    }

    /// Id aleatorio a partir de un UUID v4.
    pub fn random() -> Self {
        let mut hex = Uuid::new_v4().simple().to_string();
        hex.truncate(RUN_ID_LEN);
        Self(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// `YYYY-MM-DDTHH:MM:SS[.ffffff]`: la fracción se omite cuando los
/// microsegundos son cero y el resto de nanosegundos se descarta.
pub fn iso_timestamp(ts: &NaiveDateTime) -> String {
    let seconds = ts.format("%Y-%m-%dT%H:%M:%S");
    match ts.nanosecond() % 1_000_000_000 / 1_000 {
        0 => seconds.to_string(),
        micros => format!("{seconds}.{micros:06}"),
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RunId {
    type Error = HarnessError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RunId> for String {
    fn from(id: RunId) -> Self {
        id.0
    }
}

/// Cómo se obtiene el id de cada petición.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunIdStrategy {
    Timestamp,
    #[default]
    Random,
}

impl FromStr for RunIdStrategy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "timestamp" => Ok(Self::Timestamp),
            "random" => Ok(Self::Random),
            other => Err(format!("estrategia de run id desconocida: {other}")),
        }
    }
}

/// Generador sin estado compartido: cada llamada depende solo del reloj o
/// del RNG del sistema.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunIdGenerator {
    strategy: RunIdStrategy,
}

impl RunIdGenerator {
    pub fn new(strategy: RunIdStrategy) -> Self {
        Self { strategy }
    }

    pub fn next_id(&self) -> RunId {
        match self.strategy {
            RunIdStrategy::Timestamp => RunId::from_timestamp(&Local::now().naive_local()),
            RunIdStrategy::Random => RunId::random(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(micros: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 8, 11)
            .and_then(|d| d.and_hms_micro_opt(9, 37, 27, micros))
            .expect("valid timestamp")
    }

    #[test]
    fn timestamp_id_is_deterministic() {
        assert_eq!(RunId::from_timestamp(&ts(42)), RunId::from_timestamp(&ts(42)));
    }

    #[test]
    fn timestamp_id_matches_truncated_sha1_of_iso_form() {
        let expected = &sha1_hex(b"2024-08-11T09:37:27.000042")[..RUN_ID_LEN];
        assert_eq!(RunId::from_timestamp(&ts(42)).as_str(), expected);
    }

    #[test]
    fn iso_form_drops_zero_microseconds() {
        assert_eq!(iso_timestamp(&ts(0)), "2024-08-11T09:37:27");
        assert_eq!(iso_timestamp(&ts(120_000)), "2024-08-11T09:37:27.120000");
        let expected = &sha1_hex(b"2024-08-11T09:37:27")[..RUN_ID_LEN];
        assert_eq!(RunId::from_timestamp(&ts(0)).as_str(), expected);
    }

    #[test]
    fn sub_microsecond_digits_are_truncated() {
        let nanos = NaiveDate::from_ymd_opt(2024, 8, 18)
            .and_then(|d| d.and_hms_nano_opt(7, 57, 32, 5_999))
            .expect("valid timestamp");
        assert_eq!(iso_timestamp(&nanos), "2024-08-18T07:57:32.000005");
    }

    #[test]
    fn distinct_timestamps_give_distinct_ids() {
        assert_ne!(RunId::from_timestamp(&ts(1)), RunId::from_timestamp(&ts(500_000)));
    }

    #[test]
    fn generated_ids_are_short_lowercase_hex() {
        for strategy in [RunIdStrategy::Timestamp, RunIdStrategy::Random] {
            let id = RunIdGenerator::new(strategy).next_id();
            assert!(RunId::parse(id.as_str()).is_ok(), "{strategy:?} produced {id}");
        }
    }

    #[test]
    fn parse_rejects_bad_tokens() {
        for bad in ["", "abc12", "abc1234", "ABC123", "zzzzzz", "../../"] {
            assert!(matches!(RunId::parse(bad), Err(HarnessError::InvalidRunId(_))), "{bad}");
        }
    }

    #[test]
    fn strategy_from_str() {
        assert_eq!("Timestamp".parse::<RunIdStrategy>(), Ok(RunIdStrategy::Timestamp));
        assert_eq!(" random ".parse::<RunIdStrategy>(), Ok(RunIdStrategy::Random));
        assert!("counter".parse::<RunIdStrategy>().is_err());
        assert_eq!(RunIdStrategy::default(), RunIdStrategy::Random);
    }

    #[test]
    fn serde_roundtrip_validates() {
        let id: RunId = serde_json::from_str("\"0a1b2c\"").expect("valid id");
        assert_eq!(id.as_str(), "0a1b2c");
        assert!(serde_json::from_str::<RunId>("\"nothex\"").is_err());
    }
}
