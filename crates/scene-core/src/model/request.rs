use image::DynamicImage;

use crate::errors::HarnessError;

/// Petición del cliente: bitmap ya decodificado + prompt libre.
///
/// El prompt no se valida (vacío permitido, sin límite de longitud); su
/// interpretación es responsabilidad del generador.
#[derive(Debug, Clone)]
pub struct SceneRequest {
    pub image: DynamicImage,
    pub prompt: String,
}

impl SceneRequest {
    pub fn new(image: DynamicImage, prompt: impl Into<String>) -> Self {
        Self { image, prompt: prompt.into() }
    }

    /// Decodifica bytes subidos (PNG/JPEG). El formato se detecta por
    /// contenido, no por extensión.
    pub fn decode(bytes: &[u8], prompt: impl Into<String>) -> Result<Self, HarnessError> {
        let image = image::load_from_memory(bytes)?;
        Ok(Self::new(image, prompt))
    }
}
