//! Catálogo de presentación de la demo: título, textos y ejemplos
//! (imagen + prompt) que se ofrecen al usuario.

use std::path::{Path, PathBuf};

use serde::Serialize;

pub const TITLE: &str = "Invisible Stitch: Generating Smooth 3D Scenes with Depth Inpainting";

pub const DESCRIPTION: &str = "Hallucinate geometrically coherent 3D scenes from a single input image in less than 30 \
                               seconds. To keep this demo snappy, its functionality is limited: scenes are generated at \
                               a low resolution without densification, supporting views are not inpainted, and the \
                               resulting point cloud is not optimized. Imperfections are to be expected, in particular \
                               around object borders. The generated scene is about 40 megabytes.";

pub const TIPS: [&str; 3] = ["Use generic prompts that match the surroundings of your input image.",
                             "Ensure that the borders of your input image are free from partially visible objects.",
                             "Keep your prompts simple and avoid adding specific details."];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DemoExample {
    pub image: &'static str,
    pub prompt: &'static str,
}

impl DemoExample {
    /// Ruta de la imagen relativa a `examples_dir`.
    pub fn image_path(&self, examples_dir: &Path) -> PathBuf {
        examples_dir.join(self.image)
    }
}

const POLE: &str = "a street with a tree and an eletric pole";

pub const EXAMPLES: [DemoExample; 14] = [
    DemoExample { image: "photo-1667788000333-4e36f948de9a.jpeg", prompt: "a street with traditional buildings in Kyoto, Japan" },
    DemoExample { image: "photo-1628624747186-a941c476b7ef.jpeg", prompt: "a suburban street in North Carolina on a bright, sunny day" },
    DemoExample { image: "photo-1469559845082-95b66baaf023.jpeg", prompt: "a view of Zion National Park" },
    DemoExample { image: "photo-1514984879728-be0aff75a6e8.jpeg", prompt: "a close-up view of a muddy path in a forest" },
    DemoExample { image: "photo-1618197345638-d2df92b39fe1.jpeg", prompt: "a close-up view of a white linen bed in a minimalistic room" },
    DemoExample { image: "photo-1546975490-e8b92a360b24.jpeg", prompt: "a warm living room with plants" },
    DemoExample { image: "photo-1499916078039-922301b0eb9b.jpeg", prompt: "a cozy bedroom on a bright day" },
    DemoExample { image: "20240811_093727.jpg", prompt: POLE },
    DemoExample { image: "20240818_075732.jpg", prompt: POLE },
    DemoExample { image: "20240818_075804.jpg", prompt: POLE },
    DemoExample { image: "20240818_075832.jpg", prompt: POLE },
    DemoExample { image: "20240818_075900.jpg", prompt: POLE },
    DemoExample { image: "20240818_075918.jpg", prompt: POLE },
    DemoExample { image: "20240818_075933.jpg", prompt: POLE },
];

/// Ejemplo por índice 1-based, como se muestra en el listado.
pub fn example(number: usize) -> Option<&'static DemoExample> {
    number.checked_sub(1).and_then(|i| EXAMPLES.get(i))
}
