use pyo3::ffi::c_str;
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyModule};
use std::ffi::CString;
use std::sync::OnceLock;

static BRIDGE_MODULE: OnceLock<Py<PyModule>> = OnceLock::new();

/// Carga el módulo puente y antepone `search_path` a `sys.path` para que el
/// módulo del generador (p.ej. `run.py`) sea importable.
pub fn init_python(search_path: &str) -> PyResult<()> {
    Python::attach(|py| {
        py.import("sys")?.getattr("path")?.call_method1("insert", (0, search_path))?;
        let code = CString::new(include_str!("../python/scene_bridge.py"))?;
        let module = PyModule::from_code(py, code.as_c_str(), c_str!("scene_bridge.py"), c_str!("scene_bridge"))?;
        BRIDGE_MODULE.set(module.unbind()).ok();
        Ok(())
    })
}

fn get_module(py: Python<'_>) -> PyResult<Py<PyModule>> {
    BRIDGE_MODULE.get().map(|module| module.clone_ref(py)).ok_or_else(|| {
                                                              PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(
            "init_python() debe llamarse antes de generate_scene()"
        )
                                                          })
}

/// Argumentos ya serializados de una llamada al generador Python.
#[derive(Debug, Clone)]
pub struct BridgeCall {
    pub module: String,
    pub png: Vec<u8>,
    pub prompt: String,
    pub output_path: String,
    pub mode: &'static str,
    pub seed: u64,
    pub max_resolution: u32,
}

/// Llama a `<module>.generate_scene(...)` y devuelve la ruta del artifact.
pub fn generate_scene(call: &BridgeCall) -> PyResult<String> {
    Python::attach(|py| {
        let bridge_py = get_module(py)?;
        let bridge = bridge_py.bind(py);
        let result = bridge.getattr("generate_scene")?.call1((call.module.as_str(),
                                                               PyBytes::new(py, &call.png),
                                                               call.prompt.as_str(),
                                                               call.output_path.as_str(),
                                                               call.mode,
                                                               call.seed,
                                                               call.max_resolution))?;
        result.extract::<String>()
    })
}
