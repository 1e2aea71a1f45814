//! WASM-facing entry points for the IFS shape catalog.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Every catalog generator is exported under its JavaScript
//! name with the legacy calling convention: any argument may be omitted, and
//! falsy values (`undefined`, `0`, `NaN`, `false`) select the default.
//!
//! Native tests call the same functions directly; only the error path needs
//! a JS host.
//!
//! ```
//! let sphere = ifs_wasm::uv_sphere(None, None, None).unwrap();
//! assert_eq!(sphere.vertex_count(), 561);
//! ```

mod mesh_handle;

pub use mesh_handle::MeshHandle;

use ifs_mesh::{
    catalog, ConeParams, CubeParams, CylinderParams, Mesh, MeshError, SphereParams, TorusParams,
};
use wasm_bindgen::prelude::*;

/// JavaScript names of the exported generators, in scene order.
pub const SHAPE_NAMES: [&str; 12] = [
    "uvSphere",
    "uvSphere2",
    "uvSphere3",
    "uvTorus",
    "torus2",
    "star",
    "bow",
    "uvCylinder",
    "uvCylinder2",
    "uvCone",
    "cube",
    "pyramid",
];

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { initPanicHook } from "ifs-wasm";
/// // initPanicHook();
/// ```
#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen(js_name = initPanicHook)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Returns the exported generator names as a JavaScript array.
#[wasm_bindgen(js_name = shapeNames)]
pub fn shape_names() -> js_sys::Array {
    SHAPE_NAMES.iter().map(|name| JsValue::from_str(name)).collect()
}

// Falsy arguments fall back to the generator default.

fn length(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

fn count(value: Option<u32>) -> Option<u32> {
    value.filter(|&v| v != 0)
}

fn flag(value: Option<bool>) -> bool {
    value.unwrap_or(false)
}

/// Builds sphere parameters from JavaScript arguments.
pub fn sphere_params(radius: Option<f64>, slices: Option<u32>, stacks: Option<u32>) -> SphereParams {
    SphereParams {
        radius: length(radius),
        slices: count(slices),
        stacks: count(stacks),
    }
}

/// Builds torus parameters from JavaScript arguments.
pub fn torus_params(
    outer_radius: Option<f64>,
    inner_radius: Option<f64>,
    slices: Option<u32>,
    stacks: Option<u32>,
) -> TorusParams {
    TorusParams {
        outer_radius: length(outer_radius),
        inner_radius: length(inner_radius),
        slices: count(slices),
        stacks: count(stacks),
    }
}

/// Builds cylinder parameters from JavaScript arguments.
pub fn cylinder_params(
    radius: Option<f64>,
    height: Option<f64>,
    slices: Option<u32>,
    no_top: Option<bool>,
    no_bottom: Option<bool>,
) -> CylinderParams {
    CylinderParams {
        radius: length(radius),
        height: length(height),
        slices: count(slices),
        no_top: flag(no_top),
        no_bottom: flag(no_bottom),
    }
}

/// Builds cone parameters from JavaScript arguments.
pub fn cone_params(
    radius: Option<f64>,
    height: Option<f64>,
    slices: Option<u32>,
    no_bottom: Option<bool>,
) -> ConeParams {
    ConeParams {
        radius: length(radius),
        height: length(height),
        slices: count(slices),
        no_bottom: flag(no_bottom),
    }
}

/// Builds cube parameters from JavaScript arguments.
pub fn cube_params(side: Option<f64>) -> CubeParams {
    CubeParams { side: length(side) }
}

fn export(result: Result<Mesh, MeshError>) -> Result<MeshHandle, JsValue> {
    result
        .map(MeshHandle::from)
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Sphere of default radius 0.5 at quarter scale, centred at (-1, -1, -1).
///
/// # Errors
/// Returns a JavaScript error carrying the generator's message when the
/// requested resolution cannot be indexed with 16-bit indices.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const model = uvSphere(0.5, 32, 16);
/// // console.log(model.vertexCount); // 561
/// ```
#[wasm_bindgen(js_name = uvSphere)]
pub fn uv_sphere(
    radius: Option<f64>,
    slices: Option<u32>,
    stacks: Option<u32>,
) -> Result<MeshHandle, JsValue> {
    export(catalog::uv_sphere(&sphere_params(radius, slices, stacks)))
}

/// Sphere centred at (0, -1.6, -1.4).
#[wasm_bindgen(js_name = uvSphere2)]
pub fn uv_sphere2(
    radius: Option<f64>,
    slices: Option<u32>,
    stacks: Option<u32>,
) -> Result<MeshHandle, JsValue> {
    export(catalog::uv_sphere2(&sphere_params(radius, slices, stacks)))
}

/// Sphere centred at (-0.78, -0.2, 0.1).
#[wasm_bindgen(js_name = uvSphere3)]
pub fn uv_sphere3(
    radius: Option<f64>,
    slices: Option<u32>,
    stacks: Option<u32>,
) -> Result<MeshHandle, JsValue> {
    export(catalog::uv_sphere3(&sphere_params(radius, slices, stacks)))
}

/// Torus shifted to x = -0.5.
#[wasm_bindgen(js_name = uvTorus)]
pub fn uv_torus(
    outer_radius: Option<f64>,
    inner_radius: Option<f64>,
    slices: Option<u32>,
    stacks: Option<u32>,
) -> Result<MeshHandle, JsValue> {
    export(catalog::uv_torus(&torus_params(
        outer_radius,
        inner_radius,
        slices,
        stacks,
    )))
}

/// Squashed torus variant.
#[wasm_bindgen]
pub fn torus2(
    outer_radius: Option<f64>,
    inner_radius: Option<f64>,
    slices: Option<u32>,
    stacks: Option<u32>,
) -> Result<MeshHandle, JsValue> {
    export(catalog::torus2(&torus_params(
        outer_radius,
        inner_radius,
        slices,
        stacks,
    )))
}

/// Star knot; default outer radius 1.7.
#[wasm_bindgen]
pub fn star(
    outer_radius: Option<f64>,
    inner_radius: Option<f64>,
    slices: Option<u32>,
    stacks: Option<u32>,
) -> Result<MeshHandle, JsValue> {
    export(catalog::star(&torus_params(
        outer_radius,
        inner_radius,
        slices,
        stacks,
    )))
}

/// Bow shape.
#[wasm_bindgen]
pub fn bow(
    outer_radius: Option<f64>,
    inner_radius: Option<f64>,
    slices: Option<u32>,
    stacks: Option<u32>,
) -> Result<MeshHandle, JsValue> {
    export(catalog::bow(&torus_params(
        outer_radius,
        inner_radius,
        slices,
        stacks,
    )))
}

/// Thin open tube offset by `(r, 7r, 0)`. The cap flags are accepted for
/// compatibility and ignored.
#[wasm_bindgen(js_name = uvCylinder)]
pub fn uv_cylinder(
    radius: Option<f64>,
    height: Option<f64>,
    slices: Option<u32>,
    no_top: Option<bool>,
    no_bottom: Option<bool>,
) -> Result<MeshHandle, JsValue> {
    export(catalog::uv_cylinder(&cylinder_params(
        radius, height, slices, no_top, no_bottom,
    )))
}

/// Open tube offset by `(-7r, -10r, 0)`. The cap flags are ignored.
#[wasm_bindgen(js_name = uvCylinder2)]
pub fn uv_cylinder2(
    radius: Option<f64>,
    height: Option<f64>,
    slices: Option<u32>,
    no_top: Option<bool>,
    no_bottom: Option<bool>,
) -> Result<MeshHandle, JsValue> {
    export(catalog::uv_cylinder2(&cylinder_params(
        radius, height, slices, no_top, no_bottom,
    )))
}

/// Cone with an optional base.
#[wasm_bindgen(js_name = uvCone)]
pub fn uv_cone(
    radius: Option<f64>,
    height: Option<f64>,
    slices: Option<u32>,
    no_bottom: Option<bool>,
) -> Result<MeshHandle, JsValue> {
    export(catalog::uv_cone(&cone_params(radius, height, slices, no_bottom)))
}

/// Cube centred at (1.2, 1.2, 1.2).
#[wasm_bindgen]
pub fn cube(side: Option<f64>) -> Result<MeshHandle, JsValue> {
    export(catalog::cube(&cube_params(side)))
}

/// Pyramid with its apex at (0.8, 1.0, 0.8).
#[wasm_bindgen]
pub fn pyramid() -> Result<MeshHandle, JsValue> {
    export(catalog::pyramid())
}
