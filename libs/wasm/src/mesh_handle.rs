//! # Mesh Handle
//!
//! WASM-friendly wrapper for a generated mesh.

use ifs_mesh::Mesh;
use wasm_bindgen::prelude::*;

/// A handle to mesh data that can be accessed from JavaScript.
///
/// Each accessor copies its array into a fresh typed array, so the result
/// can be handed straight to `gl.bufferData`.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const model = uvSphere();
///
/// gl.bindBuffer(gl.ARRAY_BUFFER, positionBuffer);
/// gl.bufferData(gl.ARRAY_BUFFER, model.vertexPositions(), gl.STATIC_DRAW);
/// gl.bindBuffer(gl.ELEMENT_ARRAY_BUFFER, indexBuffer);
/// gl.bufferData(gl.ELEMENT_ARRAY_BUFFER, model.indices(), gl.STATIC_DRAW);
///
/// gl.drawElements(gl.TRIANGLES, model.triangleCount * 3, gl.UNSIGNED_SHORT, 0);
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    mesh: Mesh,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter, js_name = vertexCount)]
    pub fn vertex_count(&self) -> u32 {
        u32::try_from(self.mesh.vertex_count()).unwrap_or(u32::MAX)
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter, js_name = triangleCount)]
    pub fn triangle_count(&self) -> u32 {
        u32::try_from(self.mesh.triangle_count()).unwrap_or(u32::MAX)
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Format: [x, y, z, x, y, z, ...]
    #[wasm_bindgen(js_name = vertexPositions)]
    pub fn vertex_positions(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.mesh.vertex_positions())
    }

    /// Returns the vertex normals as a Float32Array.
    ///
    /// Format: [nx, ny, nz, nx, ny, nz, ...]
    #[wasm_bindgen(js_name = vertexNormals)]
    pub fn vertex_normals(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.mesh.vertex_normals())
    }

    /// Returns the texture coordinates as a Float32Array.
    ///
    /// Format: [u, v, u, v, ...]
    #[wasm_bindgen(js_name = vertexTextureCoords)]
    pub fn vertex_texture_coords(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.mesh.vertex_texture_coords())
    }

    /// Returns the triangle indices as a Uint16Array.
    ///
    /// Format: [i0, i1, i2, i0, i1, i2, ...]
    #[wasm_bindgen]
    pub fn indices(&self) -> js_sys::Uint16Array {
        js_sys::Uint16Array::from(self.mesh.indices())
    }

    /// Serializes the four arrays as JSON text with the
    /// `vertexPositions`, `vertexNormals`, `vertexTextureCoords` and
    /// `indices` fields.
    #[wasm_bindgen(js_name = toJsonString)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.to_json_string()
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }
}

impl MeshHandle {
    /// Borrows the wrapped mesh.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Host-side JSON serialization, usable without a JS runtime.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.mesh)
    }
}

impl From<Mesh> for MeshHandle {
    fn from(mesh: Mesh) -> Self {
        Self { mesh }
    }
}
