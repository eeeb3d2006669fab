//! CPU-side geometry for the unit primitives.
//!
//! A [`GeometryCache`] is built once by whoever owns the GPU buffers and
//! handed to them explicitly; nothing here is lazily initialized.

use crate::renderer::Primitive;
use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Indexed triangle list.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl Mesh {
    /// Unit cube centered on the origin, one quad of four vertices per face.
    pub fn cube() -> Self {
        let p = 0.5_f32;
        #[rustfmt::skip]
        let vertices = vec![
            // +Z face
            Vertex { position: [-p, -p,  p], normal: [0.0, 0.0, 1.0] },
            Vertex { position: [ p, -p,  p], normal: [0.0, 0.0, 1.0] },
            Vertex { position: [ p,  p,  p], normal: [0.0, 0.0, 1.0] },
            Vertex { position: [-p,  p,  p], normal: [0.0, 0.0, 1.0] },
            // -Z face
            Vertex { position: [ p, -p, -p], normal: [0.0, 0.0, -1.0] },
            Vertex { position: [-p, -p, -p], normal: [0.0, 0.0, -1.0] },
            Vertex { position: [-p,  p, -p], normal: [0.0, 0.0, -1.0] },
            Vertex { position: [ p,  p, -p], normal: [0.0, 0.0, -1.0] },
            // +X face
            Vertex { position: [ p, -p,  p], normal: [1.0, 0.0, 0.0] },
            Vertex { position: [ p, -p, -p], normal: [1.0, 0.0, 0.0] },
            Vertex { position: [ p,  p, -p], normal: [1.0, 0.0, 0.0] },
            Vertex { position: [ p,  p,  p], normal: [1.0, 0.0, 0.0] },
            // -X face
            Vertex { position: [-p, -p, -p], normal: [-1.0, 0.0, 0.0] },
            Vertex { position: [-p, -p,  p], normal: [-1.0, 0.0, 0.0] },
            Vertex { position: [-p,  p,  p], normal: [-1.0, 0.0, 0.0] },
            Vertex { position: [-p,  p, -p], normal: [-1.0, 0.0, 0.0] },
            // +Y face
            Vertex { position: [-p,  p,  p], normal: [0.0, 1.0, 0.0] },
            Vertex { position: [ p,  p,  p], normal: [0.0, 1.0, 0.0] },
            Vertex { position: [ p,  p, -p], normal: [0.0, 1.0, 0.0] },
            Vertex { position: [-p,  p, -p], normal: [0.0, 1.0, 0.0] },
            // -Y face
            Vertex { position: [-p, -p, -p], normal: [0.0, -1.0, 0.0] },
            Vertex { position: [ p, -p, -p], normal: [0.0, -1.0, 0.0] },
            Vertex { position: [ p, -p,  p], normal: [0.0, -1.0, 0.0] },
            Vertex { position: [-p, -p,  p], normal: [0.0, -1.0, 0.0] },
        ];
        let indices = (0..6u16)
            .flat_map(|face| {
                let b = face * 4;
                [b, b + 1, b + 2, b + 2, b + 3, b]
            })
            .collect();
        Self { vertices, indices }
    }

    /// Unit square in the XY plane facing +Z.
    pub fn quad() -> Self {
        let p = 0.5_f32;
        let n = [0.0, 0.0, 1.0];
        let vertices = vec![
            Vertex { position: [-p, -p, 0.0], normal: n },
            Vertex { position: [p, -p, 0.0], normal: n },
            Vertex { position: [p, p, 0.0], normal: n },
            Vertex { position: [-p, p, 0.0], normal: n },
        ];
        Self {
            vertices,
            indices: vec![0, 1, 2, 2, 3, 0],
        }
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Meshes for every [`Primitive`], built once up front.
#[derive(Debug, Clone)]
pub struct GeometryCache {
    cube: Mesh,
    quad: Mesh,
}

impl Default for GeometryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryCache {
    pub fn new() -> Self {
        Self {
            cube: Mesh::cube(),
            quad: Mesh::quad(),
        }
    }

    pub fn mesh(&self, primitive: Primitive) -> &Mesh {
        match primitive {
            Primitive::Cube => &self.cube,
            Primitive::Quad => &self.quad,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_six_faces() {
        let cube = Mesh::cube();
        assert_eq!(cube.vertices.len(), 24);
        assert_eq!(cube.index_count(), 36);
        assert!(cube.indices.iter().all(|&i| (i as usize) < cube.vertices.len()));
    }

    #[test]
    fn cube_fits_unit_bounds() {
        let cube = Mesh::cube();
        for v in &cube.vertices {
            assert!(v.position.iter().all(|c| c.abs() == 0.5));
        }
    }

    #[test]
    fn quad_is_flat() {
        let quad = Mesh::quad();
        assert_eq!(quad.index_count(), 6);
        assert!(quad.vertices.iter().all(|v| v.position[2] == 0.0));
    }

    #[test]
    fn cache_serves_each_primitive() {
        let cache = GeometryCache::new();
        assert_eq!(cache.mesh(Primitive::Cube).index_count(), 36);
        assert_eq!(cache.mesh(Primitive::Quad).index_count(), 6);
    }
}
