use glam::Vec3;

#[derive(Debug)]
pub struct SurfaceChartMesh {
    pub vertices: Vec<f32>,
    pub normals: Vec<f32>,
    pub colors: Vec<f32>,
    pub indices: Vec<u32>,

    pub x_range: usize,
    pub y_range: usize,
    pub z_min: f32,
    pub z_max: f32,
}

impl SurfaceChartMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices
            .chunks_exact(3)
            .filter(|t| t[0] != t[1] && t[1] != t[2] && t[0] != t[2])
            .count()
    }

    fn vertex(&self, index: u32) -> Vec3 {
        let i = index as usize * 3;
        Vec3::new(self.vertices[i], self.vertices[i + 1], self.vertices[i + 2])
    }

    /// Rebuilds per-vertex normals from the current index stream by
    /// accumulating area-weighted face normals. Degenerate triples (the
    /// zeroed tail of the index buffer) contribute nothing, and downward
    /// faces are skipped: the chart is a heightfield, so the front winding
    /// always faces up and a downward face can only be a mirrored back face.
    pub fn recompute_normals(&mut self) {
        let mut accum = vec![Vec3::ZERO; self.vertex_count()];

        for tri in self.indices.chunks_exact(3) {
            let (i0, i1, i2) = (tri[0], tri[1], tri[2]);
            if i0 == i1 || i1 == i2 || i0 == i2 {
                continue;
            }

            let v0 = self.vertex(i0);
            let face = (self.vertex(i1) - v0).cross(self.vertex(i2) - v0);
            if face.y < 0.0 {
                continue;
            }
            accum[i0 as usize] += face;
            accum[i1 as usize] += face;
            accum[i2 as usize] += face;
        }

        self.normals.clear();
        self.normals.reserve(accum.len() * 3);
        for n in accum {
            let n = if n.length_squared() > 1e-12 {
                n.normalize()
            } else {
                Vec3::Y
            };
            self.normals.extend_from_slice(&n.to_array());
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::chart::builder::build_surface;
    use approx::assert_relative_eq;

    fn ramp(size: usize) -> (Vec<f32>, Vec<f32>, Vec<f32>) {
        let mut x = Vec::new();
        let mut y = Vec::new();
        let mut z = Vec::new();
        for j in 0..size {
            for i in 0..size {
                x.push(i as f32);
                y.push(j as f32);
                z.push(i as f32 * 0.5 + (j as f32).sin());
            }
        }
        (x, y, z)
    }

    #[test]
    fn normals_are_unit_length() {
        let (x, y, z) = ramp(8);
        let mesh = build_surface(&x, &y, &z, true).unwrap();

        assert_eq!(mesh.normals.len(), mesh.vertices.len());
        for n in mesh.normals.chunks_exact(3) {
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert_relative_eq!(len, 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn recompute_normals_is_idempotent() {
        let (x, y, z) = ramp(6);
        for double_sided in [false, true] {
            let mut mesh = build_surface(&x, &y, &z, double_sided).unwrap();
            let first = mesh.normals.clone();
            mesh.recompute_normals();
            assert_eq!(mesh.normals, first);
        }
    }

    #[test]
    fn triangle_count_ignores_degenerate_tail() {
        let (x, y, z) = ramp(4);
        let mesh = build_surface(&x, &y, &z, false).unwrap();

        // 3x3 interior cells, two triangles each.
        assert_eq!(mesh.triangle_count(), 18);
        assert_eq!(mesh.indices.len(), 2 * 4 * 4 * 6);
    }
}
