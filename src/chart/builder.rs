use crate::chart::error::ChartError;
use crate::chart::mesh::SurfaceChartMesh;

#[derive(Clone, Copy, Debug)]
pub struct Bounds {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
    pub z_min: f32,
    pub z_max: f32,
}

impl Bounds {
    pub fn scan(x: &[f32], y: &[f32], z: &[f32]) -> Self {
        let mut b = Self {
            x_min: f32::MAX,
            x_max: f32::MIN,
            y_min: f32::MAX,
            y_max: f32::MIN,
            z_min: f32::MAX,
            z_max: f32::MIN,
        };

        for i in 0..x.len() {
            if x[i] < b.x_min {
                b.x_min = x[i];
            }
            if x[i] > b.x_max {
                b.x_max = x[i];
            }
            if y[i] < b.y_min {
                b.y_min = y[i];
            }
            if y[i] > b.y_max {
                b.y_max = y[i];
            }
            if z[i] < b.z_min {
                b.z_min = z[i];
            }
            if z[i] > b.z_max {
                b.z_max = z[i];
            }
        }

        b
    }

    /// Grid dimensions derived by integer truncation of the planar spans.
    /// Truncation, not rounding: samples whose x values all fall inside a
    /// single integer step collapse to a range of 1. Compatibility behavior,
    /// kept as is.
    pub fn grid_dimensions(&self) -> (usize, usize) {
        let x_range = (self.x_max.trunc() as i64 - self.x_min.trunc() as i64 + 1) as usize;
        let y_range = (self.y_max.trunc() as i64 - self.y_min.trunc() as i64 + 1) as usize;
        (x_range, y_range)
    }
}

/// Rescales `value` from `[min, max]` to `[-0.5, 0.5]`. A collapsed axis
/// (min == max) maps to the center instead of dividing by zero.
fn normalize(value: f32, min: f32, max: f32) -> f32 {
    if max > min {
        (value - min) / (max - min) - 0.5
    } else {
        0.0
    }
}

/// Builds a unit-centered, height-colored surface mesh from three row-major
/// coordinate arrays sampled on a regular grid (flat index `i + j * x_range`
/// selects column `i`, row `j`).
///
/// The index buffer is sized `2 * x_range * y_range * 6` with 12 slots
/// reserved per interior cell: the first 6 hold the front winding, the next 6
/// hold the mirrored back winding when `double_sided` is set and stay zero
/// otherwise, as does the unused tail. Zeroed slots form degenerate triangles
/// the GPU discards.
pub fn build_surface(
    x: &[f32],
    y: &[f32],
    z: &[f32],
    double_sided: bool,
) -> Result<SurfaceChartMesh, ChartError> {
    if x.len() != y.len() || y.len() != z.len() {
        return Err(ChartError::LengthMismatch {
            x: x.len(),
            y: y.len(),
            z: z.len(),
        });
    }

    let num_points = x.len();
    if num_points == 0 {
        return Err(ChartError::Empty);
    }

    let bounds = Bounds::scan(x, y, z);
    let (x_range, y_range) = bounds.grid_dimensions();

    if x_range * y_range != num_points {
        return Err(ChartError::GridMismatch {
            x_range,
            y_range,
            points: num_points,
        });
    }

    let mut vertices = vec![0.0f32; num_points * 3];
    for i in 0..x_range {
        for j in 0..y_range {
            let k = i + j * x_range;
            let x_val = normalize(x[k], bounds.x_min, bounds.x_max);
            let y_val = normalize(y[k], bounds.y_min, bounds.y_max);
            let z_val = normalize(z[k], bounds.z_min, bounds.z_max);

            // Height becomes the vertical axis, y becomes depth.
            vertices[k * 3] = x_val;
            vertices[k * 3 + 1] = z_val;
            vertices[k * 3 + 2] = y_val;
        }
    }

    let mut indices = vec![0u32; 2 * x_range * y_range * 6];
    let mut ti = 0;
    for i in 0..x_range.saturating_sub(1) {
        for j in 0..y_range.saturating_sub(1) {
            let k = (i + j * x_range) as u32;
            let xr = x_range as u32;

            indices[ti] = k;
            indices[ti + 1] = k + xr;
            indices[ti + 2] = k + 1;
            indices[ti + 3] = k + 1;
            indices[ti + 4] = k + xr;
            indices[ti + 5] = k + xr + 1;

            if double_sided {
                indices[ti + 6] = k + 1;
                indices[ti + 7] = k + xr;
                indices[ti + 8] = k;
                indices[ti + 9] = k + xr + 1;
                indices[ti + 10] = k + xr;
                indices[ti + 11] = k + 1;
            }

            ti += 12;
        }
    }

    let mut colors = Vec::with_capacity(num_points * 3);
    for k in 0..num_points {
        let h = vertices[k * 3 + 1] + 0.5;
        colors.push(h);
        colors.push(0.0);
        colors.push(1.0 - h);
    }

    let mut mesh = SurfaceChartMesh {
        vertices,
        normals: Vec::new(),
        colors,
        indices,
        x_range,
        y_range,
        z_min: bounds.z_min,
        z_max: bounds.z_max,
    };
    mesh.recompute_normals();

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn quad() -> (Vec<f32>, Vec<f32>, Vec<f32>) {
        (
            vec![0.0, 1.0, 0.0, 1.0],
            vec![0.0, 0.0, 1.0, 1.0],
            vec![0.0, 1.0, 2.0, 3.0],
        )
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let err = build_surface(&[0.0, 1.0, 2.0], &[0.0, 1.0], &[0.0, 1.0], false).unwrap_err();
        assert_eq!(
            err,
            ChartError::LengthMismatch { x: 3, y: 2, z: 2 }
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(build_surface(&[], &[], &[], false).unwrap_err(), ChartError::Empty);
    }

    #[test]
    fn grid_sample_count_mismatch_is_rejected() {
        // x spans three integer columns but only four samples are supplied.
        let x = vec![0.0, 1.0, 2.0, 0.5];
        let y = vec![0.0, 0.0, 1.0, 1.0];
        let z = vec![0.0; 4];
        let err = build_surface(&x, &y, &z, false).unwrap_err();
        assert_eq!(
            err,
            ChartError::GridMismatch {
                x_range: 3,
                y_range: 2,
                points: 4
            }
        );
    }

    #[test]
    fn grid_dimensions_truncate_fractional_bounds() {
        let b = Bounds::scan(
            &[0.2, 1.7, 0.2, 1.7],
            &[0.3, 0.3, 1.9, 1.9],
            &[0.0, 1.0, 2.0, 3.0],
        );
        assert_eq!(b.grid_dimensions(), (2, 2));
    }

    #[test]
    fn single_point_collapses_to_center() {
        let mesh = build_surface(&[0.0], &[0.0], &[0.0], false).unwrap();
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!((mesh.x_range, mesh.y_range), (1, 1));
        assert_eq!(mesh.vertices, vec![0.0, 0.0, 0.0]);
        // Degenerate height axis still yields the complementary gradient.
        assert_relative_eq!(mesh.colors[0], 0.5);
        assert_relative_eq!(mesh.colors[2], 0.5);
        assert_eq!(mesh.indices.len(), 2 * 6);
        assert!(mesh.indices.iter().all(|&i| i == 0));
    }

    #[test]
    fn two_by_two_grid_single_sided() {
        let (x, y, z) = quad();
        let mesh = build_surface(&x, &y, &z, false).unwrap();

        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.indices.len(), 2 * 2 * 2 * 6);
        assert_eq!(&mesh.indices[..6], &[0, 2, 1, 1, 2, 3]);
        assert!(mesh.indices[6..].iter().all(|&i| i == 0));
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn two_by_two_grid_double_sided() {
        let (x, y, z) = quad();
        let mesh = build_surface(&x, &y, &z, true).unwrap();

        assert_eq!(&mesh.indices[..6], &[0, 2, 1, 1, 2, 3]);
        assert_eq!(&mesh.indices[6..12], &[1, 2, 0, 3, 2, 1]);
        assert!(mesh.indices[12..].iter().all(|&i| i == 0));
        assert_eq!(mesh.triangle_count(), 4);
    }

    #[test]
    fn vertices_stay_in_unit_cube() {
        let size = 5usize;
        let mut x = Vec::new();
        let mut y = Vec::new();
        let mut z = Vec::new();
        for j in 0..size {
            for i in 0..size {
                x.push(i as f32);
                y.push(j as f32);
                z.push((i * j) as f32 * 0.7 - 3.0);
            }
        }

        let mesh = build_surface(&x, &y, &z, false).unwrap();
        for c in &mesh.vertices {
            assert!(*c >= -0.5 && *c <= 0.5, "coordinate {c} out of range");
        }
    }

    #[test]
    fn axis_permutation_places_height_vertically() {
        let (x, y, z) = quad();
        let mesh = build_surface(&x, &y, &z, false).unwrap();

        // Sample 1: x=1 (max), y=0 (min), z=1 of [0,3].
        assert_relative_eq!(mesh.vertices[3], 0.5);
        assert_relative_eq!(mesh.vertices[4], 1.0 / 3.0 - 0.5);
        assert_relative_eq!(mesh.vertices[5], -0.5);
    }

    #[test]
    fn colors_are_complementary_in_red_and_blue() {
        let (x, y, z) = quad();
        let mesh = build_surface(&x, &y, &z, false).unwrap();

        for k in 0..mesh.vertex_count() {
            let r = mesh.colors[k * 3];
            let g = mesh.colors[k * 3 + 1];
            let b = mesh.colors[k * 3 + 2];
            assert_relative_eq!(r + b, 1.0);
            assert_eq!(g, 0.0);
            let h = mesh.vertices[k * 3 + 1] + 0.5;
            assert_relative_eq!(r, h);
        }
    }

    #[test]
    fn build_is_deterministic() {
        let (x, y, z) = quad();
        let a = build_surface(&x, &y, &z, true).unwrap();
        let b = build_surface(&x, &y, &z, true).unwrap();

        assert_eq!(a.vertices, b.vertices);
        assert_eq!(a.indices, b.indices);
        assert_eq!(a.colors, b.colors);
        assert_eq!(a.normals, b.normals);
    }

    #[test]
    fn flat_grid_normals_point_up() {
        let mut x = Vec::new();
        let mut y = Vec::new();
        for j in 0..3 {
            for i in 0..3 {
                x.push(i as f32);
                y.push(j as f32);
            }
        }
        let z = vec![1.0; 9];

        let mesh = build_surface(&x, &y, &z, true).unwrap();
        for n in mesh.normals.chunks_exact(3) {
            assert_relative_eq!(n[0], 0.0);
            assert_relative_eq!(n[1], 1.0);
            assert_relative_eq!(n[2], 0.0);
        }
    }
}
