pub struct Dataset {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: DatasetKind,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    Volcano,
    Ripple,
    Saddle,
    Peaks,
}

pub const DATASETS: &[Dataset] = &[
    Dataset {
        name: "Volcano",
        description: "Cone with a sunken crater",
        kind: DatasetKind::Volcano,
    },
    Dataset {
        name: "Ripple",
        description: "Radial wave pattern",
        kind: DatasetKind::Ripple,
    },
    Dataset {
        name: "Saddle",
        description: "x² - y²",
        kind: DatasetKind::Saddle,
    },
    Dataset {
        name: "Peaks",
        description: "Multiple gaussian bumps",
        kind: DatasetKind::Peaks,
    },
];

/// Samples a preset height function on a `size` x `size` integer lattice,
/// returning row-major x, y and z arrays. Integer planar coordinates keep the
/// derived grid dimensions equal to the lattice size.
pub fn generate(kind: DatasetKind, size: u32) -> (Vec<f32>, Vec<f32>, Vec<f32>) {
    let size = size.max(2) as usize;
    let n = size * size;
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    let mut z = Vec::with_capacity(n);

    let half = (size - 1) as f32 / 2.0;

    for j in 0..size {
        for i in 0..size {
            // [-4, 4] sampling window, independent of grid size.
            let u = (i as f32 - half) / half * 4.0;
            let v = (j as f32 - half) / half * 4.0;

            x.push(i as f32);
            y.push(j as f32);
            z.push(height(kind, u, v));
        }
    }

    (x, y, z)
}

fn height(kind: DatasetKind, u: f32, v: f32) -> f32 {
    match kind {
        DatasetKind::Volcano => {
            let r = (u * u + v * v).sqrt();
            let rim = (-(r - 2.2) * (r - 2.2) / 0.8).exp() * 3.0;
            let crater = (-r * r / 1.2).exp() * 1.4;
            rim - crater
        }
        DatasetKind::Ripple => {
            let r = (u * u + v * v).sqrt();
            (r * 2.0).sin() / (r + 1.0) * 3.0
        }
        DatasetKind::Saddle => (u * u - v * v) * 0.25,
        DatasetKind::Peaks => {
            let t1 = 3.0 * (1.0 - u) * (1.0 - u) * (-u * u - (v + 1.0) * (v + 1.0)).exp();
            let t2 = -10.0 * (u / 5.0 - u.powi(3) - v.powi(5)) * (-u * u - v * v).exp();
            let t3 = -1.0 / 3.0 * (-(u + 1.0) * (u + 1.0) - v * v).exp();
            t1 + t2 + t3
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::builder::build_surface;

    #[test]
    fn presets_produce_buildable_grids() {
        for ds in DATASETS {
            let (x, y, z) = generate(ds.kind, 16);
            assert_eq!(x.len(), 256);
            let mesh = build_surface(&x, &y, &z, false)
                .unwrap_or_else(|e| panic!("{} failed: {e}", ds.name));
            assert_eq!((mesh.x_range, mesh.y_range), (16, 16));
        }
    }

    #[test]
    fn lattice_is_row_major() {
        let (x, y, _) = generate(DatasetKind::Saddle, 3);
        assert_eq!(x, vec![0.0, 1.0, 2.0, 0.0, 1.0, 2.0, 0.0, 1.0, 2.0]);
        assert_eq!(y, vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0]);
    }
}
