//! CPU-side geometry: the subdivided icosphere and the starfield point cloud.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

const PHI: f32 = 1.618_034; // golden ratio

const ICOSAHEDRON_VERTICES: [[f32; 3]; 12] = [
    [-1.0, PHI, 0.0],
    [1.0, PHI, 0.0],
    [-1.0, -PHI, 0.0],
    [1.0, -PHI, 0.0],
    [0.0, -1.0, PHI],
    [0.0, 1.0, PHI],
    [0.0, -1.0, -PHI],
    [0.0, 1.0, -PHI],
    [PHI, 0.0, -1.0],
    [PHI, 0.0, 1.0],
    [-PHI, 0.0, -1.0],
    [-PHI, 0.0, 1.0],
];

// Counter-clockwise when seen from outside.
const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Number of triangles produced by [`icosphere`] for a given detail level.
#[inline]
pub fn icosphere_triangle_count(detail: u32) -> usize {
    let cols = detail as usize + 1;
    ICOSAHEDRON_FACES.len() * cols * cols
}

/// Build a non-indexed icosphere.
///
/// Each icosahedron face is split into `(detail + 1)^2` triangles on a
/// barycentric grid and every vertex is pushed out to `radius`. Normals point
/// radially outward.
pub fn icosphere(radius: f32, detail: u32) -> Vec<SphereVertex> {
    let cols = detail as usize + 1;
    let mut out = Vec::with_capacity(icosphere_triangle_count(detail) * 3);

    for face in ICOSAHEDRON_FACES.iter() {
        let a = Vec3::from(ICOSAHEDRON_VERTICES[face[0]]);
        let b = Vec3::from(ICOSAHEDRON_VERTICES[face[1]]);
        let c = Vec3::from(ICOSAHEDRON_VERTICES[face[2]]);

        // grid[i][j]: row i walks from edge ab toward c, column j across the row
        let mut grid: Vec<Vec<Vec3>> = Vec::with_capacity(cols + 1);
        for i in 0..=cols {
            let s = i as f32 / cols as f32;
            let aj = a.lerp(c, s);
            let bj = b.lerp(c, s);
            let rows = cols - i;
            let row = (0..=rows)
                .map(|j| {
                    if rows == 0 {
                        aj
                    } else {
                        aj.lerp(bj, j as f32 / rows as f32)
                    }
                })
                .collect();
            grid.push(row);
        }

        for i in 0..cols {
            for j in 0..(2 * (cols - i) - 1) {
                let k = j / 2;
                let tri = if j % 2 == 0 {
                    [grid[i][k + 1], grid[i + 1][k], grid[i][k]]
                } else {
                    [grid[i][k + 1], grid[i + 1][k + 1], grid[i + 1][k]]
                };
                for p in tri {
                    let n = p.normalize();
                    out.push(SphereVertex {
                        position: (n * radius).to_array(),
                        normal: n.to_array(),
                    });
                }
            }
        }
    }
    out
}

/// Scatter `count` points inside a ball of `radius`.
///
/// Directions are uniform on the sphere (`phi = acos(2v - 1)`); the radius is
/// `radius * sqrt(u)`, which thins the core relative to a plain linear draw.
pub fn starfield<R: Rng + ?Sized>(rng: &mut R, count: usize, radius: f32) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let r = radius * rng.gen::<f32>().sqrt();
            let theta = rng.gen::<f32>() * TAU;
            let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
            Vec3::new(
                r * phi.sin() * theta.cos(),
                r * phi.sin() * theta.sin(),
                r * phi.cos(),
            )
        })
        .collect()
}
