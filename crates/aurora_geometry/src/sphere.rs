//! Latitude/longitude sphere generator with optional per-vertex radial
//! jitter.
//!
//! The tessellation walks rings from pole to pole and columns around each
//! ring.  Two details make the texture mapping seamless and are easy to get
//! wrong:
//!
//! - **Seam**: the last column of every ring reuses the ring's *first*
//!   position byte-for-byte while keeping its own `u = 1.0` texture
//!   coordinate, so the azimuth wrap has no gap and no uv discontinuity.
//! - **Poles**: every column of the first and last ring collapses to the
//!   pole point; the uv is shifted by half a texel so the collapsed fan
//!   samples the texture symmetrically.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::vertex::MeshVertex;

/// Seed for [`generate`]'s jitter stream.  A constant by choice: identical
/// parameters must give bit-identical meshes across calls and runs.
const JITTER_SEED: u64 = 0x5350_4852; // "SPHR"

/// Tessellation parameters for [`generate`].
///
/// Segment counts below the minimums (3 longitude, 2 latitude) are clamped
/// up rather than rejected; generation is total over its input domain.
/// Callers must keep `(width_segments + 1) * (height_segments + 1)` at or
/// below 65536 so indices fit in `u16`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereParams {
    /// Nominal sphere radius.  Non-positive values are not rejected; they
    /// produce degenerate or inverted geometry.
    pub radius: f32,
    /// Longitude divisions, clamped up to 3.
    pub width_segments: u32,
    /// Latitude divisions, clamped up to 2.
    pub height_segments: u32,
    /// Jitter amplitude, nominally in [0, 1].  Scales a uniform radial
    /// perturbation of up to `±randomness * radius` per vertex.
    pub randomness: f32,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            width_segments: 32,
            height_segments: 16,
            randomness: 0.0,
        }
    }
}

/// CPU-side mesh: interleaved vertices plus a `u16` triangle list.
///
/// A plain value — the caller owns it exclusively and uploads or discards
/// it; there is no identity or lifecycle beyond the call that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u16>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Generates a sphere with the fixed jitter seed.
///
/// Deterministic: two calls with identical parameters produce bit-identical
/// buffers, with or without jitter.  Use [`generate_seeded`] to vary the
/// jitter pattern.
pub fn generate(params: &SphereParams) -> MeshData {
    generate_seeded(params, JITTER_SEED)
}

/// Generates a sphere, drawing jitter from a stream seeded with `seed`.
///
/// The seed only matters when `randomness != 0`; jitter draws happen in
/// ring-major, column-major order and only for genuinely computed points
/// (seam and interior pole columns reuse positions and consume no draws).
pub fn generate_seeded(params: &SphereParams, seed: u64) -> MeshData {
    let width = params.width_segments.max(3);
    let height = params.height_segments.max(2);
    let radius = params.radius;

    let ring = width + 1;
    let vertex_count = (ring * (height + 1)) as usize;
    debug_assert!(vertex_count <= u16::MAX as usize + 1);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut vertices = Vec::with_capacity(vertex_count);

    // Positions persist across columns: the seam column copies the ring's
    // first point, and interior pole columns keep the pole point.
    let mut first = Vec3::ZERO;
    let mut point = Vec3::ZERO;

    for iy in 0..=height {
        let v = iy as f32 / height as f32;

        // Half-texel u shift at the poles so the degenerate fan doesn't
        // pinch the texture to one side.
        let u_offset = if iy == 0 {
            0.5 / width as f32
        } else if iy == height {
            -0.5 / width as f32
        } else {
            0.0
        };

        for ix in 0..=width {
            let u = ix as f32 / width as f32;

            if ix == width {
                // seam: close the ring on its first position exactly
                point = first;
            } else if ix == 0 || (iy != 0 && iy != height) {
                let r = radius + rng.gen_range(-0.5f32..0.5) * 2.0 * params.randomness * radius;
                point = Vec3::new(
                    -r * (u * TAU).cos() * (v * PI).sin(),
                    r * (v * PI).cos(),
                    r * (u * TAU).sin() * (v * PI).sin(),
                );
                if ix == 0 {
                    first = point;
                }
            }
            // else: interior pole column, `point` still holds the pole

            let normal = point.normalize_or_zero();
            vertices.push(MeshVertex {
                position: [point.x, point.y, point.z, 1.0],
                normal: normal.to_array(),
                uv: [u + u_offset, 1.0 - v],
            });
        }
    }

    // Triangulate ring pairs.  At the poles one triangle of each quad would
    // be zero-area (two corners coincide at the pole), so it is skipped and
    // the surviving triangle covers the cap as a fan.
    let mut indices = Vec::with_capacity((width * height * 6) as usize);
    for iy in 0..height {
        for ix in 0..width {
            let a = (iy * ring + ix + 1) as u16;
            let b = (iy * ring + ix) as u16;
            let c = ((iy + 1) * ring + ix) as u16;
            let d = ((iy + 1) * ring + ix + 1) as u16;

            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    MeshData { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(radius: f32, w: u32, h: u32, randomness: f32) -> SphereParams {
        SphereParams {
            radius,
            width_segments: w,
            height_segments: h,
            randomness,
        }
    }

    #[test]
    fn vertex_count_matches_grid() {
        for &(w, h) in &[(3u32, 2u32), (4, 2), (8, 5), (32, 16)] {
            let mesh = generate(&params(1.0, w, h, 0.0));
            assert_eq!(mesh.vertex_count(), ((w + 1) * (h + 1)) as usize);
        }
    }

    #[test]
    fn deterministic_without_jitter() {
        let a = generate(&params(2.5, 12, 7, 0.0));
        let b = generate(&params(2.5, 12, 7, 0.0));
        assert_eq!(a, b);
    }

    #[test]
    fn reproducible_with_jitter() {
        let a = generate(&params(1.0, 16, 9, 0.4));
        let b = generate(&params(1.0, 16, 9, 0.4));
        assert_eq!(a, b);
    }

    #[test]
    fn seeds_change_the_jitter_pattern() {
        let p = params(1.0, 16, 9, 0.4);
        let a = generate_seeded(&p, 1);
        let b = generate_seeded(&p, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn seed_is_irrelevant_without_jitter() {
        let p = params(1.0, 16, 9, 0.0);
        assert_eq!(generate_seeded(&p, 1), generate_seeded(&p, 2));
    }

    #[test]
    fn indices_are_in_bounds() {
        let mesh = generate(&params(1.0, 32, 16, 0.3));
        let count = mesh.vertex_count() as u16;
        assert!(mesh.indices.iter().all(|&i| i < count));
    }

    #[test]
    fn seam_positions_match_ring_start() {
        let (w, h) = (8u32, 5u32);
        let mesh = generate(&params(1.0, w, h, 0.7));
        let ring = (w + 1) as usize;
        for iy in 0..=h as usize {
            let start = &mesh.vertices[iy * ring];
            let seam = &mesh.vertices[iy * ring + w as usize];
            assert_eq!(start.position, seam.position);
            // u spans the full wrap: exactly 1.0 apart
            assert_eq!(seam.uv[0] - start.uv[0], 1.0);
        }
    }

    #[test]
    fn pole_rings_collapse_to_one_point() {
        let (w, h) = (8u32, 5u32);
        let mesh = generate(&params(1.0, w, h, 0.5));
        let ring = (w + 1) as usize;
        for &iy in &[0usize, h as usize] {
            let pole = mesh.vertices[iy * ring].position;
            for ix in 0..ring {
                assert_eq!(mesh.vertices[iy * ring + ix].position, pole);
            }
        }
    }

    #[test]
    fn top_pole_is_on_the_positive_y_axis() {
        let mesh = generate(&params(3.0, 6, 4, 0.0));
        let top = &mesh.vertices[0];
        assert_eq!(top.position, [0.0, 3.0, 0.0, 1.0]);
        assert_eq!(top.normal, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn pole_uvs_carry_the_half_texel_shift() {
        let (w, h) = (8u32, 4u32);
        let mesh = generate(&params(1.0, w, h, 0.0));
        let ring = (w + 1) as usize;
        let shift = 0.5 / w as f32;
        assert_eq!(mesh.vertices[0].uv, [shift, 1.0]);
        let bottom_first = &mesh.vertices[h as usize * ring];
        assert_eq!(bottom_first.uv, [-shift, 0.0]);
        // interior rings are unshifted
        assert_eq!(mesh.vertices[ring].uv[0], 0.0);
    }

    #[test]
    fn normals_are_unit_length() {
        let mesh = generate(&params(2.0, 12, 6, 0.5));
        for vertex in &mesh.vertices {
            let n = Vec3::from_array(vertex.normal);
            assert!((n.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn zero_radius_leaves_normals_zero() {
        let mesh = generate(&params(0.0, 4, 3, 0.0));
        for vertex in &mesh.vertices {
            assert_eq!(vertex.normal, [0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn segment_counts_clamp_to_minimums() {
        let clamped = generate(&params(1.0, 1, 0, 0.0));
        let minimum = generate(&params(1.0, 3, 2, 0.0));
        assert_eq!(clamped, minimum);
    }

    #[test]
    fn four_by_two_scenario() {
        // 5×3 grid of vertices; both ring pairs touch a pole, so each quad
        // contributes exactly one triangle: 2 rings × 4 quads = 8 triangles.
        let mesh = generate(&params(1.0, 4, 2, 0.0));
        assert_eq!(mesh.vertex_count(), 15);
        assert_eq!(mesh.indices.len(), 24);
        assert_eq!(mesh.triangle_count(), 8);
    }

    #[test]
    fn no_degenerate_triangles_at_the_poles() {
        let (w, h) = (6u32, 4u32);
        let mesh = generate(&params(1.0, w, h, 0.0));
        let ring = w + 1;
        for tri in mesh.indices.chunks_exact(3) {
            let rows: Vec<u32> = tri.iter().map(|&i| i as u32 / ring).collect();
            // a triangle with two corners on a pole ring would be zero-area
            let on_top = rows.iter().filter(|&&r| r == 0).count();
            let on_bottom = rows.iter().filter(|&&r| r == h).count();
            assert!(on_top <= 1, "triangle {tri:?} has an edge on the top pole");
            assert!(on_bottom <= 1, "triangle {tri:?} has an edge on the bottom pole");
        }
    }

    #[test]
    fn default_parameters_match_the_classic_sphere() {
        let mesh = generate(&SphereParams::default());
        assert_eq!(mesh.vertex_count(), 33 * 17);
        // 16 ring pairs: the two pole pairs emit one triangle per quad,
        // the 14 interior pairs emit two.
        assert_eq!(mesh.triangle_count(), (14 * 2 + 2) * 32);
    }
}
