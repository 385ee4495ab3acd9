//! 2D Perlin noise implementation
//!
//! Gradient noise over the integer lattice using the standard Ken Perlin
//! permutation table, layered into fractal Brownian motion.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the coherent noise behind the territory borders
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NoiseConfig {
    /// Number of noise periods across the grid (lower = larger features)
    pub frequency: f64,
    /// Number of octaves for fractal detail layers
    pub octaves: usize,
    /// Amplitude decay per octave (controls roughness)
    pub persistence: f64,
    /// Frequency multiplier per octave
    pub lacunarity: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            frequency: 6.0,
            octaves: 3,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

// ============================================================================
// PERMUTATION TABLE
// ============================================================================
// Standard 256-element permutation table from Ken Perlin's reference implementation.
// This table must remain unchanged to maintain deterministic generation.
const PERM: [u32; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

/// Hash a lattice corner together with the seed
///
/// The seed is mixed with a linear congruential step, XORed into both
/// coordinates and pushed through two permutation lookups.
#[inline]
fn hash(x: i32, y: i32, seed: u32) -> u32 {
    let seed_hash = (seed.wrapping_mul(1103515245).wrapping_add(12345)) >> 16;
    let ix = ((x as u32) ^ seed_hash) & 255;
    let iy = ((y as u32) ^ (seed_hash >> 8)) & 255;
    let a = PERM[ix as usize];
    PERM[((a + iy) & 255) as usize]
}

/// Dot product of the offset `(x, y)` with one of eight lattice gradients
#[inline]
fn gradient(hash_value: u32, x: f64, y: f64) -> f64 {
    match hash_value & 7 {
        0 => x + y,
        1 => -x + y,
        2 => x - y,
        3 => -x - y,
        4 => x,
        5 => -x,
        6 => y,
        _ => -y,
    }
}

/// Quintic smoothstep interpolation (Ken Perlin's improved fade function)
///
/// Formula: 6t⁵ - 15t⁴ + 10t³
#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Sample 2D Perlin noise at `(x, y)` with seed
///
/// Returns zero on every integer lattice point and values in roughly
/// [-1, 1] elsewhere.
pub(crate) fn perlin_2d(x: f64, y: f64, seed: u32) -> f64 {
    let x0 = x.floor() as i32;
    let y0 = y.floor() as i32;
    let x1 = x0 + 1;
    let y1 = y0 + 1;

    let xf = x - x.floor();
    let yf = y - y.floor();

    let u = fade(xf);
    let v = fade(yf);

    let g_aa = gradient(hash(x0, y0, seed), xf, yf);
    let g_ba = gradient(hash(x1, y0, seed), xf - 1.0, yf);
    let g_ab = gradient(hash(x0, y1, seed), xf, yf - 1.0);
    let g_bb = gradient(hash(x1, y1, seed), xf - 1.0, yf - 1.0);

    let bottom = lerp(g_aa, g_ba, u);
    let top = lerp(g_ab, g_bb, u);

    lerp(bottom, top, v)
}

/// Sample 2D Perlin noise with Fractal Brownian Motion
///
/// Accumulates `config.octaves` layers, each at `lacunarity` times the
/// frequency and `persistence` times the amplitude of the previous one.
/// `config.frequency` is not applied here; callers scale the position.
///
/// # Returns
/// Value in range [-1, 1] (approximately), normalized by the total amplitude
pub fn sample_perlin_fbm(x: f64, y: f64, seed: u32, config: &NoiseConfig) -> f64 {
    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;
    let mut max_value = 0.0;

    for _ in 0..config.octaves {
        total += perlin_2d(x * frequency, y * frequency, seed) * amplitude;
        max_value += amplitude;
        amplitude *= config.persistence;
        frequency *= config.lacunarity;
    }

    if max_value == 0.0 {
        return 0.0;
    }

    total / max_value
}
