//! Authored outline and prism tables for every piece
//!
//! All tables are flat `f32` buffers, 8 floats per point:
//! position (x, y, z), normal (x, y, z), texture (u, v).
//! Lathe outlines have z = 0 and x as the radius at height y.

/// Bishop outline from the mitre tip down to the base rim.
#[rustfmt::skip]
pub const BISHOP: &[f32] = &[
      0.000,   0.711,     0.0,   1.0,  1.0,  0.0,  0.00, 1.00,
      0.017,   0.707,     0.0,   1.0,  1.0,  0.0,  0.00, 0.98,
      0.025,   0.701,     0.0,   1.0,  1.0,  0.0,  0.00, 0.96,
      0.031,   0.685,     0.0,   1.0,  1.0,  0.0,  0.00, 0.94,
      0.029,   0.675,     0.0,   1.0, -1.0,  0.0,  0.00, 0.92,
      0.015,   0.657,     0.0,   1.0, -1.0,  0.0,  0.00, 0.90,
      0.019,   0.655,     0.0,   1.0,  1.0,  0.0,  0.00, 0.88,
      0.021,   0.653,     0.0,   1.0,  1.0,  0.0,  0.00, 0.86,
      0.020,   0.648,     0.0,   1.0, -1.0,  0.0,  0.00, 0.84,
      0.033,   0.632,     0.0,   1.0,  1.0,  0.0,  0.00, 0.82,
      0.051,   0.607,     0.0,   1.0,  1.0,  0.0,  0.00, 0.80,
      0.063,   0.582,     0.0,   1.0,  1.0,  0.0,  0.00, 0.78,
      0.074,   0.547,     0.0,   1.0,  1.0,  0.0,  0.00, 0.76,
      0.076,   0.520,     0.0,   1.0,  1.0,  0.0,  0.00, 0.74,
      0.069,   0.492,     0.0,   1.0, -1.0,  0.0,  0.00, 0.72,
      0.060,   0.475,     0.0,   1.0, -1.0,  0.0,  0.00, 0.70,
      0.053,   0.467,     0.0,   1.0, -1.0,  0.0,  0.00, 0.68,
      0.062,   0.464,     0.0,   1.0,  1.0,  0.0,  0.00, 0.66,
      0.065,   0.457,     0.0,   1.0,  1.0,  0.0,  0.00, 0.64,
      0.059,   0.450,     0.0,   1.0, -1.0,  0.0,  0.00, 0.62,
      0.047,   0.441,     0.0,   1.0, -1.0,  0.0,  0.00, 0.60,
      0.057,   0.434,     0.0,   1.0,  1.0,  0.0,  0.00, 0.58,
      0.068,   0.428,     0.0,   1.0,  1.0,  0.0,  0.00, 0.56,
      0.070,   0.420,     0.0,   1.0,  1.0,  0.0,  0.00, 0.54,
      0.084,   0.414,     0.0,   1.0,  1.0,  0.0,  0.00, 0.52,
      0.090,   0.408,     0.0,   1.0,  1.0,  0.0,  0.00, 0.50,
      0.092,   0.399,     0.0,   1.0,  1.0,  0.0,  0.00, 0.48,
      0.087,   0.390,     0.0,   1.0, -1.0,  0.0,  0.00, 0.46,
      0.073,   0.386,     0.0,   1.0, -1.0,  0.0,  0.00, 0.44,
      0.058,   0.377,     0.0,   1.0, -1.0,  0.0,  0.00, 0.42,
      0.045,   0.369,     0.0,   1.0, -1.0,  0.0,  0.00, 0.40,
      0.046,   0.330,     0.0,   1.0,  1.0,  0.0,  0.00, 0.38,
      0.055,   0.281,     0.0,   1.0,  1.0,  0.0,  0.00, 0.36,
      0.072,   0.239,     0.0,   1.0,  1.0,  0.0,  0.00, 0.34,
      0.100,   0.202,     0.0,   1.0,  1.0,  0.0,  0.00, 0.32,
      0.106,   0.189,     0.0,   1.0,  1.0,  0.0,  0.00, 0.30,
      0.101,   0.183,     0.0,   1.0, -1.0,  0.0,  0.00, 0.28,
      0.093,   0.179,     0.0,   1.0, -1.0,  0.0,  0.00, 0.26,
      0.109,   0.154,     0.0,   1.0,  1.0,  0.0,  0.00, 0.24,
      0.133,   0.128,     0.0,   1.0,  1.0,  0.0,  0.00, 0.22,
      0.142,   0.103,     0.0,   1.0,  1.0,  0.0,  0.00, 0.20,
      0.139,   0.085,     0.0,   1.0, -1.0,  0.0,  0.00, 0.18,
      0.125,   0.064,     0.0,   1.0, -1.0,  0.0,  0.00, 0.16,
      0.140,   0.056,     0.0,   1.0,  1.0,  0.0,  0.00, 0.14,
      0.149,   0.048,     0.0,   1.0,  1.0,  0.0,  0.00, 0.12,
      0.149,   0.005,     0.0,   1.0,  1.0,  0.0,  0.00, 0.10,
      0.145,   0.000,     0.0,   1.0, -1.0,  0.0,  0.00, 0.08,
      0.000,   0.000,     0.0,   1.0, -1.0,  0.0,  0.00, 0.06,
];

/// Knight pedestal outline; the head is built from [`KNIGHT_HEAD`].
#[rustfmt::skip]
pub const KNIGHT_BASE: &[f32] = &[
      0.000,   0.189,     0.0,   1.0,  1.0,  0.0,  0.00, 0.40,
      0.106,   0.189,     0.0,   1.0,  1.0,  0.0,  0.00, 0.30,
      0.101,   0.183,     0.0,   1.0, -1.0,  0.0,  0.00, 0.28,
      0.093,   0.179,     0.0,   1.0, -1.0,  0.0,  0.00, 0.26,
      0.109,   0.154,     0.0,   1.0,  1.0,  0.0,  0.00, 0.24,
      0.133,   0.128,     0.0,   1.0,  1.0,  0.0,  0.00, 0.22,
      0.142,   0.103,     0.0,   1.0,  1.0,  0.0,  0.00, 0.20,
      0.139,   0.085,     0.0,   1.0, -1.0,  0.0,  0.00, 0.18,
      0.125,   0.064,     0.0,   1.0, -1.0,  0.0,  0.00, 0.16,
      0.140,   0.056,     0.0,   1.0,  1.0,  0.0,  0.00, 0.14,
      0.149,   0.048,     0.0,   1.0,  1.0,  0.0,  0.00, 0.12,
      0.149,   0.005,     0.0,   1.0,  1.0,  0.0,  0.00, 0.10,
      0.145,   0.000,     0.0,   1.0, -1.0,  0.0,  0.00, 0.08,
      0.000,   0.000,     0.0,   1.0, -1.0,  0.0,  0.00, 0.06,
];

/// Right half of the knight head, rows of three points (back, side, front)
/// climbing from the pedestal to the ears. Mirrored across X to close the shape.
#[rustfmt::skip]
pub const KNIGHT_HEAD: &[f32] = &[
      0.000,   0.189,  -0.105,   0.0,  0.0, -1.0,  0.00, 0.00,
      0.100,   0.189,   0.000,   1.0,  0.0,  0.0,  0.50, 0.00,
      0.000,   0.189,   0.105,   0.0,  0.0,  1.0,  1.00, 0.00,
      0.000,   0.224,  -0.101,   0.0,  0.0, -1.0,  0.00, 0.03,
      0.100,   0.224,  -0.005,   1.0,  0.0,  0.0,  0.50, 0.03,
      0.000,   0.224,   0.091,   0.0,  0.0,  1.0,  1.00, 0.03,
      0.000,   0.248,  -0.106,   0.0,  0.0, -1.0,  0.00, 0.06,
      0.100,   0.248, -0.0015,   1.0,  0.0,  0.0,  0.50, 0.06,
      0.000,   0.248,   0.103,   0.0,  0.0,  1.0,  1.00, 0.06,
      0.000,   0.268,  -0.107,   0.0,  0.0, -1.0,  0.00, 0.09,
      0.100,   0.268,  -0.003,   1.0,  0.0,  0.0,  0.50, 0.09,
      0.000,   0.268,   0.101,   0.0,  0.0,  1.0,  1.00, 0.09,
      0.000,   0.280,  -0.103,   0.0,  0.0, -1.0,  0.00, 0.12,
      0.100,   0.280,  0.0025,   1.0,  0.0,  0.0,  0.50, 0.12,
      0.000,   0.280,   0.108,   0.0,  0.0,  1.0,  1.00, 0.12,
      0.000,   0.295,  -0.099,   0.0,  0.0, -1.0,  0.00, 0.15,
      0.100,   0.295,   0.005,   1.0,  0.0,  0.0,  0.50, 0.15,
      0.000,   0.295,   0.109,   0.0,  0.0,  1.0,  1.00, 0.15,
      0.000,   0.307,  -0.091,   0.0,  0.0, -1.0,  0.00, 0.18,
      0.100,   0.307,   0.015,   1.0,  0.0,  0.0,  0.50, 0.18,
      0.000,   0.307,   0.121,   0.0,  0.0,  1.0,  1.00, 0.18,
      0.000,   0.321,  -0.080,   0.0,  0.0, -1.0,  0.00, 0.21,
      0.100,   0.321,  0.0225,   1.0,  0.0,  0.0,  0.50, 0.21,
      0.000,   0.321,   0.125,   0.0,  0.0,  1.0,  1.00, 0.21,
      0.000,   0.333,  -0.070,   0.0,  0.0, -1.0,  0.00, 0.24,
      0.100,   0.333,   0.034,   1.0,  0.0,  0.0,  0.50, 0.24,
      0.000,   0.333,   0.138,   0.0,  0.0,  1.0,  1.00, 0.24,
      0.000,   0.350,  -0.043,   0.0,  0.0, -1.0,  0.00, 0.27,
      0.100,   0.350,  0.0495,   1.0,  0.0,  0.0,  0.50, 0.27,
      0.000,   0.350,   0.142,   0.0,  0.0,  1.0,  1.00, 0.27,
      0.000,   0.363,  -0.024,   0.0,  1.0, -1.0,  0.00, 0.30,
      0.095,   0.363,  0.0665,   1.0,  1.0,  0.0,  0.50, 0.30,
      0.000,   0.363,   0.157,   0.0,  1.0,  1.0,  1.00, 0.30,
      0.000,   0.379,   0.008,   0.0,  1.0, -1.0,  0.00, 0.33,
      0.090,   0.379,  0.0835,   1.0,  1.0,  0.0,  0.50, 0.33,
      0.000,   0.379,   0.159,   0.0,  1.0,  1.0,  1.00, 0.33,
      0.000,   0.400,   0.038,   0.0,  1.0, -1.0,  0.00, 0.36,
      0.085,   0.400,   0.106,   1.0,  1.0,  0.0,  0.50, 0.36,
      0.000,   0.400,   0.174,   0.0,  1.0,  1.0,  1.00, 0.36,
      0.000,   0.417,   0.047,   0.0,  1.0, -1.0,  0.00, 0.39,
      0.080,   0.417,   0.111,   1.0,  1.0,  0.0,  0.50, 0.39,
      0.000,   0.417,   0.175,   0.0,  1.0,  1.0,  1.00, 0.39,
      0.000,   0.438,  -0.144,   0.0,  1.0, -1.0,  0.00, 0.42,
      0.085,   0.438,   0.019,   1.0,  1.0,  0.0,  0.50, 0.42,
      0.000,   0.438,   0.182,   0.0,  1.0,  1.0,  1.00, 0.42,
      0.000,   0.458,  -0.131,   0.0,  1.0, -1.0,  0.00, 0.45,
      0.090,   0.458,  0.0225,   1.0,  1.0,  0.0,  0.50, 0.45,
      0.000,   0.458,   0.176,   0.0,  1.0,  1.0,  1.00, 0.45,
      0.000,   0.477,  -0.099,   0.0,  1.0, -1.0,  0.00, 0.48,
      0.095,   0.477,   0.039,   1.0,  1.0,  0.0,  0.50, 0.48,
      0.000,   0.477,   0.177,   0.0,  1.0,  1.0,  1.00, 0.48,
      0.000,   0.495,  -0.076,   0.0,  1.0, -1.0,  0.00, 0.51,
      0.100,   0.495,  0.0455,   1.0,  1.0,  0.0,  0.50, 0.51,
      0.000,   0.495,   0.167,   0.0,  1.0,  1.0,  1.00, 0.51,
      0.000,   0.517,  -0.060,   0.0,  0.0, -1.0,  0.00, 0.54,
      0.100,   0.517,  0.0505,   1.0,  0.0,  0.0,  0.50, 0.54,
      0.000,   0.517,   0.161,   0.0,  0.0,  1.0,  1.00, 0.54,
      0.000,   0.531,  -0.047,   0.0,  0.0, -1.0,  0.00, 0.57,
      0.100,   0.531,   0.050,   1.0,  0.0,  0.0,  0.50, 0.57,
      0.000,   0.531,   0.147,   0.0,  0.0,  1.0,  1.00, 0.57,
      0.000,   0.549,  -0.015,   0.0,  1.0, -1.0,  0.00, 0.60,
      0.100,   0.549,   0.059,   1.0,  1.0,  0.0,  0.50, 0.60,
      0.000,   0.549,   0.133,   0.0,  1.0,  1.0,  1.00, 0.60,
      0.000,   0.554,   0.001,   0.0,  1.0, -1.0,  0.00, 0.63,
      0.080,   0.554,   0.059,   1.0,  1.0,  0.0,  0.50, 0.63,
      0.000,   0.554,   0.117,   0.0,  1.0,  1.0,  1.00, 0.63,
      0.000,   0.566,  -0.004,   0.0,  1.0, -1.0,  0.00, 0.66,
      0.075,   0.566,   0.048,   1.0,  1.0,  0.0,  0.50, 0.66,
      0.000,   0.566,   0.100,   0.0,  1.0,  1.0,  1.00, 0.66,
      0.000,   0.576,  -0.008,   0.0,  1.0, -1.0,  0.00, 0.69,
      0.070,   0.576,  0.0175,   1.0,  1.0,  0.0,  0.50, 0.69,
      0.000,   0.576,   0.043,   0.0,  1.0,  1.0,  1.00, 0.69,
      0.000,   0.589,  -0.012,   0.0,  1.0, -1.0,  0.00, 0.72,
      0.065,   0.589,  0.0105,   1.0,  1.0,  0.0,  0.50, 0.72,
      0.000,   0.589,   0.033,   0.0,  1.0,  1.0,  1.00, 0.72,
      0.000,   0.595,  -0.013,   0.0,  1.0, -1.0,  0.00, 0.75,
      0.060,   0.595,  0.0025,   1.0,  1.0,  0.0,  0.50, 0.75,
      0.000,   0.595,   0.018,   0.0,  1.0,  1.0,  1.00, 0.75,
      0.000,   0.607,  -0.014,   0.0,  1.0, -1.0,  0.00, 0.78,
      0.055,   0.607,  -0.005,   1.0,  1.0,  0.0,  0.50, 0.78,
      0.000,   0.607,   0.004,   0.0,  1.0,  1.0,  1.00, 0.78,
      0.000,   0.622,  -0.009,   0.0,  1.0, -1.0,  0.00, 0.81,
      0.050,   0.622,  -0.009,   1.0,  1.0,  0.0,  0.50, 0.81,
      0.000,   0.622,  -0.009,   0.0,  1.0,  1.0,  1.00, 0.81,
];

/// Rook tower outline; the crenellations come from [`ROOK_MERLON`].
#[rustfmt::skip]
pub const ROOK: &[f32] = &[
      0.000,   0.489,     0.0,   1.0,  1.0,  0.0,  0.00, 1.00,
      0.109,   0.489,     0.0,   1.0,  1.0,  0.0,  0.00, 0.98,
      0.109,   0.430,     0.0,   1.0,  0.0,  0.0,  0.00, 0.96,
      0.104,   0.425,     0.0,   1.0, -1.0,  0.0,  0.00, 0.94,
      0.097,   0.422,     0.0,   1.0, -1.0,  0.0,  0.00, 0.92,
      0.104,   0.418,     0.0,   1.0,  1.0,  0.0,  0.00, 0.90,
      0.109,   0.412,     0.0,   1.0,  1.0,  0.0,  0.00, 0.88,
      0.108,   0.399,     0.0,   1.0, -1.0,  0.0,  0.00, 0.86,
      0.098,   0.391,     0.0,   1.0, -1.0,  0.0,  0.00, 0.84,
      0.089,   0.385,     0.0,   1.0, -1.0,  0.0,  0.00, 0.82,
      0.068,   0.374,     0.0,   1.0, -1.0,  0.0,  0.00, 0.80,
      0.069,   0.329,     0.0,   1.0,  1.0,  0.0,  0.00, 0.78,
      0.077,   0.267,     0.0,   1.0,  1.0,  0.0,  0.00, 0.76,
      0.089,   0.224,     0.0,   1.0,  1.0,  0.0,  0.00, 0.74,
      0.106,   0.189,     0.0,   1.0,  1.0,  0.0,  0.00, 0.40,
      0.101,   0.183,     0.0,   1.0, -1.0,  0.0,  0.00, 0.38,
      0.093,   0.179,     0.0,   1.0, -1.0,  0.0,  0.00, 0.36,
      0.109,   0.154,     0.0,   1.0,  1.0,  0.0,  0.00, 0.34,
      0.133,   0.128,     0.0,   1.0,  1.0,  0.0,  0.00, 0.32,
      0.142,   0.103,     0.0,   1.0,  1.0,  0.0,  0.00, 0.30,
      0.139,   0.085,     0.0,   1.0, -1.0,  0.0,  0.00, 0.28,
      0.125,   0.064,     0.0,   1.0, -1.0,  0.0,  0.00, 0.26,
      0.140,   0.056,     0.0,   1.0,  1.0,  0.0,  0.00, 0.24,
      0.149,   0.048,     0.0,   1.0,  1.0,  0.0,  0.00, 0.22,
      0.149,   0.005,     0.0,   1.0,  1.0,  0.0,  0.00, 0.20,
      0.145,   0.000,     0.0,   1.0, -1.0,  0.0,  0.00, 0.18,
      0.000,   0.000,     0.0,   1.0, -1.0,  0.0,  0.00, 0.00,
];

/// One merlon of the rook top as six pre-triangulated faces.
/// Replicated to four merlons by an X reflection and an X/Z swap.
#[rustfmt::skip]
pub const ROOK_MERLON: &[f32] = &[
      0.075,   0.000, -0.0417,   0.0, -1.0,  0.0,  0.0, 1.0,
      0.101,   0.000, -0.0417,   0.0, -1.0,  0.0,  1.0, 1.0,
      0.101,   0.000,  0.0417,   0.0, -1.0,  0.0,  1.0, 0.0,
      0.101,   0.000,  0.0417,   0.0, -1.0,  0.0,  1.0, 0.0,
      0.075,   0.000,  0.0417,   0.0, -1.0,  0.0,  0.0, 0.0,
      0.075,   0.000, -0.0417,   0.0, -1.0,  0.0,  0.0, 1.0,
      0.075,   0.055, -0.0417,   0.0,  1.0,  0.0,  0.0, 1.0,
      0.101,   0.055, -0.0417,   0.0,  1.0,  0.0,  1.0, 1.0,
      0.101,   0.055,  0.0417,   0.0,  1.0,  0.0,  1.0, 0.0,
      0.101,   0.055,  0.0417,   0.0,  1.0,  0.0,  1.0, 0.0,
      0.075,   0.055,  0.0417,   0.0,  1.0,  0.0,  0.0, 0.0,
      0.075,   0.055, -0.0417,   0.0,  1.0,  0.0,  0.0, 1.0,
      0.075,   0.000,  0.0417,   0.0,  0.0,  1.0,  0.0, 1.0,
      0.101,   0.000,  0.0417,   0.0,  0.0,  1.0,  1.0, 1.0,
      0.101,   0.055,  0.0417,   0.0,  0.0,  1.0,  1.0, 0.0,
      0.101,   0.055,  0.0417,   0.0,  0.0,  1.0,  1.0, 0.0,
      0.075,   0.055,  0.0417,   0.0,  0.0,  1.0,  0.0, 0.0,
      0.075,   0.000,  0.0417,   0.0,  0.0,  1.0,  0.0, 1.0,
      0.075,   0.000, -0.0417,   0.0,  0.0, -1.0,  0.0, 1.0,
      0.101,   0.000, -0.0417,   0.0,  0.0, -1.0,  1.0, 1.0,
      0.101,   0.055, -0.0417,   0.0,  0.0, -1.0,  1.0, 0.0,
      0.101,   0.055, -0.0417,   0.0,  0.0, -1.0,  1.0, 0.0,
      0.075,   0.055, -0.0417,   0.0,  0.0, -1.0,  0.0, 0.0,
      0.075,   0.000, -0.0417,   0.0,  0.0, -1.0,  0.0, 1.0,
      0.101,   0.000, -0.0417,   1.0,  0.0,  0.0,  0.0, 1.0,
      0.101,   0.000,  0.0417,   1.0,  0.0,  0.0,  1.0, 1.0,
      0.101,   0.055,  0.0417,   1.0,  0.0,  0.0,  1.0, 0.0,
      0.101,   0.055,  0.0417,   1.0,  0.0,  0.0,  1.0, 0.0,
      0.101,   0.055, -0.0417,   1.0,  0.0,  0.0,  0.0, 0.0,
      0.101,   0.000, -0.0417,   1.0,  0.0,  0.0,  0.0, 1.0,
      0.075,   0.000, -0.0417,  -1.0,  0.0,  0.0,  0.0, 1.0,
      0.075,   0.000,  0.0417,  -1.0,  0.0,  0.0,  1.0, 1.0,
      0.075,   0.055,  0.0417,  -1.0,  0.0,  0.0,  1.0, 0.0,
      0.075,   0.055,  0.0417,  -1.0,  0.0,  0.0,  1.0, 0.0,
      0.075,   0.055, -0.0417,  -1.0,  0.0,  0.0,  0.0, 0.0,
      0.075,   0.000, -0.0417,  -1.0,  0.0,  0.0,  0.0, 1.0,
];

/// Queen outline from the crown ball down to the base rim.
#[rustfmt::skip]
pub const QUEEN: &[f32] = &[
      0.000,   0.793,     0.0,   1.0,  1.0,  0.0,  0.00, 1.00,
      0.015,   0.787,     0.0,   1.0,  1.0,  0.0,  0.00, 0.98,
      0.025,   0.776,     0.0,   1.0,  1.0,  0.0,  0.00, 0.96,
      0.028,   0.764,     0.0,   1.0,  1.0,  0.0,  0.00, 0.94,
      0.026,   0.750,     0.0,   1.0, -1.0,  0.0,  0.00, 0.92,
      0.017,   0.736,     0.0,   1.0, -1.0,  0.0,  0.00, 0.90,
      0.021,   0.734,     0.0,   1.0,  1.0,  0.0,  0.00, 0.88,
      0.021,   0.730,     0.0,   1.0,  1.0,  0.0,  0.00, 0.86,
      0.036,   0.728,     0.0,   1.0,  1.0,  0.0,  0.00, 0.84,
      0.049,   0.723,     0.0,   1.0,  1.0,  0.0,  0.00, 0.82,
      0.068,   0.711,     0.0,   1.0,  1.0,  0.0,  0.00, 0.80,
      0.079,   0.697,     0.0,   1.0,  1.0,  0.0,  0.00, 0.78,
      0.089,   0.683,     0.0,   1.0,  1.0,  0.0,  0.00, 0.76,
      0.095,   0.684,     0.0,   1.0,  1.0,  0.0,  0.00, 0.74,
      0.105,   0.693,     0.0,   1.0,  1.0,  0.0,  0.00, 0.72,
      0.114,   0.699,     0.0,   1.0,  1.0,  0.0,  0.00, 0.70,
      0.117,   0.692,     0.0,   1.0,  1.0,  0.0,  0.00, 0.68,
      0.104,   0.674,     0.0,   1.0, -1.0,  0.0,  0.00, 0.66,
      0.076,   0.628,     0.0,   1.0, -1.0,  0.0,  0.00, 0.64,
      0.057,   0.587,     0.0,   1.0, -1.0,  0.0,  0.00, 0.62,
      0.053,   0.562,     0.0,   1.0, -1.0,  0.0,  0.00, 0.60,
      0.062,   0.559,     0.0,   1.0,  1.0,  0.0,  0.00, 0.58,
      0.065,   0.553,     0.0,   1.0,  1.0,  0.0,  0.00, 0.56,
      0.060,   0.544,     0.0,   1.0, -1.0,  0.0,  0.00, 0.54,
      0.053,   0.543,     0.0,   1.0, -1.0,  0.0,  0.00, 0.52,
      0.048,   0.537,     0.0,   1.0, -1.0,  0.0,  0.00, 0.50,
      0.051,   0.532,     0.0,   1.0,  1.0,  0.0,  0.00, 0.48,
      0.063,   0.527,     0.0,   1.0,  1.0,  0.0,  0.00, 0.46,
      0.070,   0.521,     0.0,   1.0,  1.0,  0.0,  0.00, 0.44,
      0.072,   0.513,     0.0,   1.0,  1.0,  0.0,  0.00, 0.42,
      0.086,   0.510,     0.0,   1.0,  1.0,  0.0,  0.00, 0.40,
      0.094,   0.500,     0.0,   1.0,  1.0,  0.0,  0.00, 0.38,
      0.093,   0.488,     0.0,   1.0, -1.0,  0.0,  0.00, 0.36,
      0.076,   0.482,     0.0,   1.0, -1.0,  0.0,  0.00, 0.34,
      0.054,   0.471,     0.0,   1.0, -1.0,  0.0,  0.00, 0.32,
      0.044,   0.466,     0.0,   1.0, -1.0,  0.0,  0.00, 0.30,
      0.044,   0.412,     0.0,   1.0,  1.0,  0.0,  0.00, 0.28,
      0.048,   0.351,     0.0,   1.0,  1.0,  0.0,  0.00, 0.26,
      0.063,   0.279,     0.0,   1.0,  1.0,  0.0,  0.00, 0.24,
      0.084,   0.226,     0.0,   1.0,  1.0,  0.0,  0.00, 0.22,
      0.106,   0.189,     0.0,   1.0,  1.0,  0.0,  0.00, 0.20,
      0.101,   0.183,     0.0,   1.0, -1.0,  0.0,  0.00, 0.18,
      0.093,   0.179,     0.0,   1.0, -1.0,  0.0,  0.00, 0.16,
      0.109,   0.154,     0.0,   1.0,  1.0,  0.0,  0.00, 0.14,
      0.133,   0.128,     0.0,   1.0,  1.0,  0.0,  0.00, 0.12,
      0.142,   0.103,     0.0,   1.0,  1.0,  0.0,  0.00, 0.10,
      0.139,   0.085,     0.0,   1.0, -1.0,  0.0,  0.00, 0.08,
      0.125,   0.064,     0.0,   1.0, -1.0,  0.0,  0.00, 0.06,
      0.140,   0.056,     0.0,   1.0,  1.0,  0.0,  0.00, 0.05,
      0.149,   0.048,     0.0,   1.0,  1.0,  0.0,  0.00, 0.04,
      0.149,   0.005,     0.0,   1.0,  1.0,  0.0,  0.00, 0.03,
      0.145,   0.000,     0.0,   1.0, -1.0,  0.0,  0.00, 0.02,
      0.000,   0.000,     0.0,   1.0, -1.0,  0.0,  0.00, 0.00,
];

/// King outline; the cross on top is [`KING_CROSS`].
#[rustfmt::skip]
pub const KING: &[f32] = &[
      0.000,   0.743,     0.0,   1.0,  1.0,  0.0,  0.00, 1.00,
      0.033,   0.743,     0.0,   1.0,  1.0,  0.0,  0.00, 0.98,
      0.040,   0.739,     0.0,   1.0,  1.0,  0.0,  0.00, 0.96,
      0.047,   0.736,     0.0,   1.0,  1.0,  0.0,  0.00, 0.94,
      0.048,   0.726,     0.0,   1.0,  1.0,  0.0,  0.00, 0.92,
      0.066,   0.717,     0.0,   1.0,  1.0,  0.0,  0.00, 0.90,
      0.089,   0.697,     0.0,   1.0,  1.0,  0.0,  0.00, 0.88,
      0.093,   0.675,     0.0,   1.0,  1.0,  0.0,  0.00, 0.86,
      0.084,   0.643,     0.0,   1.0, -1.0,  0.0,  0.00, 0.84,
      0.067,   0.606,     0.0,   1.0, -1.0,  0.0,  0.00, 0.82,
      0.053,   0.562,     0.0,   1.0, -1.0,  0.0,  0.00, 0.80,
      0.062,   0.559,     0.0,   1.0,  1.0,  0.0,  0.00, 0.78,
      0.065,   0.553,     0.0,   1.0,  1.0,  0.0,  0.00, 0.76,
      0.060,   0.544,     0.0,   1.0, -1.0,  0.0,  0.00, 0.74,
      0.053,   0.543,     0.0,   1.0, -1.0,  0.0,  0.00, 0.72,
      0.048,   0.537,     0.0,   1.0, -1.0,  0.0,  0.00, 0.70,
      0.051,   0.532,     0.0,   1.0,  1.0,  0.0,  0.00, 0.68,
      0.063,   0.527,     0.0,   1.0,  1.0,  0.0,  0.00, 0.66,
      0.070,   0.521,     0.0,   1.0,  1.0,  0.0,  0.00, 0.64,
      0.072,   0.513,     0.0,   1.0,  1.0,  0.0,  0.00, 0.62,
      0.086,   0.510,     0.0,   1.0,  1.0,  0.0,  0.00, 0.60,
      0.094,   0.500,     0.0,   1.0,  1.0,  0.0,  0.00, 0.58,
      0.093,   0.488,     0.0,   1.0, -1.0,  0.0,  0.00, 0.56,
      0.076,   0.482,     0.0,   1.0, -1.0,  0.0,  0.00, 0.54,
      0.054,   0.471,     0.0,   1.0, -1.0,  0.0,  0.00, 0.52,
      0.044,   0.466,     0.0,   1.0, -1.0,  0.0,  0.00, 0.50,
      0.044,   0.412,     0.0,   1.0,  1.0,  0.0,  0.00, 0.48,
      0.048,   0.351,     0.0,   1.0,  1.0,  0.0,  0.00, 0.46,
      0.063,   0.279,     0.0,   1.0,  1.0,  0.0,  0.00, 0.44,
      0.084,   0.226,     0.0,   1.0,  1.0,  0.0,  0.00, 0.42,
      0.106,   0.189,     0.0,   1.0,  1.0,  0.0,  0.00, 0.40,
      0.101,   0.183,     0.0,   1.0, -1.0,  0.0,  0.00, 0.38,
      0.093,   0.179,     0.0,   1.0, -1.0,  0.0,  0.00, 0.36,
      0.109,   0.154,     0.0,   1.0,  1.0,  0.0,  0.00, 0.34,
      0.133,   0.128,     0.0,   1.0,  1.0,  0.0,  0.00, 0.32,
      0.142,   0.103,     0.0,   1.0,  1.0,  0.0,  0.00, 0.30,
      0.139,   0.085,     0.0,   1.0, -1.0,  0.0,  0.00, 0.28,
      0.125,   0.064,     0.0,   1.0, -1.0,  0.0,  0.00, 0.26,
      0.140,   0.056,     0.0,   1.0,  1.0,  0.0,  0.00, 0.24,
      0.149,   0.048,     0.0,   1.0,  1.0,  0.0,  0.00, 0.22,
      0.149,   0.005,     0.0,   1.0,  1.0,  0.0,  0.00, 0.20,
      0.145,   0.000,     0.0,   1.0, -1.0,  0.0,  0.00, 0.18,
      0.000,   0.000,     0.0,   1.0, -1.0,  0.0,  0.00, 0.00,
];

/// King cross as two pre-triangulated boxes (upright and bar).
#[rustfmt::skip]
pub const KING_CROSS: &[f32] = &[
     -0.016,   0.000,  -0.016,   0.0, -1.0,  0.0,  0.0, 1.0,
      0.016,   0.000,  -0.016,   0.0, -1.0,  0.0,  1.0, 1.0,
      0.016,   0.000,   0.016,   0.0, -1.0,  0.0,  1.0, 0.0,
      0.016,   0.000,   0.016,   0.0, -1.0,  0.0,  1.0, 0.0,
     -0.016,   0.000,   0.016,   0.0, -1.0,  0.0,  0.0, 0.0,
     -0.016,   0.000,  -0.016,   0.0, -1.0,  0.0,  0.0, 1.0,
     -0.016,   0.127,  -0.016,   0.0,  1.0,  0.0,  0.0, 1.0,
      0.016,   0.127,  -0.016,   0.0,  1.0,  0.0,  1.0, 1.0,
      0.016,   0.127,   0.016,   0.0,  1.0,  0.0,  1.0, 0.0,
      0.016,   0.127,   0.016,   0.0,  1.0,  0.0,  1.0, 0.0,
     -0.016,   0.127,   0.016,   0.0,  1.0,  0.0,  0.0, 0.0,
     -0.016,   0.127,  -0.016,   0.0,  1.0,  0.0,  0.0, 1.0,
     -0.016,   0.000,   0.016,   0.0,  0.0,  1.0,  0.0, 1.0,
      0.016,   0.000,   0.016,   0.0,  0.0,  1.0,  1.0, 1.0,
      0.016,   0.127,   0.016,   0.0,  0.0,  1.0,  1.0, 0.0,
      0.016,   0.127,   0.016,   0.0,  0.0,  1.0,  1.0, 0.0,
     -0.016,   0.127,   0.016,   0.0,  0.0,  1.0,  0.0, 0.0,
     -0.016,   0.000,   0.016,   0.0,  0.0,  1.0,  0.0, 1.0,
     -0.016,   0.000,  -0.016,   0.0,  0.0, -1.0,  0.0, 1.0,
      0.016,   0.000,  -0.016,   0.0,  0.0, -1.0,  1.0, 1.0,
      0.016,   0.127,  -0.016,   0.0,  0.0, -1.0,  1.0, 0.0,
      0.016,   0.127,  -0.016,   0.0,  0.0, -1.0,  1.0, 0.0,
     -0.016,   0.127,  -0.016,   0.0,  0.0, -1.0,  0.0, 0.0,
     -0.016,   0.000,  -0.016,   0.0,  0.0, -1.0,  0.0, 1.0,
      0.016,   0.000,  -0.016,   1.0,  0.0,  0.0,  0.0, 1.0,
      0.016,   0.000,   0.016,   1.0,  0.0,  0.0,  1.0, 1.0,
      0.016,   0.127,   0.016,   1.0,  0.0,  0.0,  1.0, 0.0,
      0.016,   0.127,   0.016,   1.0,  0.0,  0.0,  1.0, 0.0,
      0.016,   0.127,  -0.016,   1.0,  0.0,  0.0,  0.0, 0.0,
      0.016,   0.000,  -0.016,   1.0,  0.0,  0.0,  0.0, 1.0,
     -0.016,   0.000,  -0.016,  -1.0,  0.0,  0.0,  0.0, 1.0,
     -0.016,   0.000,   0.016,  -1.0,  0.0,  0.0,  1.0, 1.0,
     -0.016,   0.127,   0.016,  -1.0,  0.0,  0.0,  1.0, 0.0,
     -0.016,   0.127,   0.016,  -1.0,  0.0,  0.0,  1.0, 0.0,
     -0.016,   0.127,  -0.016,  -1.0,  0.0,  0.0,  0.0, 0.0,
     -0.016,   0.000,  -0.016,  -1.0,  0.0,  0.0,  0.0, 1.0,
    -0.0635,  0.0475,  -0.014,   0.0, -1.0,  0.0,  0.0, 1.0,
     0.0635,  0.0475,  -0.014,   0.0, -1.0,  0.0,  1.0, 1.0,
     0.0635,  0.0475,   0.014,   0.0, -1.0,  0.0,  1.0, 0.0,
     0.0635,  0.0475,   0.014,   0.0, -1.0,  0.0,  1.0, 0.0,
    -0.0635,  0.0475,   0.014,   0.0, -1.0,  0.0,  0.0, 0.0,
    -0.0635,  0.0475,  -0.014,   0.0, -1.0,  0.0,  0.0, 1.0,
    -0.0635,  0.0795,  -0.014,   0.0,  1.0,  0.0,  0.0, 1.0,
     0.0635,  0.0795,  -0.014,   0.0,  1.0,  0.0,  1.0, 1.0,
     0.0635,  0.0795,   0.014,   0.0,  1.0,  0.0,  1.0, 0.0,
     0.0635,  0.0795,   0.014,   0.0,  1.0,  0.0,  1.0, 0.0,
    -0.0635,  0.0795,   0.014,   0.0,  1.0,  0.0,  0.0, 0.0,
    -0.0635,  0.0795,  -0.014,   0.0,  1.0,  0.0,  0.0, 1.0,
    -0.0635,  0.0475,   0.014,   0.0,  0.0,  1.0,  0.0, 1.0,
     0.0635,  0.0475,   0.014,   0.0,  0.0,  1.0,  1.0, 1.0,
     0.0635,  0.0795,   0.014,   0.0,  0.0,  1.0,  1.0, 0.0,
     0.0635,  0.0795,   0.014,   0.0,  0.0,  1.0,  1.0, 0.0,
    -0.0635,  0.0795,   0.014,   0.0,  0.0,  1.0,  0.0, 0.0,
    -0.0635,  0.0475,   0.014,   0.0,  0.0,  1.0,  0.0, 1.0,
    -0.0635,  0.0475,  -0.014,   0.0,  0.0, -1.0,  0.0, 1.0,
     0.0635,  0.0475,  -0.014,   0.0,  0.0, -1.0,  1.0, 1.0,
     0.0635,  0.0795,  -0.014,   0.0,  0.0, -1.0,  1.0, 0.0,
     0.0635,  0.0795,  -0.014,   0.0,  0.0, -1.0,  1.0, 0.0,
    -0.0635,  0.0795,  -0.014,   0.0,  0.0, -1.0,  0.0, 0.0,
    -0.0635,  0.0475,  -0.014,   0.0,  0.0, -1.0,  0.0, 1.0,
     0.0635,  0.0475,  -0.014,   1.0,  0.0,  0.0,  0.0, 1.0,
     0.0635,  0.0475,   0.014,   1.0,  0.0,  0.0,  1.0, 1.0,
     0.0635,  0.0795,   0.014,   1.0,  0.0,  0.0,  1.0, 0.0,
     0.0635,  0.0795,   0.014,   1.0,  0.0,  0.0,  1.0, 0.0,
     0.0635,  0.0795,  -0.014,   1.0,  0.0,  0.0,  0.0, 0.0,
     0.0635,  0.0475,  -0.014,   1.0,  0.0,  0.0,  0.0, 1.0,
    -0.0635,  0.0475,  -0.014,  -1.0,  0.0,  0.0,  0.0, 1.0,
    -0.0635,  0.0475,   0.014,  -1.0,  0.0,  0.0,  1.0, 1.0,
    -0.0635,  0.0795,   0.014,  -1.0,  0.0,  0.0,  1.0, 0.0,
    -0.0635,  0.0795,   0.014,  -1.0,  0.0,  0.0,  1.0, 0.0,
    -0.0635,  0.0795,  -0.014,  -1.0,  0.0,  0.0,  0.0, 0.0,
    -0.0635,  0.0475,  -0.014,  -1.0,  0.0,  0.0,  0.0, 1.0,
];

/// Pawn outline from the head down to the base rim.
#[rustfmt::skip]
pub const PAWN: &[f32] = &[
      0.000,   0.537,     0.0,   1.0,  1.0,  0.0,  0.00, 1.00,
      0.012,   0.535,     0.0,   1.0,  1.0,  0.0,  0.00, 0.98,
      0.024,   0.533,     0.0,   1.0,  1.0,  0.0,  0.00, 0.96,
      0.033,   0.528,     0.0,   1.0,  1.0,  0.0,  0.00, 0.94,
      0.044,   0.523,     0.0,   1.0,  1.0,  0.0,  0.00, 0.92,
      0.054,   0.516,     0.0,   1.0,  1.0,  0.0,  0.00, 0.90,
      0.063,   0.508,     0.0,   1.0,  1.0,  0.0,  0.00, 0.88,
      0.068,   0.504,     0.0,   1.0,  1.0,  0.0,  0.00, 0.86,
      0.078,   0.490,     0.0,   1.0,  1.0,  0.0,  0.00, 0.84,
      0.083,   0.478,     0.0,   1.0,  1.0,  0.0,  0.00, 0.82,
      0.085,   0.472,     0.0,   1.0,  1.0,  0.0,  0.00, 0.80,
      0.085,   0.455,     0.0,   1.0,  1.0,  0.0,  0.00, 0.78,
      0.080,   0.439,     0.0,   1.0, -1.0,  0.0,  0.00, 0.76,
      0.071,   0.426,     0.0,   1.0, -1.0,  0.0,  0.00, 0.74,
      0.057,   0.412,     0.0,   1.0, -1.0,  0.0,  0.00, 0.72,
      0.050,   0.402,     0.0,   1.0, -1.0,  0.0,  0.00, 0.70,
      0.052,   0.393,     0.0,   1.0,  1.0,  0.0,  0.00, 0.68,
      0.057,   0.386,     0.0,   1.0,  1.0,  0.0,  0.00, 0.66,
      0.073,   0.377,     0.0,   1.0,  1.0,  0.0,  0.00, 0.64,
      0.089,   0.367,     0.0,   1.0,  1.0,  0.0,  0.00, 0.62,
      0.099,   0.357,     0.0,   1.0,  1.0,  0.0,  0.00, 0.60,
      0.099,   0.355,     0.0,   1.0,  1.0,  0.0,  0.00, 0.58,
      0.091,   0.348,     0.0,   1.0, -1.0,  0.0,  0.00, 0.56,
      0.074,   0.343,     0.0,   1.0, -1.0,  0.0,  0.00, 0.54,
      0.056,   0.331,     0.0,   1.0, -1.0,  0.0,  0.00, 0.52,
      0.047,   0.315,     0.0,   1.0, -1.0,  0.0,  0.00, 0.50,
      0.044,   0.298,     0.0,   1.0, -1.0,  0.0,  0.00, 0.48,
      0.047,   0.258,     0.0,   1.0,  1.0,  0.0,  0.00, 0.46,
      0.054,   0.215,     0.0,   1.0,  1.0,  0.0,  0.00, 0.44,
      0.063,   0.184,     0.0,   1.0,  1.0,  0.0,  0.00, 0.42,
      0.080,   0.173,     0.0,   1.0,  1.0,  0.0,  0.00, 0.40,
      0.091,   0.165,     0.0,   1.0,  1.0,  0.0,  0.00, 0.38,
      0.090,   0.159,     0.0,   1.0, -1.0,  0.0,  0.00, 0.36,
      0.089,   0.143,     0.0,   1.0, -1.0,  0.0,  0.00, 0.34,
      0.094,   0.131,     0.0,   1.0,  1.0,  0.0,  0.00, 0.32,
      0.111,   0.109,     0.0,   1.0,  1.0,  0.0,  0.00, 0.30,
      0.116,   0.104,     0.0,   1.0,  1.0,  0.0,  0.00, 0.28,
      0.130,   0.089,     0.0,   1.0,  1.0,  0.0,  0.00, 0.26,
      0.138,   0.070,     0.0,   1.0,  1.0,  0.0,  0.00, 0.24,
      0.138,   0.061,     0.0,   1.0,  1.0,  0.0,  0.00, 0.22,
      0.133,   0.054,     0.0,   1.0, -1.0,  0.0,  0.00, 0.20,
      0.131,   0.051,     0.0,   1.0, -1.0,  0.0,  0.00, 0.18,
      0.136,   0.043,     0.0,   1.0,  1.0,  0.0,  0.00, 0.16,
      0.144,   0.037,     0.0,   1.0,  1.0,  0.0,  0.00, 0.14,
      0.148,   0.020,     0.0,   1.0,  1.0,  0.0,  0.00, 0.12,
      0.141,   0.007,     0.0,   1.0, -1.0,  0.0,  0.00, 0.10,
      0.115,   0.001,     0.0,   1.0, -1.0,  0.0,  0.00, 0.08,
      0.000,   0.000,     0.0,   1.0, -1.0,  0.0,  0.00, 0.06,
];
