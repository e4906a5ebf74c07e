//! MediaPipe Face Mesh indices used by classification and region mapping.
//!
//! "Left" and "right" are image-side: left is the subject's right.

pub const FOREHEAD_CENTER: usize = 10;
pub const CHIN: usize = 152;

pub const LEFT_TEMPLE: usize = 127;
pub const RIGHT_TEMPLE: usize = 356;

pub const LEFT_JAW: usize = 172;
pub const RIGHT_JAW: usize = 397;

pub const LIP_LEFT_CORNER: usize = 61;
pub const LIP_RIGHT_CORNER: usize = 291;
pub const UPPER_LIP_CENTER: usize = 0;
pub const LOWER_LIP_CENTER: usize = 17;

/// Eye as (outer/inner corner, inner/outer corner, top, bottom).
pub type EyeIndices = (usize, usize, usize, usize);

pub const LEFT_EYE: EyeIndices = (33, 133, 159, 145);
pub const RIGHT_EYE: EyeIndices = (362, 263, 386, 374);

/// Lower face contour from left cheekbone through the chin to right cheekbone.
pub const JAW_POLYLINE: &[usize] = &[
    234, 93, 132, 58, 172, 136, 150, 149, 176, 148, 152, 377, 400, 378, 379, 365, 397, 288, 361,
    323, 454,
];

/// Full face silhouette, clockwise from the forehead center.
pub const FACE_OVAL: &[usize] = &[
    10, 338, 297, 332, 284, 251, 389, 356, 454, 323, 361, 288, 397, 365, 379, 378, 400, 377, 152,
    148, 176, 149, 150, 136, 172, 58, 132, 93, 234, 127, 162, 21, 54, 103, 67, 109,
];

pub const FOREHEAD: &[usize] = &[67, 109, 10, 338, 297, 151];

pub const LEFT_CHEEK: &[usize] = &[234, 227, 116, 123, 147, 187];
pub const RIGHT_CHEEK: &[usize] = &[454, 447, 345, 352, 376, 411];

/// Upper lid contour followed by the brow underside, outer to inner.
pub const LEFT_EYELID: &[usize] = &[33, 246, 161, 160, 159, 158, 157, 173, 133, 55, 65, 52, 53, 46];
pub const RIGHT_EYELID: &[usize] = &[
    362, 398, 384, 385, 386, 387, 388, 466, 263, 276, 283, 282, 295, 285,
];

/// Outer lip contour.
pub const LIPS: &[usize] = &[
    61, 185, 40, 39, 37, 0, 267, 269, 270, 409, 291, 375, 321, 405, 314, 17, 84, 181, 91, 146,
];
