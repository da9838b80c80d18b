// engine/src/engine/geometry.rs
#![forbid(unsafe_code)]

use crate::engine::constants::W;
use crate::engine::pieces::Kind;

/// Return (height, width) of the shape's bounding box: (max_dy + 1, max_dx + 1).
#[inline]
pub fn extent(kind: Kind) -> (i32, i32) {
    let mut max_dy = i32::MIN;
    let mut max_dx = i32::MIN;
    for &(dy, dx) in kind.cells() {
        max_dy = max_dy.max(dy);
        max_dx = max_dx.max(dx);
    }
    (max_dy + 1, max_dx + 1)
}

/// Largest column at which `kind` still fits horizontally.
#[inline]
pub fn max_left_col(kind: Kind) -> i32 {
    let (_h, w) = extent(kind);
    (W as i32) - w
}
