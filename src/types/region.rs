//! Drawing regions shared by the fill primitives.

/// Half-width of a diamond row `dy` rows away from its centre.
///
/// Linear taper: `floor(hw * (1 - |dy| / hh))`, or `hw` for a flat diamond.
/// Evaluated in integer arithmetic so the result never depends on float
/// rounding.
pub fn diamond_span(half_width: i32, half_height: i32, dy: i32) -> i32 {
    // |result| <= |half_width|, so the narrowing is lossless
    span(half_width.into(), half_height.into(), dy.into()) as i32
}

fn span(hw: i64, hh: i64, dy: i64) -> i64 {
    if hh <= 0 {
        return hw;
    }
    let dy = dy.abs().min(hh);
    (hw * (hh - dy)).div_euclid(hh)
}

/// Largest `s` with `s * s <= n`, for `n >= 0`.
fn isqrt(n: i64) -> i64 {
    let mut s = (n as f64).sqrt() as i64;
    while s * s > n {
        s -= 1;
    }
    while (s + 1) * (s + 1) <= n {
        s += 1;
    }
    s
}

/// A set of canvas cells, addressed in (possibly out-of-bounds) canvas
/// coordinates.
///
/// Shape maths runs in `i64`, so any `i32` centre and extent is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Inclusive rectangle from `(x1, y1)` to `(x2, y2)`.
    Rect { x1: i32, y1: i32, x2: i32, y2: i32 },
    /// Isometric diamond centred on `(cx, cy)`.
    Diamond { cx: i32, cy: i32, hw: i32, hh: i32 },
    /// Disc of radius `r` centred on `(cx, cy)`.
    Disc { cx: i32, cy: i32, r: i32 },
}

impl Region {
    pub const fn rect(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Region::Rect { x1, y1, x2, y2 }
    }

    pub const fn diamond(cx: i32, cy: i32, hw: i32, hh: i32) -> Self {
        Region::Diamond { cx, cy, hw, hh }
    }

    pub const fn disc(cx: i32, cy: i32, r: i32) -> Self {
        Region::Disc { cx, cy, r }
    }

    /// The diamond inscribed in a `width x height` tile.
    pub const fn iso_tile(width: i32, height: i32) -> Self {
        let hw = width / 2;
        let hh = height / 2;
        Region::Diamond { cx: hw, cy: hh, hw, hh }
    }

    /// Whether `(x, y)` lies inside the region.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let y = i64::from(y);
        let (top, bottom) = self.rows();
        if y < top || y > bottom {
            return false;
        }
        let (left, right) = self.columns(y);
        (left..=right).contains(&i64::from(x))
    }

    /// Inclusive first and last row. Empty when `top > bottom`.
    fn rows(&self) -> (i64, i64) {
        match *self {
            Region::Rect { y1, y2, .. } => (y1.into(), y2.into()),
            Region::Diamond { cy, hh, .. } => {
                let (cy, hh) = (i64::from(cy), i64::from(hh));
                (cy - hh, cy + hh)
            }
            Region::Disc { cy, r, .. } => {
                let (cy, r) = (i64::from(cy), i64::from(r));
                (cy - r, cy + r)
            }
        }
    }

    /// Inclusive first and last column of row `y`. Empty when `left > right`.
    fn columns(&self, y: i64) -> (i64, i64) {
        match *self {
            Region::Rect { x1, x2, .. } => (x1.into(), x2.into()),
            Region::Diamond { cx, cy, hw, hh } => {
                let s = span(hw.into(), hh.into(), y - i64::from(cy));
                (i64::from(cx) - s, i64::from(cx) + s)
            }
            Region::Disc { cx, cy, r } => {
                let (r, dy) = (i64::from(r), y - i64::from(cy));
                let rest = r * r - dy * dy;
                if r < 0 || rest < 0 {
                    return (1, 0);
                }
                let s = isqrt(rest);
                (i64::from(cx) - s, i64::from(cx) + s)
            }
        }
    }

    /// Every cell of the region in row-major order (top to bottom, left to
    /// right).
    pub fn cells(self) -> impl Iterator<Item = (i32, i32)> {
        self.cells_within(i32::MIN, i32::MIN, i32::MAX, i32::MAX)
    }

    /// The cells inside the inclusive box `(x1, y1)..=(x2, y2)`, in row-major
    /// order. Work is bounded by the box, not by the region.
    pub fn cells_within(self, x1: i32, y1: i32, x2: i32, y2: i32) -> impl Iterator<Item = (i32, i32)> {
        let (top, bottom) = self.rows();
        let rows = top.max(y1.into())..=bottom.min(y2.into());
        rows.flat_map(move |y| {
            let (left, right) = self.columns(y);
            let cols = left.max(x1.into())..=right.min(x2.into());
            // both ranges are clamped into i32
            cols.map(move |x| (x as i32, y as i32))
        })
    }
}
