use ndarray::Array2;

/// Single coordinate axis used for grid width, height, and positions.
pub type Coord = u8;

/// Count type used for seed counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub trait WindowIterExt {
    /// Iterates the square window of half-width `radius` centered at `center`, clipped to the array.
    fn iter_window(&self, center: Coord2, radius: u16) -> WindowIter;
}

impl<T> WindowIterExt for Array2<T> {
    fn iter_window(&self, center: Coord2, radius: u16) -> WindowIter {
        let (dim_x, dim_y) = self.dim();
        let bounds = (
            dim_x.try_into().unwrap_or(Coord::MAX),
            dim_y.try_into().unwrap_or(Coord::MAX),
        );
        WindowIter::new(center, radius, bounds)
    }
}

/// Clips `center ± radius` to `[0, bound)`, returning the inclusive span or `None` when empty.
fn clip_span(center: Coord, radius: u16, bound: Coord) -> Option<(Coord, Coord)> {
    if bound == 0 || center >= bound {
        return None;
    }
    let center = u16::from(center);
    let low = center.saturating_sub(radius);
    let high = center.saturating_add(radius).min(u16::from(bound) - 1);
    // both ends are within `[0, bound)` so they fit back into a coordinate
    Some((low as Coord, high as Coord))
}

/// Row-by-row iterator over the in-bounds cells of a square window.
///
/// Cells outside the grid are skipped rather than reported, so callers scanning a neighborhood never
/// need their own bounds checks.
#[derive(Clone, Debug)]
pub struct WindowIter {
    x_span: (Coord, Coord),
    y_span: (Coord, Coord),
    next: Option<Coord2>,
}

impl WindowIter {
    pub fn new(center: Coord2, radius: u16, bounds: Coord2) -> Self {
        let spans = clip_span(center.0, radius, bounds.0).zip(clip_span(center.1, radius, bounds.1));
        match spans {
            Some((x_span, y_span)) => Self {
                x_span,
                y_span,
                next: Some((x_span.0, y_span.0)),
            },
            None => Self {
                x_span: (0, 0),
                y_span: (0, 0),
                next: None,
            },
        }
    }
}

impl Iterator for WindowIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let (x, y) = current;

        self.next = if y < self.y_span.1 {
            Some((x, y + 1))
        } else if x < self.x_span.1 {
            Some((x + 1, self.y_span.0))
        } else {
            None
        };

        Some(current)
    }
}
