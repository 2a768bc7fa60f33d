use std::fmt;

use super::value_objects::Point;

/// Incremental builder for SVG `d` attributes.
///
/// Coordinates are printed with two decimals so equal input always yields
/// byte-identical output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SvgPath {
    data: String,
}

impl SvgPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, point: Point) -> Self {
        self.push('M', point);
        self
    }

    pub fn line_to(mut self, point: Point) -> Self {
        self.push('L', point);
        self
    }

    pub fn close(mut self) -> Self {
        if !self.data.is_empty() {
            self.data.push_str(" Z");
        }
        self
    }

    /// Open polyline through `points`; empty for an empty slice.
    pub fn polyline(points: &[Point]) -> Self {
        let mut iter = points.iter().copied();
        let Some(first) = iter.next() else {
            return Self::new();
        };
        iter.fold(Self::new().move_to(first), Self::line_to)
    }

    /// Polyline through `points`, dropped to `baseline_y` and closed back to
    /// the first point, forming a fillable region.
    pub fn area(points: &[Point], baseline_y: f64) -> Self {
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return Self::new();
        };
        Self::polyline(points)
            .line_to(Point::new(last.x, baseline_y))
            .line_to(Point::new(first.x, baseline_y))
            .close()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    pub fn into_string(self) -> String {
        self.data
    }

    fn push(&mut self, command: char, point: Point) {
        if !self.data.is_empty() {
            self.data.push(' ');
        }
        self.data.push_str(&format!("{command}{:.2},{:.2}", point.x, point.y));
    }
}

impl fmt::Display for SvgPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

impl From<SvgPath> for String {
    fn from(path: SvgPath) -> Self {
        path.data
    }
}
