//! Text rendering of noise samples.

use std::iter;

/// Column at which a sample of `n` is drawn: `floor(max(n + 1, 0) * scale)`.
#[inline]
#[must_use]
pub fn bar_width(n: f64, scale: u32) -> usize {
    ((n + 1.0).max(0.0) * f64::from(scale)).floor() as usize
}

/// One frame of terrain: `bar_width` spaces, a separator, then the marker.
#[must_use]
pub fn render_line(n: f64, scale: u32) -> String {
    let width = bar_width(n, scale);
    let mut line = String::with_capacity(width + 2);
    line.extend(iter::repeat_n(' ', width));
    line.push_str(" *");
    line
}
