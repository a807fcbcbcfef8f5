//! Provides the point/line localization,
//! [`localize_point_on_segment`] and [`localize_point_on_line`].
//!
//! Coincidence of points is exact equality of the coordinates, no tolerance.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Coordinate;

/// The position of the foot of perpendicular on the line.
///
/// # Example
///
/// ```
/// # use utmgeo::*;
/// let result = localize_point_on_segment(
///     &Coordinate::new(0.0, 0.0),
///     &Coordinate::new(10.0, 0.0),
///     &Coordinate::new(2.5, -1.0),
/// ).unwrap();
///
/// assert_eq!(result.t(), &0.25);
/// assert_eq!(result.d(), &1.0);
/// assert_eq!(result.intersection(), &Coordinate::new(2.5, 0.0));
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocalizerResult {
    /// The position parameter.
    ///
    /// On a segment, 0.0 at the start and 1.0 at the end,
    /// and out of 0.0 <= and <= 1.0 beyond the segment.
    /// On a polyline, the integer part is the index of the segment
    /// and the fractional part is the parameter on it.
    pub(crate) t: f64,
    /// The signed perpendicular distance to the (extended) line.
    ///
    /// The sign is of (𝑏 − 𝑎) × (𝑤 − 𝑎) negated,
    /// namely, negative on the left of the directed line 𝑎 → 𝑏.
    pub(crate) d: f64,
    /// The foot of perpendicular on the (extended) line.
    pub(crate) intersection: Coordinate,
}

impl LocalizerResult {
    /// Makes a [`LocalizerResult`].
    #[inline]
    pub const fn new(t: f64, d: f64, intersection: Coordinate) -> Self {
        Self { t, d, intersection }
    }

    /// Returns the position parameter of `self`.
    #[inline]
    pub fn t(&self) -> &f64 {
        &self.t
    }

    /// Returns the signed perpendicular distance of `self`.
    #[inline]
    pub fn d(&self) -> &f64 {
        &self.d
    }

    /// Returns the foot of perpendicular of `self`.
    #[inline]
    pub fn intersection(&self) -> &Coordinate {
        &self.intersection
    }

    /// Returns the index of the segment, the integer part of [`t`](LocalizerResult::t).
    ///
    /// This returns [`None`] if `t` is NaN or negative.
    ///
    /// # Example
    ///
    /// ```
    /// # use utmgeo::*;
    /// let line = [
    ///     Coordinate::new(0.0, 0.0),
    ///     Coordinate::new(5.0, 5.0),
    ///     Coordinate::new(10.0, 10.0),
    /// ];
    /// let result = localize_point_on_line(&Coordinate::new(6.0, 6.0), &line).unwrap();
    /// assert_eq!(result.segment(), Some(1));
    /// ```
    #[inline]
    pub fn segment(&self) -> Option<usize> {
        if self.t.ge(&0.0) {
            Some(self.t.trunc() as usize)
        } else {
            None
        }
    }
}

/// Returns the position of `w` on the line through `a` and `b`.
///
/// This returns [`None`] if `a` and `b` coincide but `w` does not,
/// the projection on a point is not defined.
///
/// # Example
///
/// ```
/// # use utmgeo::*;
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(10.0, 10.0);
///
/// let result = localize_point_on_segment(&a, &b, &Coordinate::new(1.0, 1.0)).unwrap();
/// assert!((0.1 - result.t()).abs() < 1e-12);
/// assert!(result.d().abs() < 1e-12);
///
/// // Endpoints are exact
/// let result = localize_point_on_segment(&a, &b, &b).unwrap();
/// assert_eq!(result, LocalizerResult::new(1.0, 0.0, b));
///
/// // Degenerate segment
/// assert_eq!(localize_point_on_segment(&a, &a, &b), None);
/// ```
pub fn localize_point_on_segment(
    a: &Coordinate,
    b: &Coordinate,
    w: &Coordinate,
) -> Option<LocalizerResult> {
    let Coordinate { x: ax, y: ay } = *a;
    let Coordinate { x: bx, y: by } = *b;
    let Coordinate { x: wx, y: wy } = *w;

    if ax == bx && ay == by {
        return if ax == wx && ay == wy {
            Some(LocalizerResult::new(1.0, 0.0, *a))
        } else {
            None
        };
    }
    if ax == wx && ay == wy {
        return Some(LocalizerResult::new(0.0, 0.0, *a));
    }
    if bx == wx && by == wy {
        return Some(LocalizerResult::new(1.0, 0.0, *b));
    }

    let (dx, dy) = (bx - ax, by - ay);
    let denom = dx.powi(2) + dy.powi(2);

    let t = ((wx - ax) * dx + (wy - ay) * dy) / denom;
    let intersection = Coordinate::new(ax + t * dx, ay + t * dy);
    let d = (dy * wx - dx * wy + bx * ay - by * ax) / denom.sqrt();

    Some(LocalizerResult::new(t, d, intersection))
}

/// Returns the nearest position of `w` on the polyline `line`.
///
/// Every consecutive pair of `line` is localized by [`localize_point_on_segment`],
/// and the one with 0.0 <= 𝑡 <= 1.0 and the least |𝑑| is taken,
/// the earlier segment wins a tie.
/// The degenerate segment not coinciding with `w` is skipped.
///
/// The [`t`](LocalizerResult::t) of the result is the index of the segment
/// plus 𝑡 on the segment.
///
/// This returns [`None`] if `line` has less than two points.
/// When no segment has 0.0 <= 𝑡 <= 1.0, this returns
/// NaN for [`t`](LocalizerResult::t) and [`d`](LocalizerResult::d),
/// and `w` itself for [`intersection`](LocalizerResult::intersection).
///
/// # Example
///
/// ```
/// # use utmgeo::*;
/// let line = [
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(5.0, 5.0),
///     Coordinate::new(10.0, 10.0),
/// ];
///
/// let result = localize_point_on_line(&Coordinate::new(6.0, 6.0), &line).unwrap();
/// assert!((1.2 - result.t()).abs() < 1e-12);
///
/// // Insufficient points
/// assert_eq!(localize_point_on_line(&Coordinate::new(6.0, 6.0), &line[..1]), None);
/// ```
pub fn localize_point_on_line(w: &Coordinate, line: &[Coordinate]) -> Option<LocalizerResult> {
    if line.len() < 2 {
        return None;
    }

    let mut min_dist = f64::MAX;
    let mut min_index = 0;
    let mut best = LocalizerResult::new(f64::NAN, f64::NAN, *w);

    for (index, pair) in line.windows(2).enumerate() {
        let Some(result) = localize_point_on_segment(&pair[0], &pair[1], w) else {
            continue;
        };

        let abs_d = result.d.abs();
        if result.t.ge(&0.0) && result.t.le(&1.0) && abs_d.lt(&min_dist) {
            min_dist = abs_d;
            min_index = index;
            best = result;
        }
    }

    if best.t.is_nan() {
        tracing::debug!(
            segments = line.len() - 1,
            "no segment contains the foot of perpendicular"
        );
    }

    Some(LocalizerResult::new(
        best.t + min_index as f64,
        best.d,
        best.intersection,
    ))
}
