//! Provides [`Coordinate`] and [`LatLonCoord`].
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::PositionKind;
use crate::{Error, Result};

/// Returns the normalized latitude into -90.0 <= and <= 90.0.
#[inline]
fn normalize_latitude(t: &f64) -> f64 {
    if t.is_nan() || t.ge(&-90.) && t.le(&90.0) {
        *t
    } else {
        match t % 360.0 {
            s if s.lt(&-270.0) || s.gt(&270.0) => s - f64::copysign(360.0, s),
            s if s.lt(&-90.0) || s.gt(&90.0) => f64::copysign(180.0, s) - s,
            s => s,
        }
    }
}

/// Returns the normalize longitude -180.0 <= and <= 180.0.
#[inline]
fn normalize_longitude(t: &f64) -> f64 {
    if t.is_nan() || t.ge(&-180.0) && t.le(&180.0) {
        *t
    } else {
        match t % 360.0 {
            s if s.lt(&-180.0) || s.gt(&180.0) => s - f64::copysign(360.0, s),
            s => s,
        }
    }
}

/// Represents a planar position, e.g. UTM easting and northing \[m\].
///
/// # Example
///
/// ```
/// # use utmgeo::*;
/// let coord = Coordinate::new(408746.75, 3873499.85);
/// assert_eq!(coord.x(), &408746.75);
/// assert_eq!(coord.y(), &3873499.85);
///
/// assert_eq!(coord, Coordinate::from((408746.75, 3873499.85)));
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    /// The x, or easting \[m\]
    pub(crate) x: f64,
    /// The y, or northing \[m\]
    pub(crate) y: f64,
}

impl From<(f64, f64)> for Coordinate {
    /// see [`Coordinate::new()`]
    #[inline]
    fn from(rhs: (f64, f64)) -> Self {
        Self::new(rhs.0, rhs.1)
    }
}

impl From<[f64; 2]> for Coordinate {
    /// see [`Coordinate::new()`]
    #[inline]
    fn from(rhs: [f64; 2]) -> Self {
        Self::new(rhs[0], rhs[1])
    }
}

impl From<Coordinate> for (f64, f64) {
    #[inline]
    fn from(value: Coordinate) -> Self {
        (value.x, value.y)
    }
}

impl Coordinate {
    /// Makes a [`Coordinate`].
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x of `self`.
    #[inline]
    pub fn x(&self) -> &f64 {
        &self.x
    }

    /// Returns the y of `self`.
    #[inline]
    pub fn y(&self) -> &f64 {
        &self.y
    }
}

/// Represents a position on the Earth, a pair latitude and longitude \[deg\].
///
/// The longitude may be outside of -180.0 <= and <= 180.0,
/// use [`LatLonCoord::normalize()`] before [`find_utm_zone`](crate::find_utm_zone)
/// if so.
///
/// # Example
///
/// ```
/// # use utmgeo::*;
/// # fn main() -> Result<()> {
/// let latlon = LatLonCoord::new(35.0, -106.0);
/// assert_eq!(latlon.lat(), &35.0);
/// assert_eq!(latlon.lon(), &-106.0);
///
/// // Checked construction
/// assert!(LatLonCoord::try_new(35.0, -106.0).is_ok());
/// assert!(LatLonCoord::try_new(95.0, -106.0).is_err());
/// # Ok(())}
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLonCoord {
    /// The latitude \[deg\], north positive
    pub(crate) lat: f64,
    /// The longitude \[deg\], east positive
    pub(crate) lon: f64,
}

impl From<(f64, f64)> for LatLonCoord {
    /// see [`LatLonCoord::new()`]
    #[inline]
    fn from(rhs: (f64, f64)) -> Self {
        Self::new(rhs.0, rhs.1)
    }
}

impl From<LatLonCoord> for (f64, f64) {
    #[inline]
    fn from(value: LatLonCoord) -> Self {
        (value.lat, value.lon)
    }
}

impl LatLonCoord {
    /// Makes a [`LatLonCoord`].
    ///
    /// This does not check the value range.
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Makes a [`LatLonCoord`] with checking.
    ///
    /// # Errors
    ///
    /// If `lat` and/or `lon` is NaN or out-of-range,
    /// `lat` must satisfy -90.0 <= and <= 90.0
    /// and `lon` does -180.0 <= and <= 180.0.
    ///
    /// # Example
    ///
    /// ```
    /// # use utmgeo::*;
    /// # fn main() -> Result<()> {
    /// let latlon = LatLonCoord::try_new(-33.9, 18.4)?;
    /// assert_eq!(latlon, LatLonCoord::new(-33.9, 18.4));
    ///
    /// assert!(LatLonCoord::try_new(-91.0, 18.4).is_err());
    /// assert!(LatLonCoord::try_new(-33.9, 181.0).is_err());
    /// assert!(LatLonCoord::try_new(f64::NAN, 18.4).is_err());
    /// assert!(LatLonCoord::try_new(-33.9, f64::NAN).is_err());
    /// # Ok(())}
    /// ```
    pub fn try_new(lat: f64, lon: f64) -> Result<Self> {
        // NaN fails both comparisons
        if !(lat.ge(&-90.0) && lat.le(&90.0)) {
            return Err(Error::new_out_of_range_position(
                PositionKind::Latitude,
                lat,
                -90.0,
                90.0,
            ));
        }
        if !(lon.ge(&-180.0) && lon.le(&180.0)) {
            return Err(Error::new_out_of_range_position(
                PositionKind::Longitude,
                lon,
                -180.0,
                180.0,
            ));
        }

        Ok(Self::new(lat, lon))
    }

    /// Returns the latitude of `self`.
    #[inline]
    pub fn lat(&self) -> &f64 {
        &self.lat
    }

    /// Returns the longitude of `self`.
    #[inline]
    pub fn lon(&self) -> &f64 {
        &self.lon
    }

    /// Makes a normalized [`LatLonCoord`] from `self`.
    ///
    /// The result has latitude -90.0 <= and <= 90.0,
    /// and longitude -180.0 <= and <= 180.0.
    ///
    /// # Example
    ///
    /// ```
    /// # use utmgeo::*;
    /// let latlon = LatLonCoord::new(100.0, 200.0);
    /// assert_eq!(latlon.normalize(), LatLonCoord::new(80.0, -160.0));
    /// ```
    pub fn normalize(&self) -> Self {
        Self {
            lat: normalize_latitude(&self.lat),
            lon: normalize_longitude(&self.lon),
        }
    }
}
