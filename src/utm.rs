//! Provides the UTM projectors, [`ForwardProjector`] and [`InverseProjector`].
//!
//! This is the transverse Mercator series of the USGS (Snyder) form
//! truncated to the fourth order terms,
//! and the scale factor on the central meridian is 0.9996.
//!
//! Every constant depending on the zone and the datum
//! is computed on construction,
//! [`project`](ForwardProjector::project) does per-point arithmetic only.
//!
//! # Example
//!
//! ```
//! # use utmgeo::*;
//! let origin = LatLonCoord::new(35.0, -106.0);
//! let zone = find_utm_zone(&origin);
//! assert_eq!(zone, 13);
//!
//! let forward = build_forward_projector(zone, &Datum::WGS84);
//! let coord = forward.project(&origin);
//! assert!((408746.75 - coord.x()).abs() < 0.01);
//! assert!((3873499.85 - coord.y()).abs() < 0.01);
//!
//! let inverse = build_inverse_projector(zone, false, &Datum::WGS84);
//! let latlon = inverse.project(&coord);
//! assert!((35.0 - latlon.lat()).abs() < 1e-2);
//! assert!((-106.0 - latlon.lon()).abs() < 1e-2);
//! ```
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::internal::mul_add;
use crate::{Coordinate, Datum, LatLonCoord};

/// The scale factor on the central meridian.
pub const SCALE_FACTOR: f64 = 0.9996;
/// The false easting \[m\].
pub const FALSE_EASTING: f64 = 500000.0;
/// The false northing \[m\] of the southern hemisphere.
pub const FALSE_NORTHING: f64 = 10000000.0;

/// Returns the UTM zone containing `latlon`.
///
/// This is 1 + ⌊(𝑙𝑜𝑛 + 180) / 6⌋, the range is not checked;
/// the result is out of 1 <= and <= 60
/// for the longitude out of -180.0 <= and < 180.0.
/// It saturates at the bounds of [`i32`], and NaN gives 1.
///
/// # Example
///
/// ```
/// # use utmgeo::*;
/// assert_eq!(find_utm_zone(&LatLonCoord::new(35.0, -106.0)), 13);
/// assert_eq!(find_utm_zone(&LatLonCoord::new(0.0, -180.0)), 1);
/// assert_eq!(find_utm_zone(&LatLonCoord::new(0.0, 179.9)), 60);
///
/// // Not checked
/// assert_eq!(find_utm_zone(&LatLonCoord::new(0.0, 180.0)), 61);
/// ```
#[inline]
pub fn find_utm_zone(latlon: &LatLonCoord) -> i32 {
    (((latlon.lon + 180.0) / 6.0).floor() as i32).saturating_add(1)
}

/// Returns the central meridian \[deg\] of the UTM `zone`.
///
/// This is defined for any `zone`, 3 + 6 (𝑧𝑜𝑛𝑒 − 1) − 180.
///
/// # Example
///
/// ```
/// # use utmgeo::*;
/// assert_eq!(central_meridian(1), -177.0);
/// assert_eq!(central_meridian(13), -105.0);
/// assert_eq!(central_meridian(60), 177.0);
/// ```
#[inline]
pub fn central_meridian(zone: i32) -> f64 {
    6.0 * (f64::from(zone) - 1.0) - 177.0
}

/// Makes a [`ForwardProjector`], see [`ForwardProjector::with_datum`].
#[inline]
pub fn build_forward_projector(zone: i32, datum: &Datum) -> ForwardProjector {
    ForwardProjector::with_datum(zone, datum)
}

/// Makes an [`InverseProjector`], see [`InverseProjector::with_datum`].
#[inline]
pub fn build_inverse_projector(zone: i32, southern: bool, datum: &Datum) -> InverseProjector {
    InverseProjector::with_datum(zone, Hemisphere::from_southern(southern), datum)
}

/// The hemisphere of UTM northing.
///
/// The southern one has the false northing [`FALSE_NORTHING`].
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Hemisphere {
    /// The northern
    #[default]
    North,
    /// The southern
    South,
}

impl From<&LatLonCoord> for Hemisphere {
    /// see [`Hemisphere::of()`]
    #[inline]
    fn from(value: &LatLonCoord) -> Self {
        Self::of(value)
    }
}

impl Hemisphere {
    /// Makes a [`Hemisphere`] from the southern flag.
    #[inline]
    pub const fn from_southern(southern: bool) -> Self {
        if southern {
            Self::South
        } else {
            Self::North
        }
    }

    /// Returns the hemisphere containing `latlon`, the equator is the northern.
    ///
    /// # Example
    ///
    /// ```
    /// # use utmgeo::*;
    /// assert_eq!(Hemisphere::of(&LatLonCoord::new(35.0, -106.0)), Hemisphere::North);
    /// assert_eq!(Hemisphere::of(&LatLonCoord::new(0.0, -106.0)), Hemisphere::North);
    /// assert_eq!(Hemisphere::of(&LatLonCoord::new(-33.9, 18.4)), Hemisphere::South);
    /// ```
    #[inline]
    pub fn of(latlon: &LatLonCoord) -> Self {
        Self::from_southern(latlon.lat.lt(&0.0))
    }

    /// Returns `true` if `self` is [`Hemisphere::South`].
    #[inline]
    pub const fn is_southern(&self) -> bool {
        matches!(self, Self::South)
    }

    #[inline]
    #[allow(clippy::wrong_self_convention)]
    pub(crate) const fn to_char(&self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
        }
    }
}

impl std::fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Hemisphere {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_char(self.to_char())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Hemisphere {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Hemisphere, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match <char as serde::Deserialize>::deserialize(deserializer)? {
            'N' => Ok(Self::North),
            'S' => Ok(Self::South),
            v => Err(serde::de::Error::custom(format_args!(
                "invalid value: character `{}`, expected a character, 'N' or 'S'",
                v,
            ))),
        }
    }
}

/// The ellipsoid constants shared by both directions.
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct Constants {
    /// 𝑎 \[m\]
    a: f64,
    /// 𝑒²
    esq: f64,
    /// 𝑒
    e: f64,
    /// 𝑒′²
    e0sq: f64,
}

impl Constants {
    fn new(datum: &Datum) -> Self {
        let esq = datum.eccentricity_squared();

        Self {
            a: datum.equatorial_radius,
            esq,
            e: esq.sqrt(),
            e0sq: datum.second_eccentricity_squared(),
        }
    }

    /// Returns the radius of curvature in the prime vertical at `phi` \[rad\].
    #[inline]
    fn prime_vertical_radius(&self, phi: f64) -> f64 {
        self.a / (1.0 - (self.e * phi.sin()).powi(2)).sqrt()
    }

    /// Returns 1 − 𝑒²/4 − 3𝑒⁴/64 − 5𝑒⁶/256, the leading term of the meridional arc.
    #[inline]
    fn m1(&self) -> f64 {
        let esq = self.esq;
        1.0 - esq * (0.25 + esq * mul_add!(esq, 5.0 / 256.0, 3.0 / 64.0))
    }

    /// Returns the meridional arc length \[m\] from the equator to `phi` \[rad\].
    #[inline]
    fn meridional_arc(&self, phi: f64) -> f64 {
        let esq = self.esq;

        let mut m = phi * self.m1();
        m -= (2.0 * phi).sin() * (esq * (3.0 / 8.0 + esq * mul_add!(esq, 45.0 / 1024.0, 3.0 / 32.0)));
        m += (4.0 * phi).sin() * (esq * esq * mul_add!(esq, 45.0 / 1024.0, 15.0 / 256.0));
        m -= (6.0 * phi).sin() * (esq * esq * esq * (35.0 / 3072.0));
        m * self.a
    }
}

/// The projector from a [`LatLonCoord`] into a UTM [`Coordinate`].
///
/// This is cheap to copy and shareable between threads,
/// reuse it for the points in the same zone.
///
/// # Example
///
/// ```
/// # use utmgeo::*;
/// let projector = ForwardProjector::new(13);
/// assert_eq!(projector.zone(), &13);
/// assert_eq!(projector.central_meridian(), &-105.0);
///
/// let coord = projector.project(&LatLonCoord::new(35.0, -106.0));
/// assert!((408746.75 - coord.x()).abs() < 0.01);
/// assert!((3873499.85 - coord.y()).abs() < 0.01);
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ForwardProjector {
    zone: i32,
    datum: Datum,
    /// The central meridian \[deg\]
    zcm: f64,
    constants: Constants,
}

impl ForwardProjector {
    /// Makes a [`ForwardProjector`] of the `zone` on [`Datum::WGS84`].
    #[inline]
    pub fn new(zone: i32) -> Self {
        Self::with_datum(zone, &Datum::WGS84)
    }

    /// Makes a [`ForwardProjector`] of the `zone` on the `datum`.
    ///
    /// Neither `zone` nor `datum` is checked,
    /// the result of the zone out of 1 <= and <= 60 is not a UTM,
    /// and a malformed datum makes NaN.
    pub fn with_datum(zone: i32, datum: &Datum) -> Self {
        let zcm = central_meridian(zone);
        let constants = Constants::new(datum);

        tracing::trace!(zone, zcm, ?datum, "built forward projector");

        Self {
            zone,
            datum: *datum,
            zcm,
            constants,
        }
    }

    /// Makes a [`ForwardProjector`] of the zone containing `latlon` on the `datum`.
    ///
    /// # Example
    ///
    /// ```
    /// # use utmgeo::*;
    /// let projector = ForwardProjector::for_point(&LatLonCoord::new(-33.9, 18.4), &Datum::WGS84);
    /// assert_eq!(projector.zone(), &34);
    /// ```
    #[inline]
    pub fn for_point(latlon: &LatLonCoord, datum: &Datum) -> Self {
        Self::with_datum(find_utm_zone(latlon), datum)
    }

    /// Returns the zone of `self`.
    #[inline]
    pub fn zone(&self) -> &i32 {
        &self.zone
    }

    /// Returns the datum of `self`.
    #[inline]
    pub fn datum(&self) -> &Datum {
        &self.datum
    }

    /// Returns the central meridian \[deg\] of `self`.
    #[inline]
    pub fn central_meridian(&self) -> &f64 {
        &self.zcm
    }

    /// Returns the UTM coordinate of `latlon`.
    ///
    /// The southern point has [`FALSE_NORTHING`],
    /// namely, [`FALSE_NORTHING`] is added when the northing is negative.
    pub fn project(&self, latlon: &LatLonCoord) -> Coordinate {
        let Constants { e0sq, .. } = self.constants;

        let phi = latlon.lat.to_radians();
        let tan_phi = phi.tan();
        let cos_phi = phi.cos();

        let n = self.constants.prime_vertical_radius(phi);
        let t = tan_phi.powi(2);
        let c = e0sq * cos_phi.powi(2);
        let a = (latlon.lon - self.zcm).to_radians() * cos_phi;
        let a2 = a * a;
        let c2 = c * c;
        let t2 = t * t;

        let m = self.constants.meridional_arc(phi);

        let x = SCALE_FACTOR
            * n
            * a
            * mul_add!(
                a2,
                (1.0 - t + c) / 6.0 + a2 * (5.0 - 18.0 * t + t2 + 72.0 * c - 58.0 * e0sq) / 120.0,
                1.0
            )
            + FALSE_EASTING;

        let y = SCALE_FACTOR
            * mul_add!(
                n * tan_phi,
                a2 * (0.5
                    + a2 * ((5.0 - t + 9.0 * c + 4.0 * c2) / 24.0
                        + a2 * (61.0 - 58.0 * t + t2 + 600.0 * c - 330.0 * e0sq) / 720.0)),
                m
            );

        if y.lt(&0.0) {
            Coordinate::new(x, FALSE_NORTHING + y)
        } else {
            Coordinate::new(x, y)
        }
    }

    /// Returns the UTM coordinates of `latlons`, see [`ForwardProjector::project`].
    ///
    /// # Example
    ///
    /// ```
    /// # use utmgeo::*;
    /// let projector = ForwardProjector::new(31);
    /// let coords = projector.project_all(&[
    ///     LatLonCoord::new(0.0, 3.0),
    ///     LatLonCoord::new(48.8566, 2.3522),
    /// ]);
    /// assert_eq!(coords.len(), 2);
    /// assert_eq!(coords[0], Coordinate::new(500000.0, 0.0));
    /// ```
    pub fn project_all<'a>(&self, latlons: impl IntoIterator<Item = &'a LatLonCoord>) -> Vec<Coordinate> {
        latlons.into_iter().map(|p| self.project(p)).collect()
    }
}

/// The projector from a UTM [`Coordinate`] into a [`LatLonCoord`].
///
/// The resulting latitude is truncated into 6 decimal places
/// toward negative infinity, ⌊10⁶ 𝑙𝑎𝑡⌋ / 10⁶,
/// the longitude is not.
///
/// # Example
///
/// ```
/// # use utmgeo::*;
/// let projector = InverseProjector::new(13, false);
/// assert_eq!(projector.hemisphere(), &Hemisphere::North);
///
/// let latlon = projector.project(&Coordinate::new(408746.75, 3873499.85));
/// assert!((35.0 - latlon.lat()).abs() < 1e-2);
/// assert!((-106.0 - latlon.lon()).abs() < 1e-2);
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InverseProjector {
    zone: i32,
    hemisphere: Hemisphere,
    datum: Datum,
    /// The central meridian \[deg\]
    zcm: f64,
    constants: Constants,
    /// The third flattening like 𝑒₁ = (1 − √(1 − 𝑒²)) / (1 + √(1 − 𝑒²))
    e1: f64,
}

impl InverseProjector {
    /// Makes an [`InverseProjector`] of the `zone` on [`Datum::WGS84`].
    #[inline]
    pub fn new(zone: i32, southern: bool) -> Self {
        Self::with_datum(zone, Hemisphere::from_southern(southern), &Datum::WGS84)
    }

    /// Makes an [`InverseProjector`] of the `zone` and the `hemisphere` on the `datum`.
    ///
    /// Neither `zone` nor `datum` is checked, see [`ForwardProjector::with_datum`].
    pub fn with_datum(zone: i32, hemisphere: Hemisphere, datum: &Datum) -> Self {
        let zcm = central_meridian(zone);
        let constants = Constants::new(datum);

        let r = (1.0 - constants.e.powi(2)).sqrt();
        let e1 = (1.0 - r) / (1.0 + r);

        tracing::trace!(zone, zcm, ?hemisphere, ?datum, "built inverse projector");

        Self {
            zone,
            hemisphere,
            datum: *datum,
            zcm,
            constants,
            e1,
        }
    }

    /// Returns the zone of `self`.
    #[inline]
    pub fn zone(&self) -> &i32 {
        &self.zone
    }

    /// Returns the hemisphere of `self`.
    #[inline]
    pub fn hemisphere(&self) -> &Hemisphere {
        &self.hemisphere
    }

    /// Returns the datum of `self`.
    #[inline]
    pub fn datum(&self) -> &Datum {
        &self.datum
    }

    /// Returns the central meridian \[deg\] of `self`.
    #[inline]
    pub fn central_meridian(&self) -> &f64 {
        &self.zcm
    }

    /// Returns the footprint latitude \[rad\] of the meridional arc `m` \[m\].
    #[inline]
    fn footprint_latitude(&self, m: f64) -> f64 {
        let e1 = self.e1;
        let mu = m / (self.constants.a * self.constants.m1());

        let phi1 = mu
            + e1 * (1.5 - 27.0 * e1 * e1 / 32.0) * (2.0 * mu).sin()
            + e1 * e1 * (21.0 / 16.0 - 55.0 * e1 * e1 / 32.0) * (4.0 * mu).sin();
        phi1 + e1 * e1 * e1 * ((6.0 * mu).sin() * 151.0 / 96.0 + e1 * (8.0 * mu).sin() * 1097.0 / 512.0)
    }

    /// Returns the position of the UTM `coord`.
    ///
    /// [`FALSE_NORTHING`] is subtracted from the northing
    /// if `self` is on [`Hemisphere::South`].
    pub fn project(&self, coord: &Coordinate) -> LatLonCoord {
        let Constants { a, e, e0sq, .. } = self.constants;

        let m = if self.hemisphere.is_southern() {
            (coord.y - FALSE_NORTHING) / SCALE_FACTOR
        } else {
            coord.y / SCALE_FACTOR
        };

        let phi1 = self.footprint_latitude(m);
        let sin_phi1 = phi1.sin();
        let tan_phi1 = phi1.tan();
        let cos_phi1 = phi1.cos();

        let c1 = e0sq * cos_phi1.powi(2);
        let t1 = tan_phi1.powi(2);
        let n1 = a / (1.0 - (e * sin_phi1).powi(2)).sqrt();
        let r1 = n1 * (1.0 - e.powi(2)) / (1.0 - (e * sin_phi1).powi(2));
        let d = (coord.x - FALSE_EASTING) / (n1 * SCALE_FACTOR);
        let d2 = d * d;

        let phi = d2 * (0.5 - d2 * (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * e0sq) / 24.0)
            + d.powi(6) * (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1 - 252.0 * e0sq - 3.0 * c1 * c1)
                / 720.0;
        let phi = phi1 - (n1 * tan_phi1 / r1) * phi;

        let lat = (1000000.0 * phi.to_degrees()).floor() / 1000000.0;

        let lon = d
            * mul_add!(
                d2,
                (-1.0 - 2.0 * t1 - c1) / 6.0
                    + d2 * (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * e0sq + 24.0 * t1 * t1)
                        / 120.0,
                1.0
            )
            / cos_phi1;
        let lon = self.zcm + lon.to_degrees();

        LatLonCoord::new(lat, lon)
    }

    /// Returns the positions of `coords`, see [`InverseProjector::project`].
    pub fn project_all<'a>(&self, coords: impl IntoIterator<Item = &'a Coordinate>) -> Vec<LatLonCoord> {
        coords.into_iter().map(|c| self.project(c)).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const DELTA: f64 = 0.01;

    #[test]
    fn test_find_utm_zone() {
        assert_eq!(find_utm_zone(&LatLonCoord::new(35.0, -106.0)), 13);
        assert_eq!(find_utm_zone(&LatLonCoord::new(0.0, -180.0)), 1);
        assert_eq!(find_utm_zone(&LatLonCoord::new(0.0, -174.0)), 2);
        assert_eq!(find_utm_zone(&LatLonCoord::new(0.0, 0.0)), 31);
        assert_eq!(find_utm_zone(&LatLonCoord::new(0.0, -0.1)), 30);
        assert_eq!(find_utm_zone(&LatLonCoord::new(0.0, 179.999)), 60);

        // out-of-range is accepted
        assert_eq!(find_utm_zone(&LatLonCoord::new(0.0, 186.0)), 62);
        assert_eq!(find_utm_zone(&LatLonCoord::new(0.0, -186.0)), 0);
        assert_eq!(find_utm_zone(&LatLonCoord::new(0.0, -366.0)), -30);
    }

    #[test]
    fn test_find_utm_zone_saturates() {
        assert_eq!(find_utm_zone(&LatLonCoord::new(0.0, 1.0e11)), i32::MAX);
        assert_eq!(find_utm_zone(&LatLonCoord::new(0.0, f64::INFINITY)), i32::MAX);
        assert_eq!(find_utm_zone(&LatLonCoord::new(0.0, -1.0e11)), i32::MIN + 1);
        assert_eq!(
            find_utm_zone(&LatLonCoord::new(0.0, f64::NEG_INFINITY)),
            i32::MIN + 1
        );
        assert_eq!(find_utm_zone(&LatLonCoord::new(0.0, f64::NAN)), 1);
    }

    #[test]
    fn test_central_meridian() {
        for zone in 1..=60 {
            assert_eq!(central_meridian(zone), f64::from(3 + 6 * (zone - 1) - 180));
        }

        // any zone is defined
        assert_eq!(central_meridian(0), -183.0);
        assert_eq!(central_meridian(-1), -189.0);
        assert_eq!(central_meridian(i32::MAX), 6.0 * (f64::from(i32::MAX) - 1.0) - 177.0);
        assert_eq!(central_meridian(i32::MIN), 6.0 * (f64::from(i32::MIN) - 1.0) - 177.0);
        assert!(central_meridian(i32::MAX).is_finite());

        let forward = build_forward_projector(400_000_000, &Datum::WGS84);
        assert_eq!(forward.zone(), &400_000_000);
        let _ = forward.project(&LatLonCoord::new(35.0, -106.0));

        let inverse = build_inverse_projector(i32::MIN, true, &Datum::WGS84);
        let _ = inverse.project(&Coordinate::new(500000.0, 5000000.0));
    }

    #[test]
    fn test_forward() {
        let loc = LatLonCoord::new(35.0, -106.0);
        let zone = find_utm_zone(&loc);
        assert_eq!(zone, 13);

        let utm = build_forward_projector(zone, &Datum::WGS84);
        let coord = utm.project(&loc);
        assert!((408746.75 - coord.x).abs() < DELTA);
        assert!((3873499.85 - coord.y).abs() < DELTA);
    }

    #[test]
    fn test_forward_on_central_meridian() {
        let utm = ForwardProjector::new(31);
        assert_eq!(utm.project(&LatLonCoord::new(0.0, 3.0)), Coordinate::new(500000.0, 0.0));

        let coord = utm.project(&LatLonCoord::new(0.5, 3.0));
        assert_eq!(coord.x, 500000.0);
        assert!((55265.037 - coord.y).abs() < DELTA);
    }

    #[test]
    fn test_forward_southern() {
        let coord = ForwardProjector::new(1).project(&LatLonCoord::new(-0.5, -177.0));
        assert_eq!(coord.x, 500000.0);
        assert!((9944734.963 - coord.y).abs() < DELTA);

        let coord = ForwardProjector::new(33).project(&LatLonCoord::new(-33.9, 18.4));
        assert!((814420.331 - coord.x).abs() < DELTA);
        assert!((6243724.840 - coord.y).abs() < DELTA);
    }

    #[test]
    fn test_forward_datum() {
        let paris = LatLonCoord::new(48.8566, 2.3522);

        let coord = build_forward_projector(31, &Datum::WGS84).project(&paris);
        assert!((452482.533 - coord.x).abs() < DELTA);
        assert!((5411717.177 - coord.y).abs() < DELTA);

        let coord = build_forward_projector(31, &Datum::INTL1924).project(&paris);
        assert!((452480.280 - coord.x).abs() < DELTA);
        assert!((5411824.253 - coord.y).abs() < DELTA);
    }

    #[test]
    fn test_inverse() {
        let coord = Coordinate::new(408746.75, 3873499.85);
        let utm_inv = build_inverse_projector(13, false, &Datum::WGS84);
        let loc = utm_inv.project(&coord);
        assert!((35.0 - loc.lat).abs() < DELTA);
        assert!((-106.0 - loc.lon).abs() < DELTA);
    }

    #[test]
    fn test_inverse_truncates_latitude() {
        let utm_inv = InverseProjector::new(32, false);
        let loc = utm_inv.project(&Coordinate::new(513882.5417731724, 5705448.129553024));

        let scaled = loc.lat * 1e6;
        assert!((scaled.round() - scaled).abs() < 1e-6);
        assert!((51.5 - loc.lat).abs() < 2e-6);
        assert!((9.2 - loc.lon).abs() < 1e-9);
    }

    #[test]
    fn test_inverse_truncates_southern_latitude() {
        // untruncated, -33.90832350767...
        let utm_inv = InverseProjector::new(34, true);
        let loc = utm_inv.project(&Coordinate::new(261000.0, 6245000.0));

        // toward negative infinity, not toward zero
        assert!((-33.908324 - loc.lat).abs() < 1e-9);
        assert!(loc.lat.le(&-33.9083235));

        let scaled = loc.lat * 1e6;
        assert!((scaled.round() - scaled).abs() < 1e-6);
        assert!((18.415066 - loc.lon).abs() < 1e-6);
    }

    #[test]
    fn test_round_trip() {
        for (latitude, longitude) in [
            (35.0, -106.0),
            (51.5, 9.2),
            (0.0, 3.0),
            (64.1, -21.9),
            (-33.9, 18.4),
            (-33.87, 151.21),
            (-54.8, -68.3),
            (-41.3, 174.8),
            (-0.5, -177.0),
        ] {
            let origin = LatLonCoord::new(latitude, longitude);
            let zone = find_utm_zone(&origin);
            let southern = Hemisphere::of(&origin).is_southern();

            for datum in [Datum::WGS84, Datum::GRS80, Datum::NAD27, Datum::BESSEL1841] {
                let coord = build_forward_projector(zone, &datum).project(&origin);
                let actual = build_inverse_projector(zone, southern, &datum).project(&coord);

                assert!(
                    (latitude - actual.lat).abs() < DELTA,
                    "{origin:?} on {datum:?}: {actual:?}"
                );
                assert!(
                    (longitude - actual.lon).abs() < DELTA,
                    "{origin:?} on {datum:?}: {actual:?}"
                );
            }
        }
    }

    #[test]
    fn test_project_all() {
        let origins = [LatLonCoord::new(35.0, -106.0), LatLonCoord::new(35.5, -105.5)];

        let forward = ForwardProjector::new(13);
        let coords = forward.project_all(&origins);
        assert_eq!(coords, vec![forward.project(&origins[0]), forward.project(&origins[1])]);

        let inverse = InverseProjector::new(13, false);
        let actual = inverse.project_all(&coords);
        assert_eq!(actual.len(), 2);
        for (e, a) in origins.iter().zip(actual) {
            assert!((e.lat - a.lat).abs() < DELTA);
            assert!((e.lon - a.lon).abs() < DELTA);
        }
    }

    #[test]
    fn test_shared_between_threads() {
        let forward = ForwardProjector::new(13);
        let expected = forward.project(&LatLonCoord::new(35.0, -106.0));

        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(move || forward.project(&LatLonCoord::new(35.0, -106.0))))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn test_malformed_datum_makes_nan() {
        let datum = Datum::new(6378137.0, 0.0);
        let coord = build_forward_projector(13, &datum).project(&LatLonCoord::new(35.0, -106.0));
        assert!(coord.x.is_nan() || coord.y.is_nan());
    }

    #[test]
    fn test_hemisphere() {
        assert_eq!(Hemisphere::default(), Hemisphere::North);
        assert_eq!(Hemisphere::from_southern(true), Hemisphere::South);
        assert_eq!(Hemisphere::from_southern(false), Hemisphere::North);
        assert_eq!(
            Hemisphere::from(&LatLonCoord::new(-1.0, 0.0)),
            Hemisphere::South
        );
        assert!(Hemisphere::South.is_southern());
        assert_eq!(Hemisphere::South.to_string(), "S");
        assert!(!Hemisphere::North.is_southern());

        assert_eq!(
            build_inverse_projector(56, true, &Datum::WGS84).hemisphere(),
            &Hemisphere::South
        );
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde() {
        use serde_test::{assert_de_tokens_error, assert_tokens, Token};

        assert_tokens(&Hemisphere::North, &[Token::Char('N')]);
        assert_tokens(&Hemisphere::South, &[Token::Char('S')]);
        assert_de_tokens_error::<Hemisphere>(
            &[Token::Char('X')],
            "invalid value: character `X`, expected a character, 'N' or 'S'",
        );
    }
}
