//! Provides [`Datum`], the reference ellipsoid parameters, and its named constants.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::DatumKind;
use crate::{Error, Result};

/// Represents a reference ellipsoid by its equatorial radius \[m\]
/// and inverse flattening.
///
/// The projectors assume `equatorial_radius > 0.0` and `inverse_flattening > 1.0`,
/// and do not check it. A malformed datum makes NaN, not an error.
/// Use [`Datum::try_new`] to check a custom datum.
///
/// # Example
///
/// ```
/// # use utmgeo::*;
/// let datum = Datum::WGS84;
/// assert_eq!(datum.equatorial_radius(), &6378137.0);
/// assert_eq!(datum.inverse_flattening(), &298.2572236);
///
/// // Custom one
/// let datum = Datum::new(6378137.0, 298.257223563);
/// assert!((datum.polar_radius() - 6356752.314245).abs() < 1e-6);
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Datum {
    /// The equatorial radius \[m\]
    pub(crate) equatorial_radius: f64,
    /// The inverse flattening
    pub(crate) inverse_flattening: f64,
}

impl Default for Datum {
    /// [`Datum::WGS84`]
    #[inline]
    fn default() -> Self {
        Self::WGS84
    }
}

impl From<(f64, f64)> for Datum {
    /// see [`Datum::new()`]
    #[inline]
    fn from(rhs: (f64, f64)) -> Self {
        Self::new(rhs.0, rhs.1)
    }
}

impl Datum {
    /// World Geodetic System 1984
    pub const WGS84: Self = Self::new(6378137.0, 298.2572236);
    /// North American Datum 1983
    pub const NAD83: Self = Self::new(6378137.0, 298.2572236);
    /// Geodetic Reference System 1980
    pub const GRS80: Self = Self::new(6378137.0, 298.2572215);
    /// World Geodetic System 1972
    pub const WGS72: Self = Self::new(6378135.0, 298.2597208);
    /// Australian 1965
    pub const AUS65: Self = Self::new(6378160.0, 298.2497323);
    /// Krasovsky 1940
    pub const KRASOVSKY1940: Self = Self::new(6378245.0, 298.2997381);
    /// North American Datum 1927
    pub const NAD27: Self = Self::new(6378206.4, 294.9786982);
    /// International 1924
    pub const INTL1924: Self = Self::new(6378388.0, 296.9993621);
    /// Hayford 1909
    pub const HAYFORD1909: Self = Self::new(6378388.0, 296.9993621);
    /// Clarke 1880
    pub const CLARKE1880: Self = Self::new(6378249.1, 293.4660167);
    /// Clarke 1866
    pub const CLARKE1866: Self = Self::new(6378206.4, 294.9786982);
    /// Airy 1830
    pub const AIRY1830: Self = Self::new(6377563.4, 299.3247788);
    /// Bessel 1841
    pub const BESSEL1841: Self = Self::new(6377397.2, 299.1527052);
    /// Everest 1830
    pub const EVEREST1830: Self = Self::new(6377276.3, 300.8021499);

    /// Makes a [`Datum`].
    ///
    /// This does not check the values.
    #[inline]
    pub const fn new(equatorial_radius: f64, inverse_flattening: f64) -> Self {
        Self {
            equatorial_radius,
            inverse_flattening,
        }
    }

    /// Makes a [`Datum`] with checking.
    ///
    /// # Errors
    ///
    /// If `equatorial_radius` is not finite or not positive,
    /// or `inverse_flattening` is not finite or not greater than 1.0.
    ///
    /// # Example
    ///
    /// ```
    /// # use utmgeo::*;
    /// # fn main() -> Result<()> {
    /// let datum = Datum::try_new(6378137.0, 298.257223563)?;
    /// assert_eq!(datum, Datum::new(6378137.0, 298.257223563));
    ///
    /// assert!(Datum::try_new(0.0, 298.257223563).is_err());
    /// assert!(Datum::try_new(6378137.0, 1.0).is_err());
    /// assert!(Datum::try_new(6378137.0, f64::NAN).is_err());
    /// # Ok(())}
    /// ```
    pub fn try_new(equatorial_radius: f64, inverse_flattening: f64) -> Result<Self> {
        if !(equatorial_radius.is_finite() && equatorial_radius.gt(&0.0)) {
            return Err(Error::new_invalid_datum(
                DatumKind::EquatorialRadius,
                equatorial_radius,
            ));
        }
        if !(inverse_flattening.is_finite() && inverse_flattening.gt(&1.0)) {
            return Err(Error::new_invalid_datum(
                DatumKind::InverseFlattening,
                inverse_flattening,
            ));
        }

        Ok(Self::new(equatorial_radius, inverse_flattening))
    }

    /// Returns the equatorial radius \[m\] of `self`.
    #[inline]
    pub fn equatorial_radius(&self) -> &f64 {
        &self.equatorial_radius
    }

    /// Returns the inverse flattening of `self`.
    #[inline]
    pub fn inverse_flattening(&self) -> &f64 {
        &self.inverse_flattening
    }

    /// Returns the flattening 𝑓 = 1 / 𝑖𝑛𝑣𝑒𝑟𝑠𝑒_𝑓𝑙𝑎𝑡𝑡𝑒𝑛𝑖𝑛𝑔.
    #[inline]
    pub fn flattening(&self) -> f64 {
        1.0 / self.inverse_flattening
    }

    /// Returns the polar radius 𝑏 = 𝑎 (1 − 𝑓) \[m\].
    #[inline]
    pub fn polar_radius(&self) -> f64 {
        self.equatorial_radius * (1.0 - self.flattening())
    }

    /// Returns the eccentricity squared 𝑒² = 1 − (𝑏 / 𝑎)².
    #[inline]
    pub fn eccentricity_squared(&self) -> f64 {
        1.0 - (self.polar_radius() / self.equatorial_radius).powi(2)
    }

    /// Returns the second eccentricity squared 𝑒′² = 𝑒² / (1 − 𝑒²).
    #[inline]
    pub fn second_eccentricity_squared(&self) -> f64 {
        let esq = self.eccentricity_squared();
        esq / (1.0 - esq)
    }
}
