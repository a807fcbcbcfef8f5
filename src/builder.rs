use crate::{find_utm_zone, Datum, ForwardProjector, Hemisphere, InverseProjector, LatLonCoord};

/// The builder of [`ForwardProjector`] and [`InverseProjector`].
///
/// The datum defaults to [`Datum::WGS84`]
/// and the hemisphere does to [`Hemisphere::North`].
///
/// # Safety
///
/// Panics when `zone` is not assigned.
///
/// # Example
///
/// ```
/// # use utmgeo::*;
/// #
/// let builder = ProjectorBuilder::new()
///     .zone(33)
///     .datum(Datum::WGS84)
///     .southern(true);
///
/// let forward = builder.build_forward();
/// let inverse = builder.build_inverse();
///
/// let coord = forward.project(&LatLonCoord::new(-33.9, 18.4));
/// let latlon = inverse.project(&coord);
/// assert!((-33.9 - latlon.lat()).abs() < 1e-2);
/// assert!((18.4 - latlon.lon()).abs() < 1e-2);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ProjectorBuilder {
    zone: Option<i32>,
    hemisphere: Hemisphere,
    datum: Datum,
}

impl ProjectorBuilder {
    /// Makes a [`ProjectorBuilder`].
    ///
    /// # Example
    ///
    /// ```
    /// # use utmgeo::*;
    /// #
    /// let forward = ProjectorBuilder::new()
    ///     .zone(13)
    ///     .build_forward();
    ///
    /// assert_eq!(forward.zone(), &13);
    /// assert_eq!(forward.datum(), &Datum::WGS84);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the zone.
    #[inline]
    pub const fn zone(mut self, zone: i32) -> Self {
        self.zone = Some(zone);
        self
    }

    /// Updates the zone and the hemisphere by the ones containing `latlon`.
    ///
    /// # Example
    ///
    /// ```
    /// # use utmgeo::*;
    /// #
    /// let inverse = ProjectorBuilder::new()
    ///     .zone_of(&LatLonCoord::new(-33.87, 151.21))
    ///     .build_inverse();
    ///
    /// assert_eq!(inverse.zone(), &56);
    /// assert_eq!(inverse.hemisphere(), &Hemisphere::South);
    /// ```
    #[inline]
    pub fn zone_of(mut self, latlon: &LatLonCoord) -> Self {
        self.zone = Some(find_utm_zone(latlon));
        self.hemisphere = Hemisphere::of(latlon);
        self
    }

    /// Updates the datum.
    #[inline]
    pub const fn datum(mut self, datum: Datum) -> Self {
        self.datum = datum;
        self
    }

    /// Updates the hemisphere.
    #[inline]
    pub const fn hemisphere(mut self, hemisphere: Hemisphere) -> Self {
        self.hemisphere = hemisphere;
        self
    }

    /// Updates the hemisphere by the southern flag.
    #[inline]
    pub const fn southern(mut self, southern: bool) -> Self {
        self.hemisphere = Hemisphere::from_southern(southern);
        self
    }

    /// Builds [`ForwardProjector`].
    ///
    /// The hemisphere is not used.
    ///
    /// # Safety
    ///
    /// Panics when `zone` is not assigned.
    #[inline]
    pub fn build_forward(&self) -> ForwardProjector {
        ForwardProjector::with_datum(self.zone.expect("zone is not assigned"), &self.datum)
    }

    /// Builds [`InverseProjector`].
    ///
    /// # Safety
    ///
    /// Panics when `zone` is not assigned.
    #[inline]
    pub fn build_inverse(&self) -> InverseProjector {
        InverseProjector::with_datum(
            self.zone.expect("zone is not assigned"),
            self.hemisphere,
            &self.datum,
        )
    }
}
