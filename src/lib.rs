//! # utmgeo
//!
//! Conversion between latitude/longitude and
//! Universal Transverse Mercator (UTM) coordinate,
//! and localization of a point on a polyline.
//!
//! ```
//! use utmgeo::{
//!     build_forward_projector,
//!     build_inverse_projector,
//!     find_utm_zone,
//!     localize_point_on_line,
//!     Coordinate,
//!     Datum,
//!     LatLonCoord,
//! };
//!
//! // Makes the origin
//! let origin = LatLonCoord::new(35.0, -106.0);
//! let zone = find_utm_zone(&origin);
//! assert_eq!(zone, 13);
//!
//! // Builds the projector once, and reuses it
//! let forward = build_forward_projector(zone, &Datum::WGS84);
//! let coord = forward.project(&origin);
//! // Prints Forward: Coordinate { x: 408746.747166..., y: 3873499.850918... }
//! println!("Forward: {coord:?}");
//!
//! let inverse = build_inverse_projector(zone, false, &Datum::WGS84);
//! let latlon = inverse.project(&coord);
//! // Prints Inverse: LatLonCoord { lat: 34.999999, lon: -105.99999999999... }
//! println!("Inverse: {latlon:?}");
//!
//! // Localizes a point on a polyline
//! let line = [
//!     Coordinate::new(0.0, 0.0),
//!     Coordinate::new(5.0, 5.0),
//!     Coordinate::new(10.0, 10.0),
//! ];
//! let result = localize_point_on_line(&Coordinate::new(6.0, 6.0), &line).unwrap();
//! // The 2nd segment (index 1), 0.2 of the way
//! assert!((1.2 - result.t()).abs() < 1e-12);
//! ```
//!
//! Features:
//!
//! - Transverse Mercator series of the USGS form (fourth order),
//!   it is enough for the practical use inside the zone
//! - 14 named datums, e.g. [`Datum::WGS84`], [`Datum::NAD27`] and [`Datum::BESSEL1841`],
//!   and a custom one
//! - Projectors hold the constants of the zone and the datum,
//!   they are `Copy`, `Send` and `Sync`
//! - No datum transformation, no latitude band
//!
//! # Feature Flags
//!
//! - `serde`: (de)serialization of the all `struct` and `enum`
//!   by [`serde` crate](https://crates.io/crates/serde)
//! - `fma`: evaluates the series by fused multiply-add
//!
//! ```
//! # #[cfg(feature = "serde")]
//! # fn main() -> serde_json::Result<()> {
//! use utmgeo::{Coordinate, Datum};
//!
//! let json = serde_json::to_string(&Datum::WGS84)?;
//! assert_eq!(
//!     json,
//!     r#"{"equatorial_radius":6378137.0,"inverse_flattening":298.2572236}"#
//! );
//!
//! let coord: Coordinate = serde_json::from_str(r#"{"x":1.0,"y":2.0}"#)?;
//! assert_eq!(coord, Coordinate::new(1.0, 2.0));
//! # Ok(())}
//! # #[cfg(not(feature = "serde"))]
//! # fn main() {}
//! ```
//!
//! # Logging
//!
//! Emits [`tracing`](https://crates.io/crates/tracing) events,
//! `TRACE` on building a projector and `DEBUG` when no segment of the polyline
//! contains the foot of perpendicular. Nothing is logged per projected point.
#[doc(inline)]
pub use builder::ProjectorBuilder;
#[doc(inline)]
pub use coord::{Coordinate, LatLonCoord};
#[doc(inline)]
pub use datum::Datum;
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use localizer::{localize_point_on_line, localize_point_on_segment, LocalizerResult};
#[doc(inline)]
pub use utm::{
    build_forward_projector, build_inverse_projector, central_meridian, find_utm_zone,
    ForwardProjector, Hemisphere, InverseProjector,
};

mod builder;
pub mod coord;
pub mod datum;
pub mod error;
mod internal;
pub mod localizer;
pub mod utm;
