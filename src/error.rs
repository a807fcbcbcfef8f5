//! Provides [`Error`] and [`Result`].
//!
//! Projection and localization never fail; only the checked constructors,
//! [`LatLonCoord::try_new`](crate::LatLonCoord::try_new) and
//! [`Datum::try_new`](crate::Datum::try_new), report errors.

/// Alias for a `Result<T, utmgeo::error::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents all possible errors that can occur by this crate.
#[derive(Debug)]
pub struct Error {
    pub err: Box<ErrorImpl>,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Error {
    /// Returns a error kind.
    pub fn kind(&self) -> &ErrorImpl {
        &self.err
    }
}

impl Error {
    pub(crate) fn new_out_of_range_position(
        kind: PositionKind,
        value: f64,
        low: f64,
        high: f64,
    ) -> Self {
        Self {
            err: Box::new(ErrorImpl::OutOfRangePosition {
                kind,
                value,
                low,
                high,
            }),
        }
    }

    pub(crate) fn new_invalid_datum(kind: DatumKind, value: f64) -> Self {
        Self {
            err: Box::new(ErrorImpl::InvalidDatum { kind, value }),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum ErrorImpl {
    /// Latitude or longitude is NaN or out of range.
    OutOfRangePosition {
        /// The axis
        kind: PositionKind,
        /// The rejected value
        value: f64,
        /// Lower bound, inclusive
        low: f64,
        /// Upper bound, inclusive
        high: f64,
    },
    /// Ellipsoid parameter outside its domain.
    InvalidDatum {
        /// The parameter
        kind: DatumKind,
        /// The rejected value
        value: f64,
    },
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum PositionKind {
    Latitude,
    Longitude,
}

impl std::fmt::Display for PositionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PositionKind::Latitude => "latitude",
            PositionKind::Longitude => "longitude",
        };
        f.write_str(s)
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum DatumKind {
    EquatorialRadius,
    InverseFlattening,
}

impl std::fmt::Display for DatumKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DatumKind::EquatorialRadius => "equatorial radius",
            DatumKind::InverseFlattening => "inverse flattening",
        };
        f.write_str(s)
    }
}

impl std::fmt::Display for ErrorImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ErrorImpl::OutOfRangePosition {
                kind,
                value,
                low,
                high,
            } => write!(
                f,
                "invalid {kind}: {value:?}, must satisfy {low:?} <= and <= {high:?}"
            ),
            ErrorImpl::InvalidDatum { kind, value } => match kind {
                DatumKind::EquatorialRadius => {
                    write!(f, "invalid {kind}: {value:?}, must be finite and > 0.0")
                }
                DatumKind::InverseFlattening => {
                    write!(f, "invalid {kind}: {value:?}, must be finite and > 1.0")
                }
            },
        }
    }
}
