//! Angular units and unit-tagged magnitudes.
//!
//! Tick steps are only meaningful together with their unit: a step of `5` can be
//! five arcseconds on a declination axis or five hour-angle seconds on a right
//! ascension axis. [`Quantity`] keeps the magnitude and the [`AngleUnit`]
//! together and converts between units through their size in degrees.
//!
//! ```
//! use celestial_axes::{AngleUnit, Quantity};
//!
//! let span = Quantity::arcminutes(90.0);
//! assert!((span.value_in(AngleUnit::Degree) - 1.5).abs() < 1e-12);
//! assert!(span > Quantity::arcseconds(1.0));
//! ```

use core::cmp::Ordering;
use core::fmt;

/// Angular units used for axis spans and tick steps.
///
/// The hour-angle subdivisions are angles, not times: one [`HourMinute`](Self::HourMinute)
/// is 15 arcminutes and one [`HourSecond`](Self::HourSecond) is 15 arcseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AngleUnit {
    Degree,
    Arcminute,
    Arcsecond,
    HourAngle,
    HourMinute,
    HourSecond,
    Radian,
}

impl AngleUnit {
    /// Size of one unit in degrees.
    #[inline]
    pub fn degrees_per_unit(self) -> f64 {
        match self {
            Self::Degree => 1.0,
            Self::Arcminute => 1.0 / 60.0,
            Self::Arcsecond => 1.0 / 3600.0,
            Self::HourAngle => 15.0,
            Self::HourMinute => 15.0 / 60.0,
            Self::HourSecond => 15.0 / 3600.0,
            Self::Radian => 180.0 / core::f64::consts::PI,
        }
    }

    /// Size of one unit in arcseconds, for the units that are a whole number of them.
    #[inline]
    pub fn arcseconds_per_unit(self) -> Option<f64> {
        match self {
            Self::Degree => Some(3600.0),
            Self::Arcminute => Some(60.0),
            Self::Arcsecond => Some(1.0),
            Self::HourAngle => Some(54000.0),
            Self::HourMinute => Some(900.0),
            Self::HourSecond => Some(15.0),
            Self::Radian => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Degree => "deg",
            Self::Arcminute => "arcmin",
            Self::Arcsecond => "arcsec",
            Self::HourAngle => "hourangle",
            Self::HourMinute => "hourangle min",
            Self::HourSecond => "hourangle s",
            Self::Radian => "rad",
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A magnitude tagged with its angular unit.
///
/// Equality and ordering compare the physical angle, so `60 arcmin == 1 deg`.
/// Quantities sharing a unit compare their raw values without conversion.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quantity {
    value: f64,
    unit: AngleUnit,
}

impl Quantity {
    #[inline]
    pub fn new(value: f64, unit: AngleUnit) -> Self {
        Self { value, unit }
    }

    #[inline]
    pub fn degrees(value: f64) -> Self {
        Self::new(value, AngleUnit::Degree)
    }

    #[inline]
    pub fn arcminutes(value: f64) -> Self {
        Self::new(value, AngleUnit::Arcminute)
    }

    #[inline]
    pub fn arcseconds(value: f64) -> Self {
        Self::new(value, AngleUnit::Arcsecond)
    }

    #[inline]
    pub fn hours(value: f64) -> Self {
        Self::new(value, AngleUnit::HourAngle)
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn unit(&self) -> AngleUnit {
        self.unit
    }

    /// Magnitude expressed in `unit`.
    ///
    /// Same-unit conversion returns the value untouched. Between sexagesimal
    /// units the value is scaled by whole arcseconds and divided once, so
    /// `25 hourangle s` in hours is bit-identical to `25.0 / 3600.0`.
    #[inline]
    pub fn value_in(&self, unit: AngleUnit) -> f64 {
        if unit == self.unit {
            return self.value;
        }
        match (self.unit.arcseconds_per_unit(), unit.arcseconds_per_unit()) {
            (Some(from), Some(to)) => self.value * from / to,
            _ => self.value * self.unit.degrees_per_unit() / unit.degrees_per_unit(),
        }
    }

    #[inline]
    pub fn to(&self, unit: AngleUnit) -> Self {
        Self::new(self.value_in(unit), unit)
    }

    fn comparable(&self, other: &Self) -> (f64, f64) {
        if self.unit == other.unit {
            (self.value, other.value)
        } else {
            (
                self.value_in(AngleUnit::Arcsecond),
                other.value_in(AngleUnit::Arcsecond),
            )
        }
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = self.comparable(other);
        a == b
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let (a, b) = self.comparable(other);
        a.partial_cmp(&b)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
