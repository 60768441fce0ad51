//! Celestial reference frames and their axis display metadata.

use core::fmt;
use core::str::FromStr;

use crate::ctype::CoordType;
use crate::error::{AxesError, AxesResult};
use crate::units::AngleUnit;

/// Reference frames an axis pair can be resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Frame {
    Icrs,
    Fk4,
    Fk5,
    Galactic,
    Supergalactic,
    Ecliptic,
}

impl Frame {
    pub const ALL: [Frame; 6] = [
        Self::Icrs,
        Self::Fk4,
        Self::Fk5,
        Self::Galactic,
        Self::Supergalactic,
        Self::Ecliptic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Icrs => "icrs",
            Self::Fk4 => "fk4",
            Self::Fk5 => "fk5",
            Self::Galactic => "galactic",
            Self::Supergalactic => "supergalactic",
            Self::Ecliptic => "ecliptic",
        }
    }

    /// Longitude and latitude component names, as shown on axis labels.
    pub fn component_names(self) -> (&'static str, &'static str) {
        match self {
            Self::Icrs | Self::Fk4 | Self::Fk5 => ("ra", "dec"),
            Self::Galactic => ("l", "b"),
            Self::Supergalactic => ("sgl", "sgb"),
            Self::Ecliptic => ("lon", "lat"),
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Frame {
    type Err = AxesError;

    fn from_str(s: &str) -> AxesResult<Self> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|frame| frame.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| AxesError::unknown_frame(s))
    }
}

/// Anything that names a frame: a [`Frame`] or its name.
pub trait IntoFrame {
    fn into_frame(self) -> AxesResult<Frame>;
}

impl IntoFrame for Frame {
    fn into_frame(self) -> AxesResult<Frame> {
        Ok(self)
    }
}

impl IntoFrame for &Frame {
    fn into_frame(self) -> AxesResult<Frame> {
        Ok(*self)
    }
}

impl IntoFrame for &str {
    fn into_frame(self) -> AxesResult<Frame> {
        self.parse()
    }
}

impl IntoFrame for &String {
    fn into_frame(self) -> AxesResult<Frame> {
        self.parse()
    }
}

/// Per-axis display attributes for a celestial axis pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordMeta {
    pub coord_type: (CoordType, CoordType),
    /// Wrap angle in degrees, `None` for the default of 360°.
    pub wrap: (Option<f64>, Option<f64>),
    pub unit: (AngleUnit, AngleUnit),
    pub name: (String, String),
}

/// Display metadata for `frame`: a longitude/latitude pair in degrees named
/// after the frame's components.
///
/// ```
/// use celestial_axes::{get_coord_meta, Frame};
///
/// let meta = get_coord_meta("galactic").unwrap();
/// assert_eq!(meta.name, ("l".to_string(), "b".to_string()));
/// assert!(get_coord_meta("altaz").is_err());
/// # assert_eq!(get_coord_meta(Frame::Fk5).unwrap().name.0, "ra");
/// ```
pub fn get_coord_meta(frame: impl IntoFrame) -> AxesResult<CoordMeta> {
    let frame = frame.into_frame()?;
    let (lon, lat) = frame.component_names();

    Ok(CoordMeta {
        coord_type: (CoordType::Longitude, CoordType::Latitude),
        wrap: (None, None),
        unit: (AngleUnit::Degree, AngleUnit::Degree),
        name: (lon.to_string(), lat.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("fk5".parse::<Frame>().unwrap(), Frame::Fk5);
        assert_eq!("ICRS".parse::<Frame>().unwrap(), Frame::Icrs);
        assert_eq!(" galactic ".parse::<Frame>().unwrap(), Frame::Galactic);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "altaz".parse::<Frame>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown frame: altaz");
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for frame in Frame::ALL {
            assert_eq!(frame.to_string().parse::<Frame>().unwrap(), frame);
        }
    }

    #[test]
    fn test_equatorial_meta() {
        for name in ["fk4", "fk5", "icrs"] {
            let meta = get_coord_meta(name).unwrap();
            assert_eq!(meta.name, ("ra".to_string(), "dec".to_string()));
            assert_eq!(meta.coord_type, (CoordType::Longitude, CoordType::Latitude));
            assert_eq!(meta.wrap, (None, None));
            assert_eq!(meta.unit, (AngleUnit::Degree, AngleUnit::Degree));
        }
    }

    #[test]
    fn test_galactic_meta() {
        let meta = get_coord_meta(Frame::Galactic).unwrap();
        assert_eq!(meta.name, ("l".to_string(), "b".to_string()));
    }

    #[test]
    fn test_other_frames_meta() {
        assert_eq!(get_coord_meta(Frame::Supergalactic).unwrap().name.0, "sgl");
        assert_eq!(get_coord_meta(&Frame::Ecliptic).unwrap().name.1, "lat");
        let owned = String::from("fk5");
        assert_eq!(get_coord_meta(&owned).unwrap().name.1, "dec");
    }

    #[test]
    fn test_unknown_frame_meta() {
        assert!(matches!(
            get_coord_meta("heliocentric"),
            Err(AxesError::UnknownFrame { .. })
        ));
    }
}
