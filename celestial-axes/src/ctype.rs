//! Axis classification from WCS `CTYPEn` codes.
//!
//! A `CTYPE` value is a four-character axis code padded with `-`, followed by
//! the projection code (`RA---TAN`, `GLON-CAR`, `HPLN-TAN`). Only the axis code
//! matters here.

/// How an axis should be ticked and labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CoordType {
    Longitude,
    Latitude,
    Scalar,
}

impl CoordType {
    #[inline]
    pub fn is_angular(self) -> bool {
        !matches!(self, Self::Scalar)
    }
}

/// The four-character axis code of `ctype`, or the whole string if shorter.
pub fn ctype_prefix(ctype: &str) -> &str {
    match ctype.char_indices().nth(4) {
        Some((end, _)) => &ctype[..end],
        None => ctype,
    }
}

/// Characters `start..end` of `s`, or `None` if `s` is shorter than `end` characters.
fn char_slice(s: &str, start: usize, end: usize) -> Option<&str> {
    let mut bounds = s
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(core::iter::once(s.len()));
    let from = bounds.nth(start)?;
    let to = bounds.nth(end - start - 1)?;
    Some(&s[from..to])
}

/// Classify an axis, returning its type and, for longitudes that wrap
/// somewhere other than 360°, the wrap angle in degrees.
///
/// ```
/// use celestial_axes::{coord_type_from_ctype, CoordType};
///
/// assert_eq!(coord_type_from_ctype("RA---TAN"), (CoordType::Longitude, None));
/// assert_eq!(coord_type_from_ctype("HPLN-TAN"), (CoordType::Longitude, Some(180.0)));
/// assert_eq!(coord_type_from_ctype("FREQ"), (CoordType::Scalar, None));
/// ```
pub fn coord_type_from_ctype(ctype: &str) -> (CoordType, Option<f64>) {
    let code = char_slice(ctype, 0, 4);
    let kind = char_slice(ctype, 1, 4);

    if code == Some("RA--") || kind == Some("LON") {
        (CoordType::Longitude, None)
    } else if code == Some("HPLN") {
        (CoordType::Longitude, Some(180.0))
    } else if matches!(code, Some("DEC-" | "HPLT")) || kind == Some("LAT") {
        (CoordType::Latitude, None)
    } else {
        (CoordType::Scalar, None)
    }
}
