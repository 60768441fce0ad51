use std::collections::HashMap;

use crate::error::{AxesError, AxesResult};

/// Read access to the FITS keywords of a WCS definition.
///
/// Frame identification only needs `CTYPEn`. Identifiers registered by callers
/// usually look at `RADESYS` (string) and `EQUINOX` (float) as well, which is
/// why float keywords are exposed.
pub trait KeywordProvider {
    fn get_string(&self, key: &str) -> Option<String>;
    fn get_float(&self, key: &str) -> Option<f64>;

    fn require_string(&self, key: &str) -> AxesResult<String> {
        self.get_string(key)
            .ok_or_else(|| AxesError::missing_keyword(key))
    }

    /// `CTYPE{axis}` for a 1-based axis number.
    fn ctype(&self, axis: usize) -> AxesResult<String> {
        self.require_string(&format!("CTYPE{}", axis))
    }
}

/// In-memory keyword store, mostly for tests and hand-built axes.
#[derive(Debug, Clone, Default)]
pub struct KeywordMap {
    strings: HashMap<String, String>,
    floats: HashMap<String, f64>,
}

impl KeywordMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Two-axis celestial header with the given axis types.
    pub fn celestial(ctype1: impl Into<String>, ctype2: impl Into<String>) -> Self {
        let mut map = Self::new();
        map.set_string("CTYPE1", ctype1).set_string("CTYPE2", ctype2);
        map
    }

    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.strings.insert(key.into(), value.into());
        self
    }

    pub fn set_float(&mut self, key: impl Into<String>, value: f64) -> &mut Self {
        self.floats.insert(key.into(), value);
        self
    }
}

impl KeywordProvider for KeywordMap {
    fn get_string(&self, key: &str) -> Option<String> {
        self.strings.get(key).cloned()
    }

    fn get_float(&self, key: &str) -> Option<f64> {
        self.floats.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celestial_header() {
        let map = KeywordMap::celestial("RA---TAN", "DEC--TAN");
        assert_eq!(map.ctype(1).unwrap(), "RA---TAN");
        assert_eq!(map.ctype(2).unwrap(), "DEC--TAN");
        assert_eq!(map.get_string("CTYPE3"), None);
    }

    #[test]
    fn test_ctype_missing() {
        let map = KeywordMap::new();
        let err = map.ctype(2).unwrap_err();
        assert!(matches!(err, AxesError::MissingKeyword { ref keyword } if keyword == "CTYPE2"));
    }

    #[test]
    fn test_strings_and_floats_are_separate() {
        let mut map = KeywordMap::new();
        map.set_string("RADESYS", "FK4").set_float("EQUINOX", 1950.0);

        assert_eq!(map.get_string("RADESYS"), Some("FK4".to_string()));
        assert_eq!(map.get_float("EQUINOX"), Some(1950.0));
        assert_eq!(map.get_float("RADESYS"), None);
        assert_eq!(map.get_string("EQUINOX"), None);
    }
}
