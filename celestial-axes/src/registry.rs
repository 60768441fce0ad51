//! Resolving a WCS axis pair to a [`Frame`].
//!
//! Equatorial (`RA--`/`DEC-`, resolved to FK5) and galactic (`GLON`/`GLAT`)
//! pairs are recognised directly. Anything else is offered to the registered
//! frame identifiers in the order they were registered; the first one to
//! return a frame wins.
//!
//! ```
//! use celestial_axes::{Frame, FrameRegistry, KeywordMap, KeywordProvider};
//!
//! let mut registry = FrameRegistry::new();
//! registry.register(|wcs: &dyn KeywordProvider| {
//!     let ctype = wcs.get_string("CTYPE1")?;
//!     ctype.starts_with("ELON").then_some(Frame::Ecliptic)
//! });
//!
//! let wcs = KeywordMap::celestial("ELON-CAR", "ELAT-CAR");
//! assert_eq!(registry.identify(&wcs).unwrap(), Frame::Ecliptic);
//! ```

use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::ctype::ctype_prefix;
use crate::error::{AxesError, AxesResult};
use crate::frame::Frame;
use crate::header::KeywordProvider;

/// Callback that recognises a frame from a WCS definition, or declines with `None`.
pub type FrameIdentifier = dyn Fn(&dyn KeywordProvider) -> Option<Frame> + Send + Sync;

static FRAME_IDENTIFIERS: Lazy<RwLock<FrameRegistry>> =
    Lazy::new(|| RwLock::new(FrameRegistry::new()));

/// Ordered list of frame identifiers.
#[derive(Clone, Default)]
pub struct FrameRegistry {
    identifiers: Vec<Arc<FrameIdentifier>>,
}

impl FrameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, identifier: F)
    where
        F: Fn(&dyn KeywordProvider) -> Option<Frame> + Send + Sync + 'static,
    {
        self.identifiers.push(Arc::new(identifier));
        log::debug!("registered frame identifier #{}", self.identifiers.len());
    }

    pub fn reset(&mut self) {
        log::debug!("clearing {} frame identifier(s)", self.identifiers.len());
        self.identifiers.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// Resolve the frame of the `CTYPE1`/`CTYPE2` axis pair in `wcs`.
    pub fn identify(&self, wcs: &dyn KeywordProvider) -> AxesResult<Frame> {
        let ctype1 = wcs.ctype(1)?;
        let ctype2 = wcs.ctype(2)?;

        if let Some(frame) = builtin_frame(&ctype1, &ctype2) {
            log::trace!("{}/{} resolved to {}", ctype1, ctype2, frame);
            return Ok(frame);
        }

        match identify_with(&self.identifiers, wcs) {
            Some(frame) => Ok(frame),
            None => Err(AxesError::frame_not_supported(ctype1, ctype2)),
        }
    }
}

impl core::fmt::Debug for FrameRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameRegistry")
            .field("identifiers", &self.identifiers.len())
            .finish()
    }
}

fn builtin_frame(ctype1: &str, ctype2: &str) -> Option<Frame> {
    match (ctype_prefix(ctype1), ctype_prefix(ctype2)) {
        ("RA--", "DEC-") => Some(Frame::Fk5),
        ("GLON", "GLAT") => Some(Frame::Galactic),
        _ => None,
    }
}

fn identify_with(
    identifiers: &[Arc<FrameIdentifier>],
    wcs: &dyn KeywordProvider,
) -> Option<Frame> {
    identifiers.iter().enumerate().find_map(|(index, identifier)| {
        let frame = identifier(wcs)?;
        log::debug!("frame identifier #{} matched {}", index + 1, frame);
        Some(frame)
    })
}

/// Append an identifier to the process-wide list consulted by [`get_coordinate_frame`].
pub fn register_frame_identifier<F>(identifier: F)
where
    F: Fn(&dyn KeywordProvider) -> Option<Frame> + Send + Sync + 'static,
{
    FRAME_IDENTIFIERS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .register(identifier);
}

/// Remove every identifier from the process-wide list.
pub fn reset_frame_identifiers() {
    FRAME_IDENTIFIERS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .reset();
}

/// Number of identifiers in the process-wide list.
pub fn frame_identifier_count() -> usize {
    FRAME_IDENTIFIERS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .len()
}

/// Resolve the frame of `wcs` using the built-in checks and the process-wide
/// identifier list.
///
/// The list is snapshotted before any identifier runs, so an identifier may
/// register or reset identifiers without deadlocking; such changes apply to
/// the next call.
pub fn get_coordinate_frame(wcs: &dyn KeywordProvider) -> AxesResult<Frame> {
    let snapshot = FRAME_IDENTIFIERS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    snapshot.identify(wcs)
}
