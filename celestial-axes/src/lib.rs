//! Tick steps and frame identification for celestial plot axes.
//!
//! `celestial-axes` is the small layer between a WCS definition and an axis
//! renderer: it decides what step to place ticks at, and what the axes of a
//! `CTYPE1`/`CTYPE2` pair are called.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`step`] | 1-2-5 scalar steps, sexagesimal degree and hour steps, [`StepTable`] |
//! | [`units`] | [`AngleUnit`] and unit-tagged [`Quantity`] |
//! | [`ctype`] | Longitude / latitude / scalar classification of `CTYPEn` codes |
//! | [`frame`] | [`Frame`] names and [`CoordMeta`] display metadata |
//! | [`registry`] | Frame resolution with pluggable identifiers |
//! | [`header`] | [`KeywordProvider`] access to WCS keywords |
//! | [`error`] | [`AxesError`] and [`AxesResult`] |
//!
//! # Example
//!
//! ```
//! use celestial_axes::{
//!     get_coord_meta, get_coordinate_frame, select_step_hour, AngleUnit, KeywordMap, Quantity,
//! };
//!
//! let wcs = KeywordMap::celestial("RA---TAN", "DEC--TAN");
//! let frame = get_coordinate_frame(&wcs).unwrap();
//! let meta = get_coord_meta(frame).unwrap();
//! assert_eq!(meta.name.0, "ra");
//!
//! let step = select_step_hour(Quantity::degrees(30.0)).unwrap();
//! assert_eq!((step.value(), step.unit()), (2.0, AngleUnit::HourAngle));
//! ```
//!
//! The process-wide identifier list behind [`get_coordinate_frame`] is meant
//! to be configured once at start-up. Code that needs isolated resolution
//! should own a [`FrameRegistry`] instead.

pub mod ctype;
pub mod error;
pub mod frame;
pub mod header;
pub mod registry;
pub mod step;
pub mod units;

pub use ctype::{coord_type_from_ctype, ctype_prefix, CoordType};
pub use error::{AxesError, AxesResult};
pub use frame::{get_coord_meta, CoordMeta, Frame, IntoFrame};
pub use header::{KeywordMap, KeywordProvider};
pub use registry::{
    frame_identifier_count, get_coordinate_frame, register_frame_identifier,
    reset_frame_identifiers, FrameIdentifier, FrameRegistry,
};
pub use step::{select_step_degree, select_step_hour, select_step_scalar, StepRow, StepTable};
pub use units::{AngleUnit, Quantity};
