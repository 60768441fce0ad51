//! Tick-step selection for angular and scalar axes.
//!
//! Steps follow a 1-2-5 pattern for plain numbers and hand-tuned sexagesimal
//! sequences for angles, picked in whichever unit reads most naturally:
//!
//! | Axis | Span | Step unit |
//! |------|------|-----------|
//! | degrees | up to 45" | arcsec (`1, 2, 3, 5, 10, 15, 20, 30`) |
//! | degrees | up to 45' | arcmin (same sequence) |
//! | degrees | up to 520° | degree (`1, 2, 5, 10, 15, 30, 45, 90, 180, 360`) |
//! | hours | up to 45 s | hour-angle seconds (`1, 2, 3, 4, 5, 6, 10, 12, 15, 20, 30`) |
//! | hours | up to 45 m | hour-angle minutes (same sequence) |
//! | hours | up to 36 h | hours (`1, 2, 3, 4, 6, 8, 12, 18, 24`) |
//!
//! Spans below one arcsecond (degree axes) or one hour-angle second (hour
//! axes) fall back to [`select_step_scalar`] in that unit.
//!
//! ```
//! use celestial_axes::{select_step_degree, AngleUnit, Quantity};
//!
//! let step = select_step_degree(Quantity::arcminutes(10.0)).unwrap();
//! assert_eq!(step.value(), 10.0);
//! assert_eq!(step.unit(), AngleUnit::Arcminute);
//! ```

use once_cell::sync::Lazy;

use crate::error::{AxesError, AxesResult};
use crate::units::{AngleUnit, Quantity};

const DEGREE_LIMITS: [f64; 10] = [1.5, 3.0, 7.0, 13.0, 20.0, 40.0, 70.0, 120.0, 270.0, 520.0];
const DEGREE_STEPS: [f64; 10] = [1.0, 2.0, 5.0, 10.0, 15.0, 30.0, 45.0, 90.0, 180.0, 360.0];

const ARC_MINSEC_LIMITS: [f64; 8] = [1.5, 2.5, 3.5, 8.0, 11.0, 18.0, 25.0, 45.0];
const ARC_MINSEC_STEPS: [f64; 8] = [1.0, 2.0, 3.0, 5.0, 10.0, 15.0, 20.0, 30.0];

const HOUR_LIMITS: [f64; 9] = [1.5, 2.5, 3.5, 5.0, 7.0, 10.0, 15.0, 21.0, 36.0];
const HOUR_STEPS: [f64; 9] = [1.0, 2.0, 3.0, 4.0, 6.0, 8.0, 12.0, 18.0, 24.0];

const HOUR_MINSEC_LIMITS: [f64; 11] = [
    1.5, 2.5, 3.5, 4.5, 5.5, 8.0, 11.0, 14.0, 18.0, 25.0, 45.0,
];
const HOUR_MINSEC_STEPS: [f64; 11] = [
    1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 10.0, 12.0, 15.0, 20.0, 30.0,
];

/// Mantissas tried by [`select_step_scalar`], in tie-break order.
const SCALAR_MANTISSAS: [f64; 4] = [1.0, 2.0, 5.0, 10.0];

static DEGREE_TABLE: Lazy<StepTable> = Lazy::new(StepTable::degree);
static HOUR_TABLE: Lazy<StepTable> = Lazy::new(StepTable::hour);

/// Nearest value of the form `{1, 2, 5, 10} × 10^k` to `dv`, measured in log10 space.
///
/// Ties resolve to the smaller mantissa.
pub fn select_step_scalar(dv: f64) -> AxesResult<f64> {
    if !(dv.is_finite() && dv > 0.0) {
        return Err(AxesError::invalid_magnitude(dv));
    }

    let log10_dv = dv.log10();
    let base = log10_dv.floor();
    let frac = log10_dv - base;

    let mut best = SCALAR_MANTISSAS[0].log10();
    for mantissa in &SCALAR_MANTISSAS[1..] {
        let candidate = mantissa.log10();
        if (frac - candidate).abs() < (frac - best).abs() {
            best = candidate;
        }
    }

    Ok(10f64.powf(base + best))
}

/// Step for a span on a degree-valued axis (declination, latitude, ...).
pub fn select_step_degree(dv: Quantity) -> AxesResult<Quantity> {
    DEGREE_TABLE.select(dv)
}

/// Step for a span on an hour-valued axis (right ascension).
pub fn select_step_hour(dv: Quantity) -> AxesResult<Quantity> {
    HOUR_TABLE.select(dv)
}

/// One breakpoint of a [`StepTable`]: spans up to `limit` get `step` in `unit`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepRow {
    pub limit: f64,
    pub step: f64,
    pub unit: AngleUnit,
}

impl StepRow {
    #[inline]
    pub fn new(limit: f64, step: f64, unit: AngleUnit) -> Self {
        Self { limit, step, unit }
    }

    #[inline]
    pub fn quantity(&self) -> Quantity {
        Quantity::new(self.step, self.unit)
    }
}

/// Breakpoint table mapping a span to a step.
///
/// Limits are expressed in `lookup_unit` and must ascend strictly. Spans at or
/// below `scalar_threshold` skip the table and take a 1-2-5 step in `scalar_unit`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "StepTableParts"))]
pub struct StepTable {
    lookup_unit: AngleUnit,
    rows: Vec<StepRow>,
    scalar_threshold: Quantity,
    scalar_unit: AngleUnit,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct StepTableParts {
    lookup_unit: AngleUnit,
    rows: Vec<StepRow>,
    scalar_threshold: Quantity,
    scalar_unit: AngleUnit,
}

#[cfg(feature = "serde")]
impl TryFrom<StepTableParts> for StepTable {
    type Error = AxesError;

    fn try_from(parts: StepTableParts) -> AxesResult<Self> {
        StepTable::new(
            parts.lookup_unit,
            parts.rows,
            parts.scalar_threshold,
            parts.scalar_unit,
        )
    }
}

impl StepTable {
    pub fn new(
        lookup_unit: AngleUnit,
        rows: Vec<StepRow>,
        scalar_threshold: Quantity,
        scalar_unit: AngleUnit,
    ) -> AxesResult<Self> {
        if rows.is_empty() {
            return Err(AxesError::invalid_table("no breakpoints"));
        }
        for row in &rows {
            if !(row.limit.is_finite() && row.step.is_finite() && row.step > 0.0) {
                return Err(AxesError::invalid_table(format!(
                    "row with limit {} and step {} is not usable",
                    row.limit, row.step
                )));
            }
        }
        if let Some(pair) = rows.windows(2).find(|w| w[0].limit >= w[1].limit) {
            return Err(AxesError::invalid_table(format!(
                "limits must ascend, found {} before {}",
                pair[0].limit, pair[1].limit
            )));
        }
        Ok(Self {
            lookup_unit,
            rows,
            scalar_threshold,
            scalar_unit,
        })
    }

    /// Arcsecond, arcminute and degree steps, looked up in degrees.
    pub fn degree() -> Self {
        let mut rows = Vec::with_capacity(2 * ARC_MINSEC_LIMITS.len() + DEGREE_LIMITS.len());
        push_rows(
            &mut rows,
            &ARC_MINSEC_LIMITS,
            3600.0,
            &ARC_MINSEC_STEPS,
            AngleUnit::Arcsecond,
        );
        push_rows(
            &mut rows,
            &ARC_MINSEC_LIMITS,
            60.0,
            &ARC_MINSEC_STEPS,
            AngleUnit::Arcminute,
        );
        push_rows(
            &mut rows,
            &DEGREE_LIMITS,
            1.0,
            &DEGREE_STEPS,
            AngleUnit::Degree,
        );

        Self {
            lookup_unit: AngleUnit::Degree,
            rows,
            scalar_threshold: Quantity::arcseconds(1.0),
            scalar_unit: AngleUnit::Arcsecond,
        }
    }

    /// Hour-angle second, minute and hour steps, looked up in hours.
    pub fn hour() -> Self {
        let mut rows = Vec::with_capacity(2 * HOUR_MINSEC_LIMITS.len() + HOUR_LIMITS.len());
        push_rows(
            &mut rows,
            &HOUR_MINSEC_LIMITS,
            3600.0,
            &HOUR_MINSEC_STEPS,
            AngleUnit::HourSecond,
        );
        push_rows(
            &mut rows,
            &HOUR_MINSEC_LIMITS,
            60.0,
            &HOUR_MINSEC_STEPS,
            AngleUnit::HourMinute,
        );
        push_rows(
            &mut rows,
            &HOUR_LIMITS,
            1.0,
            &HOUR_STEPS,
            AngleUnit::HourAngle,
        );

        Self {
            lookup_unit: AngleUnit::HourAngle,
            rows,
            scalar_threshold: Quantity::arcseconds(15.0),
            scalar_unit: AngleUnit::HourSecond,
        }
    }

    #[inline]
    pub fn lookup_unit(&self) -> AngleUnit {
        self.lookup_unit
    }

    #[inline]
    pub fn rows(&self) -> &[StepRow] {
        &self.rows
    }

    /// Pick the step for a span.
    ///
    /// The row chosen is the first whose limit is not below the span, so a span
    /// sitting exactly on a breakpoint takes that breakpoint's step.
    pub fn select(&self, dv: Quantity) -> AxesResult<Quantity> {
        if dv > self.scalar_threshold {
            let span = dv.value_in(self.lookup_unit);
            let n = self.rows.partition_point(|row| row.limit < span);
            let row = self.rows.get(n).ok_or_else(|| {
                let last = self.rows.last().map_or(f64::NAN, |row| row.limit);
                AxesError::span_out_of_range(
                    dv.to_string(),
                    Quantity::new(last, self.lookup_unit).to_string(),
                )
            })?;
            log::trace!("span {} -> row {} ({} {})", dv, n, row.step, row.unit);
            Ok(row.quantity())
        } else {
            let step = select_step_scalar(dv.value_in(self.scalar_unit))?;
            Ok(Quantity::new(step, self.scalar_unit))
        }
    }
}

fn push_rows(rows: &mut Vec<StepRow>, limits: &[f64], divisor: f64, steps: &[f64], unit: AngleUnit) {
    rows.extend(
        limits
            .iter()
            .zip(steps)
            .map(|(&limit, &step)| StepRow::new(limit / divisor, step, unit)),
    );
}
