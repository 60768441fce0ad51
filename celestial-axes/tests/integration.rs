use std::sync::{Mutex, MutexGuard, PoisonError};

use approx::assert_abs_diff_eq;
use celestial_axes::{
    coord_type_from_ctype, frame_identifier_count, get_coord_meta, get_coordinate_frame,
    register_frame_identifier, reset_frame_identifiers, select_step_degree, select_step_hour,
    AngleUnit, AxesError, CoordType, Frame, KeywordMap, KeywordProvider, Quantity,
};

// Tests below share the process-wide identifier list.
static GLOBAL_REGISTRY: Mutex<()> = Mutex::new(());

fn lock_registry() -> MutexGuard<'static, ()> {
    let guard = GLOBAL_REGISTRY
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    reset_frame_identifiers();
    guard
}

fn ecliptic_identifier(wcs: &dyn KeywordProvider) -> Option<Frame> {
    let ctype1 = wcs.get_string("CTYPE1")?;
    let ctype2 = wcs.get_string("CTYPE2")?;
    (ctype1.starts_with("ELON") && ctype2.starts_with("ELAT")).then_some(Frame::Ecliptic)
}

// --- Process-wide registry ---

#[test]
fn builtin_frames_need_no_identifiers() {
    let _guard = lock_registry();

    let equatorial = KeywordMap::celestial("RA---TAN", "DEC--TAN");
    assert_eq!(get_coordinate_frame(&equatorial).unwrap(), Frame::Fk5);

    let galactic = KeywordMap::celestial("GLON-CAR", "GLAT-CAR");
    assert_eq!(get_coordinate_frame(&galactic).unwrap(), Frame::Galactic);
}

#[test]
fn unsupported_frame_without_identifiers() {
    let _guard = lock_registry();

    let wcs = KeywordMap::celestial("ELON-CAR", "ELAT-CAR");
    let err = get_coordinate_frame(&wcs).unwrap_err();
    assert!(matches!(err, AxesError::FrameNotSupported { .. }));
    assert_eq!(err.to_string(), "Frame not supported: ELON-CAR/ELAT-CAR");
}

#[test]
fn registered_identifier_resolves_frame() {
    let _guard = lock_registry();

    register_frame_identifier(ecliptic_identifier);
    assert_eq!(frame_identifier_count(), 1);

    let wcs = KeywordMap::celestial("ELON-CAR", "ELAT-CAR");
    assert_eq!(get_coordinate_frame(&wcs).unwrap(), Frame::Ecliptic);

    reset_frame_identifiers();
    assert_eq!(frame_identifier_count(), 0);
    assert!(get_coordinate_frame(&wcs).is_err());
}

#[test]
fn identifiers_checked_in_registration_order() {
    let _guard = lock_registry();

    register_frame_identifier(|_: &dyn KeywordProvider| None);
    register_frame_identifier(|_: &dyn KeywordProvider| Some(Frame::Supergalactic));
    register_frame_identifier(|_: &dyn KeywordProvider| Some(Frame::Icrs));
    assert_eq!(frame_identifier_count(), 3);

    let wcs = KeywordMap::celestial("SLON-AIT", "SLAT-AIT");
    assert_eq!(get_coordinate_frame(&wcs).unwrap(), Frame::Supergalactic);

    reset_frame_identifiers();
}

#[test]
fn identifier_may_register_another_identifier() {
    let _guard = lock_registry();

    register_frame_identifier(|_: &dyn KeywordProvider| {
        register_frame_identifier(|_: &dyn KeywordProvider| None);
        Some(Frame::Ecliptic)
    });

    let wcs = KeywordMap::celestial("ELON-CAR", "ELAT-CAR");
    assert_eq!(get_coordinate_frame(&wcs).unwrap(), Frame::Ecliptic);
    assert_eq!(frame_identifier_count(), 2);

    reset_frame_identifiers();
}

// --- Axis setup end to end ---

#[test]
fn equatorial_axis_setup() {
    let _guard = lock_registry();

    let wcs = KeywordMap::celestial("RA---SIN", "DEC--SIN");
    let frame = get_coordinate_frame(&wcs).unwrap();
    let meta = get_coord_meta(frame).unwrap();
    assert_eq!(meta.name, ("ra".to_string(), "dec".to_string()));

    let (lon_type, lon_wrap) = coord_type_from_ctype(&wcs.ctype(1).unwrap());
    let (lat_type, _) = coord_type_from_ctype(&wcs.ctype(2).unwrap());
    assert_eq!((lon_type, lon_wrap), (CoordType::Longitude, None));
    assert_eq!(lat_type, CoordType::Latitude);

    // 40 arcmin of right ascension and 12 arcsec of declination
    let ra_step = select_step_hour(Quantity::arcminutes(40.0)).unwrap();
    assert_eq!(ra_step.unit(), AngleUnit::HourMinute);
    assert_abs_diff_eq!(ra_step.value(), 3.0, epsilon = 1e-12);

    let dec_step = select_step_degree(Quantity::arcseconds(12.0)).unwrap();
    assert_eq!(dec_step.unit(), AngleUnit::Arcsecond);
    assert_abs_diff_eq!(dec_step.value(), 15.0, epsilon = 1e-12);
}

#[test]
fn galactic_axis_setup() {
    let _guard = lock_registry();

    let wcs = KeywordMap::celestial("GLON-CAR", "GLAT-CAR");
    let meta = get_coord_meta(get_coordinate_frame(&wcs).unwrap()).unwrap();
    assert_eq!(meta.name, ("l".to_string(), "b".to_string()));
    assert_eq!(meta.unit, (AngleUnit::Degree, AngleUnit::Degree));

    let step = select_step_degree(Quantity::degrees(25.0)).unwrap();
    assert_eq!(step, Quantity::degrees(30.0));
}

#[test]
fn step_stays_within_factor_of_two_of_span() {
    let mut span = 2.0;
    while span < 500.0 * 3600.0 {
        let step = select_step_degree(Quantity::arcseconds(span)).unwrap();
        let ratio = step.value_in(AngleUnit::Arcsecond) / span;
        assert!(ratio > 0.5 && ratio < 2.0, "{} arcsec -> {}", span, step);
        span *= 1.21;
    }
}
