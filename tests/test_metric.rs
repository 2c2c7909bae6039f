use float_cmp::approx_eq;
use test_case::test_case;

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, SQRT_2};
use std::sync::{Arc, Mutex};

use geodist::{distance, travel_time, DistanceError, MethodConfig, Metric, PNormConfig, RadiusConfig, METHOD_NAMES};

fn no_config() -> MethodConfig<f64> {
    MethodConfig::default()
}

fn exponent(e: f64) -> MethodConfig<f64> {
    MethodConfig {
        exponent: Some(e),
        ..MethodConfig::default()
    }
}

fn radius(r: f64) -> MethodConfig<f64> {
    MethodConfig {
        radius: Some(r),
        ..MethodConfig::default()
    }
}

#[test_case("euclidean", SQRT_2; "euclidean")]
#[test_case("manhattan", 2.0; "manhattan")]
#[test_case("cityblock", 2.0; "cityblock")]
#[test_case("max", 1.0; "max")]
#[test_case("chebyshev", 1.0; "chebyshev")]
#[test_case("sqeuclidean", 2.0; "squared euclidean")]
fn unit_diagonal_distances(method: &str, expected: f64) {
    let d = distance(&[1.0, 1.0], &[2.0, 2.0], method, &no_config()).unwrap();
    assert!(approx_eq!(f64, d, expected, epsilon = 1e-9));
}

#[test_case(1.0, 2.0; "one norm")]
#[test_case(2.0, SQRT_2; "two norm")]
#[test_case(f64::INFINITY, 1.0; "infinity norm")]
fn pnorm_exponents(e: f64, expected: f64) {
    let d = distance(&[1.0, 1.0], &[2.0, 2.0], "pnorm", &exponent(e)).unwrap();
    assert!(approx_eq!(f64, d, expected, epsilon = 1e-9));
}

#[test]
fn pnorm_infinity_with_mixed_signs() {
    let d = distance(&[1.0, -1.0], &[2.0, 2.0], "pnorm", &exponent(f64::INFINITY)).unwrap();
    assert!(approx_eq!(f64, d, 3.0, epsilon = 1e-12));
}

/// A missing exponent falls back to the documented default of 2.
#[test]
fn pnorm_defaults_to_euclidean() {
    let defaulted = distance(&[1.0, 1.0], &[4.0, 5.0], "pnorm", &no_config()).unwrap();
    let explicit = distance(&[1.0, 1.0], &[4.0, 5.0], "pnorm", &exponent(2.0)).unwrap();
    assert!(approx_eq!(f64, defaulted, explicit, epsilon = 1e-12));
}

/// Collects the messages of all `WARN`-level events emitted while installed.
struct WarningLog(Arc<Mutex<Vec<String>>>);

impl tracing::Subscriber for WarningLog {
    fn enabled(&self, metadata: &tracing::Metadata<'_>) -> bool {
        *metadata.level() == tracing::Level::WARN
    }

    fn new_span(&self, _: &tracing::span::Attributes<'_>) -> tracing::span::Id {
        tracing::span::Id::from_u64(1)
    }

    fn record(&self, _: &tracing::span::Id, _: &tracing::span::Record<'_>) {}

    fn record_follows_from(&self, _: &tracing::span::Id, _: &tracing::span::Id) {}

    fn event(&self, event: &tracing::Event<'_>) {
        struct Message(String);

        impl tracing::field::Visit for Message {
            fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
                if field.name() == "message" {
                    self.0 = format!("{value:?}");
                }
            }
        }

        let mut message = Message(String::new());
        event.record(&mut message);
        self.0.lock().unwrap().push(message.0);
    }

    fn enter(&self, _: &tracing::span::Id) {}

    fn exit(&self, _: &tracing::span::Id) {}
}

/// Only the name-driven path with a missing exponent warns; an explicit
/// exponent stays quiet.
#[test]
fn pnorm_default_warns_once() {
    let warnings = Arc::new(Mutex::new(Vec::new()));
    let (defaulted, explicit) =
        tracing::subscriber::with_default(WarningLog(Arc::clone(&warnings)), || {
            let explicit = distance(&[1.0, 1.0], &[2.0, 2.0], "pnorm", &exponent(2.0)).unwrap();
            let defaulted = distance(&[1.0, 1.0], &[2.0, 2.0], "pnorm", &no_config()).unwrap();
            (defaulted, explicit)
        });
    assert!(approx_eq!(f64, defaulted, explicit, epsilon = 1e-12));

    let warnings = warnings.lock().unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("exponent"));
    assert!(warnings[0].contains("defaulting to 2"));
}

#[test]
fn pnorm_rejects_exponents_below_one() {
    let result = distance(&[1.0, 1.0], &[2.0, 2.0], "pnorm", &exponent(0.5));
    assert!(matches!(result, Err(DistanceError::InvalidArgument(_))));
}

#[test]
fn cosine_dispatch() {
    let d = distance(&[1.0, 0.0], &[0.0, 1.0], "cosine", &no_config()).unwrap();
    assert!(approx_eq!(f64, d, 1.0, epsilon = 1e-12));

    let result = distance(&[0.0, 0.0], &[0.0, 1.0], "cosine", &no_config());
    assert!(matches!(result, Err(DistanceError::DivisionByZero(_))));
}

#[test]
fn canberra_and_bray_curtis_dispatch() {
    let d = distance(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], "canberra", &no_config()).unwrap();
    assert!(approx_eq!(f64, d, 143.0 / 105.0, epsilon = 1e-12));

    let d = distance(&[6.0, 7.0, 4.0], &[10.0, 0.0, 6.0], "braycurtis", &no_config()).unwrap();
    assert!(approx_eq!(f64, d, 13.0 / 33.0, epsilon = 1e-12));
}

#[test]
fn sphere_quarter_arc() {
    let d = distance(&[0.0, 0.0], &[FRAC_PI_2, 0.0], "sphere", &radius(1.0)).unwrap();
    assert!(approx_eq!(f64, d, FRAC_PI_2, epsilon = 1e-6));
}

#[test]
fn sphere_requires_a_radius() {
    let result = distance(&[0.0, 0.0], &[FRAC_PI_2, 0.0], "sphere", &no_config());
    assert!(matches!(
        result,
        Err(DistanceError::MissingConfiguration {
            method: "sphere",
            key: "radius",
        })
    ));

    // The radius is checked before the coordinates.
    let result = distance(&[0.0], &[1.0], "sphere", &no_config());
    assert!(matches!(result, Err(DistanceError::MissingConfiguration { .. })));
}

#[test]
fn sphere_rejects_non_positive_radii() {
    let result = distance(&[0.0, 0.0], &[FRAC_PI_2, 0.0], "sphere", &radius(0.0));
    assert!(matches!(result, Err(DistanceError::InvalidArgument(_))));

    let result = distance(&[0.0, 0.0], &[FRAC_PI_2, 0.0], "sphere", &radius(-1.0));
    assert!(matches!(result, Err(DistanceError::InvalidArgument(_))));
}

#[test_case(&[0.0], &[1.0], "both provided coordinates are"; "both invalid")]
#[test_case(&[7.0, 0.0], &[0.0, 0.0], "provided coordinate 1 is"; "first invalid")]
#[test_case(&[0.0, 0.0], &[7.0, 0.0], "provided coordinate 2 is"; "second invalid")]
fn sphere_names_the_invalid_coordinates(a: &[f64], b: &[f64], subject: &str) {
    let error = distance(a, b, "sphere", &radius(1.0)).unwrap_err();
    assert!(matches!(error, DistanceError::InvalidCoordinate(_)));

    let message = error.to_string();
    assert!(message.contains(subject), "unexpected message: {message}");
    assert!(message.contains("not spherical"), "unexpected message: {message}");
}

#[test]
fn geographical_equator_quarter() {
    // A quarter of the equator on the unit sphere.
    let d = distance(&[0.0, 0.0], &[0.0, 90.0], "geographical", &radius(1.0)).unwrap();
    assert!(approx_eq!(f64, d, FRAC_PI_2, epsilon = 1e-6));
}

#[test]
fn geographical_scales_with_radius() {
    let quarter = distance(&[0.0, -45.0], &[0.0, 45.0], "geographical", &radius(1.0)).unwrap();
    let scaled = distance(&[0.0, -45.0], &[0.0, 45.0], "geographical", &radius(6371.0)).unwrap();
    assert!(approx_eq!(f64, scaled, 6371.0 * quarter, epsilon = 1e-6));
}

#[test]
fn geographical_requires_a_radius() {
    let result = distance(&[0.0, 0.0], &[0.0, 90.0], "geographical", &no_config());
    assert!(matches!(
        result,
        Err(DistanceError::MissingConfiguration {
            method: "geographical",
            key: "radius",
        })
    ));
}

#[test_case(&[100.0, 0.0], &[200.0, 0.0], "both provided coordinates are"; "both invalid")]
#[test_case(&[100.0, 0.0], &[0.0, 0.0], "provided coordinate 1 is"; "first invalid")]
#[test_case(&[0.0, 0.0], &[0.0, 200.0], "provided coordinate 2 is"; "second invalid")]
fn geographical_names_the_invalid_coordinates(a: &[f64], b: &[f64], subject: &str) {
    let error = distance(a, b, "geographical", &radius(1.0)).unwrap_err();
    assert!(matches!(error, DistanceError::InvalidCoordinate(_)));

    let message = error.to_string();
    assert!(message.contains(subject), "unexpected message: {message}");
    assert!(message.contains("not geographical"), "unexpected message: {message}");
}

#[test]
fn unknown_methods_are_rejected_with_the_full_set() {
    let error = distance(&[1.0, 1.0], &[2.0, 2.0], "no-such-method", &no_config()).unwrap_err();
    assert!(matches!(error, DistanceError::UnknownMethod { .. }));

    let message = error.to_string();
    for name in METHOD_NAMES {
        assert!(message.contains(name), "method {name} missing from: {message}");
    }
}

#[test]
fn the_empty_method_is_unknown() {
    let error = distance(&[1.0, 1.0], &[2.0, 2.0], "", &no_config()).unwrap_err();
    assert!(matches!(error, DistanceError::UnknownMethod { .. }));
}

/// Matching is case-sensitive and exact.
#[test]
fn method_names_are_case_sensitive() {
    let result = distance(&[1.0, 1.0], &[2.0, 2.0], "Euclidean", &no_config());
    assert!(matches!(result, Err(DistanceError::UnknownMethod { .. })));
}

#[test_case(1.0, &[1.0, 1.0], &[2.0, 2.0], "pnorm", exponent(2.0), SQRT_2; "unit speed diagonal")]
#[test_case(1.0, &[1.0, -1.0], &[2.0, 2.0], "pnorm", exponent(f64::INFINITY), 3.0; "unit speed chebyshev")]
#[test_case(1.0, &[0.0, 0.0], &[FRAC_PI_2, 0.0], "sphere", radius(1.0), FRAC_PI_2; "unit speed sphere")]
#[test_case(2.0, &[1.0, 1.0], &[2.0, 2.0], "pnorm", exponent(2.0), SQRT_2 / 2.0; "double speed diagonal")]
#[test_case(2.0, &[1.0, -1.0], &[2.0, 2.0], "pnorm", exponent(f64::INFINITY), 1.5; "double speed chebyshev")]
#[test_case(2.0, &[0.0, 0.0], &[FRAC_PI_2, 0.0], "sphere", radius(1.0), FRAC_PI_4; "double speed sphere")]
fn travel_times(
    average_speed: f64,
    a: &[f64],
    b: &[f64],
    method: &str,
    config: MethodConfig<f64>,
    expected: f64,
) {
    let elapsed = travel_time(average_speed, a, b, method, &config).unwrap();
    assert!(approx_eq!(f64, elapsed, expected, epsilon = 1e-6));
}

/// Speed is not validated; zero speed yields infinity.
#[test]
fn zero_speed_yields_infinite_time() {
    let elapsed = travel_time(0.0, &[1.0, 1.0], &[2.0, 2.0], "euclidean", &no_config()).unwrap();
    assert!(elapsed.is_infinite());
}

#[test]
fn typed_metrics_match_the_name_driven_path() {
    let x = [1.0, -2.5, 3.0];
    let y = [0.5, 4.0, -1.0];

    let by_name = distance(&x, &y, "euclidean", &no_config()).unwrap();
    let typed = Metric::Euclidean.distance(&x, &y).unwrap();
    assert!(approx_eq!(f64, by_name, typed, epsilon = 1e-12));

    let by_name = distance(&x, &y, "pnorm", &exponent(3.0)).unwrap();
    let typed = Metric::PNorm(PNormConfig { exponent: Some(3.0) })
        .distance(&x, &y)
        .unwrap();
    assert!(approx_eq!(f64, by_name, typed, epsilon = 1e-12));

    let sphere = Metric::Sphere(RadiusConfig { radius: 2.0 });
    let by_name = distance(&[0.0, 0.0], &[PI, 0.0], "sphere", &radius(2.0)).unwrap();
    let typed = sphere.distance(&[0.0, 0.0], &[PI, 0.0]).unwrap();
    assert!(approx_eq!(f64, by_name, typed, epsilon = 1e-12));
}

#[test]
fn parsed_metrics_report_canonical_names() {
    let config = MethodConfig {
        exponent: Some(2.0),
        radius: Some(1.0),
    };

    for name in METHOD_NAMES {
        let metric: Metric<f64> = Metric::parse(name, &config).unwrap();
        let canonical = metric.name();
        match name {
            "cityblock" => assert_eq!(canonical, "manhattan"),
            "max" => assert_eq!(canonical, "chebyshev"),
            _ => assert_eq!(canonical, name),
        }
        assert_eq!(metric.to_string(), canonical);
    }
}

#[test]
fn typed_travel_time_matches_distance_over_speed() {
    let metric = Metric::Geographical(RadiusConfig { radius: 6371.0 });
    let a = [41.8, -71.4];
    let b = [51.5, -0.1];

    let d = metric.distance(&a, &b).unwrap();
    let t = metric.travel_time(800.0, &a, &b).unwrap();
    assert!(approx_eq!(f64, t, d / 800.0, epsilon = 1e-9));
}
