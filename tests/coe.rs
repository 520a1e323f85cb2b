extern crate kepler_state;

use approx::abs_diff_eq;
use kepler_state::cosmic::{assert_coe_eq_or_abs, Coe};
use kepler_state::{gcrf, AstroError};

/// GMAT value for the Earth gravitational parameter, km^3/s^2
const EARTH_GM_KM3_S2: f64 = 398600.4415;

#[test]
fn circular_equatorial_scenario() {
    let coe = Coe::new(7000.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    let state = coe.cartesian_state(398600.4418, &gcrf()).unwrap();

    assert!(abs_diff_eq!(state.position_km[0], 7000.0, epsilon = 1e-9));
    assert!(abs_diff_eq!(state.position_km[1], 0.0, epsilon = 1e-9));
    assert!(abs_diff_eq!(state.position_km[2], 0.0, epsilon = 1e-9));

    // Expected speed is sqrt(gm / sma) ~= 7.546 km/s, perpendicular to the radius
    let speed = state.velocity_km_s.norm();
    assert!(abs_diff_eq!(speed, 7.546053290107541, epsilon = 1e-9));
    assert!(state.position_km.dot(&state.velocity_km_s).abs() < 1e-9);
}

#[test]
fn cartesian_round_trip_leo() {
    let coe = Coe::new(7712.186, 0.158, 53.75, 135.0, 90.0, 25.43);
    let state = coe.cartesian_state(EARTH_GM_KM3_S2, &gcrf()).unwrap();
    let rtn = Coe::from_cartesian(&state, EARTH_GM_KM3_S2).unwrap();
    assert_coe_eq_or_abs(&rtn, &coe, 1e-6, "LEO element round trip");
}

#[test]
fn circular_inclined_uses_argument_of_latitude() {
    if pretty_env_logger::try_init().is_err() {
        println!("could not init env_logger");
    }
    // AOP is ill-defined on a circular orbit: the extraction sets it to zero
    // and folds the in-plane angle into the true anomaly slot.
    let coe = Coe::new(7000.0, 0.0, 60.0, 30.0, 0.0, 40.0);
    let state = coe.cartesian_state(EARTH_GM_KM3_S2, &gcrf()).unwrap();
    let rtn = Coe::from_cartesian(&state, EARTH_GM_KM3_S2).unwrap();

    assert!(abs_diff_eq!(rtn.sma_km().unwrap(), 7000.0, epsilon = 1e-6));
    assert!(rtn.ecc().unwrap() < 1e-10);
    assert!(abs_diff_eq!(rtn.inc_deg().unwrap(), 60.0, epsilon = 1e-6));
    assert!(abs_diff_eq!(rtn.raan_deg().unwrap(), 30.0, epsilon = 1e-6));
    assert_eq!(rtn.aop_deg().unwrap(), 0.0);
    assert!(abs_diff_eq!(rtn.ta_deg().unwrap(), 40.0, epsilon = 1e-6));
}

#[test]
fn equatorial_elliptical_uses_longitude_of_periapsis() {
    if pretty_env_logger::try_init().is_err() {
        println!("could not init env_logger");
    }
    // RAAN is ill-defined on an equatorial orbit: the extraction sets it to
    // zero and measures the AOP from the frame x-axis.
    let coe = Coe::new(8000.0, 0.2, 0.0, 0.0, 75.0, 30.0);
    let state = coe.cartesian_state(EARTH_GM_KM3_S2, &gcrf()).unwrap();
    let rtn = Coe::from_cartesian(&state, EARTH_GM_KM3_S2).unwrap();

    assert!(abs_diff_eq!(rtn.ecc().unwrap(), 0.2, epsilon = 1e-10));
    assert_eq!(rtn.raan_deg().unwrap(), 0.0);
    assert!(abs_diff_eq!(rtn.aop_deg().unwrap(), 75.0, epsilon = 1e-6));
    assert!(abs_diff_eq!(rtn.ta_deg().unwrap(), 30.0, epsilon = 1e-6));
}

#[test]
fn circular_equatorial_uses_true_longitude() {
    if pretty_env_logger::try_init().is_err() {
        println!("could not init env_logger");
    }
    let coe = Coe::new(42164.0, 0.0, 0.0, 0.0, 0.0, 123.0);
    let state = coe.cartesian_state(EARTH_GM_KM3_S2, &gcrf()).unwrap();
    let rtn = Coe::from_cartesian(&state, EARTH_GM_KM3_S2).unwrap();

    assert_eq!(rtn.raan_deg().unwrap(), 0.0);
    assert_eq!(rtn.aop_deg().unwrap(), 0.0);
    assert!(abs_diff_eq!(rtn.ta_deg().unwrap(), 123.0, epsilon = 1e-6));
}

#[test]
fn period_and_mean_motion() {
    let coe = Coe::new(7712.186117895043, 0.0009995, 63.434, 135.0, 90.0, 0.0);
    let period = coe.orbital_period(EARTH_GM_KM3_S2).unwrap();
    assert!(abs_diff_eq!(
        period.to_seconds(),
        6740.269063643045,
        epsilon = 1e-6
    ));
    assert!(abs_diff_eq!(
        coe.mean_motion_rad_s(EARTH_GM_KM3_S2).unwrap(),
        9.321861260807874e-4,
        epsilon = 1e-15
    ));
}

#[test]
fn derived_anomalies_match_the_solver() {
    let coe = Coe::new(8000.0, 0.1, 10.0, 20.0, 30.0, 90.0);
    let ea_deg = Coe::eccentric_anomaly_from_true_anomaly(90.0, 0.1).unwrap();
    let ma_deg = Coe::mean_anomaly_from_eccentric_anomaly(ea_deg, 0.1).unwrap();
    assert_eq!(coe.ea_deg().unwrap(), ea_deg);
    assert_eq!(coe.ma_deg().unwrap(), ma_deg);
    // and back through the static Kepler solve
    let rtn_ea_deg = Coe::eccentric_anomaly_from_mean_anomaly(ma_deg, 0.1, 1e-12).unwrap();
    assert!(abs_diff_eq!(rtn_ea_deg, ea_deg, epsilon = 1e-9));
}

#[test]
fn static_anomaly_forwards() {
    assert_eq!(
        Coe::eccentric_anomaly_from_mean_anomaly(0.0, 0.5, 1e-10).unwrap(),
        0.0
    );
    let ea_deg = Coe::eccentric_anomaly_from_true_anomaly(45.0, 0.3).unwrap();
    let ta_deg = Coe::true_anomaly_from_eccentric_anomaly(ea_deg, 0.3).unwrap();
    assert!(abs_diff_eq!(ta_deg, 45.0, epsilon = 1e-9));
}

#[test]
fn undefined_elements_fail_fast() {
    let coe = Coe::undefined();
    assert!(!coe.is_defined());

    assert!(matches!(
        coe.sma_km(),
        Err(AstroError::UndefinedValue { .. })
    ));
    assert!(matches!(coe.ecc(), Err(AstroError::UndefinedValue { .. })));
    assert!(matches!(
        coe.inc_deg(),
        Err(AstroError::UndefinedValue { .. })
    ));
    assert!(matches!(
        coe.raan_deg(),
        Err(AstroError::UndefinedValue { .. })
    ));
    assert!(matches!(
        coe.aop_deg(),
        Err(AstroError::UndefinedValue { .. })
    ));
    assert!(matches!(
        coe.ta_deg(),
        Err(AstroError::UndefinedValue { .. })
    ));
    assert!(matches!(coe.ea_deg(), Err(AstroError::UndefinedValue { .. })));
    assert!(matches!(coe.ma_deg(), Err(AstroError::UndefinedValue { .. })));
    assert!(matches!(
        coe.orbital_period(EARTH_GM_KM3_S2),
        Err(AstroError::UndefinedValue { .. })
    ));
    assert!(matches!(
        coe.cartesian_state(EARTH_GM_KM3_S2, &gcrf()),
        Err(AstroError::UndefinedValue { .. })
    ));
}

#[test]
fn inclination_is_stored_as_provided() {
    if pretty_env_logger::try_init().is_err() {
        println!("could not init env_logger");
    }
    // The constructor bounds the other angles but keeps the inclination,
    // warning when it is outside [0, 180] deg.
    let retrograde = Coe::new(7000.0, 0.01, 190.0, 400.0, -20.0, 370.0);
    assert_eq!(retrograde.inc_deg().unwrap(), 190.0);
    assert_eq!(retrograde.raan_deg().unwrap(), 40.0);
    assert_eq!(retrograde.aop_deg().unwrap(), 340.0);
    assert_eq!(retrograde.ta_deg().unwrap(), 10.0);

    let negative = Coe::new(7000.0, 0.01, -5.0, 0.0, 0.0, 0.0);
    assert_eq!(negative.inc_deg().unwrap(), -5.0);
}

#[test]
fn equality_is_component_wise() {
    let coe = Coe::new(7000.0, 0.01, 51.6, 40.0, 20.0, 10.0);
    let same = Coe::new(7000.0, 0.01, 51.6, 40.0, 20.0, 10.0);
    // reflexive and symmetric
    assert_eq!(coe, coe);
    assert_eq!(coe, same);
    assert_eq!(same, coe);

    let perturbed = Coe::new(7000.0, 0.01, 51.6, 40.0, 20.0, 10.1);
    assert_ne!(coe, perturbed);

    assert_eq!(Coe::undefined(), Coe::undefined());
    assert_ne!(coe, Coe::undefined());
}

#[test]
fn element_rendering() {
    let coe = Coe::new(7000.0, 0.01, 51.6, 40.0, 20.0, 10.0);
    let plain = format!("{coe}");
    assert!(plain.contains("sma = 7000.000000 km"));
    assert!(plain.contains("ta = 10.000000 deg"));
    assert!(!plain.contains("--"));

    let decorated = format!("{coe:#}");
    assert!(decorated.starts_with(
        "-- Classical Orbital Elements ----------------------------------------\n"
    ));
    assert!(decorated.ends_with(
        "\n----------------------------------------------------------------------"
    ));

    let undef = format!("{}", Coe::undefined());
    assert!(undef.contains("sma = undefined km"));
}

#[test]
fn apsis_radii_and_semi_parameter() {
    let coe = Coe::new(8000.0, 0.1, 28.5, 0.0, 0.0, 0.0);
    assert!(abs_diff_eq!(
        coe.periapsis_km().unwrap(),
        7200.0,
        epsilon = 1e-9
    ));
    assert!(abs_diff_eq!(
        coe.apoapsis_km().unwrap(),
        8800.0,
        epsilon = 1e-9
    ));
    assert!(abs_diff_eq!(
        coe.semi_parameter_km().unwrap(),
        8000.0 * (1.0 - 0.01),
        epsilon = 1e-9
    ));
}
