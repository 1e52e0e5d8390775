use approx::assert_relative_eq;

use crate::error::DomainError;
use crate::lifetime::{max_mass_allowed, stellar_lifetime, stellar_mass, tau_coefficients};

#[test]
fn tau_coefficients_at_z_1e4() {
    // log z = -4 exactly
    let c = tau_coefficients(1e-4).unwrap();

    assert_relative_eq!(c.a0, 9.698776, epsilon = 1e-12);
    assert_relative_eq!(c.a1, -3.1476, epsilon = 1e-12);
    assert_relative_eq!(c.a2, 0.77472, epsilon = 1e-12);
}

#[test]
fn tau_coefficients_reject_non_positive_metallicity() {
    assert_eq!(
        tau_coefficients(0.0),
        Err(DomainError::NonPositiveMetallicity(0.0))
    );
    assert_eq!(
        tau_coefficients(-0.01),
        Err(DomainError::NonPositiveMetallicity(-0.01))
    );
}

#[test]
fn solar_mass_star_lives_about_ten_gyr() {
    let tau = stellar_lifetime(1.0, 0.02).unwrap();

    assert!(tau > 9.0 && tau < 10.0, "Lifetime {} should be 9-10 Gyr", tau);
    assert_relative_eq!(tau, 9.51577742397751, max_relative = 1e-10);
}

#[test]
fn massive_stars_die_young() {
    let tau = stellar_lifetime(8.0, 0.02).unwrap();

    assert_relative_eq!(tau, 0.03798295315071234, max_relative = 1e-9);
}

#[test]
fn lifetime_rejects_non_positive_mass() {
    assert_eq!(
        stellar_lifetime(0.0, 0.02),
        Err(DomainError::NonPositiveMass(0.0))
    );
    assert!(matches!(
        stellar_lifetime(1.0, 0.0),
        Err(DomainError::NonPositiveMetallicity(_))
    ));
}

#[test]
fn lifetime_decreases_with_mass_below_ceiling() {
    let z = 0.02;
    let max_mass = max_mass_allowed(z).unwrap();

    let mut previous = f64::INFINITY;
    let mut mass = 0.1;
    while mass < max_mass {
        let tau = stellar_lifetime(mass, z).unwrap();
        assert!(
            tau < previous,
            "Lifetime at {} M☉ ({} Gyr) should be below {}",
            mass,
            tau,
            previous
        );
        previous = tau;
        mass *= 1.1;
    }
}

#[test]
fn stellar_mass_inverts_lifetime() {
    for &z in &[1e-4, 0.004, 0.02, 0.05] {
        for &mass in &[0.1, 0.8, 1.0, 3.0, 8.0, 40.0] {
            let tau = stellar_lifetime(mass, z).unwrap();
            let recovered = stellar_mass(tau, z).unwrap();
            assert_relative_eq!(recovered, mass, max_relative = 1e-6);
        }
    }
}

#[test]
fn stellar_mass_of_solar_lifetime() {
    let mass = stellar_mass(10.0, 0.02).unwrap();

    assert_relative_eq!(mass, 0.9856050292, epsilon = 2e-10);
}

#[test]
fn stellar_mass_is_rounded_to_ten_decimals() {
    let mass = stellar_mass(3.7, 0.008).unwrap();
    let scaled = mass * 1e10;

    assert_relative_eq!(scaled, scaled.round(), epsilon = 1e-3);
}

#[test]
fn stellar_mass_rejects_lifetime_below_fit_range() {
    // The shortest lifetime reached at z = 0.02 is ~3.3 Myr.
    match stellar_mass(1e-3, 0.02) {
        Err(DomainError::NegativeDiscriminant {
            tau,
            z,
            discriminant,
        }) => {
            assert_eq!(tau, 1e-3);
            assert_eq!(z, 0.02);
            assert!(discriminant < 0.0);
        }
        other => panic!("Expected a negative discriminant, got {:?}", other),
    }
}

#[test]
fn stellar_mass_rejects_non_positive_lifetime() {
    assert_eq!(
        stellar_mass(0.0, 0.02),
        Err(DomainError::NonPositiveLifetime(0.0))
    );
    assert_eq!(
        stellar_mass(-1.0, 0.02),
        Err(DomainError::NonPositiveLifetime(-1.0))
    );
}

#[test]
fn max_mass_allowed_regression_values() {
    assert_eq!(max_mass_allowed(0.02).unwrap(), 106.0);
    assert_eq!(max_mass_allowed(1e-4).unwrap(), 107.0);
    assert_eq!(max_mass_allowed(0.004).unwrap(), 126.0);
    assert_eq!(max_mass_allowed(0.05).unwrap(), 92.0);
}

#[test]
fn max_mass_allowed_is_the_turning_point() {
    let z = 0.02;
    let c = tau_coefficients(z).unwrap();
    let log_peak = c.turning_point();

    // The derivative of log τ changes sign at the turning point.
    let slope = |log_m: f64| c.a1 + 2.0 * c.a2 * log_m;
    assert!(slope(log_peak - 0.01) < 0.0);
    assert!(slope(log_peak + 0.01) > 0.0);

    let ceiling = max_mass_allowed(z).unwrap();
    assert!(ceiling <= 10f64.powf(log_peak));
    assert!(ceiling + 1.0 > 10f64.powf(log_peak));
}
