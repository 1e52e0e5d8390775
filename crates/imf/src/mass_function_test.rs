use approx::assert_relative_eq;

use crate::error::ImfError;
use crate::kind::ImfKind;
use crate::mass_function::{Imf, ImfParams, InitialMassFunction};

fn imf(kind: ImfKind) -> Imf {
    Imf::new(kind, ImfParams::default()).unwrap()
}

#[test]
fn every_imf_forms_one_solar_mass() {
    for kind in ImfKind::ALL {
        let imf = imf(kind);
        assert_relative_eq!(imf.mass_between(0.15, 100.0), 1.0, max_relative = 1e-9);
    }
}

#[test]
fn salpeter_normalization_matches_closed_form() {
    // ∫ m^(1 - 2.35) dm over [0.15, 100]
    let integral = (100f64.powf(-0.35) - 0.15f64.powf(-0.35)) / -0.35;
    let salpeter = imf(ImfKind::Salpeter);

    assert_relative_eq!(salpeter.normalization(), 1.0 / integral, max_relative = 1e-8);
    assert_relative_eq!(salpeter.normalization(), 0.2008026114055182, max_relative = 1e-8);
}

#[test]
fn for_mass_is_zero_outside_limits() {
    let kroupa = imf(ImfKind::Kroupa);

    assert_eq!(kroupa.for_mass(0.1), 0.0);
    assert_eq!(kroupa.for_mass(100.5), 0.0);
    assert!(kroupa.for_mass(0.15) > 0.0);
    assert!(kroupa.for_mass(100.0) > 0.0);
}

#[test]
fn kroupa_regression_values() {
    let kroupa = imf(ImfKind::Kroupa);

    assert_relative_eq!(kroupa.for_mass(1.0), 0.23429508375888078, max_relative = 1e-8);
    assert_relative_eq!(kroupa.number_between(0.15, 100.0), 1.279900477155681, max_relative = 1e-8);
    assert_relative_eq!(kroupa.mass_between(8.0, 100.0), 0.22234454133803327, max_relative = 1e-8);
}

#[test]
fn most_stars_are_below_a_solar_mass() {
    for kind in ImfKind::ALL {
        let imf = imf(kind);
        let fraction = imf.number_between(0.15, 1.0) / imf.number_between(0.15, 100.0);
        assert!(
            fraction > 0.8 && fraction < 0.95,
            "{}: fraction below 1 M☉ is {}",
            kind,
            fraction
        );
    }
}

#[test]
fn integrals_clamp_to_mass_limits() {
    let chabrier = imf(ImfKind::Chabrier);

    assert_relative_eq!(
        chabrier.number_between(0.01, 500.0),
        chabrier.number_between(0.15, 100.0)
    );
    assert_eq!(chabrier.number_between(120.0, 150.0), 0.0);
    assert_eq!(chabrier.mass_between(5.0, 2.0), 0.0);
}

#[test]
fn invalid_mass_ranges_are_rejected() {
    let inverted = ImfParams {
        m_low: 10.0,
        m_up: 1.0,
        ..ImfParams::default()
    };
    let massless = ImfParams {
        m_low: 0.0,
        ..ImfParams::default()
    };

    assert_eq!(
        Imf::new(ImfKind::Salpeter, inverted),
        Err(ImfError::InvalidMassRange {
            m_low: 10.0,
            m_up: 1.0
        })
    );
    assert!(Imf::new(ImfKind::Kroupa, massless).is_err());
}

#[test]
fn closures_are_mass_functions() {
    let flat = |_mass: f64| 2.0;

    assert_eq!(flat.for_mass(7.0), 2.0);
}

#[test]
fn description_names_the_paper() {
    assert_eq!(imf(ImfKind::Kroupa).description(), "Kroupa 2001");
    assert_eq!(imf(ImfKind::MillerScalo).description(), "Miller & Scalo 1979");
}
