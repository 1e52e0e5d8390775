use approx::assert_relative_eq;

use crate::dtd::{
    dtd_mannucci_della_valle_panagia, dtd_ruiz_lapuente, total_energy_ejected,
    DelayTimeDistribution,
};

/// Time in Gyr for a given log10 of years
fn gyr(logt: f64) -> f64 {
    10f64.powf(logt - 9.0)
}

#[test]
fn energy_is_zero_without_elapsed_time() {
    assert_eq!(total_energy_ejected(0.0), 0.0);
    assert_eq!(total_energy_ejected(-1.0), 0.0);
}

#[test]
fn energy_is_linear_before_tc() {
    assert_relative_eq!(total_energy_ejected(1e-5), 8.67e-2, max_relative = 1e-12);
    assert_relative_eq!(total_energy_ejected(5.3e-5), 0.45951, max_relative = 1e-12);
}

#[test]
fn energy_branches_at_tc() {
    // The published fits do not meet exactly: the late-time branch starts
    // at 1 - 0.44 * 0.59 - 0.22 = 0.5204 while the linear one ends at 0.4595.
    let before = total_energy_ejected(5.3e-5);
    let after = total_energy_ejected(5.3e-5 * (1.0 + 1e-12));

    assert_relative_eq!(after, 0.5204, epsilon = 1e-9);
    assert!((after - before).abs() < 0.07);
}

#[test]
fn energy_approaches_unity() {
    let mut previous = total_energy_ejected(1e-4);
    for &t in &[1e-3, 1e-2, 0.1, 1.0, 13.0] {
        let fraction = total_energy_ejected(t);
        assert!(fraction > previous && fraction <= 1.0);
        previous = fraction;
    }
    assert_relative_eq!(total_energy_ejected(1.0), 0.9997507441340956, max_relative = 1e-10);
}

#[test]
fn ruiz_lapuente_is_zero_without_elapsed_time() {
    assert_eq!(dtd_ruiz_lapuente(0.0), 0.0);
    assert_eq!(dtd_ruiz_lapuente(-3.0), 0.0);
}

#[test]
fn ruiz_lapuente_is_zero_before_first_events() {
    assert_eq!(dtd_ruiz_lapuente(gyr(7.79)), 0.0);
    assert_eq!(dtd_ruiz_lapuente(gyr(6.0)), 0.0);
    assert_eq!(dtd_ruiz_lapuente(1e-4), 0.0);
}

#[test]
fn ruiz_lapuente_starts_just_after_threshold() {
    let rate = dtd_ruiz_lapuente(gyr(7.801));

    assert!(rate > 0.0, "Rate {} should be positive", rate);
    assert_relative_eq!(rate, 0.00245, max_relative = 0.01);
}

#[test]
fn ruiz_lapuente_regression_values() {
    assert_relative_eq!(dtd_ruiz_lapuente(1.0), 0.001506735253372351, max_relative = 1e-9);
    assert_relative_eq!(dtd_ruiz_lapuente(0.1), 0.003443337566614688, max_relative = 1e-9);
}

#[test]
fn mannucci_is_zero_without_elapsed_time() {
    assert_eq!(dtd_mannucci_della_valle_panagia(0.0), 0.0);
    assert_eq!(dtd_mannucci_della_valle_panagia(-0.5), 0.0);
}

#[test]
fn mannucci_is_positive_over_cosmic_time() {
    let mut t = 1e-3;
    while t < 14.0 {
        let rate = dtd_mannucci_della_valle_panagia(t);
        assert!(rate > 0.0, "Rate at {} Gyr should be positive", t);
        t *= 1.25;
    }
}

#[test]
fn mannucci_prompt_and_tardy_components_at_split() {
    // log DTD is 1.4 - 50 * 0.23² = -1.245 on the prompt side and
    // -0.8 - 0.9 * 0.77² = -1.33361 on the tardy side.
    let prompt = dtd_mannucci_della_valle_panagia(gyr(7.9299));
    let tardy = dtd_mannucci_della_valle_panagia(gyr(7.9301));

    assert_relative_eq!(prompt, (-1.245f64).exp(), max_relative = 1e-2);
    assert_relative_eq!(tardy, (-1.33361f64).exp(), max_relative = 1e-3);
}

#[test]
fn mannucci_regression_values() {
    assert_relative_eq!(
        dtd_mannucci_della_valle_panagia(1.0),
        0.4143683360922422,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        dtd_mannucci_della_valle_panagia(0.05),
        4.054984866278529,
        max_relative = 1e-9
    );
}

#[test]
fn selected_distribution_dispatches() {
    for t in [0.05, 0.5, 5.0] {
        assert_eq!(
            DelayTimeDistribution::RuizLapuente.rate(t),
            dtd_ruiz_lapuente(t)
        );
        assert_eq!(
            DelayTimeDistribution::MannucciDellaVallePanagia.rate(t),
            dtd_mannucci_della_valle_panagia(t)
        );
    }
}

#[test]
fn distribution_names_and_keys() {
    for dtd in DelayTimeDistribution::ALL {
        assert!(!dtd.to_string().is_empty());
        assert!(matches!(dtd.key(), "rlp" | "mdvp"));
    }
}
