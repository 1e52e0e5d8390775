use abundances::SolarAbundances;
use imf::ImfKind;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use stellar::{max_mass_allowed, DelayTimeDistribution};
use tracing::{debug, warn};

use crate::error::SettingsResult;
use crate::params::{DeprecationWarnings, IntegrationStep, Settings, WarningMode};

type Params = Map<String, Value>;

/// Mass limits forced by the Starburst99 IMF (M☉)
const STARBURST_MASS_RANGE: (f64, f64) = (1.0, 120.0);

/// Limits `value` to `interval.0 ..= interval.1`.
pub fn clamp_to_interval(value: f64, interval: (f64, f64)) -> f64 {
    value.max(interval.0).min(interval.1)
}

/// Defaults that depend on the chosen integration step.
fn integration_step_defaults(step: IntegrationStep) -> Params {
    let mut extra = Params::new();
    match step {
        IntegrationStep::FixedNSteps => {
            extra.insert(
                "integration_steps_stars_bigger_than_4Msun".into(),
                Value::from(150),
            );
            extra.insert(
                "integration_steps_stars_smaller_than_4Msun".into(),
                Value::from(90),
            );
        }
        IntegrationStep::Logt | IntegrationStep::T => {
            extra.insert("total_time_steps".into(), Value::from(300));
        }
        IntegrationStep::TwoStepsT => {}
    }
    extra
}

/// Default parameters, completed with the extra defaults of the
/// integration step requested in `params`.
pub fn default_settings(params: &Params) -> SettingsResult<Params> {
    let mut defaults = match serde_json::to_value(Settings::default())? {
        Value::Object(map) => map,
        _ => Params::new(),
    };

    let step = params
        .get("integration_step")
        .and_then(parse::<IntegrationStep>);
    if let Some(step) = step {
        defaults.extend(integration_step_defaults(step));
    }

    Ok(defaults)
}

fn parse<T: DeserializeOwned>(value: &Value) -> Option<T> {
    serde_json::from_value(value.clone()).ok()
}

/// Keys restricted to a fixed set of values, with the accepted values.
fn enumerated_keys() -> [(&'static str, Vec<&'static str>); 4] {
    [
        ("imf", ImfKind::ALL.iter().map(|kind| kind.key()).collect()),
        (
            "dtd_sn",
            DelayTimeDistribution::ALL.iter().map(|dtd| dtd.key()).collect(),
        ),
        (
            "sol_ab",
            SolarAbundances::ALL.iter().map(|source| source.key()).collect(),
        ),
        (
            "integration_step",
            IntegrationStep::ALL.iter().map(|step| step.key()).collect(),
        ),
    ]
}

fn is_valid(key: &str, value: &Value) -> bool {
    match key {
        "imf" => parse::<ImfKind>(value).is_some(),
        "dtd_sn" => parse::<DelayTimeDistribution>(value).is_some(),
        "sol_ab" => parse::<SolarAbundances>(value).is_some(),
        "integration_step" => parse::<IntegrationStep>(value).is_some(),
        _ => true,
    }
}

/// Merges `params` over the defaults and repairs what it can.
///
/// * invalid choices for `imf`, `dtd_sn`, `sol_ab` and `integration_step`
///   fall back to their defaults
/// * `binary_fraction` is kept inside `[0, 1]`
/// * `m_max` is capped at [`max_mass_allowed`] for the metallicity
/// * the Starburst99 IMF always spans 1 to 120 M☉
/// * unknown keys are dropped
///
/// Every repair is logged as a warning.
///
/// # Errors
/// Malformed values for the remaining keys, and metallicities outside the
/// lifetime fit's domain.
pub fn validate(params: &Params) -> SettingsResult<Settings> {
    let defaults = default_settings(params)?;
    let mut merged = defaults.clone();
    merged.extend(params.clone());

    for (key, valid_values) in enumerated_keys() {
        let (Some(value), Some(default)) = (merged.get(key), defaults.get(key)) else {
            continue;
        };
        if !is_valid(key, value) {
            warn!(
                "Provided value for {} is incorrect ({}). Valid values: {:?}. Using default value: {}",
                key, value, valid_values, default
            );
            merged.insert(key.to_string(), default.clone());
        }
    }

    merged.retain(|key, _| {
        let known = defaults.contains_key(key);
        if !known {
            warn!("{} is not a valid key: Ignored", key);
        }
        known
    });

    let mut settings: Settings = serde_json::from_value(Value::Object(merged))?;

    let binary_fraction = clamp_to_interval(settings.binary_fraction, (0.0, 1.0));
    if binary_fraction != settings.binary_fraction {
        warn!(
            "Binary fraction {} is outside [0, 1]. Using {}",
            settings.binary_fraction, binary_fraction
        );
        settings.binary_fraction = binary_fraction;
    }

    let ceiling = max_mass_allowed(settings.z)?;
    debug!(z = settings.z, ceiling, "Lifetime fit mass ceiling");
    if settings.m_max > ceiling {
        warn!(
            "Maximum mass is bigger than the allowed mass for z: {}. Using m_max value: {} solar masses",
            settings.z, ceiling
        );
        settings.m_max = ceiling;
    }

    if settings.imf == ImfKind::Starburst {
        (settings.imf_m_low, settings.imf_m_up) = STARBURST_MASS_RANGE;
    }

    deprecation_warnings(&settings);

    Ok(settings)
}

/// Collects and logs the deprecation notices that apply to `settings`.
pub fn deprecation_warnings(settings: &Settings) -> Vec<String> {
    let mut messages = Vec::new();

    match settings.deprecation_warnings {
        DeprecationWarnings::Enabled(false) => return messages,
        DeprecationWarnings::Mode(WarningMode::Test) => {
            messages.push("Deprecation warnings show here.".to_string());
        }
        DeprecationWarnings::Enabled(true) | DeprecationWarnings::Other(_) => {}
    }

    for message in &messages {
        warn!("Deprecation warning: {}", message);
    }

    messages
}
