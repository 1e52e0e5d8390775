use std::fmt;
use std::path::{Path, PathBuf};

use abundances::{Abundances, SolarAbundances};
use imf::{Imf, ImfKind, ImfParams};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use stellar::constants::BIN_FRACTION;
use stellar::{BinaryPopulation, DelayTimeDistribution};

use crate::error::{SettingsError, SettingsResult};

/// Time grid used to integrate the stellar yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationStep {
    Logt,
    T,
    TwoStepsT,
    FixedNSteps,
}

impl IntegrationStep {
    pub const ALL: [IntegrationStep; 4] = [
        IntegrationStep::Logt,
        IntegrationStep::T,
        IntegrationStep::TwoStepsT,
        IntegrationStep::FixedNSteps,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            IntegrationStep::Logt => "logt",
            IntegrationStep::T => "t",
            IntegrationStep::TwoStepsT => "two_steps_t",
            IntegrationStep::FixedNSteps => "fixed_n_steps",
        }
    }
}

impl fmt::Display for IntegrationStep {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningMode {
    /// Emit a sample warning, used to check the reporting path
    Test,
}

/// `deprecation_warnings` accepts a flag or the string `"test"`.
///
/// Any other value is kept as given and reports no deprecations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeprecationWarnings {
    Enabled(bool),
    Mode(WarningMode),
    Other(Value),
}

/// Parameters of a chemical evolution run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Metallicity
    pub z: f64,
    pub sol_ab: SolarAbundances,
    pub imf: ImfKind,
    pub imf_alpha: f64,
    pub imf_m_low: f64,
    pub imf_m_up: f64,
    /// Lightest star followed by the yield integration (M☉)
    pub m_min: f64,
    /// Heaviest star followed by the yield integration (M☉)
    pub m_max: f64,
    pub total_time_steps: u32,
    pub binary_fraction: f64,
    pub dtd_sn: DelayTimeDistribution,
    pub dtd_correction_factor: f64,
    pub output_dir: PathBuf,
    pub matrix_headers: bool,
    pub return_fractions: bool,
    pub integration_step: IntegrationStep,
    pub deprecation_warnings: DeprecationWarnings,
    pub expelled_elements_filename: PathBuf,
    #[serde(
        rename = "integration_steps_stars_bigger_than_4Msun",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub steps_above_4_msun: Option<u32>,
    #[serde(
        rename = "integration_steps_stars_smaller_than_4Msun",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub steps_below_4_msun: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            z: 0.02,
            sol_ab: SolarAbundances::Asplund2009,
            imf: ImfKind::Kroupa,
            imf_alpha: 2.35,
            imf_m_low: 0.15,
            imf_m_up: 100.0,
            m_min: 0.98,
            m_max: 40.0,
            total_time_steps: 300,
            binary_fraction: BIN_FRACTION,
            dtd_sn: DelayTimeDistribution::RuizLapuente,
            dtd_correction_factor: 1.0,
            output_dir: PathBuf::from("results"),
            matrix_headers: true,
            return_fractions: false,
            integration_step: IntegrationStep::Logt,
            deprecation_warnings: DeprecationWarnings::Enabled(true),
            expelled_elements_filename: Path::new("sample_input").join("expelled_elements"),
            steps_above_4_msun: None,
            steps_below_4_msun: None,
        }
    }
}

impl Settings {
    /// Validated settings from a JSON object of overrides.
    pub fn from_json_str(json: &str) -> SettingsResult<Self> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(params) => crate::validation::validate(&params),
            other => Err(SettingsError::NotAnObject(other.to_string())),
        }
    }

    /// Validated settings from a JSON parameter file.
    pub fn from_path(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn imf_params(&self) -> ImfParams {
        ImfParams {
            alpha: self.imf_alpha,
            m_low: self.imf_m_low,
            m_up: self.imf_m_up,
        }
    }

    /// The normalized IMF these settings select.
    pub fn build_imf(&self) -> SettingsResult<Imf> {
        Ok(Imf::new(self.imf, self.imf_params())?)
    }

    pub fn abundances(&self) -> Abundances {
        Abundances::new(self.sol_ab, self.z)
    }

    pub fn binary_population(&self) -> BinaryPopulation {
        BinaryPopulation::with_binary_fraction(self.binary_fraction)
    }

    /// Type Ia rate of the selected DTD at `t` Gyr, scaled by the
    /// correction factor.
    pub fn sn_ia_rate(&self, t: f64) -> f64 {
        self.dtd_correction_factor * self.dtd_sn.rate(t)
    }
}
