use std::f64::consts::LN_10;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ImfError;

/// Published initial mass functions.
///
/// [`ImfKind::shape`] returns dN/dm up to a constant; normalization is done
/// by [`crate::Imf`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImfKind {
    Salpeter,
    Starburst,
    Chabrier,
    Ferrini,
    Kroupa,
    MillerScalo,
    Maschberger,
}

impl ImfKind {
    pub const ALL: [ImfKind; 7] = [
        ImfKind::Salpeter,
        ImfKind::Starburst,
        ImfKind::Chabrier,
        ImfKind::Ferrini,
        ImfKind::Kroupa,
        ImfKind::MillerScalo,
        ImfKind::Maschberger,
    ];

    /// Key used in parameter files.
    pub fn key(&self) -> &'static str {
        match self {
            ImfKind::Salpeter => "salpeter",
            ImfKind::Starburst => "starburst",
            ImfKind::Chabrier => "chabrier",
            ImfKind::Ferrini => "ferrini",
            ImfKind::Kroupa => "kroupa",
            ImfKind::MillerScalo => "miller_scalo",
            ImfKind::Maschberger => "maschberger",
        }
    }

    /// Unnormalized number of stars per unit mass at `mass` M☉.
    ///
    /// `alpha` is the slope of the Salpeter power law and is ignored by the
    /// other shapes.
    pub fn shape(&self, mass: f64, alpha: f64) -> f64 {
        if mass <= 0.0 {
            return 0.0;
        }
        match self {
            // Salpeter (1955)
            ImfKind::Salpeter => mass.powf(-alpha),

            // Starburst99 default: 1.3 below 0.5 M☉, 2.3 above
            ImfKind::Starburst => match mass {
                m if m < 0.5 => 0.5f64.powf(-1.0) * m.powf(-1.3),
                m => m.powf(-2.3),
            },

            // Chabrier (2003) system IMF, lognormal below 1 M☉
            ImfKind::Chabrier => match mass {
                m if m <= 1.0 => {
                    let x = (m.log10() - 0.079f64.log10()) / 0.69;
                    0.158 * (-0.5 * x * x).exp() / (m * LN_10)
                }
                m => 0.0443 * m.powf(-2.3) / LN_10,
            },

            // Ferrini, Palla & Penco (1990)
            ImfKind::Ferrini => {
                let log_m = mass.log10();
                let exponent = (0.73 + 1.92 * log_m + 2.07 * log_m * log_m).sqrt();
                2.01 * mass.powf(-1.52) / 10f64.powf(exponent)
            }

            // Kroupa (2001), continuous at 0.08 and 0.5 M☉
            ImfKind::Kroupa => match mass {
                m if m < 0.08 => 0.5f64.powf(-1.0) * 0.08f64.powf(-1.0) * m.powf(-0.3),
                m if m < 0.5 => 0.5f64.powf(-1.0) * m.powf(-1.3),
                m => m.powf(-2.3),
            },

            // Miller & Scalo (1979), lognormal in log m
            ImfKind::MillerScalo => {
                let x = (mass.log10() + 1.02) / 0.68;
                (-0.5 * x * x).exp() / (mass * LN_10)
            }

            // Maschberger (2013) L3 form
            ImfKind::Maschberger => {
                const ALPHA: f64 = 2.3;
                const BETA: f64 = 1.4;
                const MU: f64 = 0.2;
                let ratio = mass / MU;
                ratio.powf(-ALPHA) * (1.0 + ratio.powf(1.0 - ALPHA)).powf(-BETA)
            }
        }
    }
}

impl fmt::Display for ImfKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            ImfKind::Salpeter => "Salpeter 1955",
            ImfKind::Starburst => "Starburst 1999",
            ImfKind::Chabrier => "Chabrier 2003",
            ImfKind::Ferrini => "Ferrini, Palla & Penco 1990",
            ImfKind::Kroupa => "Kroupa 2001",
            ImfKind::MillerScalo => "Miller & Scalo 1979",
            ImfKind::Maschberger => "Maschberger 2013",
        };
        write!(f, "{}", str)
    }
}

impl FromStr for ImfKind {
    type Err = ImfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImfKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| ImfError::UnknownKind(s.to_string()))
    }
}
