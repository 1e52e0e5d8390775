use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// [Fe/H] reported for metal-free gas
pub const FEH_ZERO_METALLICITY: f64 = -20.0;

/// Species tabulated by every abundance set, in table order
pub const ELEMENTS: [&str; 14] = [
    "H", "D", "He3", "He4", "C", "13C", "N", "O", "Ne", "Mg", "Si", "S", "Ca", "Fe",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown solar abundances '{0}'")]
pub struct UnknownAbundances(pub String);

/// Reference solar composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolarAbundances {
    #[serde(rename = "ag89")]
    AndersGrevesse1989,
    #[serde(rename = "gs98")]
    GrevesseSauval1998,
    #[serde(rename = "as05")]
    Asplund2005,
    #[serde(rename = "as09")]
    Asplund2009,
    #[serde(rename = "he10")]
    Heger2010,
}

impl SolarAbundances {
    pub const ALL: [SolarAbundances; 5] = [
        SolarAbundances::AndersGrevesse1989,
        SolarAbundances::GrevesseSauval1998,
        SolarAbundances::Asplund2005,
        SolarAbundances::Asplund2009,
        SolarAbundances::Heger2010,
    ];

    /// Key used in parameter files.
    pub fn key(&self) -> &'static str {
        match self {
            SolarAbundances::AndersGrevesse1989 => "ag89",
            SolarAbundances::GrevesseSauval1998 => "gs98",
            SolarAbundances::Asplund2005 => "as05",
            SolarAbundances::Asplund2009 => "as09",
            SolarAbundances::Heger2010 => "he10",
        }
    }

    /// Solar metallicity used as the [Fe/H] zero point.
    pub fn z_sun(&self) -> f64 {
        match self {
            SolarAbundances::AndersGrevesse1989 | SolarAbundances::GrevesseSauval1998 => 0.02,
            SolarAbundances::Asplund2005 => 0.012,
            SolarAbundances::Asplund2009 => 0.0134,
            SolarAbundances::Heger2010 => 0.015,
        }
    }

    /// (slope, intercept) of the hydrogen fraction X(Z)
    fn x1_fit(&self) -> (f64, f64) {
        match self {
            SolarAbundances::AndersGrevesse1989 => (-2.398, 0.7516),
            SolarAbundances::GrevesseSauval1998 => (-2.33, 0.7516),
            SolarAbundances::Asplund2005 => (-1.092, 0.75157),
            SolarAbundances::Asplund2009 => (-1.06167, 0.7524),
            SolarAbundances::Heger2010 => (-2.6866, 0.7513),
        }
    }

    /// (slope, intercept) of the helium-4 fraction Y(Z)
    fn x4_fit(&self) -> (f64, f64) {
        match self {
            SolarAbundances::AndersGrevesse1989 => (1.40, 0.2484),
            SolarAbundances::GrevesseSauval1998 => (1.33, 0.2484),
            SolarAbundances::Asplund2005 => (0.06, 0.2484),
            SolarAbundances::Asplund2009 => (0.067, 0.2476),
            SolarAbundances::Heger2010 => (1.687, 0.2487),
        }
    }

    /// Solar mass fractions, one per entry of [`ELEMENTS`].
    pub fn mass_fractions(&self) -> &'static [f64; 14] {
        match self {
            SolarAbundances::AndersGrevesse1989 => &[
                0.705, 4.840e-5, 2.900e-5, 2.750e-1, 3.000e-3, 2.830e-5, 1.100e-3, 8.600e-3,
                1.690e-3, 5.200e-4, 6.500e-4, 4.000e-4, 6.000e-5, 1.200e-3,
            ],
            SolarAbundances::GrevesseSauval1998 => &[
                0.733, 4.800e-5, 2.900e-5, 2.495e-1, 2.890e-3, 2.830e-5, 8.480e-4, 7.880e-3,
                1.750e-3, 6.650e-4, 7.240e-4, 4.980e-4, 6.680e-5, 1.290e-3,
            ],
            SolarAbundances::Asplund2005 => &[
                0.739, 4.800e-5, 2.900e-5, 2.486e-1, 2.180e-3, 2.830e-5, 6.240e-4, 5.400e-3,
                1.020e-3, 6.010e-4, 6.700e-4, 3.270e-4, 6.040e-5, 1.170e-3,
            ],
            SolarAbundances::Asplund2009 => &[
                0.738, 1.430e-5, 4.490e-5, 2.485e-1, 2.384e-3, 2.830e-5, 6.986e-4, 5.784e-3,
                1.256e-3, 7.052e-4, 6.688e-4, 3.114e-4, 6.459e-5, 1.307e-3,
            ],
            SolarAbundances::Heger2010 => &[
                0.711, 2.76e-5, 3.41e-5, 2.74e-1, 2.46e-3, 2.98e-5, 7.96e-4, 6.60e-3, 1.17e-3,
                5.65e-4, 7.55e-4, 3.96e-4, 7.13e-5, 1.26e-3,
            ],
        }
    }
}

impl fmt::Display for SolarAbundances {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SolarAbundances::AndersGrevesse1989 => "Anders & Grevesse 1989",
            SolarAbundances::GrevesseSauval1998 => "Grevesse & Sauval 1998",
            SolarAbundances::Asplund2005 => "Asplund et al. 2005",
            SolarAbundances::Asplund2009 => "Asplund et al. 2009",
            SolarAbundances::Heger2010 => "Heger 2010",
        };
        write!(f, "{}", str)
    }
}

impl FromStr for SolarAbundances {
    type Err = UnknownAbundances;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SolarAbundances::ALL
            .into_iter()
            .find(|source| source.key() == s)
            .ok_or_else(|| UnknownAbundances(s.to_string()))
    }
}

/// A solar abundance set evaluated at metallicity `z`.
///
/// # Example
/// ```
/// use abundances::{Abundances, SolarAbundances};
///
/// let solar = Abundances::new(SolarAbundances::AndersGrevesse1989, 0.02);
/// assert_eq!(solar.feh(), 0.0);
/// assert_eq!(solar.element("Fe"), Some(1.2e-3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Abundances {
    pub source: SolarAbundances,
    pub z: f64,
}

impl Abundances {
    pub fn new(source: SolarAbundances, z: f64) -> Self {
        Self { source, z }
    }

    /// Hydrogen mass fraction at this metallicity.
    pub fn x1(&self) -> f64 {
        let (slope, intercept) = self.source.x1_fit();
        slope * self.z + intercept
    }

    /// Helium-4 mass fraction at this metallicity.
    pub fn x4(&self) -> f64 {
        let (slope, intercept) = self.source.x4_fit();
        slope * self.z + intercept
    }

    /// [Fe/H] = log10(Z / Z☉), or [`FEH_ZERO_METALLICITY`] for Z = 0.
    pub fn feh(&self) -> f64 {
        if self.z == 0.0 {
            FEH_ZERO_METALLICITY
        } else {
            (self.z / self.source.z_sun()).log10()
        }
    }

    /// (element, solar mass fraction) pairs.
    pub fn elements(&self) -> impl Iterator<Item = (&'static str, f64)> {
        ELEMENTS
            .into_iter()
            .zip(self.source.mass_fractions().iter().copied())
    }

    pub fn element(&self, name: &str) -> Option<f64> {
        self.elements()
            .find(|(element, _)| *element == name)
            .map(|(_, fraction)| fraction)
    }

    pub fn description(&self) -> String {
        self.source.to_string()
    }
}
