//! Solar abundances from different papers.
//!
//! * Anders & Grevesse 1989
//! * Grevesse & Sauval 1998
//! * Asplund et al. 2005
//! * Asplund et al. 2009
//! * Heger 2010

pub mod solar;


pub use solar::{Abundances, SolarAbundances, UnknownAbundances, ELEMENTS, FEH_ZERO_METALLICITY};
