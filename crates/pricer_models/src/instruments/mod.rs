//! European option instrument definitions.
//!
//! - [`OptionType`]: Call or Put
//! - [`OptionParameters`]: validated market and contract inputs
//! - [`InstrumentError`]: construction and parsing failures

mod error;
mod option_type;
mod params;

pub use error::InstrumentError;
pub use option_type::OptionType;
pub use params::OptionParameters;
