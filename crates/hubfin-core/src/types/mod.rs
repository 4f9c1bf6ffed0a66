//! Domain types for loan calculations.
//!
//! - [`Money`]: Decimal amount tagged with a currency
//! - [`Rate`]: Periodic interest rate as a decimal fraction
//! - [`Currency`]: ISO currency codes

mod currency;
mod money;
mod rate;

pub use currency::Currency;
pub use money::Money;
pub use rate::Rate;
