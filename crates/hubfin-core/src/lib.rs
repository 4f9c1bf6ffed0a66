//! # Hub Financeiro Core
//!
//! Core types shared by the Hub Financeiro lending crates.
//!
//! - **Types**: [`Money`], [`Rate`], and [`Currency`]
//! - **Formatting**: pt-BR currency rendering and lenient amount parsing
//! - **Errors**: [`HubError`] and the [`HubResult`] alias
//!
//! ## Example
//!
//! ```rust
//! use hubfin_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let amount = Money::brl(dec!(1234.5));
//! assert_eq!(format_brl(amount.amount()), "R$ 1.234,50");
//!
//! let rate = Rate::new(dec!(0.02));
//! assert_eq!(rate.to_string(), "2.00%");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod format;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{HubError, HubResult};
    pub use crate::format::{format_brl, format_masked, parse_amount, MASKED_VALUE};
    pub use crate::types::{Currency, Money, Rate};
}

// Re-export commonly used types at crate root
pub use error::{HubError, HubResult};
pub use types::{Currency, Money, Rate};
