//! Cash-flow analytics: NPV, IRR, and series loading

mod npv;
mod irr;
pub mod loader;

pub use npv::{npv, npv_and_derivative};
pub use irr::{irr, irr_with_guess, DEFAULT_IRR_GUESS};
