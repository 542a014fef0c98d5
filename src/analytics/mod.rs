pub mod bs_analytic;
pub mod greeks;

pub use bs_analytic::{bs_price, d1_d2};
pub use greeks::{bs_greeks, GreekSet, Greeks};
