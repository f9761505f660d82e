pub mod currency;
pub mod eligibility;
pub mod email;
pub mod links;
pub mod pricing;
pub mod range;
pub mod validation;

pub use range::{DateBounds, DatePair, SelectTarget};
