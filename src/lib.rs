//! Circular Android launcher icons from a single source image.

pub mod config;
pub mod error;
pub mod inspect;
pub mod round_icon;

pub use config::{IconSpec, RoundIconConfig};
pub use error::IconError;
pub use round_icon::{generate_round_icons, FailurePolicy, RunReport};
