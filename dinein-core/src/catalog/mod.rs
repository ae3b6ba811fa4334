//! Catalog Module
//!
//! Menu and restaurant data sources. Both are mock providers here; the
//! session only depends on the [`MenuProvider`] trait.

mod directory;
mod menu;

pub use directory::{HomeSections, RestaurantDirectory};
pub use menu::{MenuProvider, StaticMenuProvider, validate_catalog};
