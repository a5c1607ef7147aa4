//! Recetas Common Library
//!
//! CLIとデスクトップで共有される型とコアロジック

pub mod catalog;
pub mod error;
pub mod nav;
pub mod scaler;
pub mod search;
pub mod types;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use nav::NavState;
pub use scaler::{format_quantity, scale};
pub use search::filter_by_title;
pub use types::{Ingredient, Recipe, ScaledIngredient};
