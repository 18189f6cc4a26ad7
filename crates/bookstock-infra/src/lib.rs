//! Infrastructure layer - catalog persistence and seed loading

pub mod persistence;
pub mod seed_csv;
