//! Domain layer - book records, circulation rules, repository traits

pub mod model;
pub mod repository;
pub mod service;
