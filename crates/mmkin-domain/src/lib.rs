//! Domain models and services for Lineweaver-Burk kinetics

pub mod model;
pub mod service;
