//! Identity access and profile updates

pub mod access;
pub mod ports;
pub mod service;
pub mod validation;
