pub mod domain;
pub mod ports;
pub mod profile_use_cases;
pub mod service;
pub mod validation;
