pub mod auth_use_cases;
pub mod domain;
pub mod orchestrator;
pub mod ports;
pub mod services;
pub mod use_cases;
pub mod validation;
