pub mod domain;
pub mod ports;
pub mod post_use_cases;
pub mod service;
pub mod validation;
