pub mod conversion_service;
pub mod validation_service;
