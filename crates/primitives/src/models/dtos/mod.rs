pub mod conversion_dto;
pub mod health_dto;
pub mod rate_dto;

pub use conversion_dto::*;
pub use health_dto::*;
pub use rate_dto::*;
