pub mod convert;
pub mod front;
pub mod health;
pub mod legacy_convert;
pub mod not_found;
pub mod route_unavailable;
