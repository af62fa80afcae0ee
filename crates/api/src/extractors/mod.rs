pub mod conversion_body;

pub use conversion_body::ConversionBody;
