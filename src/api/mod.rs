pub mod client;
pub mod dto;
pub mod error;
pub mod utils;

pub use client::{DEFAULT_API_BASE_URL, MarketPulseApi};
pub use error::{FetchError, FetchErrorKind};
