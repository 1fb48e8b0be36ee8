pub mod error;
pub mod reduce;
