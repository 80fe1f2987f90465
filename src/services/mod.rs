//! Business logic services

pub mod adjust;
pub mod clock;
pub mod corridor;
pub mod export;
pub mod import;
pub mod optimize;
