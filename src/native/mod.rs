//! Integration with the host desktop

pub mod browser;
