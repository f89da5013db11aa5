//! UI building blocks for the prospect finder window

pub mod search_bar;
pub mod table;
pub mod theme;
