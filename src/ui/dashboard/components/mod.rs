//! Dashboard UI components
//!
//! Individual rendering components for different dashboard sections

pub mod footer;
pub mod header;
pub mod liked_list;
pub mod logs;
pub mod quote_card;
