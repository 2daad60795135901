//! Output formatting for command outcomes

pub mod formatter;
pub mod json;
pub mod reply;
