//! Poll subdomain: the request we send to the voting backend and the poll
//! record it returns.

pub mod assembler;
pub mod entities;
