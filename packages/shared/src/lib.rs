//! Utilities shared by the Petri relay server and the terminal client.

pub mod logger;
pub mod time;
