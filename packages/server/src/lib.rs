//! Relay server for Petri, a multiplayer mold culture simulator.
//!
//! Every connected client shares one culture: the environment sliders, the
//! molds placed in the dish and a message log. The server keeps the latest
//! snapshot in memory and fans every change out to all connections.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
