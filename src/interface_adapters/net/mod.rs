// Network adapter modules split by the client socket vs plain HTTP routes.

pub mod client;
pub mod session;

pub use client::{world_update_serializer, ws_handler};
pub use session::session_handler;
