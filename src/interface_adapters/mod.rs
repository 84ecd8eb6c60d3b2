// Interface adapters: wire protocol, network handling and outbound clients.

pub mod clients;
pub mod net;
pub mod protocol;
pub mod state;
