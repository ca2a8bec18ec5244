pub mod agent;
pub mod bot_nft;
pub mod mcp_server;
pub mod registry_config;

pub use agent::*;
pub use bot_nft::*;
pub use mcp_server::*;
pub use registry_config::*;
