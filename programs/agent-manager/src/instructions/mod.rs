pub mod advance_epoch;
pub mod agent_views;
pub mod attach_mcp_server;
pub mod create_agent;
pub mod deposit;
pub mod detach_mcp_server;
pub mod initialize_registry;
pub mod record_activity;
pub mod register_mcp_server;
pub mod set_agent_status;
pub mod transfer_bot_nft;
pub mod unlock_agent;
pub mod update_registry_config;
pub mod withdraw_with_nft;

pub use advance_epoch::*;
pub use agent_views::*;
pub use attach_mcp_server::*;
pub use create_agent::*;
pub use deposit::*;
pub use detach_mcp_server::*;
pub use initialize_registry::*;
pub use record_activity::*;
pub use register_mcp_server::*;
pub use set_agent_status::*;
pub use transfer_bot_nft::*;
pub use unlock_agent::*;
pub use update_registry_config::*;
pub use withdraw_with_nft::*;
