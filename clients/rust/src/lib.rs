//! Off-chain mirror of the agent-manager program ABI: account decoders,
//! instruction constructors, error codes and event payloads.

pub mod accounts;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod types;

use solana_pubkey::Pubkey;

pub use errors::AgentManagerError;
pub use types::{AgentDetails, EpochPolicy};

/// `6anbDQNCcVh2f6okexjaX1VGj6tEnizJ1kV5UTBS8Zhi`
pub const AGENT_MANAGER_ID: Pubkey = Pubkey::new_from_array([
    82, 242, 38, 101, 166, 12, 18, 210, 137, 24, 93, 149, 14, 232, 129, 54, 9, 22, 111, 107, 17,
    61, 23, 141, 108, 15, 211, 144, 31, 242, 57, 161,
]);

pub const SYSTEM_PROGRAM_ID: Pubkey = Pubkey::new_from_array([0u8; 32]);

pub const REGISTRY_SEED: &[u8] = b"agent_registry";
pub const AGENT_SEED: &[u8] = b"agent";
pub const AGENT_VAULT_SEED: &[u8] = b"agent_vault";
pub const BOT_NFT_SEED: &[u8] = b"bot_nft";
pub const MCP_SERVER_SEED: &[u8] = b"mcp_server";
