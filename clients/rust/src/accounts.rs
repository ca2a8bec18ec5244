use borsh::{BorshDeserialize, BorshSerialize};
use solana_pubkey::Pubkey;

use crate::types::EpochPolicy;

pub const REGISTRY_CONFIG_DISCRIMINATOR: [u8; 8] = [23, 118, 10, 246, 173, 231, 243, 156];
pub const AGENT_DISCRIMINATOR: [u8; 8] = [47, 166, 112, 147, 155, 197, 86, 7];
pub const BOT_NFT_DISCRIMINATOR: [u8; 8] = [86, 45, 50, 188, 174, 54, 93, 41];
pub const MCP_SERVER_DISCRIMINATOR: [u8; 8] = [171, 188, 103, 237, 54, 62, 133, 26];

fn decode<T: BorshDeserialize>(discriminator: &[u8; 8], data: &[u8]) -> Result<T, std::io::Error> {
    if data.len() < 8 || &data[..8] != discriminator {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "account discriminator mismatch",
        ));
    }
    // Accounts are allocated at their maximum size; trailing bytes are padding.
    let mut body = &data[8..];
    T::deserialize(&mut body)
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct RegistryConfig {
    pub authority: Pubkey,
    pub agent_count: u64,
    pub bot_nft_count: u64,
    pub mcp_server_count: u64,
    pub epoch_policy: EpochPolicy,
    pub bump: u8,
}

impl RegistryConfig {
    pub fn from_bytes(data: &[u8]) -> Result<Self, std::io::Error> {
        decode(&REGISTRY_CONFIG_DISCRIMINATOR, data)
    }
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct Agent {
    pub agent_id: u64,
    pub owner: Pubkey,
    pub bot_nft_id: u64,
    pub bot_address: Pubkey,
    pub health: u64,
    pub is_active: bool,
    pub is_locked: bool,
    pub last_epoch: u64,
    pub inactive_epochs: u64,
    pub balance: u64,
    pub mcp_server_ids: Vec<u64>,
    pub app_id: String,
    pub activity_pending: bool,
    pub last_activity_epoch: u64,
    pub vault_bump: u8,
    pub bump: u8,
}

impl Agent {
    pub fn from_bytes(data: &[u8]) -> Result<Self, std::io::Error> {
        decode(&AGENT_DISCRIMINATOR, data)
    }
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct BotNft {
    pub nft_id: u64,
    pub agent_id: u64,
    pub owner: Pubkey,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub bump: u8,
}

impl BotNft {
    pub fn from_bytes(data: &[u8]) -> Result<Self, std::io::Error> {
        decode(&BOT_NFT_DISCRIMINATOR, data)
    }
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct McpServer {
    pub server_id: u64,
    pub operator: Pubkey,
    pub name: String,
    pub endpoint: String,
    pub bump: u8,
}

impl McpServer {
    pub fn from_bytes(data: &[u8]) -> Result<Self, std::io::Error> {
        decode(&MCP_SERVER_DISCRIMINATOR, data)
    }
}
