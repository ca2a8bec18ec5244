use anchor_lang::prelude::*;

use crate::errors::AgentManagerError;
use crate::state::MAX_NAME_LEN;

pub const MAX_ENDPOINT_LEN: usize = 128;

#[account]
#[derive(InitSpace)]
pub struct McpServer {
    pub server_id: u64,
    pub operator: Pubkey,
    #[max_len(32)]
    pub name: String,
    #[max_len(128)]
    pub endpoint: String,
    pub bump: u8,
}

impl McpServer {
    pub const SEED_PREFIX: &'static [u8] = b"mcp_server";

    pub fn validate_metadata(name: &str, endpoint: &str) -> Result<()> {
        require!(name.len() <= MAX_NAME_LEN, AgentManagerError::NameTooLong);
        require!(
            endpoint.len() <= MAX_ENDPOINT_LEN,
            AgentManagerError::EndpointTooLong
        );
        Ok(())
    }
}
