use anchor_lang::prelude::*;

use crate::errors::AgentManagerError;
use crate::events::McpServerAttached;
use crate::state::{Agent, BotNft, McpServer, RegistryConfig};
use crate::utils::require_nft_holder;

#[derive(Accounts)]
#[instruction(agent_id: u64, server_id: u64)]
pub struct AttachMcpServer<'info> {
    pub holder: Signer<'info>,

    #[account(
        seeds = [RegistryConfig::SEED_PREFIX, registry.authority.key().as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, RegistryConfig>,

    #[account(
        mut,
        seeds = [Agent::SEED_PREFIX, registry.key().as_ref(), agent_id.to_le_bytes().as_ref()],
        bump = agent.bump,
        constraint = agent.agent_id == agent_id @ AgentManagerError::AgentNotFound,
    )]
    pub agent: Account<'info, Agent>,

    #[account(
        seeds = [BotNft::SEED_PREFIX, registry.key().as_ref(), agent.bot_nft_id.to_le_bytes().as_ref()],
        bump = bot_nft.bump,
    )]
    pub bot_nft: Account<'info, BotNft>,

    // Must already exist in the server catalog.
    #[account(
        seeds = [McpServer::SEED_PREFIX, registry.key().as_ref(), server_id.to_le_bytes().as_ref()],
        bump = mcp_server.bump,
    )]
    pub mcp_server: Account<'info, McpServer>,
}

impl<'info> AttachMcpServer<'info> {
    pub fn attach_mcp_server(&mut self) -> Result<()> {
        require_nft_holder(&self.bot_nft, &self.holder.key())?;

        let server_id = self.mcp_server.server_id;
        self.agent.attach_mcp_server(server_id)?;

        emit!(McpServerAttached {
            agent_id: self.agent.agent_id,
            server_id,
        });

        Ok(())
    }
}
