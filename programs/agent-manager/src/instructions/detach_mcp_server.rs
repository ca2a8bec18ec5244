use anchor_lang::prelude::*;

use crate::errors::AgentManagerError;
use crate::events::McpServerDetached;
use crate::state::{Agent, BotNft, RegistryConfig};
use crate::utils::require_nft_holder;

#[derive(Accounts)]
#[instruction(agent_id: u64)]
pub struct DetachMcpServer<'info> {
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
}

impl<'info> DetachMcpServer<'info> {
    pub fn detach_mcp_server(&mut self, server_id: u64) -> Result<()> {
        require_nft_holder(&self.bot_nft, &self.holder.key())?;

        self.agent.detach_mcp_server(server_id)?;

        emit!(McpServerDetached {
            agent_id: self.agent.agent_id,
            server_id,
        });

        Ok(())
    }
}
