use anchor_lang::prelude::*;

use crate::errors::AgentManagerError;
use crate::events::AgentUnlocked;
use crate::state::{Agent, RegistryConfig};
use crate::utils::current_epoch;

#[derive(Accounts)]
#[instruction(agent_id: u64)]
pub struct UnlockAgent<'info> {
    pub authority: Signer<'info>,

    #[account(
        has_one = authority @ AgentManagerError::InvalidAuthority,
        seeds = [RegistryConfig::SEED_PREFIX, registry.authority.as_ref()],
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
}

impl<'info> UnlockAgent<'info> {
    pub fn unlock_agent(&mut self) -> Result<()> {
        let epoch = current_epoch()?;
        self.agent.unlock(epoch)?;

        emit!(AgentUnlocked {
            agent_id: self.agent.agent_id,
            epoch,
        });

        Ok(())
    }
}
