use anchor_lang::prelude::*;

use crate::errors::AgentManagerError;
use crate::state::{Agent, AgentDetails, RegistryConfig};

/// Read-only accounts for `is_agent_active` and `get_agent_details`.
#[derive(Accounts)]
#[instruction(agent_id: u64)]
pub struct ViewAgent<'info> {
    #[account(
        seeds = [RegistryConfig::SEED_PREFIX, registry.authority.key().as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, RegistryConfig>,

    #[account(
        seeds = [Agent::SEED_PREFIX, registry.key().as_ref(), agent_id.to_le_bytes().as_ref()],
        bump = agent.bump,
        constraint = agent.agent_id == agent_id @ AgentManagerError::AgentNotFound,
    )]
    pub agent: Account<'info, Agent>,
}

impl<'info> ViewAgent<'info> {
    pub fn is_agent_active(&self) -> Result<bool> {
        Ok(self.agent.is_active)
    }

    pub fn get_agent_details(&self) -> Result<AgentDetails> {
        Ok(self.agent.details())
    }
}
