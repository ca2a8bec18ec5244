use anchor_lang::prelude::*;

use crate::errors::AgentManagerError;
use crate::events::ActivityRecorded;
use crate::state::{Agent, RegistryConfig};
use crate::utils::{current_epoch, require_bot_operator};

/// Heartbeat from the bot's operating account. Counts as qualifying activity
/// for the next epoch settlement, including while the agent is locked.
#[derive(Accounts)]
#[instruction(agent_id: u64)]
pub struct RecordActivity<'info> {
    pub bot: Signer<'info>,

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
}

impl<'info> RecordActivity<'info> {
    pub fn record_activity(&mut self) -> Result<()> {
        require_bot_operator(&self.agent, &self.bot.key())?;

        let epoch = current_epoch()?;
        self.agent.record_activity(epoch)?;

        emit!(ActivityRecorded {
            agent_id: self.agent.agent_id,
            epoch,
        });

        Ok(())
    }
}
