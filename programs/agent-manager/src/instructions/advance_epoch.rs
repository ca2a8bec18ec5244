use anchor_lang::prelude::*;

use crate::errors::AgentManagerError;
use crate::events::{AgentLocked, AgentUnlocked, EpochProcessed};
use crate::state::{Agent, LockTransition, RegistryConfig};
use crate::utils::current_epoch;

/// Permissionless crank settling the epochs an agent has not been processed for.
#[derive(Accounts)]
#[instruction(agent_id: u64)]
pub struct AdvanceEpoch<'info> {
    pub cranker: Signer<'info>,

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

impl<'info> AdvanceEpoch<'info> {
    pub fn advance_epoch(&mut self) -> Result<()> {
        let epoch = current_epoch()?;
        let policy = self.registry.epoch_policy;
        let agent_id = self.agent.agent_id;

        let outcome = self.agent.process_epoch(epoch, &policy)?;

        msg!(
            "Agent {} settled {} epoch(s), inactive for {}",
            agent_id,
            outcome.elapsed,
            self.agent.inactive_epochs
        );

        emit!(EpochProcessed {
            agent_id,
            epoch,
            inactive_epochs: self.agent.inactive_epochs,
            health: self.agent.health,
        });

        match outcome.transition {
            LockTransition::Locked => emit!(AgentLocked {
                agent_id,
                epoch,
                inactive_epochs: self.agent.inactive_epochs,
            }),
            LockTransition::Unlocked => emit!(AgentUnlocked { agent_id, epoch }),
            LockTransition::Unchanged => {}
        }

        Ok(())
    }
}
