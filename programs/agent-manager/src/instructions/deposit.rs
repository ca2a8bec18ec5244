use anchor_lang::prelude::*;

use crate::errors::AgentManagerError;
use crate::events::DepositReceived;
use crate::state::{Agent, RegistryConfig};
use crate::utils::pay_into_vault;

#[derive(Accounts)]
#[instruction(agent_id: u64)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

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
        mut,
        seeds = [Agent::VAULT_SEED_PREFIX, agent.key().as_ref()],
        bump = agent.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Deposit<'info> {
    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        let agent_id = self.agent.agent_id;
        let new_balance = self.agent.credit(amount)?;

        pay_into_vault(
            &self.depositor,
            &self.vault,
            &self.system_program,
            amount,
        )?;

        msg!("Agent {} balance is now {}", agent_id, new_balance);

        emit!(DepositReceived { agent_id, amount });

        Ok(())
    }
}
