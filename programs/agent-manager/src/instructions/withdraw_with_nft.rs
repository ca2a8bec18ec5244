use anchor_lang::prelude::*;

use crate::errors::AgentManagerError;
use crate::events::WithdrawalMade;
use crate::state::{Agent, BotNft, RegistryConfig};
use crate::utils::{pay_from_vault, require_nft_holder};

#[derive(Accounts)]
#[instruction(agent_id: u64)]
pub struct WithdrawWithNft<'info> {
    #[account(mut)]
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

    #[account(
        mut,
        seeds = [Agent::VAULT_SEED_PREFIX, agent.key().as_ref()],
        bump = agent.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> WithdrawWithNft<'info> {
    pub fn withdraw_with_nft(&mut self, amount: u64) -> Result<()> {
        let holder = self.holder.key();
        require_nft_holder(&self.bot_nft, &holder)?;

        // Bookkeeping first: the balance is already reduced when lamports leave the vault.
        let new_balance = self.agent.debit(amount)?;

        // Withdrawing confirms custody of the agent identity.
        self.agent.owner = holder;

        let agent_key = self.agent.key();
        pay_from_vault(
            &agent_key,
            self.agent.vault_bump,
            &self.vault,
            &self.holder,
            &self.system_program,
            amount,
        )?;

        msg!("Agent {} balance is now {}", self.agent.agent_id, new_balance);

        emit!(WithdrawalMade {
            agent_id: self.agent.agent_id,
            recipient: holder,
            amount,
        });

        Ok(())
    }
}
