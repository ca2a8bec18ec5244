use anchor_lang::prelude::*;

use crate::errors::AgentManagerError;
use crate::events::BotNftTransferred;
use crate::state::{Agent, BotNft, RegistryConfig};
use crate::utils::require_nft_holder;

#[derive(Accounts)]
#[instruction(agent_id: u64)]
pub struct TransferBotNft<'info> {
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
        mut,
        seeds = [BotNft::SEED_PREFIX, registry.key().as_ref(), agent.bot_nft_id.to_le_bytes().as_ref()],
        bump = bot_nft.bump,
    )]
    pub bot_nft: Account<'info, BotNft>,
}

impl<'info> TransferBotNft<'info> {
    pub fn transfer_bot_nft(&mut self, new_owner: Pubkey) -> Result<()> {
        require_nft_holder(&self.bot_nft, &self.holder.key())?;

        let previous = self.bot_nft.transfer(new_owner)?;
        self.agent.owner = new_owner;

        emit!(BotNftTransferred {
            bot_nft_id: self.bot_nft.nft_id,
            agent_id: self.agent.agent_id,
            from: previous,
            to: new_owner,
        });

        Ok(())
    }
}
