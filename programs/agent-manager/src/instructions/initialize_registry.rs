use anchor_lang::prelude::*;

use crate::events::RegistryConfigUpdated;
use crate::state::{EpochPolicy, RegistryConfig};

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + RegistryConfig::INIT_SPACE,
        seeds = [RegistryConfig::SEED_PREFIX, authority.key().as_ref()],
        bump,
    )]
    pub registry: Account<'info, RegistryConfig>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeRegistry<'info> {
    pub fn initialize_registry(
        &mut self,
        epoch_policy: EpochPolicy,
        bumps: &InitializeRegistryBumps,
    ) -> Result<()> {
        epoch_policy.validate()?;

        self.registry.set_inner(RegistryConfig {
            authority: self.authority.key(),
            agent_count: 0,
            bot_nft_count: 0,
            mcp_server_count: 0,
            epoch_policy,
            bump: bumps.registry,
        });

        msg!("Agent registry initialized for {}", self.authority.key());

        emit!(RegistryConfigUpdated {
            authority: self.authority.key(),
            epoch_policy,
        });

        Ok(())
    }
}
