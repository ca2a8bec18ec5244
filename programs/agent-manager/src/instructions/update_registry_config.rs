use anchor_lang::prelude::*;

use crate::errors::AgentManagerError;
use crate::events::RegistryConfigUpdated;
use crate::state::{EpochPolicy, RegistryConfig};

#[derive(Accounts)]
pub struct UpdateRegistryConfig<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [RegistryConfig::SEED_PREFIX, authority.key().as_ref()],
        bump = registry.bump,
        constraint = registry.authority == authority.key() @ AgentManagerError::InvalidAuthority
    )]
    pub registry: Account<'info, RegistryConfig>,
}

impl<'info> UpdateRegistryConfig<'info> {
    pub fn update_registry_config(&mut self, epoch_policy: Option<EpochPolicy>) -> Result<()> {
        if let Some(new_policy) = epoch_policy {
            new_policy.validate()?;
            self.registry.epoch_policy = new_policy;
        }

        emit!(RegistryConfigUpdated {
            authority: self.authority.key(),
            epoch_policy: self.registry.epoch_policy,
        });

        Ok(())
    }
}
