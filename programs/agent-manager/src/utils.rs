use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::AgentManagerError;
use crate::state::{Agent, BotNft};

pub fn current_epoch() -> Result<u64> {
    Ok(Clock::get()?.epoch)
}

pub fn require_bot_address(bot_address: &Pubkey) -> Result<()> {
    require_keys_neq!(
        *bot_address,
        Pubkey::default(),
        AgentManagerError::InvalidBotAddress
    );
    Ok(())
}

/// Owner-gated operations are authorised by holding the agent's bot NFT.
pub fn require_nft_holder(bot_nft: &BotNft, caller: &Pubkey) -> Result<()> {
    require!(bot_nft.is_held_by(caller), AgentManagerError::Unauthorized);
    Ok(())
}

pub fn require_bot_operator(agent: &Agent, caller: &Pubkey) -> Result<()> {
    require_keys_eq!(
        agent.bot_address,
        *caller,
        AgentManagerError::Unauthorized
    );
    Ok(())
}

pub fn pay_into_vault<'info>(
    payer: &Signer<'info>,
    vault: &SystemAccount<'info>,
    system_program: &Program<'info, System>,
    amount: u64,
) -> Result<()> {
    let cpi_accounts = system_program::Transfer {
        from: payer.to_account_info(),
        to: vault.to_account_info(),
    };
    let cpi_context = CpiContext::new(system_program.to_account_info(), cpi_accounts);
    system_program::transfer(cpi_context, amount)
}

pub fn pay_from_vault<'info>(
    agent_key: &Pubkey,
    vault_bump: u8,
    vault: &SystemAccount<'info>,
    recipient: &Signer<'info>,
    system_program: &Program<'info, System>,
    amount: u64,
) -> Result<()> {
    let vault_seeds = &[Agent::VAULT_SEED_PREFIX, agent_key.as_ref(), &[vault_bump]];
    let vault_signer = &[&vault_seeds[..]];

    let cpi_accounts = system_program::Transfer {
        from: vault.to_account_info(),
        to: recipient.to_account_info(),
    };
    let cpi_context = CpiContext::new_with_signer(
        system_program.to_account_info(),
        cpi_accounts,
        vault_signer,
    );
    system_program::transfer(cpi_context, amount)
}
