use anchor_lang::prelude::*;

use crate::errors::AgentManagerError;
use crate::events::AgentCreated;
use crate::state::{Agent, BotNft, RegistryConfig};
use crate::utils::{current_epoch, pay_into_vault, require_bot_address};

#[derive(Accounts)]
pub struct CreateAgent<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [RegistryConfig::SEED_PREFIX, registry.authority.key().as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, RegistryConfig>,

    #[account(
        init,
        payer = creator,
        space = 8 + Agent::INIT_SPACE,
        seeds = [
            Agent::SEED_PREFIX,
            registry.key().as_ref(),
            registry.next_agent_id().to_le_bytes().as_ref()
        ],
        bump,
    )]
    pub agent: Account<'info, Agent>,

    #[account(
        init,
        payer = creator,
        space = 8 + BotNft::INIT_SPACE,
        seeds = [
            BotNft::SEED_PREFIX,
            registry.key().as_ref(),
            registry.next_bot_nft_id().to_le_bytes().as_ref()
        ],
        bump,
    )]
    pub bot_nft: Account<'info, BotNft>,

    #[account(
        mut,
        seeds = [Agent::VAULT_SEED_PREFIX, agent.key().as_ref()],
        bump,
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateAgent<'info> {
    #[allow(clippy::too_many_arguments)]
    pub fn create_agent(
        &mut self,
        bot_address: Pubkey,
        name: String,
        description: String,
        image_url: String,
        app_id: String,
        initial_deposit: u64,
        bumps: &CreateAgentBumps,
    ) -> Result<u64> {
        require_bot_address(&bot_address)?;
        Agent::validate_app_id(&app_id)?;
        BotNft::validate_metadata(&name, &description, &image_url)?;

        let agent_id = self.registry.next_agent_id();
        let bot_nft_id = self.registry.next_bot_nft_id();
        let creator = self.creator.key();
        let epoch = current_epoch()?;

        self.bot_nft.set_inner(BotNft {
            nft_id: bot_nft_id,
            agent_id,
            owner: creator,
            name,
            description,
            image_url,
            bump: bumps.bot_nft,
        });

        self.agent.set_inner(Agent {
            agent_id,
            owner: creator,
            bot_nft_id,
            bot_address,
            health: self.registry.epoch_policy.initial_health,
            is_active: true,
            is_locked: false,
            last_epoch: epoch,
            inactive_epochs: 0,
            balance: initial_deposit,
            mcp_server_ids: Vec::new(),
            app_id: app_id.clone(),
            activity_pending: false,
            last_activity_epoch: epoch,
            vault_bump: bumps.vault,
            bump: bumps.agent,
        });

        // The vault keeps a rent reserve on top of the escrowed balance.
        let rent_reserve = Rent::get()?.minimum_balance(0);
        let vault_funding = rent_reserve
            .checked_add(initial_deposit)
            .ok_or(AgentManagerError::Overflow)?;
        pay_into_vault(
            &self.creator,
            &self.vault,
            &self.system_program,
            vault_funding,
        )?;

        self.registry.increment_agent_count()?;
        self.registry.increment_bot_nft_count()?;

        msg!("Agent {} created with bot NFT {}", agent_id, bot_nft_id);

        emit!(AgentCreated {
            agent_id,
            owner: creator,
            bot_address,
            bot_nft_id,
            app_id,
            initial_deposit,
        });

        Ok(agent_id)
    }
}
