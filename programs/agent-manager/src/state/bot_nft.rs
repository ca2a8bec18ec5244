use anchor_lang::prelude::*;

use crate::errors::AgentManagerError;

pub const MAX_NAME_LEN: usize = 32;
pub const MAX_DESCRIPTION_LEN: usize = 256;
pub const MAX_IMAGE_URL_LEN: usize = 200;

/// Bot identity token. Whoever holds it is the party allowed to move the
/// agent's funds and status.
#[account]
#[derive(InitSpace)]
pub struct BotNft {
    pub nft_id: u64,
    pub agent_id: u64,
    pub owner: Pubkey,
    #[max_len(32)]
    pub name: String,
    #[max_len(256)]
    pub description: String,
    #[max_len(200)]
    pub image_url: String,
    pub bump: u8,
}

impl BotNft {
    pub const SEED_PREFIX: &'static [u8] = b"bot_nft";

    pub fn validate_metadata(name: &str, description: &str, image_url: &str) -> Result<()> {
        require!(name.len() <= MAX_NAME_LEN, AgentManagerError::NameTooLong);
        require!(
            description.len() <= MAX_DESCRIPTION_LEN,
            AgentManagerError::DescriptionTooLong
        );
        require!(
            image_url.len() <= MAX_IMAGE_URL_LEN,
            AgentManagerError::ImageUrlTooLong
        );
        Ok(())
    }

    pub fn is_held_by(&self, account: &Pubkey) -> bool {
        self.owner == *account
    }

    /// Moves the token to `to` and returns the previous holder.
    pub fn transfer(&mut self, to: Pubkey) -> Result<Pubkey> {
        require_keys_neq!(to, Pubkey::default(), AgentManagerError::InvalidNewOwner);

        let previous = self.owner;
        self.owner = to;
        Ok(previous)
    }
}
