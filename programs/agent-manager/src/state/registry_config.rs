use crate::errors::AgentManagerError;
use anchor_lang::prelude::*;

pub const DEFAULT_INACTIVITY_THRESHOLD: u64 = 3;
pub const DEFAULT_INITIAL_HEALTH: u64 = 50;
pub const DEFAULT_MAX_HEALTH: u64 = 100;
pub const DEFAULT_HEALTH_REWARD: u64 = 10;
pub const DEFAULT_HEALTH_PENALTY: u64 = 10;

/// Tunables for epoch processing. Stored on the registry so the authority can
/// adjust them without redeploying.
#[derive(InitSpace, AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct EpochPolicy {
    /// Consecutive inactive epochs at which an agent locks.
    pub inactivity_threshold: u64,
    pub initial_health: u64,
    pub max_health: u64,
    /// Added once per processed window that saw activity.
    pub health_reward: u64,
    /// Subtracted per elapsed inactive epoch.
    pub health_penalty: u64,
    pub unlock_on_activity: bool,
}

impl Default for EpochPolicy {
    fn default() -> Self {
        Self {
            inactivity_threshold: DEFAULT_INACTIVITY_THRESHOLD,
            initial_health: DEFAULT_INITIAL_HEALTH,
            max_health: DEFAULT_MAX_HEALTH,
            health_reward: DEFAULT_HEALTH_REWARD,
            health_penalty: DEFAULT_HEALTH_PENALTY,
            unlock_on_activity: true,
        }
    }
}

impl EpochPolicy {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.inactivity_threshold > 0,
            AgentManagerError::InvalidEpochPolicy
        );
        require!(self.max_health > 0, AgentManagerError::InvalidEpochPolicy);
        require!(
            self.initial_health <= self.max_health,
            AgentManagerError::InvalidEpochPolicy
        );
        Ok(())
    }
}

#[account]
#[derive(InitSpace)]
pub struct RegistryConfig {
    pub authority: Pubkey,
    pub agent_count: u64,
    pub bot_nft_count: u64,
    pub mcp_server_count: u64,
    pub epoch_policy: EpochPolicy,
    pub bump: u8,
}

impl RegistryConfig {
    pub const SEED_PREFIX: &'static [u8] = b"agent_registry";

    pub fn next_agent_id(&self) -> u64 {
        self.agent_count
    }

    pub fn next_bot_nft_id(&self) -> u64 {
        self.bot_nft_count
    }

    pub fn next_mcp_server_id(&self) -> u64 {
        self.mcp_server_count
    }

    pub fn increment_agent_count(&mut self) -> Result<()> {
        self.agent_count = self
            .agent_count
            .checked_add(1)
            .ok_or(AgentManagerError::Overflow)?;
        Ok(())
    }

    pub fn increment_bot_nft_count(&mut self) -> Result<()> {
        self.bot_nft_count = self
            .bot_nft_count
            .checked_add(1)
            .ok_or(AgentManagerError::Overflow)?;
        Ok(())
    }

    pub fn increment_mcp_server_count(&mut self) -> Result<()> {
        self.mcp_server_count = self
            .mcp_server_count
            .checked_add(1)
            .ok_or(AgentManagerError::Overflow)?;
        Ok(())
    }
}
