use anchor_lang::prelude::*;

use crate::errors::AgentManagerError;
use crate::state::EpochPolicy;

pub const MAX_MCP_SERVERS: usize = 16;
pub const MAX_APP_ID_LEN: usize = 64;

#[account]
#[derive(InitSpace)]
pub struct Agent {
    pub agent_id: u64,
    pub owner: Pubkey,
    pub bot_nft_id: u64,
    pub bot_address: Pubkey,
    pub health: u64,
    pub is_active: bool,
    pub is_locked: bool,
    pub last_epoch: u64,
    pub inactive_epochs: u64,
    pub balance: u64, // lamports held in the agent vault, rent reserve excluded
    #[max_len(16)]
    pub mcp_server_ids: Vec<u64>,
    #[max_len(64)]
    pub app_id: String,
    pub activity_pending: bool,
    /// Epoch of the latest heartbeat. Holds the creation epoch until the bot
    /// reports for the first time.
    pub last_activity_epoch: u64,
    pub vault_bump: u8,
    pub bump: u8,
}

/// Read view returned by `get_agent_details`. Field order is part of the ABI.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub struct AgentDetails {
    pub bot_nft_id: u64,
    pub health: u64,
    pub is_active: bool,
    pub is_locked: bool,
    pub last_epoch: u64,
    pub inactive_epochs: u64,
    pub balance: u64,
    pub bot_address: Pubkey,
    pub mcp_server_ids: Vec<u64>,
    pub app_id: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LockTransition {
    Unchanged,
    Locked,
    Unlocked,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EpochOutcome {
    pub elapsed: u64,
    pub transition: LockTransition,
}

impl Agent {
    pub const SEED_PREFIX: &'static [u8] = b"agent";
    pub const VAULT_SEED_PREFIX: &'static [u8] = b"agent_vault";

    pub fn validate_app_id(app_id: &str) -> Result<()> {
        require!(
            !app_id.is_empty() && app_id.len() <= MAX_APP_ID_LEN,
            AgentManagerError::InvalidAppId
        );
        Ok(())
    }

    pub fn ensure_unlocked(&self) -> Result<()> {
        require!(!self.is_locked, AgentManagerError::AgentLocked);
        Ok(())
    }

    /// Adds escrowed lamports and returns the new balance.
    pub fn credit(&mut self, amount: u64) -> Result<u64> {
        self.ensure_unlocked()?;
        require!(amount > 0, AgentManagerError::InvalidAmount);

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AgentManagerError::Overflow)?;

        Ok(self.balance)
    }

    /// Removes escrowed lamports and returns the new balance. Never saturates.
    pub fn debit(&mut self, amount: u64) -> Result<u64> {
        self.ensure_unlocked()?;
        require!(amount > 0, AgentManagerError::InvalidAmount);
        require!(
            amount <= self.balance,
            AgentManagerError::InsufficientBalance
        );

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(AgentManagerError::Underflow)?;

        Ok(self.balance)
    }

    pub fn set_active(&mut self, is_active: bool) -> Result<()> {
        self.ensure_unlocked()?;
        self.is_active = is_active;
        Ok(())
    }

    pub fn attach_mcp_server(&mut self, server_id: u64) -> Result<()> {
        require!(
            !self.mcp_server_ids.contains(&server_id),
            AgentManagerError::DuplicateMcpServer
        );
        require!(
            self.mcp_server_ids.len() < MAX_MCP_SERVERS,
            AgentManagerError::TooManyMcpServers
        );

        self.mcp_server_ids.push(server_id);
        Ok(())
    }

    pub fn detach_mcp_server(&mut self, server_id: u64) -> Result<()> {
        let position = self
            .mcp_server_ids
            .iter()
            .position(|id| *id == server_id)
            .ok_or(AgentManagerError::McpServerNotAttached)?;

        self.mcp_server_ids.remove(position);
        Ok(())
    }

    pub fn record_activity(&mut self, epoch: u64) -> Result<()> {
        require!(self.is_active, AgentManagerError::AgentInactive);

        self.activity_pending = true;
        self.last_activity_epoch = epoch;
        Ok(())
    }

    /// Settles every epoch elapsed since `last_epoch`. Deactivated agents are
    /// paused: only `last_epoch` moves.
    pub fn process_epoch(&mut self, current_epoch: u64, policy: &EpochPolicy) -> Result<EpochOutcome> {
        require!(
            current_epoch > self.last_epoch,
            AgentManagerError::EpochNotElapsed
        );
        let elapsed = current_epoch
            .checked_sub(self.last_epoch)
            .ok_or(AgentManagerError::Underflow)?;
        let was_locked = self.is_locked;

        if self.is_active {
            if self.activity_pending {
                self.inactive_epochs = 0;
                self.health = self
                    .health
                    .saturating_add(policy.health_reward)
                    .min(policy.max_health);
                if policy.unlock_on_activity {
                    self.is_locked = false;
                }
            } else {
                self.inactive_epochs = self.inactive_epochs.saturating_add(elapsed);
                self.health = self
                    .health
                    .saturating_sub(policy.health_penalty.saturating_mul(elapsed));
                if self.inactive_epochs >= policy.inactivity_threshold {
                    self.is_locked = true;
                }
            }
        }

        self.activity_pending = false;
        self.last_epoch = current_epoch;

        let transition = match (was_locked, self.is_locked) {
            (false, true) => LockTransition::Locked,
            (true, false) => LockTransition::Unlocked,
            _ => LockTransition::Unchanged,
        };

        Ok(EpochOutcome {
            elapsed,
            transition,
        })
    }

    /// Clears the lock and restarts inactivity accounting from `epoch`, so
    /// epochs spent locked are not charged on the next settlement.
    pub fn unlock(&mut self, epoch: u64) -> Result<()> {
        require!(self.is_locked, AgentManagerError::AgentNotLocked);

        self.is_locked = false;
        self.inactive_epochs = 0;
        self.activity_pending = false;
        self.last_epoch = self.last_epoch.max(epoch);
        Ok(())
    }

    pub fn details(&self) -> AgentDetails {
        AgentDetails {
            bot_nft_id: self.bot_nft_id,
            health: self.health,
            is_active: self.is_active,
            is_locked: self.is_locked,
            last_epoch: self.last_epoch,
            inactive_epochs: self.inactive_epochs,
            balance: self.balance,
            bot_address: self.bot_address,
            mcp_server_ids: self.mcp_server_ids.clone(),
            app_id: self.app_id.clone(),
        }
    }
}
