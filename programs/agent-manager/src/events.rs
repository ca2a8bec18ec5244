use anchor_lang::prelude::*;

use crate::state::EpochPolicy;

#[event]
pub struct RegistryConfigUpdated {
    pub authority: Pubkey,
    pub epoch_policy: EpochPolicy,
}

#[event]
pub struct AgentCreated {
    pub agent_id: u64,
    pub owner: Pubkey,
    pub bot_address: Pubkey,
    pub bot_nft_id: u64,
    pub app_id: String,
    pub initial_deposit: u64,
}

#[event]
pub struct DepositReceived {
    pub agent_id: u64,
    pub amount: u64,
}

#[event]
pub struct WithdrawalMade {
    pub agent_id: u64,
    pub recipient: Pubkey,
    pub amount: u64,
}

#[event]
pub struct AgentStatusChanged {
    pub agent_id: u64,
    pub is_active: bool,
}

#[event]
pub struct McpServerRegistered {
    pub server_id: u64,
    pub operator: Pubkey,
    pub name: String,
}

#[event]
pub struct McpServerAttached {
    pub agent_id: u64,
    pub server_id: u64,
}

#[event]
pub struct McpServerDetached {
    pub agent_id: u64,
    pub server_id: u64,
}

#[event]
pub struct ActivityRecorded {
    pub agent_id: u64,
    pub epoch: u64,
}

#[event]
pub struct EpochProcessed {
    pub agent_id: u64,
    pub epoch: u64,
    pub inactive_epochs: u64,
    pub health: u64,
}

#[event]
pub struct AgentLocked {
    pub agent_id: u64,
    pub epoch: u64,
    pub inactive_epochs: u64,
}

#[event]
pub struct AgentUnlocked {
    pub agent_id: u64,
    pub epoch: u64,
}

#[event]
pub struct BotNftTransferred {
    pub bot_nft_id: u64,
    pub agent_id: u64,
    pub from: Pubkey,
    pub to: Pubkey,
}
