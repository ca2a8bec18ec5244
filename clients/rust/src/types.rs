use borsh::{BorshDeserialize, BorshSerialize};
use solana_pubkey::Pubkey;

#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, Eq, PartialEq)]
pub struct EpochPolicy {
    pub inactivity_threshold: u64,
    pub initial_health: u64,
    pub max_health: u64,
    pub health_reward: u64,
    pub health_penalty: u64,
    pub unlock_on_activity: bool,
}

impl Default for EpochPolicy {
    fn default() -> Self {
        Self {
            inactivity_threshold: 3,
            initial_health: 50,
            max_health: 100,
            health_reward: 10,
            health_penalty: 10,
            unlock_on_activity: true,
        }
    }
}

/// Return data of `get_agent_details`, in on-chain field order.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
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
