use borsh::{BorshDeserialize, BorshSerialize};
use solana_pubkey::Pubkey;

use crate::types::EpochPolicy;

/// Anchor event payload as emitted through `sol_log_data`.
pub trait Event: BorshDeserialize {
    const NAME: &'static str;
    const DISCRIMINATOR: [u8; 8];

    /// Decodes one `Program data:` payload, returning `None` for other events.
    fn decode(data: &[u8]) -> Option<Self> {
        if data.len() < 8 || data[..8] != Self::DISCRIMINATOR {
            return None;
        }
        Self::try_from_slice(&data[8..]).ok()
    }
}

macro_rules! event {
    ($name:ident, $discriminator:expr, { $($field:ident: $ty:ty),* $(,)? }) => {
        #[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
        pub struct $name {
            $(pub $field: $ty),*
        }

        impl Event for $name {
            const NAME: &'static str = stringify!($name);
            const DISCRIMINATOR: [u8; 8] = $discriminator;
        }
    };
}

event!(RegistryConfigUpdated, [39, 92, 191, 32, 216, 166, 188, 161], {
    authority: Pubkey,
    epoch_policy: EpochPolicy,
});

event!(AgentCreated, [237, 44, 61, 111, 90, 251, 241, 34], {
    agent_id: u64,
    owner: Pubkey,
    bot_address: Pubkey,
    bot_nft_id: u64,
    app_id: String,
    initial_deposit: u64,
});

event!(DepositReceived, [9, 208, 152, 63, 64, 32, 185, 118], {
    agent_id: u64,
    amount: u64,
});

event!(WithdrawalMade, [253, 86, 154, 221, 191, 29, 247, 193], {
    agent_id: u64,
    recipient: Pubkey,
    amount: u64,
});

event!(AgentStatusChanged, [210, 74, 73, 158, 205, 28, 137, 178], {
    agent_id: u64,
    is_active: bool,
});

event!(McpServerRegistered, [142, 31, 87, 31, 48, 222, 138, 226], {
    server_id: u64,
    operator: Pubkey,
    name: String,
});

event!(McpServerAttached, [54, 217, 17, 191, 237, 184, 201, 63], {
    agent_id: u64,
    server_id: u64,
});

event!(McpServerDetached, [59, 230, 254, 166, 101, 115, 114, 255], {
    agent_id: u64,
    server_id: u64,
});

event!(ActivityRecorded, [13, 102, 161, 232, 11, 141, 84, 217], {
    agent_id: u64,
    epoch: u64,
});

event!(EpochProcessed, [18, 238, 2, 247, 238, 178, 94, 138], {
    agent_id: u64,
    epoch: u64,
    inactive_epochs: u64,
    health: u64,
});

event!(AgentLocked, [41, 29, 251, 85, 88, 192, 165, 135], {
    agent_id: u64,
    epoch: u64,
    inactive_epochs: u64,
});

event!(AgentUnlocked, [133, 118, 164, 12, 185, 109, 45, 0], {
    agent_id: u64,
    epoch: u64,
});

event!(BotNftTransferred, [7, 240, 49, 214, 236, 130, 67, 160], {
    bot_nft_id: u64,
    agent_id: u64,
    from: Pubkey,
    to: Pubkey,
});
