use borsh::BorshSerialize;
use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::types::EpochPolicy;
use crate::{AGENT_MANAGER_ID, SYSTEM_PROGRAM_ID};

pub const INITIALIZE_REGISTRY_DISCRIMINATOR: [u8; 8] = [189, 181, 20, 17, 174, 57, 249, 59];
pub const UPDATE_REGISTRY_CONFIG_DISCRIMINATOR: [u8; 8] = [205, 108, 204, 178, 107, 143, 150, 21];
pub const CREATE_AGENT_DISCRIMINATOR: [u8; 8] = [143, 66, 198, 95, 110, 85, 83, 249];
pub const DEPOSIT_DISCRIMINATOR: [u8; 8] = [242, 35, 198, 137, 82, 225, 242, 182];
pub const WITHDRAW_WITH_NFT_DISCRIMINATOR: [u8; 8] = [248, 178, 37, 210, 178, 85, 164, 33];
pub const ACTIVATE_AGENT_DISCRIMINATOR: [u8; 8] = [252, 139, 87, 21, 195, 152, 29, 217];
pub const DEACTIVATE_AGENT_DISCRIMINATOR: [u8; 8] = [205, 171, 239, 225, 82, 126, 96, 166];
pub const IS_AGENT_ACTIVE_DISCRIMINATOR: [u8; 8] = [177, 14, 73, 211, 63, 165, 233, 236];
pub const GET_AGENT_DETAILS_DISCRIMINATOR: [u8; 8] = [65, 97, 63, 218, 244, 129, 247, 16];
pub const REGISTER_MCP_SERVER_DISCRIMINATOR: [u8; 8] = [190, 160, 177, 12, 113, 49, 11, 133];
pub const ATTACH_MCP_SERVER_DISCRIMINATOR: [u8; 8] = [50, 104, 22, 170, 230, 111, 225, 237];
pub const DETACH_MCP_SERVER_DISCRIMINATOR: [u8; 8] = [18, 159, 169, 75, 165, 216, 177, 21];
pub const RECORD_ACTIVITY_DISCRIMINATOR: [u8; 8] = [199, 86, 104, 65, 200, 211, 71, 50];
pub const ADVANCE_EPOCH_DISCRIMINATOR: [u8; 8] = [93, 138, 234, 218, 241, 230, 132, 38];
pub const UNLOCK_AGENT_DISCRIMINATOR: [u8; 8] = [177, 9, 111, 255, 34, 57, 24, 155];
pub const TRANSFER_BOT_NFT_DISCRIMINATOR: [u8; 8] = [82, 192, 70, 131, 124, 129, 192, 168];

fn build<T: BorshSerialize>(
    discriminator: [u8; 8],
    args: &T,
    accounts: Vec<AccountMeta>,
) -> Instruction {
    let mut data = discriminator.to_vec();
    args.serialize(&mut data)
        .expect("serializing into a Vec cannot fail");

    Instruction {
        program_id: AGENT_MANAGER_ID,
        accounts,
        data,
    }
}

#[derive(BorshSerialize)]
struct AgentIdArgs {
    agent_id: u64,
}

pub struct InitializeRegistry {
    pub authority: Pubkey,
    pub registry: Pubkey,
}

impl InitializeRegistry {
    pub fn instruction(&self, epoch_policy: EpochPolicy) -> Instruction {
        build(
            INITIALIZE_REGISTRY_DISCRIMINATOR,
            &epoch_policy,
            vec![
                AccountMeta::new(self.authority, true),
                AccountMeta::new(self.registry, false),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            ],
        )
    }
}

pub struct UpdateRegistryConfig {
    pub authority: Pubkey,
    pub registry: Pubkey,
}

impl UpdateRegistryConfig {
    pub fn instruction(&self, epoch_policy: Option<EpochPolicy>) -> Instruction {
        build(
            UPDATE_REGISTRY_CONFIG_DISCRIMINATOR,
            &epoch_policy,
            vec![
                AccountMeta::new(self.authority, true),
                AccountMeta::new(self.registry, false),
            ],
        )
    }
}

pub struct CreateAgent {
    pub creator: Pubkey,
    pub registry: Pubkey,
    pub agent: Pubkey,
    pub bot_nft: Pubkey,
    pub vault: Pubkey,
}

#[derive(BorshSerialize, Clone, Debug)]
pub struct CreateAgentInstructionArgs {
    pub bot_address: Pubkey,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub app_id: String,
    pub initial_deposit: u64,
}

impl CreateAgent {
    pub fn instruction(&self, args: CreateAgentInstructionArgs) -> Instruction {
        build(
            CREATE_AGENT_DISCRIMINATOR,
            &args,
            vec![
                AccountMeta::new(self.creator, true),
                AccountMeta::new(self.registry, false),
                AccountMeta::new(self.agent, false),
                AccountMeta::new(self.bot_nft, false),
                AccountMeta::new(self.vault, false),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            ],
        )
    }
}

pub struct Deposit {
    pub depositor: Pubkey,
    pub registry: Pubkey,
    pub agent: Pubkey,
    pub vault: Pubkey,
}

#[derive(BorshSerialize)]
struct AmountArgs {
    agent_id: u64,
    amount: u64,
}

impl Deposit {
    pub fn instruction(&self, agent_id: u64, amount: u64) -> Instruction {
        build(
            DEPOSIT_DISCRIMINATOR,
            &AmountArgs { agent_id, amount },
            vec![
                AccountMeta::new(self.depositor, true),
                AccountMeta::new_readonly(self.registry, false),
                AccountMeta::new(self.agent, false),
                AccountMeta::new(self.vault, false),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            ],
        )
    }
}

pub struct WithdrawWithNft {
    pub holder: Pubkey,
    pub registry: Pubkey,
    pub agent: Pubkey,
    pub bot_nft: Pubkey,
    pub vault: Pubkey,
}

impl WithdrawWithNft {
    pub fn instruction(&self, agent_id: u64, amount: u64) -> Instruction {
        build(
            WITHDRAW_WITH_NFT_DISCRIMINATOR,
            &AmountArgs { agent_id, amount },
            vec![
                AccountMeta::new(self.holder, true),
                AccountMeta::new_readonly(self.registry, false),
                AccountMeta::new(self.agent, false),
                AccountMeta::new_readonly(self.bot_nft, false),
                AccountMeta::new(self.vault, false),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            ],
        )
    }
}

/// Accounts shared by `activate_agent` and `deactivate_agent`.
pub struct SetAgentStatus {
    pub holder: Pubkey,
    pub registry: Pubkey,
    pub agent: Pubkey,
    pub bot_nft: Pubkey,
}

impl SetAgentStatus {
    pub fn instruction(&self, agent_id: u64, is_active: bool) -> Instruction {
        let discriminator = if is_active {
            ACTIVATE_AGENT_DISCRIMINATOR
        } else {
            DEACTIVATE_AGENT_DISCRIMINATOR
        };
        build(
            discriminator,
            &AgentIdArgs { agent_id },
            vec![
                AccountMeta::new_readonly(self.holder, true),
                AccountMeta::new_readonly(self.registry, false),
                AccountMeta::new(self.agent, false),
                AccountMeta::new_readonly(self.bot_nft, false),
            ],
        )
    }
}

/// Accounts shared by the read-only `is_agent_active` and `get_agent_details`.
pub struct ViewAgent {
    pub registry: Pubkey,
    pub agent: Pubkey,
}

impl ViewAgent {
    fn accounts(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new_readonly(self.registry, false),
            AccountMeta::new_readonly(self.agent, false),
        ]
    }

    pub fn is_agent_active(&self, agent_id: u64) -> Instruction {
        build(
            IS_AGENT_ACTIVE_DISCRIMINATOR,
            &AgentIdArgs { agent_id },
            self.accounts(),
        )
    }

    pub fn get_agent_details(&self, agent_id: u64) -> Instruction {
        build(
            GET_AGENT_DETAILS_DISCRIMINATOR,
            &AgentIdArgs { agent_id },
            self.accounts(),
        )
    }
}

pub struct RegisterMcpServer {
    pub operator: Pubkey,
    pub registry: Pubkey,
    pub mcp_server: Pubkey,
}

#[derive(BorshSerialize)]
struct RegisterMcpServerArgs {
    name: String,
    endpoint: String,
}

impl RegisterMcpServer {
    pub fn instruction(&self, name: String, endpoint: String) -> Instruction {
        build(
            REGISTER_MCP_SERVER_DISCRIMINATOR,
            &RegisterMcpServerArgs { name, endpoint },
            vec![
                AccountMeta::new(self.operator, true),
                AccountMeta::new(self.registry, false),
                AccountMeta::new(self.mcp_server, false),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            ],
        )
    }
}

#[derive(BorshSerialize)]
struct ServerBindingArgs {
    agent_id: u64,
    server_id: u64,
}

pub struct AttachMcpServer {
    pub holder: Pubkey,
    pub registry: Pubkey,
    pub agent: Pubkey,
    pub bot_nft: Pubkey,
    pub mcp_server: Pubkey,
}

impl AttachMcpServer {
    pub fn instruction(&self, agent_id: u64, server_id: u64) -> Instruction {
        build(
            ATTACH_MCP_SERVER_DISCRIMINATOR,
            &ServerBindingArgs {
                agent_id,
                server_id,
            },
            vec![
                AccountMeta::new_readonly(self.holder, true),
                AccountMeta::new_readonly(self.registry, false),
                AccountMeta::new(self.agent, false),
                AccountMeta::new_readonly(self.bot_nft, false),
                AccountMeta::new_readonly(self.mcp_server, false),
            ],
        )
    }
}

pub struct DetachMcpServer {
    pub holder: Pubkey,
    pub registry: Pubkey,
    pub agent: Pubkey,
    pub bot_nft: Pubkey,
}

impl DetachMcpServer {
    pub fn instruction(&self, agent_id: u64, server_id: u64) -> Instruction {
        build(
            DETACH_MCP_SERVER_DISCRIMINATOR,
            &ServerBindingArgs {
                agent_id,
                server_id,
            },
            vec![
                AccountMeta::new_readonly(self.holder, true),
                AccountMeta::new_readonly(self.registry, false),
                AccountMeta::new(self.agent, false),
                AccountMeta::new_readonly(self.bot_nft, false),
            ],
        )
    }
}

pub struct RecordActivity {
    pub bot: Pubkey,
    pub registry: Pubkey,
    pub agent: Pubkey,
}

impl RecordActivity {
    pub fn instruction(&self, agent_id: u64) -> Instruction {
        build(
            RECORD_ACTIVITY_DISCRIMINATOR,
            &AgentIdArgs { agent_id },
            vec![
                AccountMeta::new_readonly(self.bot, true),
                AccountMeta::new_readonly(self.registry, false),
                AccountMeta::new(self.agent, false),
            ],
        )
    }
}

pub struct AdvanceEpoch {
    pub cranker: Pubkey,
    pub registry: Pubkey,
    pub agent: Pubkey,
}

impl AdvanceEpoch {
    pub fn instruction(&self, agent_id: u64) -> Instruction {
        build(
            ADVANCE_EPOCH_DISCRIMINATOR,
            &AgentIdArgs { agent_id },
            vec![
                AccountMeta::new_readonly(self.cranker, true),
                AccountMeta::new_readonly(self.registry, false),
                AccountMeta::new(self.agent, false),
            ],
        )
    }
}

pub struct UnlockAgent {
    pub authority: Pubkey,
    pub registry: Pubkey,
    pub agent: Pubkey,
}

impl UnlockAgent {
    pub fn instruction(&self, agent_id: u64) -> Instruction {
        build(
            UNLOCK_AGENT_DISCRIMINATOR,
            &AgentIdArgs { agent_id },
            vec![
                AccountMeta::new_readonly(self.authority, true),
                AccountMeta::new_readonly(self.registry, false),
                AccountMeta::new(self.agent, false),
            ],
        )
    }
}

pub struct TransferBotNft {
    pub holder: Pubkey,
    pub registry: Pubkey,
    pub agent: Pubkey,
    pub bot_nft: Pubkey,
}

#[derive(BorshSerialize)]
struct TransferBotNftArgs {
    agent_id: u64,
    new_owner: Pubkey,
}

impl TransferBotNft {
    pub fn instruction(&self, agent_id: u64, new_owner: Pubkey) -> Instruction {
        build(
            TRANSFER_BOT_NFT_DISCRIMINATOR,
            &TransferBotNftArgs {
                agent_id,
                new_owner,
            },
            vec![
                AccountMeta::new_readonly(self.holder, true),
                AccountMeta::new_readonly(self.registry, false),
                AccountMeta::new(self.agent, false),
                AccountMeta::new(self.bot_nft, false),
            ],
        )
    }
}
