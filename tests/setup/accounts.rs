use agent_manager_client::accounts::{Agent, BotNft, McpServer, RegistryConfig};
use agent_manager_client::{
    AGENT_SEED, AGENT_VAULT_SEED, BOT_NFT_SEED, MCP_SERVER_SEED, REGISTRY_SEED,
};
use solana_sdk::{pubkey::Pubkey, signature::Signer};

use crate::setup::TestFixture;

pub trait Accounts {
    fn find_registry_pda(&self) -> (Pubkey, u8);
    fn get_registry(&self) -> RegistryConfig;
    fn find_agent_pda(&self, agent_id: u64) -> (Pubkey, u8);
    fn get_agent(&self, agent_id: u64) -> Agent;
    fn find_agent_vault_pda(&self, agent: &Pubkey) -> (Pubkey, u8);
    fn find_bot_nft_pda(&self, bot_nft_id: u64) -> (Pubkey, u8);
    fn get_bot_nft(&self, bot_nft_id: u64) -> BotNft;
    fn find_mcp_server_pda(&self, server_id: u64) -> (Pubkey, u8);
    fn get_mcp_server(&self, server_id: u64) -> McpServer;
}

impl Accounts for TestFixture {
    fn find_registry_pda(&self) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[REGISTRY_SEED, self.authority.pubkey().as_ref()],
            &self.program_id,
        )
    }

    fn get_registry(&self) -> RegistryConfig {
        let addr = self.find_registry_pda().0;

        let account = self
            .svm
            .get_account(&addr)
            .expect("Registry account not found");

        RegistryConfig::from_bytes(&account.data).expect("Failed to deserialize registry account")
    }

    fn find_agent_pda(&self, agent_id: u64) -> (Pubkey, u8) {
        let registry = self.find_registry_pda().0;
        let seeds = &[AGENT_SEED, registry.as_ref(), &agent_id.to_le_bytes()];
        Pubkey::find_program_address(seeds, &self.program_id)
    }

    fn get_agent(&self, agent_id: u64) -> Agent {
        let addr = self.find_agent_pda(agent_id).0;

        let account = self
            .svm
            .get_account(&addr)
            .expect("Agent account not found");

        Agent::from_bytes(&account.data).expect("Failed to deserialize Agent account")
    }

    fn find_agent_vault_pda(&self, agent: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[AGENT_VAULT_SEED, agent.as_ref()], &self.program_id)
    }

    fn find_bot_nft_pda(&self, bot_nft_id: u64) -> (Pubkey, u8) {
        let registry = self.find_registry_pda().0;
        let seeds = &[BOT_NFT_SEED, registry.as_ref(), &bot_nft_id.to_le_bytes()];
        Pubkey::find_program_address(seeds, &self.program_id)
    }

    fn get_bot_nft(&self, bot_nft_id: u64) -> BotNft {
        let addr = self.find_bot_nft_pda(bot_nft_id).0;

        let account = self
            .svm
            .get_account(&addr)
            .expect("BotNft account not found");

        BotNft::from_bytes(&account.data).expect("Failed to deserialize BotNft account")
    }

    fn find_mcp_server_pda(&self, server_id: u64) -> (Pubkey, u8) {
        let registry = self.find_registry_pda().0;
        let seeds = &[MCP_SERVER_SEED, registry.as_ref(), &server_id.to_le_bytes()];
        Pubkey::find_program_address(seeds, &self.program_id)
    }

    fn get_mcp_server(&self, server_id: u64) -> McpServer {
        let addr = self.find_mcp_server_pda(server_id).0;

        let account = self
            .svm
            .get_account(&addr)
            .expect("McpServer account not found");

        McpServer::from_bytes(&account.data).expect("Failed to deserialize McpServer account")
    }
}
