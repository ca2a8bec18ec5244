use agent_manager_client::instructions::{
    AdvanceEpoch, AttachMcpServer, CreateAgent, CreateAgentInstructionArgs, Deposit,
    DetachMcpServer, InitializeRegistry, RecordActivity, RegisterMcpServer, SetAgentStatus,
    TransferBotNft, UnlockAgent, UpdateRegistryConfig, ViewAgent, WithdrawWithNft,
};
use agent_manager_client::EpochPolicy;
use litesvm::types::TransactionResult;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use utils::Utils;

use crate::setup::test_data::*;
use crate::setup::{Accounts, TestFixture};

pub trait Instructions {
    fn initialize_registry(
        &mut self,
        authority: &Keypair,
        epoch_policy: EpochPolicy,
    ) -> TransactionResult;

    fn update_registry_config(
        &mut self,
        authority: &Keypair,
        epoch_policy: Option<EpochPolicy>,
    ) -> TransactionResult;

    fn create_agent(
        &mut self,
        creator: &Keypair,
        bot_address: Pubkey,
        app_id: &str,
        initial_deposit: u64,
    ) -> TransactionResult;

    fn create_agent_with_metadata(
        &mut self,
        creator: &Keypair,
        args: CreateAgentInstructionArgs,
    ) -> TransactionResult;

    fn deposit(&mut self, depositor: &Keypair, agent_id: u64, amount: u64) -> TransactionResult;

    fn withdraw_with_nft(
        &mut self,
        holder: &Keypair,
        agent_id: u64,
        amount: u64,
    ) -> TransactionResult;

    fn activate_agent(&mut self, holder: &Keypair, agent_id: u64) -> TransactionResult;

    fn deactivate_agent(&mut self, holder: &Keypair, agent_id: u64) -> TransactionResult;

    fn is_agent_active(&mut self, payer: &Keypair, agent_id: u64) -> TransactionResult;

    fn get_agent_details(&mut self, payer: &Keypair, agent_id: u64) -> TransactionResult;

    fn register_mcp_server(
        &mut self,
        operator: &Keypair,
        name: &str,
        endpoint: &str,
    ) -> TransactionResult;

    fn attach_mcp_server(
        &mut self,
        holder: &Keypair,
        agent_id: u64,
        server_id: u64,
    ) -> TransactionResult;

    fn detach_mcp_server(
        &mut self,
        holder: &Keypair,
        agent_id: u64,
        server_id: u64,
    ) -> TransactionResult;

    fn record_activity(&mut self, bot: &Keypair, agent_id: u64) -> TransactionResult;

    fn advance_epoch(&mut self, cranker: &Keypair, agent_id: u64) -> TransactionResult;

    fn unlock_agent(&mut self, authority: &Keypair, agent_id: u64) -> TransactionResult;

    fn transfer_bot_nft(
        &mut self,
        holder: &Keypair,
        agent_id: u64,
        new_owner: Pubkey,
    ) -> TransactionResult;
}

impl TestFixture {
    /// Agents and bot NFTs are minted in lockstep, but prefer the stored link when it exists.
    fn bot_nft_for(&self, agent_id: u64) -> Pubkey {
        let agent = self.find_agent_pda(agent_id).0;
        let bot_nft_id = match self.svm.get_account(&agent) {
            Some(_) => self.get_agent(agent_id).bot_nft_id,
            None => agent_id,
        };
        self.find_bot_nft_pda(bot_nft_id).0
    }
}

impl Instructions for TestFixture {
    fn initialize_registry(
        &mut self,
        authority: &Keypair,
        epoch_policy: EpochPolicy,
    ) -> TransactionResult {
        let registry = Pubkey::find_program_address(
            &[agent_manager_client::REGISTRY_SEED, authority.pubkey().as_ref()],
            &self.program_id,
        )
        .0;

        let ix = InitializeRegistry {
            authority: authority.pubkey(),
            registry,
        }
        .instruction(epoch_policy);

        self.svm.send_tx(&[ix], &authority.pubkey(), &[authority])
    }

    fn update_registry_config(
        &mut self,
        authority: &Keypair,
        epoch_policy: Option<EpochPolicy>,
    ) -> TransactionResult {
        let ix = UpdateRegistryConfig {
            authority: authority.pubkey(),
            registry: self.find_registry_pda().0,
        }
        .instruction(epoch_policy);

        self.svm.send_tx(&[ix], &authority.pubkey(), &[authority])
    }

    fn create_agent(
        &mut self,
        creator: &Keypair,
        bot_address: Pubkey,
        app_id: &str,
        initial_deposit: u64,
    ) -> TransactionResult {
        let args = CreateAgentInstructionArgs {
            bot_address,
            name: DEFAULT_AGENT_NAME.to_string(),
            description: DEFAULT_AGENT_DESCRIPTION.to_string(),
            image_url: DEFAULT_AGENT_IMAGE_URL.to_string(),
            app_id: app_id.to_string(),
            initial_deposit,
        };
        self.create_agent_with_metadata(creator, args)
    }

    fn create_agent_with_metadata(
        &mut self,
        creator: &Keypair,
        args: CreateAgentInstructionArgs,
    ) -> TransactionResult {
        let registry = self.get_registry();
        let agent = self.find_agent_pda(registry.agent_count).0;

        let ix = CreateAgent {
            creator: creator.pubkey(),
            registry: self.find_registry_pda().0,
            agent,
            bot_nft: self.find_bot_nft_pda(registry.bot_nft_count).0,
            vault: self.find_agent_vault_pda(&agent).0,
        }
        .instruction(args);

        self.svm.send_tx(&[ix], &creator.pubkey(), &[creator])
    }

    fn deposit(&mut self, depositor: &Keypair, agent_id: u64, amount: u64) -> TransactionResult {
        let agent = self.find_agent_pda(agent_id).0;

        let ix = Deposit {
            depositor: depositor.pubkey(),
            registry: self.find_registry_pda().0,
            agent,
            vault: self.find_agent_vault_pda(&agent).0,
        }
        .instruction(agent_id, amount);

        self.svm.send_tx(&[ix], &depositor.pubkey(), &[depositor])
    }

    fn withdraw_with_nft(
        &mut self,
        holder: &Keypair,
        agent_id: u64,
        amount: u64,
    ) -> TransactionResult {
        let agent = self.find_agent_pda(agent_id).0;

        let ix = WithdrawWithNft {
            holder: holder.pubkey(),
            registry: self.find_registry_pda().0,
            agent,
            bot_nft: self.bot_nft_for(agent_id),
            vault: self.find_agent_vault_pda(&agent).0,
        }
        .instruction(agent_id, amount);

        self.svm.send_tx(&[ix], &holder.pubkey(), &[holder])
    }

    fn activate_agent(&mut self, holder: &Keypair, agent_id: u64) -> TransactionResult {
        let ix = SetAgentStatus {
            holder: holder.pubkey(),
            registry: self.find_registry_pda().0,
            agent: self.find_agent_pda(agent_id).0,
            bot_nft: self.bot_nft_for(agent_id),
        }
        .instruction(agent_id, true);

        self.svm.send_tx(&[ix], &holder.pubkey(), &[holder])
    }

    fn deactivate_agent(&mut self, holder: &Keypair, agent_id: u64) -> TransactionResult {
        let ix = SetAgentStatus {
            holder: holder.pubkey(),
            registry: self.find_registry_pda().0,
            agent: self.find_agent_pda(agent_id).0,
            bot_nft: self.bot_nft_for(agent_id),
        }
        .instruction(agent_id, false);

        self.svm.send_tx(&[ix], &holder.pubkey(), &[holder])
    }

    fn is_agent_active(&mut self, payer: &Keypair, agent_id: u64) -> TransactionResult {
        let ix = ViewAgent {
            registry: self.find_registry_pda().0,
            agent: self.find_agent_pda(agent_id).0,
        }
        .is_agent_active(agent_id);

        self.svm.send_tx(&[ix], &payer.pubkey(), &[payer])
    }

    fn get_agent_details(&mut self, payer: &Keypair, agent_id: u64) -> TransactionResult {
        let ix = ViewAgent {
            registry: self.find_registry_pda().0,
            agent: self.find_agent_pda(agent_id).0,
        }
        .get_agent_details(agent_id);

        self.svm.send_tx(&[ix], &payer.pubkey(), &[payer])
    }

    fn register_mcp_server(
        &mut self,
        operator: &Keypair,
        name: &str,
        endpoint: &str,
    ) -> TransactionResult {
        let server_id = self.get_registry().mcp_server_count;

        let ix = RegisterMcpServer {
            operator: operator.pubkey(),
            registry: self.find_registry_pda().0,
            mcp_server: self.find_mcp_server_pda(server_id).0,
        }
        .instruction(name.to_string(), endpoint.to_string());

        self.svm.send_tx(&[ix], &operator.pubkey(), &[operator])
    }

    fn attach_mcp_server(
        &mut self,
        holder: &Keypair,
        agent_id: u64,
        server_id: u64,
    ) -> TransactionResult {
        let ix = AttachMcpServer {
            holder: holder.pubkey(),
            registry: self.find_registry_pda().0,
            agent: self.find_agent_pda(agent_id).0,
            bot_nft: self.bot_nft_for(agent_id),
            mcp_server: self.find_mcp_server_pda(server_id).0,
        }
        .instruction(agent_id, server_id);

        self.svm.send_tx(&[ix], &holder.pubkey(), &[holder])
    }

    fn detach_mcp_server(
        &mut self,
        holder: &Keypair,
        agent_id: u64,
        server_id: u64,
    ) -> TransactionResult {
        let ix = DetachMcpServer {
            holder: holder.pubkey(),
            registry: self.find_registry_pda().0,
            agent: self.find_agent_pda(agent_id).0,
            bot_nft: self.bot_nft_for(agent_id),
        }
        .instruction(agent_id, server_id);

        self.svm.send_tx(&[ix], &holder.pubkey(), &[holder])
    }

    fn record_activity(&mut self, bot: &Keypair, agent_id: u64) -> TransactionResult {
        let ix = RecordActivity {
            bot: bot.pubkey(),
            registry: self.find_registry_pda().0,
            agent: self.find_agent_pda(agent_id).0,
        }
        .instruction(agent_id);

        self.svm.send_tx(&[ix], &bot.pubkey(), &[bot])
    }

    fn advance_epoch(&mut self, cranker: &Keypair, agent_id: u64) -> TransactionResult {
        let ix = AdvanceEpoch {
            cranker: cranker.pubkey(),
            registry: self.find_registry_pda().0,
            agent: self.find_agent_pda(agent_id).0,
        }
        .instruction(agent_id);

        self.svm.send_tx(&[ix], &cranker.pubkey(), &[cranker])
    }

    fn unlock_agent(&mut self, authority: &Keypair, agent_id: u64) -> TransactionResult {
        let ix = UnlockAgent {
            authority: authority.pubkey(),
            registry: self.find_registry_pda().0,
            agent: self.find_agent_pda(agent_id).0,
        }
        .instruction(agent_id);

        self.svm.send_tx(&[ix], &authority.pubkey(), &[authority])
    }

    fn transfer_bot_nft(
        &mut self,
        holder: &Keypair,
        agent_id: u64,
        new_owner: Pubkey,
    ) -> TransactionResult {
        let ix = TransferBotNft {
            holder: holder.pubkey(),
            registry: self.find_registry_pda().0,
            agent: self.find_agent_pda(agent_id).0,
            bot_nft: self.bot_nft_for(agent_id),
        }
        .instruction(agent_id, new_owner);

        self.svm.send_tx(&[ix], &holder.pubkey(), &[holder])
    }
}
