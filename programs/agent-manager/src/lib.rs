use anchor_lang::prelude::*;

declare_id!("6anbDQNCcVh2f6okexjaX1VGj6tEnizJ1kV5UTBS8Zhi");

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::*;

#[program]
pub mod agent_manager {
    use super::*;

    pub fn initialize_registry(
        ctx: Context<InitializeRegistry>,
        epoch_policy: EpochPolicy,
    ) -> Result<()> {
        ctx.accounts.initialize_registry(epoch_policy, &ctx.bumps)
    }

    pub fn update_registry_config(
        ctx: Context<UpdateRegistryConfig>,
        epoch_policy: Option<EpochPolicy>,
    ) -> Result<()> {
        ctx.accounts.update_registry_config(epoch_policy)
    }

    pub fn create_agent(
        ctx: Context<CreateAgent>,
        bot_address: Pubkey,
        name: String,
        description: String,
        image_url: String,
        app_id: String,
        initial_deposit: u64,
    ) -> Result<u64> {
        ctx.accounts.create_agent(
            bot_address,
            name,
            description,
            image_url,
            app_id,
            initial_deposit,
            &ctx.bumps,
        )
    }

    pub fn deposit(ctx: Context<Deposit>, _agent_id: u64, amount: u64) -> Result<()> {
        ctx.accounts.deposit(amount)
    }

    pub fn withdraw_with_nft(
        ctx: Context<WithdrawWithNft>,
        _agent_id: u64,
        amount: u64,
    ) -> Result<()> {
        ctx.accounts.withdraw_with_nft(amount)
    }

    pub fn activate_agent(ctx: Context<SetAgentStatus>, _agent_id: u64) -> Result<()> {
        ctx.accounts.set_agent_status(true)
    }

    pub fn deactivate_agent(ctx: Context<SetAgentStatus>, _agent_id: u64) -> Result<()> {
        ctx.accounts.set_agent_status(false)
    }

    pub fn is_agent_active(ctx: Context<ViewAgent>, _agent_id: u64) -> Result<bool> {
        ctx.accounts.is_agent_active()
    }

    pub fn get_agent_details(ctx: Context<ViewAgent>, _agent_id: u64) -> Result<AgentDetails> {
        ctx.accounts.get_agent_details()
    }

    pub fn register_mcp_server(
        ctx: Context<RegisterMcpServer>,
        name: String,
        endpoint: String,
    ) -> Result<u64> {
        ctx.accounts.register_mcp_server(name, endpoint, &ctx.bumps)
    }

    pub fn attach_mcp_server(
        ctx: Context<AttachMcpServer>,
        _agent_id: u64,
        _server_id: u64,
    ) -> Result<()> {
        ctx.accounts.attach_mcp_server()
    }

    pub fn detach_mcp_server(
        ctx: Context<DetachMcpServer>,
        _agent_id: u64,
        server_id: u64,
    ) -> Result<()> {
        ctx.accounts.detach_mcp_server(server_id)
    }

    pub fn record_activity(ctx: Context<RecordActivity>, _agent_id: u64) -> Result<()> {
        ctx.accounts.record_activity()
    }

    pub fn advance_epoch(ctx: Context<AdvanceEpoch>, _agent_id: u64) -> Result<()> {
        ctx.accounts.advance_epoch()
    }

    pub fn unlock_agent(ctx: Context<UnlockAgent>, _agent_id: u64) -> Result<()> {
        ctx.accounts.unlock_agent()
    }

    pub fn transfer_bot_nft(
        ctx: Context<TransferBotNft>,
        _agent_id: u64,
        new_owner: Pubkey,
    ) -> Result<()> {
        ctx.accounts.transfer_bot_nft(new_owner)
    }
}
