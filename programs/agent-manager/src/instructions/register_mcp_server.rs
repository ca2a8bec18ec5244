use anchor_lang::prelude::*;

use crate::events::McpServerRegistered;
use crate::state::{McpServer, RegistryConfig};

#[derive(Accounts)]
pub struct RegisterMcpServer<'info> {
    #[account(mut)]
    pub operator: Signer<'info>,

    #[account(
        mut,
        seeds = [RegistryConfig::SEED_PREFIX, registry.authority.key().as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, RegistryConfig>,

    #[account(
        init,
        payer = operator,
        space = 8 + McpServer::INIT_SPACE,
        seeds = [
            McpServer::SEED_PREFIX,
            registry.key().as_ref(),
            registry.next_mcp_server_id().to_le_bytes().as_ref()
        ],
        bump,
    )]
    pub mcp_server: Account<'info, McpServer>,

    pub system_program: Program<'info, System>,
}

impl<'info> RegisterMcpServer<'info> {
    pub fn register_mcp_server(
        &mut self,
        name: String,
        endpoint: String,
        bumps: &RegisterMcpServerBumps,
    ) -> Result<u64> {
        McpServer::validate_metadata(&name, &endpoint)?;

        let server_id = self.registry.next_mcp_server_id();

        self.mcp_server.set_inner(McpServer {
            server_id,
            operator: self.operator.key(),
            name: name.clone(),
            endpoint,
            bump: bumps.mcp_server,
        });

        self.registry.increment_mcp_server_count()?;

        emit!(McpServerRegistered {
            server_id,
            operator: self.operator.key(),
            name,
        });

        Ok(server_id)
    }
}
