use agent_manager_client::EpochPolicy;

// Program paths
pub const AGENT_MANAGER_SO_PATH: &str = "target/deploy/agent_manager.so";

// Agent test data
pub const DEFAULT_AGENT_NAME: &str = "Research Bot";
pub const DEFAULT_AGENT_DESCRIPTION: &str = "Summarises papers on request";
pub const DEFAULT_AGENT_IMAGE_URL: &str = "https://example.com/bot.png";
pub const DEFAULT_APP_ID: &str = "app-id-123";
pub const DEFAULT_INITIAL_DEPOSIT: u64 = 100_000_000; // 0.1 SOL
pub const DEFAULT_DEPOSIT_AMOUNT: u64 = 50_000_000; // 0.05 SOL

// MCP server test data
pub const DEFAULT_MCP_SERVER_NAME: &str = "search";
pub const DEFAULT_MCP_SERVER_ENDPOINT: &str = "https://mcp.example.com/search";

// Epoch test data
pub const GENESIS_EPOCH: u64 = 0;

pub fn default_epoch_policy() -> EpochPolicy {
    EpochPolicy::default()
}
