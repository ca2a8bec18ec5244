use anchor_lang::error_code;

#[error_code]
pub enum AgentManagerError {
    #[msg("Overflow")]
    Overflow,
    #[msg("Underflow")]
    Underflow,
    #[msg("Agent not found")]
    AgentNotFound,
    #[msg("Not authorized")]
    Unauthorized,
    #[msg("Invalid authority")]
    InvalidAuthority,
    #[msg("Insufficient balance")]
    InsufficientBalance,
    #[msg("Agent locked")]
    AgentLocked,
    #[msg("Agent is not locked")]
    AgentNotLocked,
    #[msg("Agent is inactive")]
    AgentInactive,
    #[msg("Bot address cannot be the default pubkey")]
    InvalidBotAddress,
    #[msg("App id must be between 1 and 64 bytes")]
    InvalidAppId,
    #[msg("Name is too long")]
    NameTooLong,
    #[msg("Description is too long")]
    DescriptionTooLong,
    #[msg("Image url is too long")]
    ImageUrlTooLong,
    #[msg("Endpoint is too long")]
    EndpointTooLong,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("MCP server already attached")]
    DuplicateMcpServer,
    #[msg("MCP server not attached")]
    McpServerNotAttached,
    #[msg("At most 16 MCP servers can be attached")]
    TooManyMcpServers,
    #[msg("Epoch has not advanced since last update")]
    EpochNotElapsed,
    #[msg("Invalid epoch policy")]
    InvalidEpochPolicy,
    #[msg("Invalid new owner")]
    InvalidNewOwner,
}
