use num_derive::FromPrimitive;
use solana_program_error::ProgramError;
use thiserror::Error;

/// Program error codes, numbered from Anchor's custom error offset (6000).
#[derive(Clone, Copy, Debug, Eq, Error, FromPrimitive, PartialEq)]
pub enum AgentManagerError {
    #[error("Overflow")]
    Overflow = 0x1770,
    #[error("Underflow")]
    Underflow = 0x1771,
    #[error("Agent not found")]
    AgentNotFound = 0x1772,
    #[error("Not authorized")]
    Unauthorized = 0x1773,
    #[error("Invalid authority")]
    InvalidAuthority = 0x1774,
    #[error("Insufficient balance")]
    InsufficientBalance = 0x1775,
    #[error("Agent locked")]
    AgentLocked = 0x1776,
    #[error("Agent is not locked")]
    AgentNotLocked = 0x1777,
    #[error("Agent is inactive")]
    AgentInactive = 0x1778,
    #[error("Bot address cannot be the default pubkey")]
    InvalidBotAddress = 0x1779,
    #[error("App id must be between 1 and 64 bytes")]
    InvalidAppId = 0x177a,
    #[error("Name is too long")]
    NameTooLong = 0x177b,
    #[error("Description is too long")]
    DescriptionTooLong = 0x177c,
    #[error("Image url is too long")]
    ImageUrlTooLong = 0x177d,
    #[error("Endpoint is too long")]
    EndpointTooLong = 0x177e,
    #[error("Amount must be greater than zero")]
    InvalidAmount = 0x177f,
    #[error("MCP server already attached")]
    DuplicateMcpServer = 0x1780,
    #[error("MCP server not attached")]
    McpServerNotAttached = 0x1781,
    #[error("At most 16 MCP servers can be attached")]
    TooManyMcpServers = 0x1782,
    #[error("Epoch has not advanced since last update")]
    EpochNotElapsed = 0x1783,
    #[error("Invalid epoch policy")]
    InvalidEpochPolicy = 0x1784,
    #[error("Invalid new owner")]
    InvalidNewOwner = 0x1785,
}

impl AgentManagerError {
    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn from_code(code: u32) -> Option<Self> {
        num_traits::FromPrimitive::from_u32(code)
    }
}

impl From<AgentManagerError> for ProgramError {
    fn from(e: AgentManagerError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
