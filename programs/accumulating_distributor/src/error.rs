use anchor_lang::prelude::*;

#[error_code]
pub enum DistributorError {
    // Access control errors
    #[msg("Only owner can perform this action")]
    Unauthorized,

    // Creation errors
    #[msg("Timeout must be in the future")]
    InvalidTimeout,

    // Merkle root registry errors
    #[msg("Invalid merkle root")]
    InvalidMerkleRoot,
    #[msg("Merkle root already exists")]
    RootAlreadyAllowed,
    #[msg("Allowed merkle root capacity reached")]
    TooManyRoots,

    // Claim errors
    #[msg("Unknown merkle root")]
    UnknownRoot,
    #[msg("Invalid proof")]
    InvalidProof,
    #[msg("Drop already claimed")]
    AlreadyClaimed,

    // Recovery errors
    #[msg("Not timed out yet")]
    NotYetTimedOut,

    // Amount validation errors
    #[msg("Insufficient vault balance for this claim")]
    InsufficientVaultBalance,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match distributor's token mint")]
    TokenMintMismatch,
}
