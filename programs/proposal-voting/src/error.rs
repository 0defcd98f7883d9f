use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    // Authorization
    #[msg("Caller is not the election administrator")]
    NotAdministrator,
    #[msg("Caller is not a registered participant")]
    NotAParticipant,

    // Workflow
    #[msg("Operation is not allowed in the current phase")]
    WrongPhase,

    // Validation
    #[msg("Participant is already registered")]
    AlreadyRegistered,
    #[msg("Participant has already voted")]
    AlreadyVoted,
    #[msg("Proposal description must not be empty")]
    EmptyProposal,
    #[msg("Proposal not found")]
    InvalidProposal,
    #[msg("Proposal description is too long")]
    ProposalTooLong,
    #[msg("Participant registry is full")]
    ParticipantCapacityReached,
    #[msg("Proposal list is full")]
    ProposalCapacityReached,
    #[msg("New administrator must not be the default key")]
    InvalidAdministrator,
}
