use anchor_lang::prelude::*;

#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct ParticipantRegistered {
    pub participant: Pubkey,
}

#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct PhaseChanged {
    /// Numeric code of the phase being left (0 = RegistrationOpen ... 5 = Tallied)
    pub previous: u8,
    pub next: u8,
}

#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct ProposalSubmitted {
    pub proposal_index: u32,
}

#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct VoteCast {
    pub voter: Pubkey,
    pub proposal_index: u32,
}

#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct AdministratorTransferred {
    pub previous: Pubkey,
    pub next: Pubkey,
}
