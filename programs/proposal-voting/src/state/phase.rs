use std::fmt;

use anchor_lang::prelude::*;

/// Workflow position of an election. Variants are declared in their only legal
/// order, so the derived `Ord` is the workflow order and the discriminant is the
/// numeric code carried by `PhaseChanged` events.
#[derive(
    AnchorSerialize,
    AnchorDeserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    InitSpace,
)]
pub enum Phase {
    #[default]
    RegistrationOpen,
    ProposalsOpen,
    ProposalsClosed,
    VotingOpen,
    VotingClosed,
    Tallied,
}

impl Phase {
    pub const ALL: [Phase; 6] = [
        Phase::RegistrationOpen,
        Phase::ProposalsOpen,
        Phase::ProposalsClosed,
        Phase::VotingOpen,
        Phase::VotingClosed,
        Phase::Tallied,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Administrator-driven phase transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    OpenProposals,
    CloseProposals,
    OpenVoting,
    CloseVoting,
    Tally,
}

impl Transition {
    pub const ALL: [Transition; 5] = [
        Transition::OpenProposals,
        Transition::CloseProposals,
        Transition::OpenVoting,
        Transition::CloseVoting,
        Transition::Tally,
    ];

    /// Transition table: the phase an election must be in for this transition,
    /// and the phase it ends up in.
    pub fn edge(self) -> (Phase, Phase) {
        match self {
            Transition::OpenProposals => (Phase::RegistrationOpen, Phase::ProposalsOpen),
            Transition::CloseProposals => (Phase::ProposalsOpen, Phase::ProposalsClosed),
            Transition::OpenVoting => (Phase::ProposalsClosed, Phase::VotingOpen),
            Transition::CloseVoting => (Phase::VotingOpen, Phase::VotingClosed),
            Transition::Tally => (Phase::VotingClosed, Phase::Tallied),
        }
    }
}
