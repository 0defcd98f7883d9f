use anchor_lang::prelude::*;

use crate::{
    constants::{GENESIS_DESCRIPTION, MAX_DESCRIPTION_LEN, MAX_PARTICIPANTS, MAX_PROPOSALS},
    error::ErrorCode,
    state::{
        AdministratorTransferred, ParticipantRegistered, Phase, PhaseChanged, ProposalSubmitted,
        Transition, VoteCast,
    },
};

/// Voting record of one account. Unknown accounts read as the default
/// (unregistered) record.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct Participant {
    pub id: Pubkey,
    pub is_registered: bool,
    pub has_voted: bool,
    /// Only meaningful once `has_voted` is set
    pub voted_proposal_index: u32,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct Proposal {
    #[max_len(MAX_DESCRIPTION_LEN)]
    pub description: String,
    pub vote_count: u64,
}

impl Proposal {
    pub fn genesis() -> Self {
        Proposal {
            description: GENESIS_DESCRIPTION.to_string(),
            vote_count: 0,
        }
    }
}

/// Role a caller must hold for an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Administrator,
    Participant,
}

/// A single election: registry, proposals and workflow phase.
///
/// Every mutating method checks role, then phase, then input, and only then
/// touches any field, so a rejected call leaves the account exactly as it was.
/// On success it returns the event the caller is expected to emit.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct ElectionAccount {
    /// PDA bump seed
    pub bump: u8,
    /// Creator-chosen identifier, part of the PDA seeds
    pub id: u32,
    /// Account that created the election, part of the PDA seeds
    pub creator: Pubkey,
    /// Only key allowed to register participants and drive the workflow
    pub administrator: Pubkey,
    pub phase: Phase,
    /// Set by the tally; 0 until then
    pub winning_proposal_index: u32,
    #[max_len(MAX_PARTICIPANTS)]
    pub participants: Vec<Participant>,
    /// Index 0 is the GENESIS sentinel once proposals have opened
    #[max_len(MAX_PROPOSALS)]
    pub proposals: Vec<Proposal>,
}

impl ElectionAccount {
    pub fn new(creator: Pubkey, id: u32, bump: u8) -> Self {
        ElectionAccount {
            bump,
            id,
            creator,
            administrator: creator,
            phase: Phase::default(),
            winning_proposal_index: 0,
            participants: Vec::new(),
            proposals: Vec::new(),
        }
    }

    /// Role check, a pure function of the caller and the stored roles.
    pub fn authorize(&self, caller: &Pubkey, role: Role) -> Result<()> {
        match role {
            Role::Administrator => {
                require_keys_eq!(*caller, self.administrator, ErrorCode::NotAdministrator);
            }
            Role::Participant => {
                require!(self.is_registered(caller), ErrorCode::NotAParticipant);
            }
        }
        Ok(())
    }

    fn require_phase(&self, expected: Phase) -> Result<()> {
        if self.phase != expected {
            return Err(error!(ErrorCode::WrongPhase).with_values((expected, self.phase)));
        }
        Ok(())
    }

    fn participant_slot(&self, id: &Pubkey) -> Option<usize> {
        self.participants
            .iter()
            .position(|participant| participant.id == *id && participant.is_registered)
    }

    pub fn is_registered(&self, id: &Pubkey) -> bool {
        self.participant_slot(id).is_some()
    }

    pub fn register_participant(
        &mut self,
        caller: &Pubkey,
        id: Pubkey,
    ) -> Result<ParticipantRegistered> {
        self.authorize(caller, Role::Administrator)?;
        self.require_phase(Phase::RegistrationOpen)?;
        require!(!self.is_registered(&id), ErrorCode::AlreadyRegistered);
        require!(
            self.participants.len() < MAX_PARTICIPANTS,
            ErrorCode::ParticipantCapacityReached
        );

        self.participants.push(Participant {
            id,
            is_registered: true,
            has_voted: false,
            voted_proposal_index: 0,
        });

        Ok(ParticipantRegistered { participant: id })
    }

    /// Applies one entry of the transition table.
    ///
    /// Opening proposals seeds the GENESIS sentinel at index 0; tallying records
    /// the winner before the phase moves to `Tallied`.
    pub fn advance(&mut self, caller: &Pubkey, transition: Transition) -> Result<PhaseChanged> {
        let (from, to) = transition.edge();
        self.authorize(caller, Role::Administrator)?;
        self.require_phase(from)?;

        match transition {
            Transition::OpenProposals => self.proposals.push(Proposal::genesis()),
            Transition::Tally => self.winning_proposal_index = self.leading_proposal_index(),
            Transition::CloseProposals | Transition::OpenVoting | Transition::CloseVoting => {}
        }
        self.phase = to;

        Ok(PhaseChanged {
            previous: from.code(),
            next: to.code(),
        })
    }

    pub fn open_proposals(&mut self, caller: &Pubkey) -> Result<PhaseChanged> {
        self.advance(caller, Transition::OpenProposals)
    }

    pub fn close_proposals(&mut self, caller: &Pubkey) -> Result<PhaseChanged> {
        self.advance(caller, Transition::CloseProposals)
    }

    pub fn open_voting(&mut self, caller: &Pubkey) -> Result<PhaseChanged> {
        self.advance(caller, Transition::OpenVoting)
    }

    pub fn close_voting(&mut self, caller: &Pubkey) -> Result<PhaseChanged> {
        self.advance(caller, Transition::CloseVoting)
    }

    pub fn tally(&mut self, caller: &Pubkey) -> Result<PhaseChanged> {
        self.advance(caller, Transition::Tally)
    }

    pub fn submit_proposal(
        &mut self,
        caller: &Pubkey,
        description: String,
    ) -> Result<ProposalSubmitted> {
        self.authorize(caller, Role::Participant)?;
        self.require_phase(Phase::ProposalsOpen)?;
        require!(!description.is_empty(), ErrorCode::EmptyProposal);
        require!(
            description.len() <= MAX_DESCRIPTION_LEN,
            ErrorCode::ProposalTooLong
        );
        require!(
            self.proposals.len() < MAX_PROPOSALS,
            ErrorCode::ProposalCapacityReached
        );

        let proposal_index = self.proposals.len() as u32;
        self.proposals.push(Proposal {
            description,
            vote_count: 0,
        });

        Ok(ProposalSubmitted { proposal_index })
    }

    pub fn cast_vote(&mut self, caller: &Pubkey, proposal_index: u32) -> Result<VoteCast> {
        self.authorize(caller, Role::Participant)?;
        self.require_phase(Phase::VotingOpen)?;
        let slot = self
            .participant_slot(caller)
            .ok_or_else(|| error!(ErrorCode::NotAParticipant))?;
        require!(!self.participants[slot].has_voted, ErrorCode::AlreadyVoted);
        let index = proposal_index as usize;
        require!(index < self.proposals.len(), ErrorCode::InvalidProposal);

        let voter = &mut self.participants[slot];
        voter.has_voted = true;
        voter.voted_proposal_index = proposal_index;
        self.proposals[index].vote_count += 1;

        Ok(VoteCast {
            voter: *caller,
            proposal_index,
        })
    }

    pub fn transfer_administrator(
        &mut self,
        caller: &Pubkey,
        next: Pubkey,
    ) -> Result<AdministratorTransferred> {
        self.authorize(caller, Role::Administrator)?;
        require!(next != Pubkey::default(), ErrorCode::InvalidAdministrator);

        let previous = self.administrator;
        self.administrator = next;

        Ok(AdministratorTransferred { previous, next })
    }

    pub fn get_participant(&self, caller: &Pubkey, id: &Pubkey) -> Result<Participant> {
        self.authorize(caller, Role::Participant)?;

        Ok(self
            .participants
            .iter()
            .find(|participant| participant.id == *id)
            .cloned()
            .unwrap_or_else(|| Participant {
                id: *id,
                ..Participant::default()
            }))
    }

    pub fn get_proposal(&self, caller: &Pubkey, proposal_index: u32) -> Result<Proposal> {
        self.authorize(caller, Role::Participant)?;

        self.proposals
            .get(proposal_index as usize)
            .cloned()
            .ok_or_else(|| error!(ErrorCode::InvalidProposal))
    }

    /// The winning proposal; only available once the election is tallied.
    pub fn winner(&self) -> Result<&Proposal> {
        self.require_phase(Phase::Tallied)?;

        self.proposals
            .get(self.winning_proposal_index as usize)
            .ok_or_else(|| error!(ErrorCode::InvalidProposal))
    }

    /// Sum of all proposals' vote counts.
    pub fn votes_cast(&self) -> u64 {
        self.proposals
            .iter()
            .map(|proposal| proposal.vote_count)
            .sum()
    }

    // Ascending scan with a running maximum replaced only on a strictly greater
    // count: ties go to the lowest index.
    fn leading_proposal_index(&self) -> u32 {
        let mut leader = 0usize;
        for (index, proposal) in self.proposals.iter().enumerate().skip(1) {
            if proposal.vote_count > self.proposals[leader].vote_count {
                leader = index;
            }
        }
        leader as u32
    }
}
