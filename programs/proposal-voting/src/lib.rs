// Stops Rust Analyzer complaining about missing configs
// See https://solana.stackexchange.com/questions/17777
#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod handlers;
pub mod state;

use constants::*;
pub use error::ErrorCode;
pub use state::*;

declare_id!("Cz3m3FMCVZ1nbx7ipwgBFNLehM6nVoubxqGen8Q1m66i");

#[program]
pub mod proposal_voting {
    use super::*;

    pub fn create_election(ctx: Context<CreateElection>, id: u32) -> Result<()> {
        handlers::create_election::create_election(ctx, id)
    }

    pub fn register_participant(ctx: Context<ManageElection>, participant: Pubkey) -> Result<()> {
        handlers::registration::register_participant(ctx, participant)
    }

    pub fn open_proposals(ctx: Context<ManageElection>) -> Result<()> {
        handlers::workflow::advance_phase(ctx, Transition::OpenProposals)
    }

    pub fn submit_proposal(ctx: Context<ManageElection>, description: String) -> Result<()> {
        handlers::proposal::submit_proposal(ctx, description)
    }

    pub fn close_proposals(ctx: Context<ManageElection>) -> Result<()> {
        handlers::workflow::advance_phase(ctx, Transition::CloseProposals)
    }

    pub fn open_voting(ctx: Context<ManageElection>) -> Result<()> {
        handlers::workflow::advance_phase(ctx, Transition::OpenVoting)
    }

    pub fn cast_vote(ctx: Context<ManageElection>, proposal_index: u32) -> Result<()> {
        handlers::vote::cast_vote(ctx, proposal_index)
    }

    pub fn close_voting(ctx: Context<ManageElection>) -> Result<()> {
        handlers::workflow::advance_phase(ctx, Transition::CloseVoting)
    }

    pub fn tally(ctx: Context<ManageElection>) -> Result<()> {
        handlers::workflow::advance_phase(ctx, Transition::Tally)
    }

    pub fn get_participant(
        ctx: Context<InspectElection>,
        participant: Pubkey,
    ) -> Result<Participant> {
        handlers::inspect::get_participant(ctx, participant)
    }

    pub fn get_proposal(ctx: Context<InspectElection>, proposal_index: u32) -> Result<Proposal> {
        handlers::inspect::get_proposal(ctx, proposal_index)
    }

    pub fn transfer_administrator(
        ctx: Context<ManageElection>,
        new_administrator: Pubkey,
    ) -> Result<()> {
        handlers::administrator::transfer_administrator(ctx, new_administrator)
    }
}

#[derive(Accounts)]
#[instruction(id: u32)]
pub struct CreateElection<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + ElectionAccount::INIT_SPACE,
        seeds = [ELECTION_SEED, payer.key().as_ref(), id.to_le_bytes().as_ref()],
        bump,
    )]
    pub election_acc: Box<Account<'info, ElectionAccount>>,

    pub system_program: Program<'info, System>,
}

/// Accounts for every instruction that mutates an existing election. Which
/// role the signer needs is decided by the election itself.
#[derive(Accounts)]
pub struct ManageElection<'info> {
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [ELECTION_SEED, election_acc.creator.as_ref(), election_acc.id.to_le_bytes().as_ref()],
        bump = election_acc.bump,
    )]
    pub election_acc: Box<Account<'info, ElectionAccount>>,
}

#[derive(Accounts)]
pub struct InspectElection<'info> {
    pub signer: Signer<'info>,

    #[account(
        seeds = [ELECTION_SEED, election_acc.creator.as_ref(), election_acc.id.to_le_bytes().as_ref()],
        bump = election_acc.bump,
    )]
    pub election_acc: Box<Account<'info, ElectionAccount>>,
}
