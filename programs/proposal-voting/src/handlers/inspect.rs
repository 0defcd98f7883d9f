use anchor_lang::prelude::*;

use crate::{
    state::{Participant, Proposal},
    InspectElection,
};

// Read-only: results go back through return data, nothing is emitted.

pub fn get_participant(ctx: Context<InspectElection>, participant: Pubkey) -> Result<Participant> {
    let caller = ctx.accounts.signer.key();
    ctx.accounts
        .election_acc
        .get_participant(&caller, &participant)
}

pub fn get_proposal(ctx: Context<InspectElection>, proposal_index: u32) -> Result<Proposal> {
    let caller = ctx.accounts.signer.key();
    ctx.accounts
        .election_acc
        .get_proposal(&caller, proposal_index)
}
