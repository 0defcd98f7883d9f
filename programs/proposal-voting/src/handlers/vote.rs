use anchor_lang::prelude::*;

use crate::ManageElection;

/// Casts the signer's single vote for the proposal at `proposal_index`.
///
/// Index 0 (GENESIS) is a valid choice.
pub fn cast_vote(ctx: Context<ManageElection>, proposal_index: u32) -> Result<()> {
    let caller = ctx.accounts.signer.key();
    let election = &mut ctx.accounts.election_acc;

    let event = election.cast_vote(&caller, proposal_index)?;

    msg!(
        "Vote recorded in election {} for proposal {}",
        election.id,
        proposal_index
    );
    emit!(event);

    Ok(())
}
