use anchor_lang::prelude::*;

use crate::{
    state::{ElectionAccount, Transition},
    ManageElection,
};

/// Moves the election one step along its workflow.
///
/// Every phase-changing instruction funnels through here; the transition table
/// in `state::phase` decides which phase the election must currently be in.
pub fn advance_phase(ctx: Context<ManageElection>, transition: Transition) -> Result<()> {
    let caller = ctx.accounts.signer.key();
    let election = &mut ctx.accounts.election_acc;

    let event = election.advance(&caller, transition)?;

    msg!(
        "Election {}: {:?}, phase {} -> {}",
        election.id,
        transition,
        event.previous,
        event.next
    );
    if transition == Transition::Tally {
        msg!("{}", tally_summary(election)?);
    }
    emit!(event);

    Ok(())
}

/// Log line announcing the result of a tallied election.
pub fn tally_summary(election: &ElectionAccount) -> Result<String> {
    let winner = election.winner()?;
    Ok(format!(
        "Winning proposal {} ({:?}) with {} votes",
        election.winning_proposal_index, winner.description, winner.vote_count
    ))
}
