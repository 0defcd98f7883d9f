use anchor_lang::prelude::*;

use crate::ManageElection;

/// Appends a proposal on behalf of a registered participant.
///
/// # Arguments
/// * `description` - Non-empty proposal text, at most `MAX_DESCRIPTION_LEN` bytes
pub fn submit_proposal(ctx: Context<ManageElection>, description: String) -> Result<()> {
    let caller = ctx.accounts.signer.key();
    let election = &mut ctx.accounts.election_acc;

    let event = election.submit_proposal(&caller, description)?;

    msg!(
        "Proposal {} submitted to election {}",
        event.proposal_index,
        election.id
    );
    emit!(event);

    Ok(())
}
