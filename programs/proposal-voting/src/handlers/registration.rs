use anchor_lang::prelude::*;

use crate::ManageElection;

/// Registers `participant` as eligible to submit proposals and vote.
///
/// Administrator only, while registration is open.
pub fn register_participant(ctx: Context<ManageElection>, participant: Pubkey) -> Result<()> {
    let caller = ctx.accounts.signer.key();
    let election = &mut ctx.accounts.election_acc;

    let event = election.register_participant(&caller, participant)?;

    msg!(
        "Registered participant {} in election {} ({} total)",
        participant,
        election.id,
        election.participants.len()
    );
    emit!(event);

    Ok(())
}
