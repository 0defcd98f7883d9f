use anchor_lang::prelude::*;

use crate::ManageElection;

/// Hands the administrator role to `new_administrator`.
///
/// Allowed in any phase. The PDA stays derived from the original creator.
pub fn transfer_administrator(
    ctx: Context<ManageElection>,
    new_administrator: Pubkey,
) -> Result<()> {
    let caller = ctx.accounts.signer.key();
    let election = &mut ctx.accounts.election_acc;

    let event = election.transfer_administrator(&caller, new_administrator)?;

    msg!(
        "Election {} administrator changed from {} to {}",
        election.id,
        event.previous,
        event.next
    );
    emit!(event);

    Ok(())
}
