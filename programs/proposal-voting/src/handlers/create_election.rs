use anchor_lang::prelude::*;

use crate::{state::ElectionAccount, CreateElection};

/// Creates a new election administered by the payer.
///
/// The election account starts in the registration phase with an empty
/// participant registry and no proposals. It is sized up front for the maximum
/// number of participants and proposals, so later instructions never reallocate.
///
/// # Arguments
/// * `id` - Identifier for this election, unique per creator
pub fn create_election(ctx: Context<CreateElection>, id: u32) -> Result<()> {
    msg!("Creating election {}", id);

    let creator = ctx.accounts.payer.key();
    ctx.accounts
        .election_acc
        .set_inner(ElectionAccount::new(creator, id, ctx.bumps.election_acc));

    Ok(())
}
