#![allow(dead_code)]

use anchor_lang::{error::Error, prelude::*};
use proposal_voting::{ElectionAccount, ErrorCode};

pub struct Fixture {
    pub admin: Pubkey,
    pub voters: Vec<Pubkey>,
    pub stranger: Pubkey,
    pub election: ElectionAccount,
}

/// Fresh election, nobody registered yet.
pub fn deployed() -> Fixture {
    let admin = Pubkey::new_unique();
    Fixture {
        admin,
        voters: (0..3).map(|_| Pubkey::new_unique()).collect(),
        stranger: Pubkey::new_unique(),
        election: ElectionAccount::new(admin, 1, 255),
    }
}

/// Three registered voters, still in registration.
pub fn with_voters() -> Fixture {
    let mut fixture = deployed();
    for voter in fixture.voters.clone() {
        fixture
            .election
            .register_participant(&fixture.admin, voter)
            .unwrap();
    }
    fixture
}

/// Voting open with "Proposal 1" (index 1) and "Proposal 2" (index 2).
pub fn ready_to_vote() -> Fixture {
    let mut fixture = with_voters();
    let admin = fixture.admin;
    fixture.election.open_proposals(&admin).unwrap();
    fixture
        .election
        .submit_proposal(&fixture.voters[0], "Proposal 1".to_string())
        .unwrap();
    fixture
        .election
        .submit_proposal(&fixture.voters[1], "Proposal 2".to_string())
        .unwrap();
    fixture.election.close_proposals(&admin).unwrap();
    fixture.election.open_voting(&admin).unwrap();
    fixture
}

pub fn assert_rejected<T: std::fmt::Debug>(result: Result<T>, expected: ErrorCode) {
    let code = u32::from(expected);
    match result {
        Err(Error::AnchorError(err)) => assert_eq!(
            err.error_code_number, code,
            "expected {}, got {}",
            code, err.error_name
        ),
        other => panic!("expected error {code}, got {other:?}"),
    }
}
