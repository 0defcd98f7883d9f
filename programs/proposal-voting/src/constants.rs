// PDA seed for election accounts: [ELECTION_SEED, creator, id.to_le_bytes()]
pub const ELECTION_SEED: &[u8] = b"election";

/// Description of the sentinel proposal stored at index 0.
pub const GENESIS_DESCRIPTION: &str = "GENESIS";

// Capacity limits; they size the election account at creation time
pub const MAX_PARTICIPANTS: usize = 64;
pub const MAX_PROPOSALS: usize = 32;
/// Maximum proposal description length, in bytes.
pub const MAX_DESCRIPTION_LEN: usize = 64;
