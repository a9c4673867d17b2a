//! PDA seed prefixes. Both account kinds are derived from `[prefix, creator, identifier bytes]`.

pub const USER_SEED: &[u8] = b"user";

pub const ASSET_SEED: &[u8] = b"asset";
