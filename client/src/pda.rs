//! PDA derivations for the accounts created by the `bricks` program.

use bricks_interface::{
    identifier::IdentifierBytes,
    seeds::{
        ASSET_SEED,
        USER_SEED,
    },
};
use solana_address::Address;
use solana_pubkey::Pubkey;

/// Derives the user account created by `creator` for the user `id`. Returns the address and bump.
pub fn find_user_address(
    program_id: &Address,
    creator: &Address,
    id: &IdentifierBytes,
) -> (Address, u8) {
    let seeds: [&[u8]; 3] = [USER_SEED, creator.as_ref(), id.as_slice()];
    Pubkey::find_program_address(&seeds, program_id)
}

/// Derives the asset account created by `creator` for the asset `id`. Returns the address and
/// bump.
pub fn find_asset_address(
    program_id: &Address,
    creator: &Address,
    id: &IdentifierBytes,
) -> (Address, u8) {
    let seeds: [&[u8]; 3] = [ASSET_SEED, creator.as_ref(), id.as_slice()];
    Pubkey::find_program_address(&seeds, program_id)
}

#[cfg(test)]
mod tests {
    use bricks_interface::{
        identifier::uuid_to_bytes,
        program,
    };

    use super::*;

    const CREATOR: Address = Address::from_str_const("6epEHHWCeLYYqiprybDARQsXoG8cbmNDNVGHMnLy1z9t");

    #[test]
    fn derivation_is_deterministic() {
        let id = uuid_to_bytes("123e4567-e89b-12d3-a456-426614174000").unwrap();
        let first = find_user_address(&program::ID, &CREATOR, &id);
        for _ in 0..4 {
            assert_eq!(find_user_address(&program::ID, &CREATOR, &id), first);
        }
    }

    #[test]
    fn seed_prefix_separates_account_kinds() {
        let id = [42; 16];
        let (user, _) = find_user_address(&program::ID, &CREATOR, &id);
        let (asset, _) = find_asset_address(&program::ID, &CREATOR, &id);
        assert_ne!(user, asset);
    }

    #[test]
    fn every_seed_input_matters() {
        let (base, _) = find_asset_address(&program::ID, &CREATOR, &[1; 16]);
        assert_ne!(base, find_asset_address(&program::ID, &CREATOR, &[2; 16]).0);
        assert_ne!(
            base,
            find_asset_address(&program::ID, &Address::new_from_array([9; 32]), &[1; 16]).0
        );
        assert_ne!(
            base,
            find_asset_address(&Address::new_from_array([8; 32]), &CREATOR, &[1; 16]).0
        );
    }

    #[test]
    fn bump_recreates_the_address() {
        let id = [7; 16];
        let (address, bump) = find_user_address(&program::ID, &CREATOR, &id);
        let seeds: [&[u8]; 4] = [USER_SEED, CREATOR.as_ref(), id.as_slice(), &[bump]];
        let recreated = Pubkey::create_program_address(&seeds, &program::ID).unwrap();
        assert_eq!(recreated, address);
        assert!(!address.is_on_curve());
    }
}
