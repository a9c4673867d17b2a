//! Public interface layer describing the `bricks` program's account layouts, instruction schemas,
//! PDA seeds, and the identifier/text conversions shared by clients.

pub mod error;
pub mod identifier;
pub mod instructions;
pub mod pack;
pub mod seeds;
pub mod state;

pub mod program {
    use solana_address::Address;

    /// The default deployment of the `bricks` program. Clients targeting another deployment pass
    /// their own program ID through the client's program context.
    pub const ID: Address = Address::from_str_const("BRiCKSG3Xvq8mH4dZpWxNsV2aFf7TtUeY9kLrJc6Qn1E");
}
