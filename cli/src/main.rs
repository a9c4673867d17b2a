//! Command line access to the `bricks` program. Configuration is read from the environment, see
//! [`bricks_client::load_env`].

use bricks_client::{
    load_env,
    BricksError,
    BricksProgram,
};
use clap::Parser;

use crate::cli::{
    run,
    CliArgs,
};

pub mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let CliArgs { command } = CliArgs::parse();

    let rpc = load_env::rpc_client()?;
    let context = load_env::program_context()?;
    let program = match load_env::keypair()? {
        Some(keypair) => BricksProgram::with_keypair(rpc, keypair, context),
        None if command.needs_signer() => {
            return Err(anyhow::Error::from(BricksError::MissingSigner)
                .context(format!("Set {} to send transactions", load_env::SECRET_KEY_VAR)));
        }
        None => BricksProgram::read_only(rpc, context),
    };

    run(&program, command).await
}
