use std::io::Write;

use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::Cli;

pub fn handle_completions<W: Write>(shell: clap_complete::Shell, out: &mut W) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "tally", out);
    Ok(())
}
