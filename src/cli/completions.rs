//! Shell completions generation.

use clap::Args;
use clap_complete::Shell;

use crate::error::Result;

/// Generate shell completions
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn run(args: CompletionsArgs) -> Result<()> {
    write_completions(args.shell, &mut std::io::stdout());
    Ok(())
}

fn write_completions(shell: Shell, out: &mut dyn std::io::Write) {
    let mut cmd = <super::Cli as clap::CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "spritegen", out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_mention_subcommands() {
        let mut buf = Vec::new();
        write_completions(Shell::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("spritegen"));
        assert!(script.contains("verify"));
    }
}
