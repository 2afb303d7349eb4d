//! Shell completions generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::TaskhintError;

/// Execute the completions command.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell, install: bool) -> Result<String, TaskhintError> {
    if install {
        Ok(install_instructions(shell))
    } else {
        generate(shell)
    }
}

fn generate(shell: Shell) -> Result<String, TaskhintError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "taskhint", &mut buf);
    String::from_utf8(buf)
        .map_err(|e| TaskhintError::InvalidInput(format!("completion script is not UTF-8: {e}")))
}

fn install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => "# Add to ~/.bashrc:
source <(taskhint completions bash)
"
        .to_string(),
        Shell::Zsh => "# Save to your fpath:
taskhint completions zsh > ~/.zsh/completions/_taskhint
# Then add to ~/.zshrc:
fpath=(~/.zsh/completions $fpath)
autoload -Uz compinit && compinit
"
        .to_string(),
        Shell::Fish => "# Save to fish completions directory:
taskhint completions fish > ~/.config/fish/completions/taskhint.fish
"
        .to_string(),
        Shell::PowerShell => "# Add to your PowerShell profile ($PROFILE):
taskhint completions powershell | Out-String | Invoke-Expression
"
        .to_string(),
        Shell::Elvish => "# Save to elvish completions directory:
taskhint completions elvish > ~/.config/elvish/lib/taskhint.elv
"
        .to_string(),
        other => format!("# Run: taskhint completions {other}\n"),
    }
}
