//! # Shell Completion Module
//!
//! Generates completion scripts through clap's completion system.
//!
//! ```bash
//! genrelink completion bash > ~/.local/share/bash-completion/completions/genrelink
//! genrelink completion zsh > ~/.config/zsh/completions/_genrelink
//! ```

use clap::Command;
use clap_complete::{generate, Generator, Shell as CompletionShell};
use std::io::{self, Write};

use crate::cli::Shell;

/// Write completions for the given shell to `out`
pub fn write_completions<G: Generator>(gen: G, cmd: &mut Command, out: &mut dyn Write) {
    let name = cmd.get_name().to_string();
    generate(gen, cmd, name, out);
}

/// Generate shell completions for the given shell on stdout
pub fn generate_completions<G: Generator>(gen: G, cmd: &mut Command) {
    write_completions(gen, cmd, &mut io::stdout());
}

/// Map our CLI shell enum onto clap_complete's
#[must_use]
pub const fn shell_to_completion_shell(shell: &Shell) -> CompletionShell {
    match shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    }
}
