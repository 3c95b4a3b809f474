//! Shell completions generation.
//!
//! `turnstile completions <shell>` prints a completion script to stdout so
//! it can be piped straight into the shell's completions directory.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    shell: Shell,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { shell: args.shell }
    }

    /// Render the completion script for the configured shell.
    fn render(&self, out: &mut dyn Write) {
        let mut cmd = Cli::command();
        clap_complete::generate(self.shell, &mut cmd, "turnstile", out);
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        // The script goes to stdout unstyled; status output stays on the UI.
        let stdout = std::io::stdout();
        self.render(&mut stdout.lock());
        Ok(CommandResult::success())
    }
}
