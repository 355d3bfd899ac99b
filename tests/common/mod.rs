//! Shared helpers for integration tests.

use std::process::{Command, Output};

/// Spawns the `botbook` binary and collects its output.
pub struct BotbookProcess;

impl BotbookProcess {
    /// Run `botbook` with the given arguments and wait for it to exit.
    pub fn spawn_command(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_botbook"))
            .args(args)
            .output()
            .expect("failed to spawn botbook")
    }
}
