use crate::cli::Cli;
use crate::error::Result;
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io::{self, Write};

pub fn cmd_generate_completion(shell: Option<Shell>) -> Result<()> {
    let script = completion_script(shell.unwrap_or(Shell::Bash));
    io::stdout().write_all(&script)?;
    Ok(())
}

/// 生成指定 shell 的补全脚本
pub fn completion_script(shell: Shell) -> Vec<u8> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    let mut buf = Vec::new();
    generate(shell, &mut cmd, bin_name, &mut buf);
    buf
}
