use clap::Parser;
use size_value::cli::{Cli, Commands};
use size_value::commands::{
    cmd_convert, cmd_format, cmd_generate_completion, cmd_parse, cmd_show_config,
};
use size_value::error::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // 初始化日志，RUST_LOG 优先
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        error!(error = %e, "命令执行失败");
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Parse {
            text,
            default,
            json,
        } => cmd_parse(text, default, json),
        Commands::Format { size, unit } => cmd_format(size, unit),
        Commands::Convert { text, to, frac } => cmd_convert(&text, to, frac),
        Commands::Config { key, json, init } => cmd_show_config(cli.config, key, json, init),
        Commands::Completion { shell } => cmd_generate_completion(shell),
    }
}
