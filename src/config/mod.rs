use clap::Parser;

/// The smoke test recognizes no flags or subcommands. Everything on the
/// command line, hyphen-prefixed or not, is captured here and ignored so
/// that no argument can change the output or the exit code. clap's
/// automatic `--help` and `--version` are disabled for the same reason.
#[derive(Debug, Clone, Parser)]
#[command(name = "cli")]
#[command(about = "Cross-platform Python smoke-test example")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CliConfig {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<String>,
}
