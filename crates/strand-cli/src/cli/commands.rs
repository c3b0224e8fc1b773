//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("strand")
        .about("Parse query documents and N-Quads with traceable diagnostics")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(query_command())
        .subcommand(nquads_command())
        .subcommand(lex_command())
}

/// Add the parser runtime flags shared by grammar commands.
fn with_runtime_args(cmd: Command) -> Command {
    cmd.arg(json_arg())
        .arg(trace_arg())
        .arg(verbose_arg())
        .arg(recursion_limit_arg())
        .arg(color_arg())
}

/// Parse a query document and print its tree.
pub fn query_command() -> Command {
    let cmd = Command::new("query")
        .about("Parse a query document")
        .override_usage(
            "\
  strand query <FILE>
  strand query -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  strand query friends.gql                  # document tree
  strand query -q '{ user(id: 4) { name } }' --json
  strand query friends.gql --select         # the single query operation
  strand query friends.gql --trace -v       # parser trace on stderr"#,
        )
        .arg(input_path_arg())
        .arg(query_text_arg())
        .arg(select_arg());

    with_runtime_args(cmd)
}

/// Parse N-Quads statements, one quad per output line.
pub fn nquads_command() -> Command {
    let cmd = Command::new("nquads")
        .about("Parse N-Quads statements")
        .override_usage(
            "\
  strand nquads <FILE>
  strand nquads -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  strand nquads data.nq                     # one quad per line
  strand nquads -s '<a> <b> "c"@en .' --json
  cat data.nq | strand nquads -             # from stdin"#,
        )
        .arg(input_path_arg())
        .arg(source_text_arg());

    with_runtime_args(cmd)
}

/// Show the N-Quads token stream.
pub fn lex_command() -> Command {
    Command::new("lex")
        .about("Show N-Quads tokens")
        .override_usage(
            "\
  strand lex <FILE>
  strand lex -s <TEXT>",
        )
        .arg(input_path_arg())
        .arg(source_text_arg())
        .arg(color_arg())
}
