mod cli;
mod commands;

use cli::{LexParams, NQuadsParams, QueryParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("query", m)) => {
            let params = QueryParams::from_matches(m);
            commands::query::run(params.into());
        }
        Some(("nquads", m)) => {
            let params = NQuadsParams::from_matches(m);
            commands::nquads::run(params.into());
        }
        Some(("lex", m)) => {
            let params = LexParams::from_matches(m);
            commands::lex::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
