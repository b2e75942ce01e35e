//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Result;
use clap::Parser;
use league_admin::{
    cli::{Commands, LeagueAdmin, PlayerCmd, SeasonCmd},
    commands::{open_database, player, season},
};

/// Run the CLI.
///
/// Domain-level failures (duplicate name, unknown season) are printed as
/// error-styled lines and still exit 0; only storage faults and argument
/// parsing errors produce a non-zero exit.
fn main() -> Result<()> {
    let app = LeagueAdmin::parse();
    let db = open_database(app.db_path.as_deref())?;

    let outcome = match app.command {
        Commands::Player { cmd } => match cmd {
            PlayerCmd::Create { name } => player::create_player(db, &name)?,
        },

        Commands::Season { cmd } => match cmd {
            SeasonCmd::Create { name } => season::create_season(db, &name)?,
            SeasonCmd::Activate { name } => season::activate_season(db, &name)?,
            SeasonCmd::List { json } => season::list_seasons(db, json)?,
        },
    };

    outcome.print();
    Ok(())
}
