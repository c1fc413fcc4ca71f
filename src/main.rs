mod cli;
mod error;
mod fmt;
mod importer;
mod investments;
mod models;
mod profile;
mod savings;
mod session;
mod settings;
mod workbook;

use clap::Parser;

use cli::{Cli, Commands, ProfileCommands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Import { file } => cli::import::run(&file),
        Commands::Transactions { file } => cli::transactions::run(&file),
        Commands::Chart { file } => cli::chart::run(&file),
        Commands::Invest { file, category } => cli::invest::run(&file, category.as_deref()),
        Commands::Export {
            file,
            output,
            totals,
        } => cli::export::run(&file, output, totals),
        Commands::Profile { command } => match command {
            ProfileCommands::Save {
                mobile,
                name,
                email,
                picture,
            } => cli::profile::save(&mobile, &name, &email, picture.as_deref()),
            ProfileCommands::Show { mobile } => cli::profile::show(mobile.as_deref()),
            ProfileCommands::Update {
                mobile,
                name,
                email,
                picture,
            } => cli::profile::update(&mobile, name.as_deref(), email.as_deref(), picture.as_deref()),
            ProfileCommands::Delete { mobile } => cli::profile::delete(&mobile),
        },
        Commands::Demo => cli::demo::run(),
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
