use clap::Parser;
use passvault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { iterations } => passvault::cli::commands::init::execute(&cli, iterations),
        Commands::Add {
            ref name,
            ref username,
            ref notes,
            generate,
            length,
        } => passvault::cli::commands::add::execute(&cli, name, username, notes, generate, length),
        Commands::Show { ref name, reveal } => {
            passvault::cli::commands::show::execute(&cli, name, reveal)
        }
        Commands::List => passvault::cli::commands::list::execute(&cli),
        Commands::Update {
            ref name,
            ref username,
            password,
            ref notes,
            ref rename,
        } => passvault::cli::commands::update::execute(
            &cli,
            name,
            username.as_deref(),
            password,
            notes.as_deref(),
            rename.as_deref(),
        ),
        Commands::Delete { ref name, force } => {
            passvault::cli::commands::delete::execute(&cli, name, force)
        }
        Commands::Generate { length, no_symbols } => {
            passvault::cli::commands::generate::execute(&cli, length, no_symbols)
        }
        Commands::ChangePassword => passvault::cli::commands::change_password::execute(&cli),
        Commands::Backup { ref dest } => passvault::cli::commands::backup::execute(&cli, dest),
        Commands::Restore { ref file, replace } => {
            passvault::cli::commands::restore::execute(&cli, file, replace)
        }
        Commands::Stats => passvault::cli::commands::stats::execute(&cli),
        Commands::Completions { shell } => passvault::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        passvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
