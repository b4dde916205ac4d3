use clap::Parser;
use notekeep::application::ConfigService;
use notekeep::cli::{format_note, format_note_list, Cli, Commands};
use notekeep::domain::NoteUpdate;
use notekeep::error::{NotekeepError, Result};
use notekeep::infrastructure::{Config, NoteRepository};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;

    let config = Config::load_from_dir(&cwd)?;
    init_logging(&config.log_level);

    let notes_path = cli
        .file
        .clone()
        .unwrap_or_else(|| config.notes_path(&cwd));

    match cli.command {
        Commands::Add { title, content } => {
            let mut repo = NoteRepository::open(notes_path)?;
            let note = repo.add(&title, &content)?;
            println!("Note {} added", note.id);
            Ok(())
        }
        Commands::List => {
            let repo = NoteRepository::open(notes_path)?;
            println!("{}", format_note_list(repo.notes()).trim_end());
            Ok(())
        }
        Commands::Show { id } => {
            let repo = NoteRepository::open(notes_path)?;
            let note = repo.find(id).ok_or(NotekeepError::NoteNotFound(id))?;
            println!("{}", format_note(note));
            Ok(())
        }
        Commands::Edit { id, title, content } => {
            let mut repo = NoteRepository::open(notes_path)?;
            if repo.edit(id, NoteUpdate::new(title, content))? {
                println!("Note {} updated", id);
            } else {
                println!("No note with id {}", id);
            }
            Ok(())
        }
        Commands::Delete { id } => {
            let mut repo = NoteRepository::open(notes_path)?;
            let removed = repo.delete(id)?;
            println!("Deleted {} note(s)", removed);
            Ok(())
        }
        Commands::Export { path } => {
            let repo = NoteRepository::open(notes_path)?;
            repo.export_to_csv(&path)?;
            println!("Notes exported to {}", path.display());
            Ok(())
        }
        Commands::Import { path } => {
            let mut repo = NoteRepository::open(notes_path)?;
            let count = repo.import_from_csv(&path)?;
            println!("Imported {} note(s)", count);
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(cwd);

            if list {
                let config = service.list()?;
                println!("notes_file = {}", config.notes_file.display());
                println!("log_level = {}", config.log_level);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: notekeep config [--list | <key> [<value>]]");
                println!("Valid keys: notes_file, log_level");
                Ok(())
            }
        }
    }
}
