use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use resu_pad::app::services::renderer::update_avatar;
use resu_pad::app::{
    EditorSession, ExchangeController, FileStore, Message, RecordStore, TextField, VisualPage,
};
use resu_pad::ui::{ConsoleShell, ResumePage};

#[derive(Parser, Debug)]
#[command(
    name = "ResuPad",
    about = "A local-first, editable one-page résumé",
    version
)]
struct Cli {
    /// Override the directory the saved résumé record lives in
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Directory exported JSON files are written to
    #[arg(long, default_value = ".")]
    export_dir: PathBuf,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn parse_field(name: &str) -> Option<TextField> {
    match name.to_ascii_lowercase().as_str() {
        "name" | "fullname" => Some(TextField::FullName),
        "tagline" => Some(TextField::Tagline),
        "contact" => Some(TextField::Contact),
        "summary" => Some(TextField::Summary),
        "education" => Some(TextField::Education),
        _ => None,
    }
}

fn parse_command(line: &str) -> Option<Message> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };

    match command {
        "edit" => Some(Message::ToggleEdit),
        "set" => {
            let (field, text) = rest.split_once(char::is_whitespace)?;
            Some(Message::EditField(parse_field(field)?, text.trim().to_string()))
        }
        "save" => Some(Message::Save),
        "reset" => Some(Message::Reset),
        "print" => Some(Message::Print),
        "export" => Some(Message::Export),
        "import" => {
            let path = if rest.is_empty() {
                None
            } else {
                Some(PathBuf::from(rest))
            };
            Some(Message::Import(path))
        }
        "show" => Some(Message::Show),
        "help" => Some(Message::Help),
        "quit" | "exit" => Some(Message::Quit),
        _ => None,
    }
}

const HELP: &str = "\
Commands:
  edit                 toggle edit mode
  set <field> <text>   change a field while editing (name, tagline, contact,
                       summary, education)
  save                 save the résumé locally
  reset                restore the original template
  print                print the résumé
  export               export the résumé as JSON
  import <file>        import a résumé JSON file
  show                 display the current page
  help                 show this help
  quit                 leave";

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let backend = match cli.data_dir {
        Some(dir) => FileStore::at(dir),
        None => FileStore::new(),
    };

    let mut session = EditorSession::new(ResumePage::new());
    let mut exchange = ExchangeController::new(
        RecordStore::new(backend),
        ConsoleShell::new(),
        cli.export_dir,
    );
    exchange.restore(&mut session);

    println!("ResuPad — type `help` for commands.\n");
    print!("{}", session.page.render_text());

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
        if line.trim().is_empty() {
            continue;
        }

        let Some(message) = parse_command(&line) else {
            println!("Unknown command. Type `help` for the list.");
            continue;
        };

        match message {
            Message::ToggleEdit => {
                session.toggle_edit();
                println!(
                    "{}",
                    if session.edit.is_editing() {
                        "Edit mode on."
                    } else {
                        "Edit mode off."
                    }
                );
            }
            Message::EditField(field, text) => {
                if session.page.try_edit_field(field, &text) {
                    if field == TextField::FullName {
                        update_avatar(&mut session.page);
                    }
                } else {
                    println!("Enable edit mode first (`edit`).");
                }
            }
            Message::Save => {
                if let Err(e) = exchange.save(&mut session) {
                    eprintln!("Error saving: {}", e);
                }
            }
            Message::Reset => match exchange.reset(&mut session) {
                Ok(true) => print!("{}", session.page.render_text()),
                Ok(false) => {}
                Err(e) => eprintln!("Error resetting: {}", e),
            },
            Message::Print => exchange.print(&mut session),
            Message::Export => {
                if let Err(e) = exchange.export(&session) {
                    eprintln!("Error exporting: {}", e);
                }
            }
            Message::Import(path) => {
                if let Err(e) = exchange.import(&mut session, path.as_deref()) {
                    eprintln!("Error importing: {}", e);
                }
            }
            Message::Show => print!("{}", session.page.render_text()),
            Message::Help => println!("{}", HELP),
            Message::Quit => break,
        }
    }
}
