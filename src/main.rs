// PointerQuest: an interactive pointer-semantics puzzle in the terminal

mod engine;
mod level;
mod memory;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use engine::session::QuestSession;
use ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments: [level] [--seed N]
    let args: Vec<String> = std::env::args().collect();

    let mut level_id: u32 = 1;
    let mut seed: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                let value = args.get(i + 1).and_then(|s| s.parse().ok());
                match value {
                    Some(v) => seed = Some(v),
                    None => {
                        eprintln!("Error: --seed requires a number");
                        std::process::exit(1);
                    }
                }
                i += 2;
            }
            "--help" | "-h" => {
                let program_name = args.first().map(|s| s.as_str()).unwrap_or("pointerquest");
                eprintln!("Usage: {} [level] [--seed N]", program_name);
                eprintln!();
                eprintln!("Levels:");
                for level in level::catalog::LEVELS {
                    eprintln!("  {}  {}", level.id, level.title);
                }
                std::process::exit(0);
            }
            raw => {
                match raw.parse() {
                    Ok(id) => level_id = id,
                    Err(_) => {
                        eprintln!("Error: unrecognized argument '{}'", raw);
                        eprintln!("Usage: pointerquest [level] [--seed N]");
                        std::process::exit(1);
                    }
                }
                i += 1;
            }
        }
    }

    let session = match seed {
        Some(seed) => QuestSession::with_seed(level_id, seed),
        None => QuestSession::new(level_id),
    };
    let session = match session {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Available levels:");
            for level in level::catalog::LEVELS {
                eprintln!("  {}  {}", level.id, level.title);
            }
            std::process::exit(1);
        }
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
