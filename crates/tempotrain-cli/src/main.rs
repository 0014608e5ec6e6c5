//! tempotrain CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tempotrain", version, about = "GTA training workstation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available quizzes
    List {
        /// Case-insensitive title search
        #[arg(long)]
        search: Option<String>,

        /// Filter by exact theme (see the listing for the theme names)
        #[arg(long)]
        theme: Option<String>,
    },

    /// Take a quiz (untimed practice, with explanations)
    Take {
        /// Quiz id from the listing
        #[arg(long, default_value = "1")]
        quiz: u32,

        /// Use a custom .toml catalog instead of the built-in questions
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Result format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Take the timed exam (30s per question)
    Exam {
        /// Exam level: Junior, Intermédiaire, Senior, Expert GTA
        #[arg(long, default_value = "Junior")]
        level: String,

        /// Seconds per question
        #[arg(long, default_value = "30")]
        seconds: u32,

        /// Result format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Ask a specialized advisor a question
    Ask {
        /// The question to ask
        question: Vec<String>,

        /// Advisor name (see `tempotrain agents`)
        #[arg(long, default_value = "Agent CP")]
        agent: String,

        /// Skip the simulated typing delay
        #[arg(long)]
        instant: bool,
    },

    /// List the available advisors
    Agents,

    /// Show the ticket board
    Board {
        /// Add a ticket with this title before showing the board
        #[arg(long)]
        add: Option<String>,

        /// Priority for --add: low, medium, high
        #[arg(long, default_value = "medium")]
        priority: String,

        /// Theme for --add
        #[arg(long, default_value = "Congés Payés")]
        theme: String,

        /// Time estimate for --add
        #[arg(long, default_value = "1h")]
        estimate: String,

        /// Move this ticket id before showing the board
        #[arg(long)]
        move_ticket: Option<u32>,

        /// Target column for --move-ticket: todo, in-progress, done
        #[arg(long)]
        to: Option<String>,
    },

    /// Search the knowledge base
    Search {
        /// Query over document titles and themes
        query: Option<String>,

        /// Filter by category: procedures, definitions, cas, tickets, docs
        #[arg(long)]
        category: Option<String>,
    },

    /// Show the progress dashboard
    Stats,

    /// Validate catalog TOML files
    Validate {
        /// Path to a catalog file or directory
        #[arg(long)]
        catalog: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tempotrain=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { search, theme } => commands::list::execute(search, theme),
        Commands::Take {
            quiz,
            catalog,
            format,
        } => commands::take::execute(quiz, catalog, format).await,
        Commands::Exam {
            level,
            seconds,
            format,
        } => commands::exam::execute(level, seconds, format).await,
        Commands::Ask {
            question,
            agent,
            instant,
        } => commands::ask::execute(question, agent, instant).await,
        Commands::Agents => commands::agents::execute(),
        Commands::Board {
            add,
            priority,
            theme,
            estimate,
            move_ticket,
            to,
        } => commands::board::execute(add, priority, theme, estimate, move_ticket, to),
        Commands::Search { query, category } => commands::search::execute(query, category),
        Commands::Stats => commands::stats::execute(),
        Commands::Validate { catalog } => commands::validate::execute(catalog),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
