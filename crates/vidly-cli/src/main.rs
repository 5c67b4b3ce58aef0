use clap::{ArgAction, Parser, Subcommand};
use commands::{browse, config, genres, movies};

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "vidly")]
#[command(about = "Vidly - browse the movie rental catalog from your terminal")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Catalog API base URL (overrides config file and VIDLY_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Rows per page (overrides config file)
    #[arg(long, global = true, value_name = "N")]
    page_size: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List one page of movies
    #[command(long_about = "Fetch the movie and genre collections and print one page of the filtered catalog. Filtering and paging happen locally; the API is only asked for the full collections.")]
    Movies {
        /// Restrict to a genre, by id or name ("all" for no restriction)
        #[arg(long, value_name = "GENRE")]
        genre: Option<String>,

        /// Case-insensitive title search
        #[arg(long, value_name = "QUERY")]
        search: Option<String>,

        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Mark a movie as liked in the printed page (repeatable)
        #[arg(long, value_name = "MOVIE_ID")]
        like: Vec<String>,
    },
    /// List genres
    Genres,
    /// Browse the catalog interactively
    #[command(long_about = "Open an interactive session: pick a genre, search by title, move between pages and like movies. Likes last only for the session. Logs are written to the log directory while browsing.")]
    Browse,
    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
    /// Print the config file location
    Path,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let output = output::Output::new(cli.output, cli.quiet);
    let overrides = config::Overrides {
        api_url: cli.api_url,
        page_size: cli.page_size,
    };

    // The browse session owns the terminal, so its logs go to a file.
    if matches!(cli.command, Commands::Browse) {
        let log_file = catalog_config::PathManager::default().browse_log_file();
        logging::init_logging_with_file(cli.verbose, cli.quiet, Some(log_file))
            .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    } else {
        logging::init_logging(cli.verbose, cli.quiet).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    }

    match cli.command {
        Commands::Movies { genre, search, page, like } => {
            let cfg = config::load_effective_config(&overrides)?;
            let request = movies::MoviesRequest { genre, search, page, like };
            movies::run_movies(cfg, request, &output).await
        }
        Commands::Genres => {
            let cfg = config::load_effective_config(&overrides)?;
            genres::run_genres(cfg, &output).await
        }
        Commands::Browse => {
            let cfg = config::load_effective_config(&overrides)?;
            browse::run_browse(cfg, &output).await
        }
        Commands::Config { cmd } => config::run_config(cmd, &overrides, &output),
    }
}
