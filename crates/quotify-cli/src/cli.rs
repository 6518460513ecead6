//! Command-line interface definition

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "quotify", about = "Quote of the moment for the terminal", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch and display a quote (the default command)
    Quote {
        /// Skip the network and pick from the embedded quotes
        #[arg(long)]
        local: bool,

        /// Treat the connection as offline
        #[arg(long)]
        offline: bool,
    },

    /// Toggle the current quote as a favorite, or manage favorites
    Fav {
        #[command(subcommand)]
        action: Option<FavAction>,
    },

    /// Print the current quote's citation and share link
    Share,
}

#[derive(Subcommand)]
pub enum FavAction {
    /// List saved favorites in insertion order
    List,

    /// Remove a favorite by its exact text or a unique prefix
    Remove {
        /// Quote text (or unique prefix) to remove
        text: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::parse_from(["quotify"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_quote_flags() {
        let cli = Cli::parse_from(["quotify", "quote", "--offline"]);
        match cli.command {
            Some(Commands::Quote { local, offline }) => {
                assert!(!local);
                assert!(offline);
            }
            _ => panic!("expected quote command"),
        }
    }

    #[test]
    fn test_fav_remove() {
        let cli = Cli::parse_from(["quotify", "fav", "remove", "Stay hungry"]);
        match cli.command {
            Some(Commands::Fav {
                action: Some(FavAction::Remove { text }),
            }) => assert_eq!(text, "Stay hungry"),
            _ => panic!("expected fav remove"),
        }
    }
}
