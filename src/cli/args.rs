use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "waqt", version, author, about = "Daily prayer times with a live countdown to the next prayer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch today's prayer times and print them with the countdown
    Times {
        /// City id or name (dublin, london, newyork, dubai)
        #[arg(long)]
        city: Option<String>,
    },
    /// Print only the next prayer and the time left until it
    Next {
        /// City id or name
        #[arg(long)]
        city: Option<String>,
    },
    /// List the available cities
    Cities,
    /// Show the config file location and effective settings
    Config {
        /// Write the default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_launches_board() {
        let cli = Cli::try_parse_from(["waqt"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_times_with_city() {
        let cli = Cli::try_parse_from(["waqt", "times", "--city", "london"]).unwrap();
        match cli.command {
            Some(Commands::Times { city }) => assert_eq!(city.as_deref(), Some("london")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_config_init_flag() {
        let cli = Cli::try_parse_from(["waqt", "config", "--init"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Config { init: true })));
    }
}
