use crate::recommend::{run_recommend, RecommendArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use menu_match::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "menu-match",
    about = "Rank restaurant menu items against daily macro goals",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print ranked menu items for a set of daily goals
    Recommend(RecommendArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommend(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommend_parses_goals_and_filters() {
        let cli = Cli::try_parse_from([
            "menu-match",
            "recommend",
            "--calories",
            "2200",
            "--protein",
            "140",
            "--carbs",
            "220",
            "--fats",
            "70",
            "--diet",
            "vegan",
            "--restaurant",
            "2",
            "--limit",
            "3",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Recommend(args)) => {
                assert_eq!(args.calories, Some(2200.0));
                assert_eq!(args.limit, Some(3));
                assert_eq!(args.restaurant.as_deref(), Some("2"));
                assert!(args.diet.is_some());
            }
            other => panic!("expected recommend command, got {other:?}"),
        }
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["menu-match"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn partial_goals_are_rejected() {
        let result = Cli::try_parse_from(["menu-match", "recommend", "--calories", "2000"]);
        assert!(result.is_err());
    }
}
