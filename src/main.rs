use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use git_walk::areas::git_cli::GitCli;
use git_walk::areas::ref_store::{FileRefStore, STATE_FILE_NAME};
use git_walk::artifacts::branch::revision::Revision;
use git_walk::commands::navigator::{Movement, Navigator, WalkCommand};
use is_terminal::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "GIT_WALK_LOG";

#[derive(Parser)]
#[command(
    name = "git-walk",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Walk through a git project's history one commit at a time",
    long_about = "Walk through a git project's history one commit at a time. \
    'start' remembers the current branch in a state file and checks out the first commit \
    of its history, 'next' and 'prev' move one commit at a time, \
    and 'end' checks the remembered branch out again.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'C',
        long = "repo",
        env = "GIT_WALK_REPO",
        default_value = ".",
        global = true,
        help = "Path to the repository to walk"
    )]
    repo: PathBuf,
    #[arg(
        long = "state-file",
        env = "GIT_WALK_STATE_FILE",
        default_value = STATE_FILE_NAME,
        global = true,
        help = "File holding the branch a walk started from"
    )]
    state_file: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Step(Step),
    #[command(
        name = "to",
        about = "Go to a specific version: start, next, prev or end",
        long_about = "Same as running the step directly, e.g. 'git-walk to next' is 'git-walk next'."
    )]
    To {
        #[command(subcommand)]
        step: Step,
    },
}

#[derive(Subcommand, Clone)]
enum Step {
    #[command(
        name = "start",
        about = "Check out the first commit, keeping the current branch for navigation",
        long_about = "Checks out the first commit in the current history line, or <commit> when given, \
        detaching HEAD. The current branch is saved so 'next' can move towards it and 'end' can return to it. \
        Starting for the first time from a detached HEAD is refused, as there is no branch to save."
    )]
    Start {
        #[arg(index = 1, help = "Commit to check out instead of the first one")]
        commit: Option<String>,
    },
    #[command(
        name = "next",
        about = "Check out the next, more recent commit in the current history"
    )]
    Next,
    #[command(
        name = "prev",
        about = "Check out the previous, older commit in the current history"
    )]
    Prev,
    #[command(name = "end", about = "Check out the branch saved by 'start'")]
    End,
}

impl Step {
    fn name(&self) -> &'static str {
        match self {
            Step::Start { .. } => "start",
            Step::Next => "next",
            Step::Prev => "prev",
            Step::End => "end",
        }
    }

    fn into_walk_command(self) -> anyhow::Result<WalkCommand> {
        Ok(match self {
            Step::Start { commit } => WalkCommand::Start {
                target: commit.as_deref().map(Revision::try_parse).transpose()?,
            },
            Step::Next => WalkCommand::Next,
            Step::Prev => WalkCommand::Prev,
            Step::End => WalkCommand::End,
        })
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let step = match cli.command {
        Commands::Step(step) | Commands::To { step } => step,
    };
    let command = step.clone().into_walk_command()?;

    let mut repository = GitCli::new(&cli.repo)?;
    let mut ref_store = FileRefStore::new(&cli.state_file);

    let movement = Navigator::new(&mut repository, &mut ref_store)
        .navigate(command)
        .with_context(|| format!("failed to walk to {}", step.name()))?;

    report(&step, &movement);
    Ok(())
}

fn report(step: &Step, movement: &Movement) {
    match movement {
        Movement::Moved(Revision::Branch(branch)) => {
            eprintln!("Switched to branch '{}'", branch)
        }
        Movement::Moved(revision) => eprintln!("HEAD is now at {}", revision),
        Movement::Stayed => match step {
            Step::Next => eprintln!("Already at the newest commit"),
            Step::Prev => eprintln!("Already at the oldest commit"),
            Step::End => eprintln!("No walk in progress"),
            Step::Start { .. } => {}
        },
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format!("error: {err:#}").red().bold());
            ExitCode::FAILURE
        }
    }
}
