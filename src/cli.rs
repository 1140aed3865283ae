use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "stableford",
    version,
    about = "Golf round scoring: Stableford, match play and six points"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a round file
    Score(ScoreCommand),
    /// Course handicap from a handicap index
    Handicap(HandicapCommand),
    /// Show a built-in course's hole table
    Course(CourseCommand),
    /// Strokes received on a hole, with optional score and points
    Strokes(StrokesCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Confirm only the first N holes in play order
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=18))]
    pub through: Option<u8>,
}

#[derive(Args)]
pub struct HandicapCommand {
    #[arg(long, allow_hyphen_values = true)]
    pub index: f64,

    #[arg(
        long,
        required_unless_present = "course",
        conflicts_with_all = ["course", "tee"]
    )]
    pub slope: Option<u32>,

    #[arg(long, requires = "tee")]
    pub course: Option<String>,

    #[arg(long, requires = "course")]
    pub tee: Option<String>,
}

#[derive(Args)]
pub struct CourseCommand {
    pub name: String,
    #[arg(long, default_value = "White")]
    pub tee: String,
}

#[derive(Args)]
pub struct StrokesCommand {
    #[arg(long, allow_hyphen_values = true)]
    pub course_handicap: i32,
    #[arg(long)]
    pub stroke_index: i32,
    #[arg(long, requires = "score")]
    pub par: Option<i32>,
    #[arg(long, requires = "par")]
    pub score: Option<i32>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
