mod cli;

use clap::Parser;
use stableford::engine::round::Round;
use stableford::engine::{handicap, normalize, stableford as points};
use stableford::error::ScorecardError;
use stableford::{config, courses, report};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INCOMPLETE: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: cli::Cli) -> Result<i32, ScorecardError> {
    match cli.command {
        cli::Commands::Score(cmd) => {
            let file = config::load_round(&cmd.path)?;
            let round = Round::from_file(&file, cmd.through.map(usize::from))?;
            let round_report = round.report();

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&round_report, output_format)?;
            println!("{rendered}");

            if round.is_complete() {
                Ok(exit_code::SUCCESS)
            } else {
                warn!(
                    holes_confirmed = round.holes_confirmed(),
                    "round incomplete"
                );
                Ok(exit_code::INCOMPLETE)
            }
        }
        cli::Commands::Handicap(cmd) => {
            let slope = match (cmd.slope, cmd.course.as_deref(), cmd.tee.as_deref()) {
                (Some(slope), _, _) => slope,
                (None, Some(course), Some(tee)) => courses::find(course)?.tee(tee)?.slope_rating,
                _ => {
                    return Err(ScorecardError::InvalidRound(
                        "either --slope or --course with --tee is required".to_string(),
                    ))
                }
            };
            let course_handicap = handicap::course_handicap(cmd.index, slope);
            info!(index = cmd.index, slope, course_handicap, "course handicap");
            println!("course handicap: {course_handicap}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Course(cmd) => {
            let course = courses::find(&cmd.name)?;
            let tee = course.tee(&cmd.tee)?;
            println!(
                "{} - {} tees (rating {:.1}, slope {}), par {}",
                course.name,
                tee.name,
                tee.course_rating,
                tee.slope_rating,
                course.par()
            );
            println!("{:>4}  {:<16} {:>3} {:>3} {:>5}", "hole", "name", "par", "si", "yards");
            for hole in course.holes {
                println!(
                    "{:>4}  {:<16} {:>3} {:>3} {:>5}",
                    hole.number,
                    hole.name,
                    hole.par,
                    hole.stroke_index,
                    hole.yardage_for(tee.name)
                );
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Strokes(cmd) => {
            let strokes = handicap::strokes_for_hole(cmd.course_handicap, cmd.stroke_index);
            println!("strokes received: {strokes}");
            if let (Some(par), Some(score)) = (cmd.par, cmd.score) {
                let capped = normalize::cap_score(score, par, strokes);
                println!("capped score: {capped}");
                println!(
                    "stableford points: {}",
                    points::stableford_points(capped, par, strokes)
                );
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
