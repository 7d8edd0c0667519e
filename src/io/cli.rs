//! Command-line interface for generating, checking and surveying puzzles

use crate::io::configuration::{CURRENT_RULESET, DEFAULT_SURVEY_COUNT, MAX_SEED, QUIZ_LENGTH};
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::io::progress::{SurveyProgress, SurveyTally};
use crate::puzzle::quiz::Quiz;
use crate::puzzle::{Puzzle, Ruleset, build_puzzle_with};
use crate::validation::candidate::Verdict;
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "regex-quiz")]
#[command(author, version, about = "Generate and check seeded regex puzzles")]
/// Command-line arguments for the puzzle tool
pub struct Cli {
    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log rejected attempts and fallbacks
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available operations
#[derive(Subcommand)]
pub enum Command {
    /// Print puzzles for a seed or a whole quiz
    Generate(GenerateArgs),
    /// Check a candidate pattern against a reproduced puzzle
    Check(CheckArgs),
    /// Build puzzles for a range of seeds and report generation statistics
    Survey(SurveyArgs),
}

/// Arguments for `generate`
#[derive(Args)]
pub struct GenerateArgs {
    /// Seed of a single puzzle
    #[arg(short, long, conflicts_with = "quiz_seed")]
    pub seed: Option<u64>,

    /// Seed of a quiz; question seeds are drawn from it
    #[arg(long)]
    pub quiz_seed: Option<u64>,

    /// Number of quiz questions
    #[arg(short = 'n', long, default_value_t = QUIZ_LENGTH, conflicts_with = "seed")]
    pub count: usize,

    /// Ruleset version
    #[arg(short, long, default_value = CURRENT_RULESET)]
    pub ruleset: String,

    /// Print each hidden answer
    #[arg(long)]
    pub reveal: bool,

    /// Write to a file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `check`
#[derive(Args)]
pub struct CheckArgs {
    /// Seed of the puzzle to reproduce
    #[arg(short, long)]
    pub seed: u64,

    /// Ruleset version the puzzle was generated under
    #[arg(short, long, default_value = CURRENT_RULESET)]
    pub ruleset: String,

    /// Candidate regular expression
    #[arg(value_name = "CANDIDATE", allow_hyphen_values = true)]
    pub candidate: String,
}

/// Arguments for `survey`
#[derive(Args)]
pub struct SurveyArgs {
    /// First seed surveyed
    #[arg(long, default_value_t = 0)]
    pub start: u64,

    /// Number of consecutive seeds surveyed
    #[arg(short = 'n', long, default_value_t = DEFAULT_SURVEY_COUNT)]
    pub count: u64,

    /// Ruleset version
    #[arg(short, long, default_value = CURRENT_RULESET)]
    pub ruleset: String,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log filter implied by the flags
    pub const fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

/// Dispatches a parsed command line to the library
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the selected command, writing results to standard output
    ///
    /// # Errors
    ///
    /// Returns an error if arguments are invalid, generation fails or output
    /// cannot be written
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        self.run_to(&mut stdout.lock())
    }

    /// Execute the selected command, writing results to `out`
    ///
    /// `generate --output` still writes to its file.
    ///
    /// # Errors
    ///
    /// Returns an error if arguments are invalid, generation fails or output
    /// cannot be written
    pub fn run_to(&self, out: &mut dyn Write) -> Result<()> {
        match &self.cli.command {
            Command::Generate(args) => self.generate(args, out),
            Command::Check(args) => Self::check(args, out),
            Command::Survey(args) => self.survey(args, out),
        }
    }

    fn generate(&self, args: &GenerateArgs, out: &mut dyn Write) -> Result<()> {
        let ruleset = Ruleset::lookup(&args.ruleset)?;
        let puzzles = match (args.seed, args.quiz_seed) {
            (Some(seed), _) => vec![build_puzzle_with(checked_seed(seed)?, ruleset)?],
            (None, quiz_seed) => {
                if args.count == 0 {
                    return Err(invalid_parameter(
                        "count",
                        &args.count,
                        &"a quiz needs at least one question",
                    ));
                }
                let quiz_seed = quiz_seed.unwrap_or_else(|| rand::random::<u64>() % MAX_SEED);
                if !self.cli.quiet {
                    writeln!(out, "Quiz seed {quiz_seed}")?;
                }
                Quiz::with_length(quiz_seed, ruleset, args.count).collect::<Result<Vec<_>>>()?
            }
        };

        match &args.output {
            Some(path) => {
                let file = File::create(path).map_err(file_system_error(path, "create"))?;
                let mut writer = BufWriter::new(file);
                write_puzzles(&mut writer, &puzzles, args.reveal)
                    .and_then(|()| writer.flush())
                    .map_err(file_system_error(path, "write"))?;
            }
            None => write_puzzles(out, &puzzles, args.reveal)?,
        }

        Ok(())
    }

    fn check(args: &CheckArgs, out: &mut dyn Write) -> Result<()> {
        let ruleset = Ruleset::lookup(&args.ruleset)?;
        let puzzle = build_puzzle_with(checked_seed(args.seed)?, ruleset)?;
        let attempt = puzzle.check(&args.candidate);

        writeln!(out, "match:")?;
        for (sample, verdict) in &attempt.report.match_verdicts {
            writeln!(out, "  {:<9} {sample}", verdict_label(*verdict))?;
        }
        writeln!(out, "unmatch:")?;
        for (sample, verdict) in &attempt.report.non_match_verdicts {
            writeln!(out, "  {:<9} {sample}", verdict_label(*verdict))?;
        }
        writeln!(
            out,
            "{} / {}",
            args.candidate.chars().count(),
            puzzle.pattern_length()
        )?;

        let outcome = if attempt.is_solved() {
            "Found"
        } else if attempt.report.is_solved() {
            "Found, but longer than the answer"
        } else if attempt.report.compiled {
            "Not yet"
        } else {
            "Invalid pattern"
        };
        writeln!(out, "{outcome}")?;

        Ok(())
    }

    fn survey(&self, args: &SurveyArgs, out: &mut dyn Write) -> Result<()> {
        let ruleset = Ruleset::lookup(&args.ruleset)?;
        let end = args
            .start
            .checked_add(args.count)
            .filter(|end| *end <= MAX_SEED + 1)
            .ok_or_else(|| {
                invalid_parameter("count", &args.count, &"survey runs past the largest seed")
            })?;

        let progress = SurveyProgress::new(args.count, self.cli.should_show_progress());
        let mut tally = SurveyTally::default();

        for seed in args.start..end {
            match build_puzzle_with(seed, ruleset) {
                Ok(puzzle) => tally.record(&puzzle),
                Err(error) => {
                    tracing::error!(seed, %error, "survey seed failed");
                    tally.record_failure();
                }
            }
            progress.advance(&tally);
        }
        progress.finish();

        writeln!(out, "ruleset       {}", ruleset.version)?;
        writeln!(out, "seeds         {}..{end}", args.start)?;
        writeln!(out, "puzzles       {}", tally.puzzles)?;
        writeln!(out, "failures      {}", tally.failures)?;
        writeln!(
            out,
            "fallbacks     {} ({:.2}%)",
            tally.fallbacks,
            tally.fallback_rate() * 100.0
        )?;
        writeln!(out, "mean attempts {:.2}", tally.mean_attempts())?;
        writeln!(out, "max attempts  {}", tally.max_attempts)?;

        Ok(())
    }
}

fn checked_seed(seed: u64) -> Result<u64> {
    if seed > MAX_SEED {
        Err(invalid_parameter(
            "seed",
            &seed,
            &format!("must not exceed {MAX_SEED}"),
        ))
    } else {
        Ok(seed)
    }
}

const fn verdict_label(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Matched => "Matched",
        Verdict::Unmatched => "Unmatched",
        Verdict::Invalid => "Invalid",
    }
}

/// Render puzzles in the plain listing format used by `generate`
///
/// # Errors
///
/// Propagates write failures
pub fn write_puzzles(out: &mut dyn Write, puzzles: &[Puzzle], reveal: bool) -> std::io::Result<()> {
    for (index, puzzle) in puzzles.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        writeln!(
            out,
            "Q.{} v={} s={} length={}",
            index + 1,
            puzzle.version(),
            puzzle.seed(),
            puzzle.pattern_length()
        )?;
        writeln!(out, "match:")?;
        for sample in puzzle.matches() {
            writeln!(out, "  {sample:?}")?;
        }
        writeln!(out, "unmatch:")?;
        for sample in puzzle.non_matches() {
            writeln!(out, "  {sample:?}")?;
        }
        if reveal {
            writeln!(out, "answer: {}", puzzle.reveal_answer())?;
        }
    }
    Ok(())
}
