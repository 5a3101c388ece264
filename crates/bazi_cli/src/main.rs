use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bazi_base::{
    Dizhi, FourPillars, Ganzhi, Tiangan, classify, classify_stem, hidden_stems, resolve_relation,
};
use bazi_report::{Gender, Report, ReportConfig};
use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Exit status for a stem, branch or gender that is not in its valid set.
const EXIT_BAD_SYMBOL: i32 = 1;

#[derive(Parser)]
#[command(name = "bazi", about = "Ten Gods (shishen) calculator for Four Pillars charts")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify every visible and hidden stem of a chart
    Classify(ClassifyArgs),
    /// Hidden stems of a branch, by tier
    Hidden {
        /// Branch, e.g. 寅 or yin
        branch: Dizhi,
    },
    /// Element relation and Ten God of one stem against a day stem
    Relation {
        /// Day (reference) stem
        day_stem: Tiangan,
        /// Stem to classify
        stem: Tiangan,
    },
}

#[derive(Args)]
struct ClassifyArgs {
    /// Year pillar, e.g. 甲子 or jia-zi
    #[arg(long)]
    year: Ganzhi,
    /// Month pillar
    #[arg(long)]
    month: Ganzhi,
    /// Day pillar
    #[arg(long)]
    day: Ganzhi,
    /// Hour pillar
    #[arg(long, required_unless_present = "hour_unknown", conflicts_with = "hour_unknown")]
    hour: Option<Ganzhi>,
    /// Hour pillar is unknown; omit it entirely
    #[arg(long)]
    hour_unknown: bool,
    /// Reference stem (defaults to the day pillar's stem)
    #[arg(long)]
    day_stem: Option<Tiangan>,
    /// Gender recorded in the analysis record: 男/male or 女/female
    #[arg(long, default_value = "男")]
    gender: Gender,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Also produce the four-pillars advisor prompt
    #[arg(long)]
    advisor_prompt: bool,
    /// Also produce the useful-god (yongshen) prompt
    #[arg(long)]
    yongshen_prompt: bool,
    /// Write the analysis JSON and enabled prompts into this directory
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One line per fact
    Text,
    /// Structured per-pillar JSON
    Structured,
    /// Compact analysis JSON (gender + placeholders)
    Analysis,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Exit status for a command-line parse failure.
///
/// A value rejected by its parser (bad stem, branch, pillar or gender) is a
/// bad symbol; everything else keeps clap's own status (0 for help/version).
fn parse_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::ValueValidation => EXIT_BAD_SYMBOL,
        _ => err.exit_code(),
    }
}

fn run_classify(args: ClassifyArgs, out: &mut impl Write) -> Result<()> {
    let chart = FourPillars::new(args.year, args.month, args.day, args.hour);
    let day_stem = args.day_stem.unwrap_or(args.day.stem);
    debug!(chart = ?chart.present(), day_stem = day_stem.name(), "classifying");

    let facts = classify(&chart, day_stem);
    let config = ReportConfig {
        gender: args.gender,
        hour_unknown: args.hour_unknown,
        include_advisor_prompt: args.advisor_prompt,
        include_yongshen_prompt: args.yongshen_prompt,
    };
    let report = Report::build(&facts, &chart.present(), &config)?;

    match args.format {
        OutputFormat::Text => {
            for line in &report.lines {
                writeln!(out, "{line}")?;
            }
        }
        OutputFormat::Structured => writeln!(out, "{}", report.structured_json_pretty()?)?,
        OutputFormat::Analysis => writeln!(out, "{}", report.analysis_json)?,
    }
    for (_, text) in &report.prompts {
        writeln!(out)?;
        writeln!(out, "{text}")?;
    }

    if let Some(dir) = args.out_dir {
        std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
        for path in report.write_exports(&dir)? {
            eprintln!("wrote {}", path.display());
        }
    }
    Ok(())
}

fn run_hidden(branch: Dizhi, out: &mut impl Write) -> Result<()> {
    for h in hidden_stems(branch) {
        writeln!(
            out,
            "{} ({}): {} {} {}",
            h.qi.name(),
            h.qi.english_name(),
            h.stem,
            h.stem.yin_yang().name(),
            h.stem.wuxing().name()
        )?;
    }
    Ok(())
}

fn run_relation(day_stem: Tiangan, stem: Tiangan, out: &mut impl Write) -> Result<()> {
    let relation = resolve_relation(day_stem.wuxing(), stem.wuxing());
    let category = classify_stem(day_stem, stem);
    writeln!(
        out,
        "{} ({}{}) vs {} ({}{}): {} -> {} ({})",
        day_stem,
        day_stem.yin_yang().name(),
        day_stem.wuxing().name(),
        stem,
        stem.yin_yang().name(),
        stem.wuxing().name(),
        relation.map_or("undefined", |r| r.name()),
        category.name(),
        category.english_name()
    )?;
    Ok(())
}

fn run(command: Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Classify(args) => run_classify(args, out),
        Commands::Hidden { branch } => run_hidden(branch, out),
        Commands::Relation { day_stem, stem } => run_relation(day_stem, stem, out),
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(parse_exit_code(&e));
        }
    };
    init_logging(cli.verbose);

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = run(cli.command, &mut stdout) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
