use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use emekdep_cli::render::{render_ability, render_crumbs, render_shift};
use emekdep_config::shift::ShiftDefaults;
use emekdep_core::acl::{Action, Role, build_ability};
use emekdep_core::breadcrumbs::{breadcrumbs, page_title};
use emekdep_core::shift::{ShiftConfig, generate_shift, parse_time};
use emekdep_observability::init_logging;

#[derive(Parser)]
#[command(name = "emekdep-cli")]
#[command(about = "eMekdep CLI - Inspect shift grids, abilities and breadcrumbs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the weekly lesson grid for a shift
    Shift {
        /// First lesson start, H:MM (defaults to SHIFT_START_TIME)
        #[arg(short = 's', long)]
        start_time: Option<String>,

        /// Minutes per lesson
        #[arg(short = 'l', long)]
        lesson_duration: Option<i64>,

        /// Lesson slots per day
        #[arg(short = 'm', long)]
        max_lessons: Option<usize>,

        /// Minutes between ordinary lessons
        #[arg(long)]
        short_break: Option<i64>,

        /// Minutes of the big break
        #[arg(long)]
        long_break: Option<i64>,

        /// Lesson position followed by the big break
        #[arg(short = 'b', long)]
        big_break_index: Option<usize>,

        /// Study days, 0 = Monday .. 5 = Saturday
        #[arg(short = 'd', long, value_delimiter = ',', default_value = "0,1,2,3,4")]
        days: Vec<usize>,

        /// Print the grid as JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve the ability for a role and subject lists
    Acl {
        /// Role slug, e.g. teacher
        #[arg(short = 'r', long)]
        role: String,

        /// Readable subjects, comma separated
        #[arg(long, value_delimiter = ',')]
        read: Vec<String>,

        /// Writable subjects, comma separated
        #[arg(long, value_delimiter = ',')]
        write: Vec<String>,

        /// Check a single permission, written as action:subject
        #[arg(short = 'c', long)]
        check: Option<String>,
    },
    /// Print the breadcrumb trail and page title for a path
    Breadcrumbs {
        /// Dashboard path, e.g. /users/4/edit
        path: String,
    },
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Shift {
            start_time,
            lesson_duration,
            max_lessons,
            short_break,
            long_break,
            big_break_index,
            days,
            json,
        } => {
            let defaults = ShiftDefaults::from_env();
            let start_time = start_time.unwrap_or(defaults.start_time);
            let config = ShiftConfig {
                start_time: parse_time(&start_time)
                    .with_context(|| format!("invalid start time `{start_time}`"))?,
                lesson_duration: lesson_duration.unwrap_or(defaults.lesson_duration),
                max_lessons_per_day: max_lessons.unwrap_or(defaults.max_lessons_per_day),
                short_break_duration: short_break.unwrap_or(defaults.short_break_duration),
                long_break_duration: long_break.unwrap_or(defaults.long_break_duration),
                big_break_index: big_break_index.unwrap_or(defaults.big_break_index),
            };
            handle_shift(&config, &days, json)
        }
        Commands::Acl {
            role,
            read,
            write,
            check,
        } => handle_acl(&role, read, write, check.as_deref()),
        Commands::Breadcrumbs { path } => {
            println!("{}", render_crumbs(&breadcrumbs(&path)));
            println!("{}", page_title(&path));
            Ok(())
        }
    }
}

fn handle_shift(config: &ShiftConfig, days: &[usize], json: bool) -> anyhow::Result<()> {
    tracing::debug!(?days, lessons = config.max_lessons_per_day, "generating shift");
    let grid = generate_shift(config, days);

    if json {
        println!("{}", serde_json::to_string_pretty(&grid)?);
    } else {
        print!("{}", render_shift(&grid));
    }
    Ok(())
}

fn handle_acl(
    role: &str,
    read: Vec<String>,
    write: Vec<String>,
    check: Option<&str>,
) -> anyhow::Result<()> {
    let role = Role::from(role);
    let ability = build_ability(&role, read, write);

    let Some(check) = check else {
        println!("role: {role}");
        print!("{}", render_ability(&ability));
        return Ok(());
    };

    let Some((action, subject)) = check.split_once(':') else {
        bail!("expected action:subject, got `{check}`");
    };
    let action: Action = action.parse().map_err(anyhow::Error::msg)?;

    if ability.can(action, subject) {
        println!("allowed: {role} can {action} {subject}");
        Ok(())
    } else {
        println!("denied: {role} cannot {action} {subject}");
        std::process::exit(1);
    }
}
