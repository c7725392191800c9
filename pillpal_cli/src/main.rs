use chrono::NaiveDate;
use clap::{ArgGroup, Parser, Subcommand};
use pillpal_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pillpal")]
#[command(about = "Medication schedule and reminder tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dose plan for a date (default)
    Today {
        /// Target date (YYYY-MM-DD), defaults to the current date
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show day-by-day history and the current streak
    History {
        /// How many days back to show (defaults to config)
        #[arg(long)]
        days: Option<i64>,
    },

    /// Add a medication to the list
    #[command(group(
        ArgGroup::new("recurrence")
            .args(["daily", "days", "from", "on"])
    ))]
    Add {
        /// Display name
        #[arg(long)]
        name: String,

        /// Reminder time (HH:MM, 24-hour); repeat for multiple doses
        #[arg(long = "time", required = true)]
        times: Vec<String>,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,

        /// Due every day (the default when no recurrence flag is given)
        #[arg(long)]
        daily: bool,

        /// Weekly day mask, Monday-first (e.g. 1010100 for Mon/Wed/Fri)
        #[arg(long)]
        days: Option<String>,

        /// Start of a custom date range (YYYY-MM-DD)
        #[arg(long, requires = "until")]
        from: Option<NaiveDate>,

        /// End of a custom date range (YYYY-MM-DD), inclusive
        #[arg(long, requires = "from")]
        until: Option<NaiveDate>,

        /// One-off date (e.g. "Tue, Aug 26, 2025")
        #[arg(long)]
        on: Option<String>,
    },

    /// Record a dose outcome
    Log {
        /// Medication name (must exist in the list)
        #[arg(long)]
        med: String,

        /// Dose time (HH:MM)
        #[arg(long)]
        time: String,

        /// Outcome: taken, missed or upcoming
        #[arg(long)]
        status: String,

        /// Dose date (YYYY-MM-DD), defaults to the current date
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List stored medications
    Meds,
}

fn main() -> Result<()> {
    pillpal_core::logging::init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(dir) = cli.data_dir {
        config.data.data_dir = dir;
    }
    tracing::debug!("Using data directory {:?}", config.data.data_dir);

    match cli.command {
        Some(Commands::Today { date }) => cmd_today(&config, date),
        Some(Commands::History { days }) => cmd_history(&config, days),
        Some(Commands::Add {
            name,
            times,
            notes,
            daily: _,
            days,
            from,
            until,
            on,
        }) => cmd_add(&config, name, times, notes, days, from, until, on),
        Some(Commands::Log {
            med,
            time,
            status,
            date,
        }) => cmd_log(&config, med, time, status, date),
        Some(Commands::Meds) => cmd_meds(&config),
        None => cmd_today(&config, None),
    }
}

fn cmd_today(config: &Config, date: Option<NaiveDate>) -> Result<()> {
    let target = date.unwrap_or_else(today);
    let medications = load_medications(&config.medications_path())?;

    let doses = expand_for_date(&medications, target);
    let plan = bucket_by_time_of_day(doses)?;

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  PLAN FOR {}", target.format("%a, %b %-d, %Y"));
    println!("╰─────────────────────────────────────────╯");

    if plan.is_empty() {
        println!("\n  No doses scheduled.\n");
        return Ok(());
    }

    display_bucket("Morning", &plan.morning);
    display_bucket("Afternoon", &plan.afternoon);
    display_bucket("Evening", &plan.evening);
    println!("\n  {} dose(s) total\n", plan.len());
    Ok(())
}

fn display_bucket(title: &str, doses: &[DueDose]) {
    if doses.is_empty() {
        return;
    }
    println!("\n  {}:", title);
    for dose in doses {
        println!("    → {}  {}", dose.time, dose.medication_name);
    }
}

fn cmd_history(config: &Config, days: Option<i64>) -> Result<()> {
    let window = days.unwrap_or(config.history.window_days);
    let today = today();
    let cutoff = today - chrono::Duration::days(window);

    let mut records = load_dose_log(&config.dose_log_path())?;
    records.retain(|r| r.date >= cutoff);

    let day_summaries = day_histories(&records);
    if day_summaries.is_empty() {
        println!("No dose history in the last {} days.", window);
        return Ok(());
    }

    // Today is still underway; it must not count against the streak
    let most_recent_in_progress = day_summaries
        .first()
        .map(|d| d.date == today)
        .unwrap_or(false);
    let streak = compute_streak(&day_summaries, most_recent_in_progress);

    println!("\nHistory (last {} days):\n", window);
    for day in &day_summaries {
        let marker = if day.all_taken { "✓" } else { "✗" };
        println!(
            "  {} {}  {} dose(s)",
            marker,
            day.date,
            day.entries.len()
        );
        for entry in &day.entries {
            println!(
                "      {}  {}  [{:?}]",
                entry.time, entry.medication_name, entry.status
            );
        }
    }
    println!("\n  Streak: {} day(s)\n", streak);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_add(
    config: &Config,
    name: String,
    times: Vec<String>,
    notes: Option<String>,
    days: Option<String>,
    from: Option<NaiveDate>,
    until: Option<NaiveDate>,
    on: Option<String>,
) -> Result<()> {
    // Reject malformed times at ingestion, not at display time
    validate_reminder_times(&name, &times)?;

    let recurrence = if let Some(mask) = days {
        let active_days = decode_day_mask(Some(&mask));
        if active_days.is_empty() {
            return Err(Error::Other(format!(
                "day mask '{}' selects no days",
                mask
            )));
        }
        Recurrence::Weekly { active_days }
    } else if from.is_some() {
        Recurrence::Custom {
            start_date: from,
            end_date: until,
        }
    } else if let Some(date) = on {
        Recurrence::OneOff { date }
    } else {
        // --daily, or no recurrence flag at all
        Recurrence::Daily
    };

    let medication = Medication {
        id: uuid::Uuid::new_v4(),
        name: name.clone(),
        reminder_times: times,
        notes,
        recurrence,
    };

    add_medication(&config.medications_path(), medication)?;
    println!("✓ Added '{}'", name);
    Ok(())
}

fn cmd_log(
    config: &Config,
    med: String,
    time: String,
    status: String,
    date: Option<NaiveDate>,
) -> Result<()> {
    let status = match status.to_lowercase().as_str() {
        "taken" => DoseStatus::Taken,
        "missed" => DoseStatus::Missed,
        "upcoming" => DoseStatus::Upcoming,
        other => {
            return Err(Error::Other(format!(
                "unknown status '{}' (expected taken, missed or upcoming)",
                other
            )))
        }
    };

    let medications = load_medications(&config.medications_path())?;
    let medication = medications
        .iter()
        .find(|m| m.name.eq_ignore_ascii_case(&med))
        .ok_or_else(|| Error::Other(format!("unknown medication '{}'", med)))?;

    let record = DoseRecord {
        date: date.unwrap_or_else(today),
        medication_id: medication.id,
        medication_name: medication.name.clone(),
        time,
        status,
    };
    append_dose(&config.dose_log_path(), &record)?;

    println!("✓ Logged {} {:?} for '{}'", record.time, record.status, record.medication_name);
    Ok(())
}

fn cmd_meds(config: &Config) -> Result<()> {
    let medications = load_medications(&config.medications_path())?;
    if medications.is_empty() {
        println!("No medications stored.");
        return Ok(());
    }

    println!("\nMedications:\n");
    for med in &medications {
        println!("  {}", med.name);
        if !med.reminder_times.is_empty() {
            println!("    times: {}", med.reminder_times.join(", "));
        }
        match &med.recurrence {
            Recurrence::Daily => println!("    repeats: daily"),
            Recurrence::Weekly { active_days } => {
                let labels: Vec<_> = active_days.iter().map(|d| d.label()).collect();
                println!(
                    "    repeats: weekly on {} (mask {})",
                    labels.join("/"),
                    encode_day_mask(active_days)
                );
            }
            Recurrence::Custom {
                start_date,
                end_date,
            } => println!(
                "    repeats: {} through {}",
                start_date.map(|d| d.to_string()).unwrap_or_else(|| "?".into()),
                end_date.map(|d| d.to_string()).unwrap_or_else(|| "?".into())
            ),
            Recurrence::OneOff { date } => println!("    one-off: {}", date),
        }
        if let Some(notes) = &med.notes {
            println!("    notes: {}", notes);
        }
    }
    println!();
    Ok(())
}

/// The one place the CLI reads the clock; the library never does.
fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
