//! Colorful console output for seating runs.
//!
//! Provides a custom `tracing` layer that formats engine events with colors.
//! Installed on first use of [`crate::solve`] when the `console` feature is
//! enabled.

use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const ENGINE_TARGET: &str = "seatforge_solver";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. Does
/// nothing if another global subscriber is already installed.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{ENGINE_TARGET}=info")));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SeatingConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats engine events with colors.
pub struct SeatingConsoleLayer;

impl<S: Subscriber> Layer<S> for SeatingConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with(ENGINE_TARGET) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{output}");
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    phase: Option<String>,
    phase_index: Option<u64>,
    duration_ms: Option<u64>,
    seat_count: Option<u64>,
    student_count: Option<u64>,
    rule_count: Option<u64>,
    seed: Option<u64>,
    students: Option<u64>,
    placed: Option<u64>,
    deferred: Option<u64>,
    probed: Option<u64>,
    fallback: Option<u64>,
    seated: Option<u64>,
    unseated: Option<u64>,
    violations: Option<u64>,
    forced: Option<u64>,
    shortfall: Option<u64>,
    score: Option<String>,
}

impl EventVisitor {
    fn set_text(&mut self, field: &Field, value: String) {
        match field.name() {
            "event" => self.event = Some(value),
            "phase" => self.phase = Some(value),
            "score" => self.score = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{value:?}");
        self.set_text(field, s.trim_matches('"').to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        let slot = match field.name() {
            "phase_index" => &mut self.phase_index,
            "duration_ms" => &mut self.duration_ms,
            "seat_count" => &mut self.seat_count,
            "student_count" => &mut self.student_count,
            "rule_count" => &mut self.rule_count,
            "seed" => &mut self.seed,
            "students" => &mut self.students,
            "placed" => &mut self.placed,
            "deferred" => &mut self.deferred,
            "probed" => &mut self.probed,
            "fallback" => &mut self.fallback,
            "seated" => &mut self.seated,
            "unseated" => &mut self.unseated,
            "violations" => &mut self.violations,
            "forced" => &mut self.forced,
            "shortfall" => &mut self.shortfall,
            _ => return,
        };
        *slot = Some(value);
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field, value.to_string());
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "run_start" => format_run_start(v),
        "capacity_shortfall" => format_shortfall(v),
        "phase_start" => format_phase_start(v),
        "phase_end" => format_phase_end(v),
        "run_end" => format_run_end(v),
        _ => String::new(),
    }
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_run_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} seats ({}), students ({}), rules ({}), seed ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Engine]".bright_cyan(),
        count(v.seat_count).bright_yellow(),
        count(v.student_count).bright_yellow(),
        count(v.rule_count).bright_yellow(),
        v.seed.unwrap_or(0).bright_magenta(),
    )
}

fn format_shortfall(v: &EventVisitor) -> String {
    format!(
        "{} {} {} {} students will not get a seat",
        timestamp().bright_black(),
        "WARN".bright_yellow(),
        "[Engine]".bright_cyan(),
        count(v.shortfall).bright_red().bold(),
    )
}

fn format_phase_start(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");
    format!(
        "{} {} {} {} phase ({}) started: students ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        format!("[{phase}]").bright_cyan(),
        phase.white().bold(),
        v.phase_index.unwrap_or(0).yellow(),
        count(v.students).white(),
    )
}

fn format_phase_end(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");
    let detail = if v.probed.is_some() {
        format!(
            "probed ({}), fallback ({}), unseated ({})",
            count(v.probed).white(),
            count(v.fallback).yellow(),
            count(v.unseated).bright_red(),
        )
    } else {
        format!(
            "placed ({}), deferred ({})",
            count(v.placed).white(),
            count(v.deferred).yellow(),
        )
    };

    format!(
        "{} {} {} {} phase ({}) ended: time spent ({}), {}",
        timestamp().bright_black(),
        "INFO".bright_green(),
        format!("[{phase}]").bright_cyan(),
        phase.white().bold(),
        v.phase_index.unwrap_or(0).yellow(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        detail,
    )
}

fn format_run_end(v: &EventVisitor) -> String {
    let score = v.score.as_deref().unwrap_or("N/A");
    let unseated = v.unseated.unwrap_or(0);
    let violations = v.violations.unwrap_or(0);

    let mut output = format!(
        "{} {} {} Seating ended: score ({}), time spent ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Engine]".bright_cyan(),
        format_score(score),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    );

    let (status, colored) = match (unseated, violations) {
        (0, 0) => {
            let text = "EVERYONE SEATED, ALL RULES MET";
            (text, text.bright_green().bold().to_string())
        }
        (0, _) => {
            let text = "EVERYONE SEATED, SOME RULES BROKEN";
            (text, text.yellow().bold().to_string())
        }
        _ => {
            let text = "NOT ENOUGH SEATS";
            (text, text.bright_red().bold().to_string())
        }
    };

    const WIDTH: usize = 58;
    let border = "═".repeat(WIDTH);
    let padding = WIDTH.saturating_sub(status.len());
    let left = padding / 2;

    output.push_str("\n\n");
    output.push_str(&format!("╔{border}╗").bright_cyan().to_string());
    output.push('\n');
    output.push_str(&format!(
        "{}{}{}{}{}",
        "║".bright_cyan(),
        " ".repeat(left),
        colored,
        " ".repeat(padding - left),
        "║".bright_cyan(),
    ));
    output.push('\n');
    output.push_str(&format!("╠{border}╣").bright_cyan().to_string());
    output.push('\n');
    for (label, value) in [
        ("Seated:", count(v.seated)),
        ("Unseated:", count(v.unseated)),
        ("Broken rules:", count(v.violations)),
        ("Forced placements:", count(v.forced)),
    ] {
        output.push_str(&format!(
            "{}  {:<20}{:>34}  {}",
            "║".bright_cyan(),
            label,
            value,
            "║".bright_cyan(),
        ));
        output.push('\n');
    }
    output.push_str(&format!("╚{border}╝").bright_cyan().to_string());
    output.push('\n');

    output
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| format!("{:5}.{:03}", d.as_secs() % 100_000, d.subsec_millis()))
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        format!("{}m {}s", ms / 60_000, (ms % 60_000) / 1000)
    }
}

/// Colors a `"{hard}hard/{soft}soft"` score: red for unseated students,
/// yellow for broken rules.
fn format_score(score: &str) -> String {
    let Some((hard, soft)) = score.split_once('/') else {
        return score.white().to_string();
    };
    let hard_num: i64 = hard.trim_end_matches("hard").parse().unwrap_or(0);
    let soft_num: i64 = soft.trim_end_matches("soft").parse().unwrap_or(0);

    let hard = if hard_num < 0 {
        hard.bright_red().to_string()
    } else {
        hard.bright_green().to_string()
    };
    let soft = if soft_num < 0 {
        soft.yellow().to_string()
    } else {
        soft.bright_green().to_string()
    };
    format!("{hard}/{soft}")
}
