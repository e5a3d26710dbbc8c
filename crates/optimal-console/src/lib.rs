//! Colorful console output for learning runs.
//!
//! Provides a custom `tracing` layer that formats learner events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Run lifecycle (learn start/end)
//! - **WARN**: Stalled or inconsistent runs, undeclared constraint names
//! - **DEBUG**: One line per pass over the data

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_FILTER: &str = "optimal_learner=info";

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` overrides the default `optimal_learner=info` filter.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(LearnerConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats learner events with colors.
pub struct LearnerConsoleLayer;

impl<S: Subscriber> Layer<S> for LearnerConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("optimal_learner") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    algorithm: Option<String>,
    ranking: Option<String>,
    names: Option<String>,
    constraints: Option<u64>,
    examples: Option<u64>,
    iteration: Option<u64>,
    iterations: Option<u64>,
    corrections: Option<u64>,
    errors: Option<u64>,
    unranked: Option<u64>,
    duration_ms: Option<u64>,
    weight_change: Option<f64>,
    converged: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "algorithm" => self.algorithm = Some(s),
            "ranking" => self.ranking = Some(s),
            "names" => self.names = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "constraints" => self.constraints = Some(value),
            "examples" => self.examples = Some(value),
            "iteration" => self.iteration = Some(value),
            "iterations" => self.iterations = Some(value),
            "corrections" => self.corrections = Some(value),
            "errors" => self.errors = Some(value),
            "unranked" => self.unranked = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "weight_change" {
            self.weight_change = Some(value);
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "converged" {
            self.converged = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "algorithm" => self.algorithm = Some(value.to_string()),
            "ranking" => self.ranking = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "learn_start" => format_learn_start(v),
        "learn_end" => format_learn_end(v),
        "iteration" if level == Level::DEBUG => format_iteration(v),
        "learning_stalled" => format_stalled(v),
        "inconsistent_evidence" => format_inconsistent(v),
        "undeclared_constraints" => format_undeclared(v),
        _ => String::new(),
    }
}

fn algorithm_tag(v: &EventVisitor) -> String {
    format!("[{}]", v.algorithm.as_deref().unwrap_or("?"))
        .bright_cyan()
        .to_string()
}

fn format_learn_start(v: &EventVisitor) -> String {
    format!(
        "{} {} Learning │ {} constraints │ {} candidates",
        "▶".bright_green().bold(),
        algorithm_tag(v),
        v.constraints
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_yellow(),
        v.examples
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_yellow(),
    )
}

fn format_learn_end(v: &EventVisitor) -> String {
    let status = if v.converged.unwrap_or(false) {
        "CONVERGED".bright_green().bold().to_string()
    } else {
        "NOT CONVERGED".bright_red().bold().to_string()
    };

    format!(
        "{} {} Learning complete │ {} │ {} passes │ {} corrections │ {}\n    {} {}",
        "■".bright_cyan().bold(),
        algorithm_tag(v),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        v.iterations
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .white(),
        v.corrections
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_magenta(),
        status,
        "ranking:".bright_black(),
        v.ranking.as_deref().unwrap_or("").white().bold(),
    )
}

fn format_iteration(v: &EventVisitor) -> String {
    let mut output = format!(
        "    {} Pass {:>7} │ {} corrections",
        "->".bright_blue(),
        v.iteration
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .white(),
        v.corrections
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_magenta(),
    );
    if let Some(change) = v.weight_change.filter(|c| *c > 0.0) {
        output.push_str(&format!(" │ Δw {:.6}", change));
    }
    output
}

fn format_stalled(v: &EventVisitor) -> String {
    format!(
        "{} {} Stalled at pass {} with {} unresolved errors",
        "!".bright_yellow().bold(),
        algorithm_tag(v),
        v.iteration.unwrap_or(0).to_formatted_string(&Locale::en),
        v.errors.unwrap_or(0).to_formatted_string(&Locale::en).bright_red(),
    )
}

fn format_inconsistent(v: &EventVisitor) -> String {
    format!(
        "{} Inconsistent data │ {} constraints left unranked",
        "!".bright_yellow().bold(),
        v.unranked
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_red(),
    )
}

fn format_undeclared(v: &EventVisitor) -> String {
    format!(
        "{} {} Ignoring undeclared constraints {}",
        "!".bright_yellow().bold(),
        algorithm_tag(v),
        v.names.as_deref().unwrap_or("").bright_red(),
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(event: &str) -> EventVisitor {
        EventVisitor {
            event: Some(event.to_string()),
            algorithm: Some("rcd".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_format_learn_start() {
        let mut v = visitor("learn_start");
        v.constraints = Some(4);
        v.examples = Some(1200);

        let output = format_event(&v, Level::INFO);
        assert!(output.contains("[rcd]"));
        assert!(output.contains("Learning"));
        assert!(output.contains("1,200"));
    }

    #[test]
    fn test_format_learn_end() {
        let mut v = visitor("learn_end");
        v.iterations = Some(3);
        v.converged = Some(true);
        v.ranking = Some("{MAX, NOCODA} >> DEP".to_string());

        let output = format_event(&v, Level::INFO);
        assert!(output.contains("CONVERGED"));
        assert!(!output.contains("NOT CONVERGED"));
        assert!(output.contains("{MAX, NOCODA} >> DEP"));
    }

    #[test]
    fn test_iteration_only_at_debug() {
        let mut v = visitor("iteration");
        v.iteration = Some(12);
        v.corrections = Some(2);

        assert!(format_event(&v, Level::TRACE).is_empty());
        assert!(format_event(&v, Level::DEBUG).contains("Pass"));
    }

    #[test]
    fn test_unknown_event_is_silent() {
        assert!(format_event(&visitor("prediction_error"), Level::INFO).is_empty());
        assert!(format_event(&EventVisitor::default(), Level::INFO).is_empty());
    }

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_init_twice() {
        init();
        init();
    }
}
