// Complete Message Filter with Boxed Predicates
// Callable wrappers: closures stored in a struct and applied over a message list

use colored::Colorize;
use itertools::Itertools;
use regex::Regex;

// ============================================================================
// Milestone 1: Filter Object Owning Messages and a Predicate Closure
// ============================================================================

pub type MessagePredicate = Box<dyn Fn(&str) -> bool>;

pub struct MessageFilter {
    messages: Vec<String>,
    predicate: MessagePredicate,
}

impl MessageFilter {
    pub fn new(messages: Vec<String>, predicate: impl Fn(&str) -> bool + 'static) -> Self {
        Self {
            messages,
            predicate: Box::new(predicate),
        }
    }

    pub fn with_predicate(messages: Vec<String>, predicate: MessagePredicate) -> Self {
        Self { messages, predicate }
    }

    /// Messages satisfying the predicate, in original order.
    pub fn filtered(&self) -> Vec<&str> {
        self.messages
            .iter()
            .map(|msg| msg.as_str())
            .filter(|msg| (self.predicate)(msg))
            .collect()
    }

    pub fn print_filtered(&self) {
        for message in self.filtered() {
            println!("{message}");
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

// ============================================================================
// Milestone 2: Named Predicates and Combinators
// ============================================================================

pub fn starts_with(prefix: &str) -> MessagePredicate {
    let prefix = prefix.to_string();
    Box::new(move |msg| msg.starts_with(&prefix))
}

pub fn contains(needle: &str) -> MessagePredicate {
    let needle = needle.to_string();
    Box::new(move |msg| msg.contains(&needle))
}

pub fn and(a: MessagePredicate, b: MessagePredicate) -> MessagePredicate {
    Box::new(move |msg| a(msg) && b(msg))
}

pub fn or(a: MessagePredicate, b: MessagePredicate) -> MessagePredicate {
    Box::new(move |msg| a(msg) || b(msg))
}

pub fn not(inner: MessagePredicate) -> MessagePredicate {
    Box::new(move |msg| !inner(msg))
}

// ============================================================================
// Milestone 3: Regex-Backed Predicates
// ============================================================================

pub fn matches(pattern: &str) -> Result<MessagePredicate, regex::Error> {
    let re = Regex::new(pattern)?;
    Ok(Box::new(move |msg| re.is_match(msg)))
}

// ============================================================================
// Milestone 4: Severity Report
// ============================================================================

#[derive(Debug, Default, PartialEq)]
pub struct SeverityReport {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
    pub other: usize,
}

impl SeverityReport {
    pub fn total(&self) -> usize {
        self.errors + self.warnings + self.infos + self.other
    }

    pub fn print(&self) {
        println!("{}", "Severity summary".bold());
        println!("  {}: {}", "errors".red(), self.errors);
        println!("  {}: {}", "warnings".yellow(), self.warnings);
        println!("  {}: {}", "infos".green(), self.infos);
        println!("  other: {}", self.other);
    }
}

pub fn severity_report(messages: &[String]) -> SeverityReport {
    let mut report = SeverityReport::default();
    for message in messages {
        if message.starts_with("Error") {
            report.errors += 1;
        } else if message.starts_with("Warning") {
            report.warnings += 1;
        } else if message.starts_with("Info") {
            report.infos += 1;
        } else {
            report.other += 1;
        }
    }
    report
}

fn demo_messages() -> Vec<String> {
    vec![
        "Error: connection failed".to_string(),
        "Warning: battery low".to_string(),
        "Info: update complete".to_string(),
        "Error: disk full".to_string(),
        "Info: session started".to_string(),
    ]
}

fn main() {
    println!("=== Milestone 1: Closure-driven filter ===");
    let only_errors = MessageFilter::new(demo_messages(), |msg| msg.starts_with("Error"));
    println!("Error messages:");
    only_errors.print_filtered();

    let only_infos = MessageFilter::new(demo_messages(), |msg| msg.starts_with("Info"));
    println!("\nInfo messages:");
    only_infos.print_filtered();

    println!("\n=== Milestone 2: Named predicates and combinators ===");
    let noisy = MessageFilter::with_predicate(
        demo_messages(),
        or(starts_with("Error"), starts_with("Warning")),
    );
    println!("Errors and warnings: {}", noisy.filtered().iter().join(" | "));

    let quiet = MessageFilter::with_predicate(demo_messages(), not(starts_with("Error")));
    println!("Everything but errors: {}", quiet.filtered().iter().join(" | "));

    println!("\n=== Milestone 3: Regex predicates ===");
    match matches(r"^(Error|Warning):") {
        Ok(predicate) => {
            let attention = MessageFilter::with_predicate(demo_messages(), predicate);
            println!("Needs attention: {}", attention.filtered().iter().join(" | "));
        }
        Err(err) => eprintln!("Bad pattern: {err}"),
    }

    println!("\n=== Milestone 4: Severity report ===");
    let report = severity_report(&demo_messages());
    report.print();
}
