use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use log::{debug, info};
use quiz_core::model::{QuestionBank, SessionScope};
use quiz_core::stats::{
    ConfidenceLevel, CriticalValue, SignificanceLevel, StatsError, chi_squared_critical,
    mean_confidence_interval, t_critical, t_score, z_score,
};
use services::QuizEngine;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidScope { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidScope { raw } => write!(f, "invalid --scope value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct Args {
    scope: Option<SessionScope>,
    list: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- quiz [--scope <scope>] [--list]");
    eprintln!("  cargo run -p app -- calc");
    eprintln!();
    eprintln!("Scopes:");
    eprintln!("  all, random10, formula, calculation, concept, distribution, hypothesis-test");
    eprintln!();
    eprintln!("Defaults for quiz:");
    eprintln!("  --scope comes from STATQUIZ_SCOPE when set, otherwise the picker opens");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  STATQUIZ_SCOPE");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quiz,
    Calc,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "quiz" => Some(Self::Quiz),
            "calc" => Some(Self::Calc),
            _ => None,
        }
    }
}

impl Args {
    fn parse_quiz(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut scope = std::env::var("STATQUIZ_SCOPE")
            .ok()
            .and_then(|value| value.parse::<SessionScope>().ok());
        let mut list = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--scope" => {
                    let value = require_value(args, "--scope")?;
                    scope = Some(
                        value
                            .parse::<SessionScope>()
                            .map_err(|_| ArgsError::InvalidScope { raw: value })?,
                    );
                }
                "--list" => list = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { scope, list })
    }

    fn parse_calc(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            scope: None,
            list: false,
        })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: the quiz starts when no subcommand is given.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Quiz,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Quiz,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = match cmd {
        Command::Quiz => Args::parse_quiz(&mut iter),
        Command::Calc => Args::parse_calc(&mut iter),
    }
    .map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    match cmd {
        Command::Quiz => run_quiz(parsed),
        Command::Calc => run_calc(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NextAction {
    Retry,
    Picker,
    Quit,
}

fn run_quiz(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = QuizEngine::new(Arc::new(QuestionBank::builtin()));
    info!("loaded built-in bank with {} questions", engine.bank().len());

    if args.list {
        for item in engine.scope_overview() {
            println!(
                "{:>3}  {:<24} [{}]",
                item.question_count,
                item.scope.label(),
                item.scope
            );
        }
        return Ok(());
    }

    let mut preset = args.scope;
    loop {
        let scope = match preset.take() {
            Some(scope) => scope,
            None => match pick_scope(&engine)? {
                Some(scope) => scope,
                None => break,
            },
        };

        engine.start_session(scope);
        info!("session started: scope={scope}");

        loop {
            match drive_session(&mut engine)? {
                NextAction::Retry => {
                    engine.restart_session();
                }
                NextAction::Picker => {
                    engine.return_to_picker();
                    break;
                }
                NextAction::Quit => return Ok(()),
            }
        }
    }

    Ok(())
}

fn pick_scope(engine: &QuizEngine) -> io::Result<Option<SessionScope>> {
    let overview = engine.scope_overview();
    println!();
    println!("pick a scope:");
    for (index, item) in overview.iter().enumerate() {
        println!(
            "  {}) {:<22} {:>3} questions",
            index + 1,
            item.scope.label(),
            item.question_count
        );
    }

    loop {
        let Some(input) = prompt("scope (number, q to quit): ")? else {
            return Ok(None);
        };
        if input.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        if let Some(item) = input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| overview.get(i))
        {
            return Ok(Some(item.scope));
        }
        eprintln!("pick a number between 1 and {}", overview.len());
    }
}

// Runs the active session to the result screen, then asks what to do next.
// The engine enforces the answer/advance rhythm; this loop only renders it.
fn drive_session(engine: &mut QuizEngine) -> io::Result<NextAction> {
    loop {
        let Some(snapshot) = engine.snapshot() else {
            return Ok(NextAction::Picker);
        };
        if snapshot.is_complete {
            break;
        }
        let Some(question) = snapshot.current else {
            break;
        };

        match question.answered {
            None => {
                println!();
                println!(
                    "[{} / {}] {}",
                    snapshot.position + 1,
                    snapshot.total,
                    question.prompt
                );
                for (index, choice) in question.choices.iter().enumerate() {
                    println!("  {}) {choice}", choice_letter(index));
                }
                let Some(input) = prompt("> ")? else {
                    return Ok(NextAction::Quit);
                };
                if input.eq_ignore_ascii_case("q") {
                    return Ok(NextAction::Quit);
                }
                if let Some(choice) = choice_index(&input, question.choices.len()) {
                    engine.submit_answer(choice);
                } else {
                    let last = choice_letter(question.choices.len().saturating_sub(1));
                    eprintln!(
                        "answer with a-{last} or 1-{}, or q to quit",
                        question.choices.len()
                    );
                }
            }
            Some(answered) => {
                if answered.was_correct {
                    println!("correct!");
                } else {
                    let letter = choice_letter(answered.correct_index);
                    let text = question
                        .choices
                        .get(answered.correct_index)
                        .map_or("", String::as_str);
                    println!("wrong. the answer is {letter}) {text}");
                }
                debug!("answer recorded: correct={}", answered.was_correct);
                println!("score so far: {} / {}", snapshot.correct, snapshot.answered);
                if prompt("press Enter to continue ")?.is_none() {
                    return Ok(NextAction::Quit);
                }
                engine.advance();
            }
        }
    }

    finish_session(engine)
}

fn finish_session(engine: &QuizEngine) -> io::Result<NextAction> {
    println!();
    match engine.summary() {
        Some(summary) if summary.total_questions() == 0 => {
            println!("this scope has no questions");
        }
        Some(summary) => {
            println!(
                "done: {} / {} correct ({}%)",
                summary.correct(),
                summary.total_questions(),
                summary.percent()
            );
        }
        None => return Ok(NextAction::Picker),
    }

    println!();
    println!("  1) same scope again");
    println!("  2) pick another scope");
    println!("  q) quit");
    loop {
        let Some(input) = prompt("> ")? else {
            return Ok(NextAction::Quit);
        };
        match input.as_str() {
            "1" => return Ok(NextAction::Retry),
            "2" => return Ok(NextAction::Picker),
            "q" | "Q" => return Ok(NextAction::Quit),
            _ => eprintln!("pick 1, 2, or q"),
        }
    }
}

fn run_calc() -> Result<(), Box<dyn std::error::Error>> {
    println!("z-score and deviation score");
    let Some(value) = prompt_f64("value: ")? else {
        return Ok(());
    };
    let Some(mean) = prompt_f64("mean: ")? else {
        return Ok(());
    };
    let Some(sd) = prompt_f64("standard deviation: ")? else {
        return Ok(());
    };

    match z_score(value, mean, sd) {
        Ok(z) => {
            println!("z = {z:.3}");
            println!("deviation score = {:.1}", t_score(z));
        }
        Err(err) => eprintln!("{err}"),
    }

    println!();
    println!("confidence interval for the mean above (blank line to skip)");
    let Some(raw) = prompt("sample size n: ")? else {
        return Ok(());
    };
    if !raw.is_empty() {
        match raw.parse::<u32>() {
            Ok(n) => {
                let Some(level) = pick_confidence_level()? else {
                    return Ok(());
                };
                match mean_confidence_interval(mean, sd, n, level) {
                    Ok(interval) => println!(
                        "{level} interval: {:.2} to {:.2} (half width {:.2})",
                        interval.lower,
                        interval.upper,
                        interval.half_width()
                    ),
                    Err(err) => eprintln!("{err}"),
                }
            }
            Err(_) => eprintln!("not a whole number, skipping the interval"),
        }
    }

    println!();
    println!("critical value lookup (blank line to skip)");
    let Some(table) = prompt("table [t/chi]: ")? else {
        return Ok(());
    };
    if table.is_empty() {
        return Ok(());
    }
    let lookup = match table.as_str() {
        "t" => t_critical as fn(u32, SignificanceLevel) -> Result<CriticalValue, StatsError>,
        "chi" => chi_squared_critical,
        other => {
            eprintln!("unknown table: {other}");
            return Ok(());
        }
    };
    let Some(df) = prompt_u32("degrees of freedom: ")? else {
        return Ok(());
    };
    let Some(level) = pick_level()? else {
        return Ok(());
    };

    match lookup(df, level) {
        Ok(critical) => {
            println!("critical value at {level}: {:.3}", critical.value);
            if critical.is_approximate() {
                println!("(nearest table row: df = {})", critical.df_used);
            }
        }
        Err(err) => eprintln!("{err}"),
    }

    Ok(())
}

fn pick_level() -> io::Result<Option<SignificanceLevel>> {
    for (index, level) in SignificanceLevel::ALL.iter().enumerate() {
        println!("  {}) {level}", index + 1);
    }
    loop {
        let Some(input) = prompt("significance level: ")? else {
            return Ok(None);
        };
        if let Some(level) = input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| SignificanceLevel::ALL.get(i))
        {
            return Ok(Some(*level));
        }
        eprintln!(
            "pick a number between 1 and {}",
            SignificanceLevel::ALL.len()
        );
    }
}

fn pick_confidence_level() -> io::Result<Option<ConfidenceLevel>> {
    for (index, level) in ConfidenceLevel::ALL.iter().enumerate() {
        println!("  {}) {level}", index + 1);
    }
    loop {
        let Some(input) = prompt("confidence level: ")? else {
            return Ok(None);
        };
        if let Some(level) = input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| ConfidenceLevel::ALL.get(i))
        {
            return Ok(Some(*level));
        }
        eprintln!("pick a number between 1 and {}", ConfidenceLevel::ALL.len());
    }
}

fn choice_letter(index: usize) -> char {
    (b'a'..=b'z').nth(index).map_or('?', char::from)
}

fn choice_index(input: &str, count: usize) -> Option<usize> {
    let &[byte] = input.as_bytes() else {
        return None;
    };
    let index = match byte {
        b'1'..=b'9' => usize::from(byte - b'1'),
        b'a'..=b'z' => usize::from(byte - b'a'),
        b'A'..=b'Z' => usize::from(byte - b'A'),
        _ => return None,
    };
    (index < count).then_some(index)
}

/// Prints `label`, flushes, and reads one trimmed line. `None` means EOF.
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

fn prompt_f64(label: &str) -> io::Result<Option<f64>> {
    loop {
        let Some(input) = prompt(label)? else {
            return Ok(None);
        };
        match input.parse::<f64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => eprintln!("enter a number"),
        }
    }
}

fn prompt_u32(label: &str) -> io::Result<Option<u32>> {
    loop {
        let Some(input) = prompt(label)? else {
            return Ok(None);
        };
        match input.parse::<u32>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => eprintln!("enter a whole number"),
        }
    }
}

fn main() {
    pretty_env_logger::init();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::{choice_index, choice_letter};

    #[test]
    fn letters_and_digits_map_to_the_same_choice() {
        assert_eq!(choice_index("a", 4), Some(0));
        assert_eq!(choice_index("1", 4), Some(0));
        assert_eq!(choice_index("D", 4), Some(3));
        assert_eq!(choice_index("4", 4), Some(3));
    }

    #[test]
    fn out_of_range_input_is_rejected() {
        assert_eq!(choice_index("e", 4), None);
        assert_eq!(choice_index("5", 4), None);
        assert_eq!(choice_index("0", 4), None);
        assert_eq!(choice_index("", 4), None);
        assert_eq!(choice_index("ab", 4), None);
    }

    #[test]
    fn choice_letters_run_from_a() {
        assert_eq!(choice_letter(0), 'a');
        assert_eq!(choice_letter(3), 'd');
    }
}
