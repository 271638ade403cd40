mod wizard;

use clap::{Parser, Subcommand, ValueEnum};
use quiz_spec::{
    Advance, AnswerRecord, QuestionKind, QuestionSpec, QuizSession, QuizSpec, RenderPayload,
    ValidationResult, build_render_payload, complete, default_quiz, render_json_ui, validate,
};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use wizard::{AnswerParseError, PromptContext, Verbosity, WizardPresenter};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Terminal runner for the Blum Spa intake quiz",
    long_about = "Walks the intake quiz in a text shell, classifies the answers, and prints the treatment recommendation"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RenderMode {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Walk through the quiz interactively and print the recommendation.
    Wizard {
        /// Path to an alternative quiz definition JSON.
        #[arg(long, value_name = "QUIZ")]
        quiz: Option<PathBuf>,
        /// Optional JSON file with answers collected so far.
        #[arg(long, value_name = "ANSWERS")]
        answers: Option<PathBuf>,
        /// Show verbose output (status lines, question list, intent markers).
        #[arg(long, alias = "debug")]
        verbose: bool,
        /// Also emit the completion report as JSON.
        #[arg(long)]
        report_json: bool,
        /// Render output mode for the quiz display.
        #[arg(long, value_enum, default_value_t = RenderMode::Text)]
        format: RenderMode,
    },
    /// Classify a recorded answer set and print the completion report.
    Classify {
        /// Path to the answers JSON file.
        #[arg(long, value_name = "ANSWERS")]
        answers: PathBuf,
    },
    /// Validate recorded answers against the quiz definition.
    Validate {
        /// Path to the answers JSON file.
        #[arg(long, value_name = "ANSWERS")]
        answers: PathBuf,
        /// Path to an alternative quiz definition JSON.
        #[arg(long, value_name = "QUIZ")]
        quiz: Option<PathBuf>,
    },
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Wizard {
            quiz,
            answers,
            verbose,
            report_json,
            format,
        } => run_wizard(quiz, answers, verbose, report_json, format),
        Command::Classify { answers } => run_classify(answers),
        Command::Validate { answers, quiz } => run_validate(answers, quiz),
    }
}

fn run_wizard(
    quiz_path: Option<PathBuf>,
    answers_path: Option<PathBuf>,
    verbose: bool,
    report_json: bool,
    format: RenderMode,
) -> CliResult<()> {
    let spec = load_quiz(quiz_path)?;
    let seed = match answers_path {
        Some(path) => read_answers(&path)?,
        None => AnswerRecord::new(),
    };

    let mut session = QuizSession::with_answers(&spec, seed);
    let mut presenter = WizardPresenter::new(Verbosity::from_verbose(verbose), report_json);
    presenter.show_header(&spec);

    loop {
        let payload = build_render_payload(&spec, session.answers());
        print_render_output(format, &payload)?;
        presenter.show_status(&payload);

        let Some(question) = session.current_question() else {
            break;
        };
        let prompt = PromptContext::new(question, session.index(), session.total());

        match prompt_answer(&prompt, question, &presenter)? {
            PromptOutcome::Back => {
                session.retreat();
                continue;
            }
            PromptOutcome::Answer(value) => {
                if let Err(error) = session.select_answer(&value) {
                    presenter.show_parse_error(&AnswerParseError::new(error.to_string(), None));
                    continue;
                }
            }
        }

        if let Advance::Completed(report) = session.advance() {
            presenter.show_completion(&report);
            break;
        }
    }

    Ok(())
}

fn run_classify(answers_path: PathBuf) -> CliResult<()> {
    let answers = read_answers(&answers_path)?;
    let report = complete(answers);
    println!("{}", report.to_json_pretty()?);
    Ok(())
}

fn run_validate(answers_path: PathBuf, quiz_path: Option<PathBuf>) -> CliResult<()> {
    let spec = load_quiz(quiz_path)?;
    let answers = read_answers(&answers_path)?;

    let result = validate(&spec, &answers);
    println!(
        "Validation result: {}",
        if result.valid { "valid" } else { "invalid" }
    );
    describe_validation(&result);

    if result.valid {
        Ok(())
    } else {
        Err("validation failed".into())
    }
}

fn describe_validation(result: &ValidationResult) {
    if !result.errors.is_empty() {
        println!("Errors:");
        for error in &result.errors {
            println!(
                "  {} - {}",
                error.path.as_deref().unwrap_or("<unknown>"),
                error.message
            );
        }
    }
    if !result.missing_required.is_empty() {
        println!(
            "Missing required answers: {}",
            result.missing_required.join(", ")
        );
    }
    if !result.unknown_fields.is_empty() {
        println!("Unknown answer fields: {}", result.unknown_fields.join(", "));
    }
}

fn load_quiz(path: Option<PathBuf>) -> CliResult<QuizSpec> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(&path)?;
            Ok(QuizSpec::from_json(&json)?)
        }
        None => Ok(default_quiz()?),
    }
}

fn read_answers(path: &Path) -> CliResult<AnswerRecord> {
    let contents = fs::read_to_string(path)?;
    Ok(AnswerRecord::from_json(&contents)?)
}

enum PromptOutcome {
    Answer(String),
    Back,
}

fn prompt_answer(
    prompt: &PromptContext,
    question: &QuestionSpec,
    presenter: &WizardPresenter,
) -> CliResult<PromptOutcome> {
    loop {
        presenter.show_prompt(prompt);
        print!("> ");
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Err("unexpected end of input".into());
        }

        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("exit") {
            return Err("quiz aborted by user".into());
        }
        if trimmed.eq_ignore_ascii_case("back") {
            return Ok(PromptOutcome::Back);
        }

        match parse_answer(question, trimmed) {
            Ok(value) => return Ok(PromptOutcome::Answer(value)),
            Err(err) => presenter.show_parse_error(&err),
        }
    }
}

fn parse_answer(question: &QuestionSpec, raw: &str) -> Result<String, AnswerParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AnswerParseError::new(
            "This question requires an answer.",
            None,
        ));
    }
    match question.kind {
        QuestionKind::Text => Ok(trimmed.to_string()),
        QuestionKind::Choice => parse_choice(question, trimmed),
    }
}

fn parse_choice(question: &QuestionSpec, raw: &str) -> Result<String, AnswerParseError> {
    let options = question.options.as_deref().unwrap_or_default();

    if let Ok(number) = raw.parse::<usize>() {
        if let Some(option) = number.checked_sub(1).and_then(|index| options.get(index)) {
            return Ok(option.clone());
        }
        return Err(AnswerParseError::new(
            format!("Pick a number between 1 and {}.", options.len()),
            Some("expected an option number".to_string()),
        ));
    }

    if let Some(option) = options.iter().find(|option| option.eq_ignore_ascii_case(raw)) {
        return Ok(option.clone());
    }

    Err(AnswerParseError::new(
        "Choose one of the listed options, by number or full text.",
        Some(format!("allowed values: {}", options.join(", "))),
    ))
}

fn print_render_output(mode: RenderMode, payload: &RenderPayload) -> CliResult<()> {
    match mode {
        RenderMode::Text => Ok(()),
        RenderMode::Json => {
            println!("JSON UI:\n{}", serde_json::to_string(&render_json_ui(payload))?);
            Ok(())
        }
    }
}
