use quiz_spec::{CompletionReport, QuestionKind, QuestionSpec, QuizSpec, RenderPayload};

/// Controls how much session state the wizard prints.
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum Verbosity {
    /// Clean output: question prompts only.
    Clean,
    /// Verbose output: status lines, the question list, intent markers.
    Verbose,
}

impl Verbosity {
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Clean
        }
    }

    pub fn is_verbose(&self) -> bool {
        matches!(self, Verbosity::Verbose)
    }
}

/// Prints headers, prompts, and the final recommendation.
pub struct WizardPresenter {
    verbosity: Verbosity,
    header_printed: bool,
    show_report_json: bool,
}

impl WizardPresenter {
    pub fn new(verbosity: Verbosity, show_report_json: bool) -> Self {
        Self {
            verbosity,
            header_printed: false,
            show_report_json,
        }
    }

    pub fn show_header(&mut self, spec: &QuizSpec) {
        if self.header_printed {
            return;
        }
        println!("Quiz: {}", spec.title);
        if let Some(intro) = spec
            .presentation
            .as_ref()
            .and_then(|presentation| presentation.intro.as_deref())
        {
            println!("{}", intro);
        }
        self.header_printed = true;
    }

    pub fn show_status(&self, payload: &RenderPayload) {
        if !self.verbosity.is_verbose() {
            return;
        }
        println!(
            "Status: {} ({}/{})",
            payload.status.as_str(),
            payload.progress.answered,
            payload.progress.total
        );
        self.print_question_list(payload);
    }

    fn print_question_list(&self, payload: &RenderPayload) {
        println!("Questions:");
        for question in &payload.questions {
            let mut entry = format!(" - {} ({})", question.id, question.label);
            if question.current_value.is_some() {
                entry.push_str(" [answered]");
            }
            println!("{}", entry);
        }
    }

    pub fn show_prompt(&self, prompt: &PromptContext) {
        let mut line = if prompt.total > 0 {
            format!("{}/{} {}", prompt.index, prompt.total, prompt.label)
        } else {
            format!("{} {}", prompt.index, prompt.label)
        };
        if let Some(hint) = &prompt.hint {
            line.push(' ');
            line.push_str(hint);
        }
        println!("{}", line);
        for (position, option) in prompt.options.iter().enumerate() {
            println!("  {}. {}", position + 1, option);
        }
    }

    pub fn show_parse_error(&self, error: &AnswerParseError) {
        eprintln!("Invalid answer: {}", error.user_message);
        if let Some(detail) = &error.detail {
            eprintln!("  Expected: {}", detail);
        }
    }

    pub fn show_completion(&self, report: &CompletionReport) {
        println!("Done ✅");
        println!("{}", report.path.title());
        for line in &report.summary {
            println!("  - {}", line);
        }
        println!(
            "Lead tier: {} (score {})",
            report.profile.tier.as_str(),
            report.profile.score
        );
        if self.verbosity.is_verbose() {
            let intent = &report.profile.intent;
            let mut markers = Vec::new();
            if intent.botox {
                markers.push("botox");
            }
            if intent.fillers {
                markers.push("fillers");
            }
            if intent.first_time {
                markers.push("first_time");
            }
            if !markers.is_empty() {
                println!("Intent markers: {}", markers.join(", "));
            }
        }
        if self.show_report_json {
            match report.to_json_pretty() {
                Ok(pretty) => println!("{}", pretty),
                Err(err) => eprintln!("Failed to serialize report to JSON: {}", err),
            }
        }
    }
}

/// Context used to format a single prompt.
pub struct PromptContext {
    pub index: usize,
    pub total: usize,
    pub label: String,
    pub options: Vec<String>,
    pub hint: Option<String>,
}

impl PromptContext {
    pub fn new(question: &QuestionSpec, index: usize, total: usize) -> Self {
        let options = question.options.clone().unwrap_or_default();
        let hint = match question.kind {
            QuestionKind::Choice if !options.is_empty() => Some(format!("(1-{})", options.len())),
            _ => None,
        };
        Self {
            index: index + 1,
            total,
            label: question.label.clone(),
            options,
            hint,
        }
    }
}

/// Error produced when parsing an answer typed at the prompt.
#[derive(Debug)]
pub struct AnswerParseError {
    pub user_message: String,
    pub detail: Option<String>,
}

impl AnswerParseError {
    pub fn new(user_message: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            user_message: user_message.into(),
            detail,
        }
    }
}
