use std::path::PathBuf;
use std::sync::Arc;

use card_decision::config::AppConfig;
use card_decision::error::AppError;
use card_decision::telemetry;
use card_decision::underwriting::{
    load_applications, Assessment, CardApplication, CardEvaluator, CountingCardEvaluator,
    FraudEscalationEngine, LicensedCardEvaluator, ReportingCardEvaluator, StaticValidator,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "card-decision",
    about = "Decide credit-card applications from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a single application
    Evaluate(EvaluateArgs),
    /// Evaluate every application in a CSV file, one JSON line each
    Batch(BatchArgs),
    /// Run the fraud escalation rules for a single application
    Fraud(FraudArgs),
}

#[derive(Args, Debug)]
struct ApplicantArgs {
    /// Applicant surname
    #[arg(long)]
    surname: Option<String>,
    /// Applicant age in years
    #[arg(long, default_value_t = 0)]
    age: u32,
    /// Gross annual income
    #[arg(long, default_value_t = 0)]
    income: u64,
    /// Frequent flyer number to validate
    #[arg(long, default_value = "")]
    flyer_number: String,
}

impl From<ApplicantArgs> for CardApplication {
    fn from(args: ApplicantArgs) -> Self {
        CardApplication {
            surname: args.surname,
            age: args.age,
            gross_annual_income: args.income,
            frequent_flyer_number: args.flyer_number,
        }
    }
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    #[command(flatten)]
    applicant: ApplicantArgs,
    /// Rule engine variant to run
    #[arg(long, value_enum, default_value_t = EngineKind::Standard)]
    engine: EngineKind,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// CSV file with surname,age,gross_annual_income,frequent_flyer_number columns
    csv: PathBuf,
    /// Rule engine variant to run
    #[arg(long, value_enum, default_value_t = EngineKind::Standard)]
    engine: EngineKind,
}

#[derive(Args, Debug)]
struct FraudArgs {
    #[command(flatten)]
    applicant: ApplicantArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EngineKind {
    Standard,
    Licensed,
    Reporting,
    Counting,
}

enum SelectedEngine {
    Standard(CardEvaluator<StaticValidator>),
    Licensed(LicensedCardEvaluator<StaticValidator>),
    Reporting(ReportingCardEvaluator<StaticValidator>),
    Counting(CountingCardEvaluator<StaticValidator>),
}

impl SelectedEngine {
    fn build(kind: EngineKind, validator: Arc<StaticValidator>) -> Self {
        match kind {
            EngineKind::Standard => Self::Standard(CardEvaluator::new(validator)),
            EngineKind::Licensed => Self::Licensed(LicensedCardEvaluator::new(validator)),
            EngineKind::Reporting => Self::Reporting(ReportingCardEvaluator::new(validator)),
            EngineKind::Counting => Self::Counting(CountingCardEvaluator::new(validator)),
        }
    }

    fn assess(&self, application: &CardApplication) -> Assessment {
        match self {
            Self::Standard(engine) => engine.assess(application),
            Self::Licensed(engine) => engine.assess(application),
            Self::Reporting(engine) => engine.assess(application),
            Self::Counting(engine) => engine.assess(application),
        }
    }

    fn validations_performed(&self) -> Option<u64> {
        match self {
            Self::Counting(engine) => Some(engine.count()),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
struct AssessmentView<'a> {
    application: &'a CardApplication,
    label: &'static str,
    summary: String,
    #[serde(flatten)]
    assessment: &'a Assessment,
}

impl<'a> AssessmentView<'a> {
    fn new(application: &'a CardApplication, assessment: &'a Assessment) -> Self {
        Self {
            application,
            label: assessment.decision.label(),
            summary: assessment.summary(),
            assessment,
        }
    }
}

#[derive(Debug, Serialize)]
struct FraudView<'a> {
    application: &'a CardApplication,
    composed_check: &'static str,
    extensible_point: &'static str,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let validator = Arc::new(StaticValidator::from_config(&config.validator));
    info!(
        environment = ?config.environment,
        accepts = config.validator.accepts,
        license = %config.validator.license_key,
        "validator configured"
    );

    match cli.command {
        Command::Evaluate(args) => run_evaluate(args, validator),
        Command::Batch(args) => run_batch(args, validator),
        Command::Fraud(args) => run_fraud(args),
    }
}

fn run_evaluate(args: EvaluateArgs, validator: Arc<StaticValidator>) -> Result<(), AppError> {
    let engine = SelectedEngine::build(args.engine, validator);
    let application = CardApplication::from(args.applicant);

    let assessment = engine.assess(&application);
    println!(
        "{}",
        serde_json::to_string_pretty(&AssessmentView::new(&application, &assessment))?
    );
    Ok(())
}

fn run_batch(args: BatchArgs, validator: Arc<StaticValidator>) -> Result<(), AppError> {
    let applications = load_applications(&args.csv)?;
    info!(count = applications.len(), path = %args.csv.display(), "loaded application batch");

    let engine = SelectedEngine::build(args.engine, validator);
    for application in &applications {
        let assessment = engine.assess(application);
        println!(
            "{}",
            serde_json::to_string(&AssessmentView::new(application, &assessment))?
        );
    }

    if let Some(performed) = engine.validations_performed() {
        println!("{}", serde_json::json!({ "validations_performed": performed }));
    }
    Ok(())
}

fn run_fraud(args: FraudArgs) -> Result<(), AppError> {
    let engine: FraudEscalationEngine = FraudEscalationEngine::default();
    let application = CardApplication::from(args.applicant);

    let view = FraudView {
        application: &application,
        composed_check: engine.evaluate_by_composed_check(&application).label(),
        extensible_point: engine.evaluate_by_extensible_point(&application).label(),
    };
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
