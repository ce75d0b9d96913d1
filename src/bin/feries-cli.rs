#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use feries::{
    balance, io,
    model::{BalancerConfig, Survey},
    validate::{validate_input, ValidationErrors},
    BalancingResult,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de répartition des jours fériés
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

/// Source des entrées : un sondage JSON, ou trois CSV.
#[derive(Args, Debug)]
struct InputArgs {
    /// Sondage JSON complet (holidays, participants, responses)
    #[arg(long, conflicts_with_all = ["holidays", "participants", "responses"])]
    survey: Option<String>,
    /// CSV `id,name,date,staff_needed`
    #[arg(long, requires_all = ["participants", "responses"])]
    holidays: Option<String>,
    /// CSV `id,name,email`
    #[arg(long)]
    participants: Option<String>,
    /// CSV `participant_id,holiday_id,rank` (-1 = indisponible)
    #[arg(long)]
    responses: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculer la répartition
    Balance {
        #[command(flatten)]
        input: InputArgs,
        /// Export JSON du résultat (optionnel)
        #[arg(long)]
        out: Option<String>,
        /// Refuser une entrée incohérente au lieu de l'ignorer
        #[arg(long)]
        strict: bool,
    },

    /// Vérifier la cohérence des entrées
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
}

fn load_input(input: InputArgs) -> Result<Survey> {
    if let Some(path) = input.survey {
        return io::load_survey_json(path);
    }
    match (input.holidays, input.participants, input.responses) {
        (Some(h), Some(p), Some(r)) => Ok(Survey {
            holidays: io::import_holidays_csv(h)?,
            participants: io::import_participants_csv(p)?,
            responses: io::import_responses_csv(r)?,
        }),
        _ => bail!("either --survey or --holidays/--participants/--responses is required"),
    }
}

fn print_result(result: &BalancingResult) {
    for record in &result.assignments {
        let staff: Vec<String> = record
            .assigned_staff
            .iter()
            .map(|s| match s.preference_rank {
                Some(rank) => format!("{}#{}", s.participant_id, rank),
                None => format!("{}#-", s.participant_id),
            })
            .collect();
        println!(
            "{} | {} | {}/{} | {}",
            record.date,
            record.holiday_name,
            record.assigned_staff.len(),
            record.staff_needed,
            if staff.is_empty() { "-".to_string() } else { staff.join(",") }
        );
    }
    println!("fairness: {}/100", result.fairness_score);
    for line in &result.unmet_requirements {
        eprintln!("UNMET: {line}");
    }
}

fn report_issues(errors: &ValidationErrors) {
    eprintln!("Found {} issue(s)", errors.issues().len());
    for issue in errors.issues() {
        eprintln!("- {issue}");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let code = match cli.cmd {
        Commands::Balance { input, out, strict } => {
            let survey = load_input(input)?;
            let config = BalancerConfig::new(survey.holidays);
            if strict {
                if let Err(errors) = validate_input(&config, &survey.participants, &survey.responses)
                {
                    report_issues(&errors);
                    std::process::exit(2);
                }
            }
            let result = balance(&config, &survey.participants, &survey.responses);
            if let Some(path) = out {
                io::export_result_json(path, &result)?;
            }
            print_result(&result);
            // Code 2 = WARNING/INCOMPLETE
            if result.unmet_requirements.is_empty() {
                0
            } else {
                2
            }
        }
        Commands::Check { input } => {
            let survey = load_input(input)?;
            match validate_input(&survey.config(), &survey.participants, &survey.responses) {
                Ok(()) => {
                    println!("OK: input valid");
                    0
                }
                Err(errors) => {
                    report_issues(&errors);
                    2
                }
            }
        }
    };

    std::process::exit(code);
}
