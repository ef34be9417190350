use anyhow::Context;
use api_shared::{HealthService, ListResponsesRes, SubmitResponseRes, SummaryRes};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use survey_core::{
    CoreConfig, ResponseQuery, ResponseRow, SubmissionOutcome, SurveyAnswers, SurveyService,
    SurveySummary,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "surveylytic")]
#[command(about = "Survey response dashboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the service is alive
    Health,
    /// List responses, optionally filtered
    List {
        /// `all` or a rating from 1 to 5
        #[arg(long, default_value = "all")]
        satisfaction: String,
        /// Case-insensitive text to look for in comments
        #[arg(long, default_value = "")]
        search: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Export responses to CSV
    Export {
        /// `all` or a rating from 1 to 5
        #[arg(long, default_value = "all")]
        satisfaction: String,
        /// Case-insensitive text to look for in comments
        #[arg(long, default_value = "")]
        search: String,
        /// Output path, or `-` for stdout (default: survey_responses_<date>.csv)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Show dashboard statistics
    Summary {
        /// Compute from stored responses instead of the source's figures
        #[arg(long)]
        computed: bool,
        /// Surveys started, for the computed completion rate
        #[arg(long, requires = "computed")]
        started: Option<u64>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Submit a survey response
    Submit {
        /// Satisfaction rating, 1 to 5
        #[arg(long)]
        satisfaction: String,
        /// Improvement area code (product_quality, pricing, shipping, website_ux, customer_service)
        #[arg(long)]
        improvement: String,
        /// Likelihood to recommend, 0 to 10
        #[arg(long)]
        recommendation: String,
        /// Additional comments (optional)
        #[arg(long)]
        comments: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("surveylytic=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let cfg = CoreConfig::from_env()?;
    let service = SurveyService::new(&cfg);
    tracing::debug!("using {} data source", service.source_name());

    match cli.command {
        Some(Commands::Health) => {
            println!("{}", HealthService::check_health().message);
        }
        Some(Commands::List {
            satisfaction,
            search,
            json,
        }) => {
            let query = ResponseQuery::from_raw(Some(&satisfaction), Some(&search));
            let filtered = service.list(&query).await?;
            if json {
                let res = ListResponsesRes::from(filtered);
                println!("{}", serde_json::to_string_pretty(&res)?);
            } else if filtered.responses.is_empty() {
                println!("No results found.");
            } else {
                for response in &filtered.responses {
                    println!("{}", format_row(&ResponseRow::from(response)));
                }
                println!(
                    "{} of {} responses",
                    filtered.responses.len(),
                    filtered.total
                );
            }
        }
        Some(Commands::Export {
            satisfaction,
            search,
            output,
        }) => {
            let query = ResponseQuery::from_raw(Some(&satisfaction), Some(&search));
            let export = service.export(&query, chrono::Utc::now()).await?;
            match output {
                Some(path) if path.as_os_str() == "-" => println!("{}", export.body),
                other => {
                    let path = other.unwrap_or_else(|| PathBuf::from(&export.filename));
                    std::fs::write(&path, &export.body)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Exported to {}", path.display());
                }
            }
        }
        Some(Commands::Summary {
            computed,
            started,
            json,
        }) => {
            let summary = if computed {
                service.computed_summary(started).await?
            } else {
                service.summary().await?
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&SummaryRes::from(summary))?);
            } else {
                print!("{}", format_summary(&summary));
            }
        }
        Some(Commands::Submit {
            satisfaction,
            improvement,
            recommendation,
            comments,
        }) => {
            let answers = SurveyAnswers {
                satisfaction,
                improvement,
                recommendation,
                comments,
            };
            let outcome = service.submit(&answers).await?;
            let res = SubmitResponseRes::from(outcome.clone());
            match outcome {
                SubmissionOutcome::Accepted(ack) => {
                    println!("{} (receipt {})", res.message, ack.receipt_id)
                }
                SubmissionOutcome::Preview => println!("{}", res.message),
            }
        }
        None => {
            println!("Use 'surveylytic --help' for commands");
        }
    }

    Ok(())
}

fn format_row(row: &ResponseRow) -> String {
    let rating = match &row.satisfaction_label {
        Some(label) => format!("{} {}", row.stars, label),
        None => row.stars.clone(),
    };
    format!(
        "{} | {} | {} | {} | {}",
        row.date, rating, row.improvement, row.recommendation, row.comments
    )
}

fn format_summary(summary: &SurveySummary) -> String {
    let mut out = format!(
        "Total responses: {}\nCompletion rate: {}\nAverage satisfaction: {:.1}\n",
        summary.total_responses, summary.completion_rate, summary.average_satisfaction
    );
    out.push_str("Responses by day:\n");
    for day in &summary.responses_by_day {
        out.push_str(&format!("  {}: {}\n", day.day, day.count));
    }
    out.push_str("Satisfaction:\n");
    for rating in &summary.satisfaction_distribution {
        out.push_str(&format!("  {}: {}\n", rating.rating, rating.count));
    }
    out.push_str("Areas for improvement:\n");
    for area in &summary.improvements {
        out.push_str(&format!("  {}: {}\n", area.area, area.count));
    }
    out
}
