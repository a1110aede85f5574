mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::Config;
use crate::core::error::AppError;
use crate::features::approval::ApprovalController;
use crate::features::dpm::session::{APPROVAL_PAGE, SUBMISSION_PAGE};
use crate::features::dpm::{DpmApi, DpmApiClient, SessionContext};
use crate::features::listing::ListingController;
use crate::features::submission::{
    Rejection, SubmissionController, SubmissionForm, SubmitOutcome,
};
use crate::modules::terminal::TerminalView;
use clap::{Args, Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "dpm", version, about = "Submit, browse and approve driver performance memos")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// File a new report
    Submit(SubmitArgs),
    /// List every report
    List {
        /// Show the detail of the report at this row
        #[arg(long, value_name = "ROW")]
        show: Option<usize>,
    },
    /// Review the queue of reports awaiting a decision
    Approve {
        /// Show the detail of the report at this row
        #[arg(long, value_name = "ROW")]
        show: Option<usize>,
        /// Approve the report at this row
        #[arg(long, value_name = "ROW", conflicts_with = "deny")]
        approve: Option<usize>,
        /// Deny the report at this row
        #[arg(long, value_name = "ROW")]
        deny: Option<usize>,
    },
}

#[derive(Args, Debug)]
struct SubmitArgs {
    /// Driver name exactly as listed in the directory
    #[arg(long)]
    name: String,
    #[arg(long, default_value = "")]
    block: String,
    #[arg(long, default_value = "")]
    location: String,
    /// Date as YYYY-MM-DD, defaults to today
    #[arg(long)]
    date: Option<String>,
    /// Start time as HH:MM
    #[arg(long, default_value = "")]
    start: String,
    /// End time as HH:MM
    #[arg(long, default_value = "")]
    end: String,
    #[arg(long, default_value = "")]
    notes: String,
    /// Report category label, e.g. "Type G: Good! (+1 Point)"
    #[arg(long = "type", default_value = "")]
    dpm_type: String,
}

impl SubmitArgs {
    fn into_form(self) -> SubmissionForm {
        let blank = SubmissionForm::blank();
        SubmissionForm {
            name: self.name,
            block: self.block,
            location: self.location,
            date: self.date.unwrap_or(blank.date),
            start_time: self.start,
            end_time: self.end,
            notes: self.notes,
            dpm_type: self.dpm_type,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cli))
}

async fn async_main(cli: Cli) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::debug!("Using DPM server at {}", config.server.base_url);

    let api: Arc<dyn DpmApi> = Arc::new(DpmApiClient::new(&config.server, &config.session)?);
    let view = TerminalView::stdout();

    match cli.command {
        Command::Submit(args) => {
            let session =
                SessionContext::establish(api.as_ref(), &config.session, SUBMISSION_PAGE).await?;
            let mut page = SubmissionController::new(api, session, view);
            page.load().await?;

            let form = args.into_form();
            match page.submit(&form).await {
                SubmitOutcome::Submitted => Ok(()),
                SubmitOutcome::Rejected(rejection) => {
                    if rejection == Rejection::UnknownName {
                        let close = page.view().suggestions(&form.name, 5);
                        if !close.is_empty() {
                            println!("Did you mean: {}", close.join(", "));
                        }
                    }
                    Err(AppError::Validation(rejection.message().to_string()).into())
                }
                SubmitOutcome::Failed(e) => Err(e.into()),
            }
        }
        Command::List { show } => {
            let mut page = ListingController::new(api, view);
            page.load().await?;
            if let Some(row) = show {
                page.click(row)?;
            }
            Ok(())
        }
        Command::Approve {
            show,
            approve,
            deny,
        } => {
            let session =
                SessionContext::establish(api.as_ref(), &config.session, APPROVAL_PAGE).await?;
            let mut page = ApprovalController::new(api, session, view);
            page.load().await?;

            if let Some(row) = show {
                page.click(row)?;
            }
            if let Some(row) = approve {
                if show != Some(row) {
                    page.click(row)?;
                }
                page.approve(row).await?;
            }
            if let Some(row) = deny {
                if show != Some(row) {
                    page.click(row)?;
                }
                page.deny(row).await?;
            }
            Ok(())
        }
    }
}
