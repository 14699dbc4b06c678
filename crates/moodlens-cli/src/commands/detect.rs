use anyhow::{Result, anyhow};
use moodlens_application::SessionUseCase;

use crate::render;

pub struct DetectArgs {
    pub text: String,
    pub json: bool,
    pub no_table: bool,
    pub no_chart: bool,
}

pub async fn run(args: DetectArgs) -> Result<()> {
    let use_case = SessionUseCase::bootstrap()?;

    let mut display = use_case.display().clone();
    display.show_table &= !args.no_table;
    display.show_chart &= !args.no_chart;

    let mut session = use_case.start_session();
    let report = match session.detect(&args.text).await {
        Ok(report) => report,
        Err(err) => {
            if !err.is_validation() {
                tracing::error!(error = %err, "Detection failed");
            }
            return Err(anyhow!(err.user_message()));
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render::print_report(&report, &display);
    }

    Ok(())
}
