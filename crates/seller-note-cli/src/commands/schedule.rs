use clap::Args;
use serde_json::Value;

use seller_note_core::schedule::compute_schedule;
use seller_note_core::tila::summarize;

use super::TermsArgs;

#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub terms: TermsArgs,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms = args.terms.resolve()?;
    let schedule = compute_schedule(&terms)?;
    let summary = summarize(&schedule, &terms);

    Ok(serde_json::json!({
        "result": {
            "loan_type": terms.loan_type,
            "monthly_payment": schedule.first_payment_amount(),
            "summary": summary,
            "lines": schedule.lines,
        }
    }))
}
