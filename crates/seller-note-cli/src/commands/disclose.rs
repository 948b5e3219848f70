use chrono::NaiveDate;
use clap::Args;
use serde_json::Value;

use seller_note_core::disclosure::{prepare_disclosure, DisclosureInput};

use super::TermsArgs;

#[derive(Args)]
pub struct DiscloseArgs {
    #[command(flatten)]
    pub terms: TermsArgs,

    /// First payment due date (YYYY-MM-DD), used to derive calendar dates
    #[arg(long)]
    pub first_due_date: Option<NaiveDate>,
}

pub fn run_disclose(args: DiscloseArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let disclosure_input = DisclosureInput {
        terms: args.terms.resolve()?,
        first_due_date: args.first_due_date,
    };
    let result = prepare_disclosure(&disclosure_input)?;
    Ok(serde_json::to_value(result)?)
}
