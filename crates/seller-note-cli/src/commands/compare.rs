use clap::Args;
use serde_json::Value;

use seller_note_core::comparison::compare_structures;
use seller_note_core::terms::LoanType;

use super::TermsArgs;

#[derive(Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub terms: TermsArgs,
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    // The comparison overrides the structure per leg, so any selector works.
    let terms = args.terms.resolve_with(Some(LoanType::Standard))?;
    let result = compare_structures(&terms)?;
    Ok(serde_json::to_value(result)?)
}
