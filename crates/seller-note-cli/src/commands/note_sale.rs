use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use seller_note_core::note_sale::{analyze_note_sale, NoteSaleInput};

use super::TermsArgs;

#[derive(Args)]
pub struct NoteSaleArgs {
    #[command(flatten)]
    pub terms: TermsArgs,

    /// Buyer yields as decimals, comma separated (e.g. 0.10,0.12);
    /// defaults to the 10/12/14/16% grid
    #[arg(long, value_delimiter = ',')]
    pub yields: Vec<Decimal>,
}

pub fn run_note_sale(args: NoteSaleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let sale_input = NoteSaleInput {
        terms: args.terms.resolve()?,
        buyer_yields: args.yields,
    };
    let result = analyze_note_sale(&sale_input)?;
    Ok(serde_json::to_value(result)?)
}
