//! Options command implementation.
//!
//! Lists the installment terms the loan form offers for a score, optionally
//! priced for an amount.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use hubfin_credit::amortization::{compute_installment, total_payable};
use hubfin_credit::options::installment_options;
use hubfin_credit::policy_for;

use crate::cli::OutputFormat;
use crate::commands::{plain_amount, Context};
use crate::output::{heading, notice, render, Notice};

/// Arguments for the options command.
#[derive(Args, Debug)]
pub struct OptionsArgs {
    /// Credit score (0-900). Defaults to the configured simulated score.
    #[arg(short, long, allow_negative_numbers = true)]
    pub score: Option<i32>,

    /// Amount to price each term for
    #[arg(short, long)]
    pub amount: Option<String>,
}

/// One installment term, optionally priced.
#[derive(Debug, Serialize, Tabled)]
pub struct OptionRow {
    #[tabled(rename = "Parcelas")]
    pub installments: u32,
    #[tabled(rename = "Valor da Parcela")]
    pub installment_amount: String,
    #[tabled(rename = "Total a Pagar")]
    pub total_payable: String,
}

/// Execute the options command.
pub fn execute(args: OptionsArgs, ctx: &Context) -> Result<()> {
    let score = ctx.score(args.score)?;
    let policy = policy_for(score.tier());
    let terms = installment_options(policy, &ctx.config.installment_menu);
    let principal = args
        .amount
        .as_deref()
        .map(|text| ctx.positive_money(text))
        .transpose()?;

    if ctx.format == OutputFormat::Minimal {
        let joined: Vec<String> = terms.iter().map(u32::to_string).collect();
        println!("{}", joined.join(","));
        return Ok(());
    }

    let machine = ctx.format != OutputFormat::Table;
    let rows: Vec<OptionRow> = terms
        .iter()
        .map(|&n| {
            let (installment_amount, total) = match principal {
                Some(principal) => {
                    let payment = compute_installment(principal, n, policy.interest_rate);
                    let total = total_payable(payment, n);
                    if machine {
                        (plain_amount(payment), plain_amount(total))
                    } else {
                        (
                            payment.round_to_cents().to_string(),
                            total.round_to_cents().to_string(),
                        )
                    }
                }
                None => (String::new(), String::new()),
            };
            OptionRow {
                installments: n,
                installment_amount,
                total_payable: total,
            }
        })
        .collect();

    if ctx.format == OutputFormat::Table && !ctx.quiet {
        heading(&format!("Parcelas disponíveis ({})", policy.label));
        notice(Notice::Info, &format!(
            "Máximo de {} parcelas permitidas para seu score",
            policy.max_installments
        ));
    }
    render(&rows, ctx.format)?;
    Ok(())
}
