//! Tier command implementation.
//!
//! Resolves a credit score to its tier and shows the tier's lending terms.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use hubfin_credit::{policy_for, CreditScore, TierPolicy};

use crate::cli::OutputFormat;
use crate::commands::{Context, Field};
use crate::output::{heading, print_json, render};

/// Arguments for the tier command.
#[derive(Args, Debug)]
pub struct TierArgs {
    /// Credit score (0-900). Defaults to the configured simulated score.
    #[arg(short, long, allow_negative_numbers = true)]
    pub score: Option<i32>,
}

#[derive(Serialize)]
struct TierOutput<'a> {
    score: CreditScore,
    in_range: bool,
    policy: &'a TierPolicy,
}

/// Execute the tier command.
pub fn execute(args: TierArgs, ctx: &Context) -> Result<()> {
    let score = ctx.score(args.score)?;
    let policy = policy_for(score.tier());

    match ctx.format {
        OutputFormat::Json => print_json(&TierOutput {
            score,
            in_range: score.is_in_range(),
            policy,
        })?,
        OutputFormat::Minimal => println!("{}", policy.tier.code()),
        OutputFormat::Table | OutputFormat::Csv => {
            let rows = vec![
                Field::new("Score", score.to_string()),
                Field::new("Categoria", policy.label),
                Field::new("Código", policy.tier.code()),
                Field::new("Taxa de Juros", format!("{} ao mês", policy.interest_rate)),
                Field::new("Limite Máximo", policy.max_principal.to_string()),
                Field::new("Parcelas Máximas", policy.max_installments.to_string()),
                Field::new("Descrição", policy.description),
            ];
            if ctx.format == OutputFormat::Table && !ctx.quiet {
                heading("Score de Crédito");
            }
            render(&rows, ctx.format)?;
        }
    }

    Ok(())
}
