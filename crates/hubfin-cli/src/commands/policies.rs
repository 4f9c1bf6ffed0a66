//! Policies command implementation.
//!
//! Lists the lending terms of every credit tier.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use hubfin_credit::policy::all_policies;
use hubfin_credit::{CreditTier, TierPolicy};

use crate::cli::OutputFormat;
use crate::commands::{plain_amount, Context};
use crate::output::{heading, print_json, render};

/// Arguments for the policies command.
#[derive(Args, Debug)]
pub struct PoliciesArgs {}

/// One row of the policy table.
#[derive(Debug, Serialize, Tabled)]
pub struct PolicyRow {
    #[tabled(rename = "Tier")]
    pub tier: String,
    #[tabled(rename = "Categoria")]
    pub label: String,
    #[tabled(rename = "Score")]
    pub score_range: String,
    #[tabled(rename = "Taxa/mês")]
    pub rate: String,
    #[tabled(rename = "Limite")]
    pub max_principal: String,
    #[tabled(rename = "Parcelas")]
    pub max_installments: u32,
}

impl PolicyRow {
    fn new(policy: &TierPolicy, machine: bool) -> Self {
        Self {
            tier: policy.tier.code().to_string(),
            label: policy.label.to_string(),
            score_range: score_range(policy.tier),
            rate: policy.interest_rate.to_string(),
            max_principal: if machine {
                plain_amount(policy.max_principal)
            } else {
                policy.max_principal.to_string()
            },
            max_installments: policy.max_installments,
        }
    }
}

/// Human-readable score band of a tier, e.g. `601-750`.
fn score_range(tier: CreditTier) -> String {
    let index = tier.index();
    let upper = (index > 0).then(|| CreditTier::ALL[index - 1].min_score() - 1);
    match (tier, upper) {
        (CreditTier::VeryPoor, Some(upper)) => format!("≤ {upper}"),
        (_, Some(upper)) => format!("{}-{upper}", tier.min_score()),
        (_, None) => format!("≥ {}", tier.min_score()),
    }
}

/// Execute the policies command.
pub fn execute(_args: PoliciesArgs, ctx: &Context) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            let policies: Vec<&TierPolicy> = all_policies().collect();
            print_json(&policies)?;
        }
        OutputFormat::Minimal => {
            for policy in all_policies() {
                println!("{} {} {}", policy.tier.code(), policy.interest_rate.value(), policy.max_installments);
            }
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let machine = ctx.format == OutputFormat::Csv;
            let rows: Vec<PolicyRow> = all_policies().map(|p| PolicyRow::new(p, machine)).collect();
            if !machine && !ctx.quiet {
                heading("Políticas de Crédito");
            }
            render(&rows, ctx.format)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_ranges() {
        assert_eq!(score_range(CreditTier::Excellent), "≥ 751");
        assert_eq!(score_range(CreditTier::Good), "601-750");
        assert_eq!(score_range(CreditTier::Poor), "301-450");
        assert_eq!(score_range(CreditTier::VeryPoor), "≤ 300");
    }
}
