//! Schedule command implementation.
//!
//! Prints the amortization schedule of an accepted loan request.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use hubfin_credit::amortization::{amortization_schedule, ScheduleEntry};
use hubfin_credit::options::clamp_installments;
use hubfin_credit::{policy_for, LoanRequest};

use crate::cli::OutputFormat;
use crate::commands::{plain_amount, Context};
use crate::error::CliError;
use crate::output::{heading, print_json, render};

/// Arguments for the schedule command.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Credit score (0-900). Defaults to the configured simulated score.
    #[arg(short, long, allow_negative_numbers = true)]
    pub score: Option<i32>,

    /// Amount requested (e.g. 12000, 12000.50 or 12.000,50)
    #[arg(short, long)]
    pub amount: String,

    /// Number of monthly installments
    #[arg(short, long)]
    pub installments: Option<u32>,
}

/// One period of the schedule, formatted for display.
#[derive(Debug, Serialize, Tabled)]
pub struct ScheduleRow {
    #[tabled(rename = "Parcela")]
    pub period: u32,
    #[tabled(rename = "Pagamento")]
    pub payment: String,
    #[tabled(rename = "Juros")]
    pub interest: String,
    #[tabled(rename = "Amortização")]
    pub principal: String,
    #[tabled(rename = "Saldo")]
    pub balance: String,
}

impl ScheduleRow {
    fn new(entry: &ScheduleEntry, machine: bool) -> Self {
        let fmt = |m: hubfin_core::Money| {
            if machine {
                plain_amount(m)
            } else {
                m.to_string()
            }
        };
        Self {
            period: entry.period,
            payment: fmt(entry.payment),
            interest: fmt(entry.interest),
            principal: fmt(entry.principal),
            balance: fmt(entry.balance),
        }
    }
}

/// Execute the schedule command.
pub fn execute(args: ScheduleArgs, ctx: &Context) -> Result<()> {
    let score = ctx.score(args.score)?;
    let policy = policy_for(score.tier());
    let installments = args
        .installments
        .unwrap_or_else(|| clamp_installments(ctx.config.default_installments, policy));

    let request = LoanRequest::new(ctx.money(&args.amount)?, installments);
    let accepted = ctx
        .config
        .validator()
        .validate(&request, policy)
        .map_err(|reason| CliError::Rejected(reason.message()))?;

    let schedule = amortization_schedule(accepted.principal, accepted.installments, accepted.rate)
        .map_err(CliError::from)?;

    match ctx.format {
        OutputFormat::Json => print_json(&schedule)?,
        OutputFormat::Minimal => {
            for entry in &schedule {
                println!("{}", plain_amount(entry.payment));
            }
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let machine = ctx.format == OutputFormat::Csv;
            let rows: Vec<ScheduleRow> = schedule.iter().map(|e| ScheduleRow::new(e, machine)).collect();
            if !machine && !ctx.quiet {
                heading(&format!(
                    "Tabela Price: {} em {}x a {} ao mês",
                    accepted.principal, accepted.installments, accepted.rate
                ));
            }
            render(&rows, ctx.format)?;
        }
    }

    Ok(())
}
