//! Quote command implementation.
//!
//! Prices a loan request and reports whether the borrower's tier allows it.
//! Rejected requests still print the summary, then exit with the rejection
//! message.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use hubfin_credit::options::clamp_installments;
use hubfin_credit::quote::LoanQuote;
use hubfin_credit::request::{EmploymentStatus, LoanPurpose};
use hubfin_credit::{policy_for, LoanRequest};

use crate::cli::OutputFormat;
use crate::commands::{plain_amount, Context, Field};
use crate::error::CliError;
use crate::output::{heading, notice, print_json, render, Notice};

/// Arguments for the quote command.
#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Credit score (0-900). Defaults to the configured simulated score.
    #[arg(short, long, allow_negative_numbers = true)]
    pub score: Option<i32>,

    /// Amount requested (e.g. 12000, 12000.50 or 12.000,50)
    #[arg(short, long)]
    pub amount: String,

    /// Number of monthly installments. Defaults to the configured term,
    /// lowered to the tier maximum.
    #[arg(short, long)]
    pub installments: Option<u32>,

    /// Loan purpose (personal, home, vehicle, education, debt, other)
    #[arg(long)]
    pub purpose: Option<LoanPurpose>,

    /// Monthly income, echoed in the summary
    #[arg(long)]
    pub income: Option<String>,

    /// Employment status (employed, self-employed, business, retired, other)
    #[arg(long)]
    pub employment: Option<EmploymentStatus>,
}

#[derive(Serialize)]
struct QuoteOutput<'a> {
    #[serde(flatten)]
    quote: &'a LoanQuote,
    accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    request: &'a LoanRequest,
}

/// Builds the request described by `args` for a borrower at `ctx`.
fn build_request(args: &QuoteArgs, ctx: &Context, default_term: u32) -> Result<LoanRequest> {
    let mut request = LoanRequest::new(
        ctx.money(&args.amount)?,
        args.installments.unwrap_or(default_term),
    );
    if let Some(purpose) = args.purpose {
        request = request.with_purpose(purpose);
    }
    if let Some(ref income) = args.income {
        request = request.with_monthly_income(ctx.money(income)?);
    }
    if let Some(status) = args.employment {
        request = request.with_employment_status(status);
    }
    Ok(request)
}

fn summary_rows(quote: &LoanQuote, request: &LoanRequest) -> Vec<Field> {
    let mut rows = vec![
        Field::new("Score", format!("{} ({})", quote.score, quote.tier_label)),
        Field::new("Valor Solicitado", quote.principal.to_string()),
        Field::new("Parcelas", format!("{}x", quote.installments)),
        Field::new(
            "Valor da Parcela",
            quote.installment_amount.round_to_cents().to_string(),
        ),
        Field::new("Total a Pagar", quote.total_payable.round_to_cents().to_string()),
        Field::new("Total de Juros", quote.total_interest.round_to_cents().to_string()),
        Field::new("Taxa de Juros", format!("{} ao mês", quote.rate)),
        Field::new("Limite Disponível", quote.available_limit.to_string()),
    ];
    if let Some(purpose) = request.purpose {
        rows.push(Field::new("Finalidade", purpose.label()));
    }
    if let Some(income) = request.monthly_income {
        rows.push(Field::new("Renda Mensal", income.to_string()));
    }
    if let Some(status) = request.employment_status {
        rows.push(Field::new("Situação Profissional", status.label()));
    }
    rows
}

/// Execute the quote command.
pub fn execute(args: QuoteArgs, ctx: &Context) -> Result<()> {
    let score = ctx.score(args.score)?;
    let policy = policy_for(score.tier());
    let default_term = clamp_installments(ctx.config.default_installments, policy);

    let request = build_request(&args, ctx, default_term)?;
    let quote = LoanQuote::with_validator(score, &request, &ctx.config.validator());
    let message = quote.rejection.map(|reason| reason.message());

    tracing::info!(
        score = score.value(),
        tier = quote.tier.code(),
        accepted = quote.is_accepted(),
        "quoted loan request"
    );

    match ctx.format {
        OutputFormat::Json => print_json(&QuoteOutput {
            quote: &quote,
            accepted: quote.is_accepted(),
            message: message.clone(),
            request: &request,
        })?,
        OutputFormat::Minimal => println!("{}", plain_amount(quote.installment_amount)),
        OutputFormat::Csv => {
            let mut rows = summary_rows(&quote, &request);
            rows[3] = Field::new("Valor da Parcela", plain_amount(quote.installment_amount));
            rows[4] = Field::new("Total a Pagar", plain_amount(quote.total_payable));
            render(&rows, ctx.format)?;
        }
        OutputFormat::Table => {
            if !ctx.quiet {
                heading("Resumo da Proposta");
            }
            render(&summary_rows(&quote, &request), ctx.format)?;
            if quote.is_accepted() && !ctx.quiet {
                notice(Notice::Success, "Proposta dentro dos limites do seu score.");
            }
        }
    }

    match message {
        Some(message) => Err(CliError::Rejected(message).into()),
        None => Ok(()),
    }
}
