//! Loan requests as submitted by the borrower.

use hubfin_core::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the borrower intends to use the loan for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LoanPurpose {
    /// Personal use
    #[default]
    Personal,
    /// Renovation or construction
    Home,
    /// Vehicle purchase
    Vehicle,
    /// Education
    Education,
    /// Paying off existing debt
    Debt,
    /// Anything else
    Other,
}

impl LoanPurpose {
    /// Form code for this purpose.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            LoanPurpose::Personal => "personal",
            LoanPurpose::Home => "home",
            LoanPurpose::Vehicle => "vehicle",
            LoanPurpose::Education => "education",
            LoanPurpose::Debt => "debt",
            LoanPurpose::Other => "other",
        }
    }

    /// Display label, in Portuguese.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            LoanPurpose::Personal => "Uso Pessoal",
            LoanPurpose::Home => "Reforma/Construção",
            LoanPurpose::Vehicle => "Compra de Veículo",
            LoanPurpose::Education => "Educação",
            LoanPurpose::Debt => "Quitar Dívidas",
            LoanPurpose::Other => "Outros",
        }
    }
}

impl FromStr for LoanPurpose {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "personal" => Ok(LoanPurpose::Personal),
            "home" => Ok(LoanPurpose::Home),
            "vehicle" => Ok(LoanPurpose::Vehicle),
            "education" => Ok(LoanPurpose::Education),
            "debt" => Ok(LoanPurpose::Debt),
            "other" => Ok(LoanPurpose::Other),
            _ => Err(format!("unknown loan purpose '{s}'")),
        }
    }
}

impl fmt::Display for LoanPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The borrower's employment situation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentStatus {
    /// Formally employed (CLT)
    Employed,
    /// Self-employed
    SelfEmployed,
    /// Business owner
    Business,
    /// Retired
    Retired,
    /// Anything else
    Other,
}

impl EmploymentStatus {
    /// Form code for this status.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            EmploymentStatus::Employed => "employed",
            EmploymentStatus::SelfEmployed => "self-employed",
            EmploymentStatus::Business => "business",
            EmploymentStatus::Retired => "retired",
            EmploymentStatus::Other => "other",
        }
    }

    /// Display label, in Portuguese.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            EmploymentStatus::Employed => "Empregado CLT",
            EmploymentStatus::SelfEmployed => "Autônomo",
            EmploymentStatus::Business => "Empresário",
            EmploymentStatus::Retired => "Aposentado",
            EmploymentStatus::Other => "Outros",
        }
    }
}

impl FromStr for EmploymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "employed" => Ok(EmploymentStatus::Employed),
            "self-employed" => Ok(EmploymentStatus::SelfEmployed),
            "business" => Ok(EmploymentStatus::Business),
            "retired" => Ok(EmploymentStatus::Retired),
            "other" => Ok(EmploymentStatus::Other),
            _ => Err(format!("unknown employment status '{s}'")),
        }
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A loan request awaiting validation.
///
/// Only `principal` and `installments` take part in validation and pricing;
/// the remaining fields are carried through for the credit analyst.
///
/// ```rust
/// use hubfin_core::Money;
/// use hubfin_credit::request::{EmploymentStatus, LoanPurpose, LoanRequest};
/// use rust_decimal_macros::dec;
///
/// let request = LoanRequest::new(Money::brl(dec!(15000)), 24)
///     .with_purpose(LoanPurpose::Vehicle)
///     .with_monthly_income(Money::brl(dec!(6500)))
///     .with_employment_status(EmploymentStatus::Employed);
/// assert_eq!(request.installments, 24);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    /// Amount requested.
    pub principal: Money,
    /// Number of monthly installments.
    pub installments: u32,
    /// Declared purpose.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<LoanPurpose>,
    /// Declared monthly income.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_income: Option<Money>,
    /// Declared employment status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment_status: Option<EmploymentStatus>,
}

impl LoanRequest {
    /// Creates a request for a principal over a number of installments.
    #[must_use]
    pub fn new(principal: Money, installments: u32) -> Self {
        Self {
            principal,
            installments,
            purpose: None,
            monthly_income: None,
            employment_status: None,
        }
    }

    /// Sets the declared purpose.
    #[must_use]
    pub fn with_purpose(mut self, purpose: LoanPurpose) -> Self {
        self.purpose = Some(purpose);
        self
    }

    /// Sets the declared monthly income.
    #[must_use]
    pub fn with_monthly_income(mut self, income: Money) -> Self {
        self.monthly_income = Some(income);
        self
    }

    /// Sets the declared employment status.
    #[must_use]
    pub fn with_employment_status(mut self, status: EmploymentStatus) -> Self {
        self.employment_status = Some(status);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_purpose_codes() {
        assert_eq!("vehicle".parse::<LoanPurpose>().unwrap(), LoanPurpose::Vehicle);
        assert_eq!(LoanPurpose::Debt.label(), "Quitar Dívidas");
        assert!("yacht".parse::<LoanPurpose>().is_err());
    }

    #[test]
    fn test_employment_codes() {
        assert_eq!(
            "self-employed".parse::<EmploymentStatus>().unwrap(),
            EmploymentStatus::SelfEmployed
        );
        assert_eq!(
            "SELF_EMPLOYED".parse::<EmploymentStatus>().unwrap(),
            EmploymentStatus::SelfEmployed
        );
        for status in [
            EmploymentStatus::Employed,
            EmploymentStatus::SelfEmployed,
            EmploymentStatus::Business,
            EmploymentStatus::Retired,
            EmploymentStatus::Other,
        ] {
            assert_eq!(status.code().parse::<EmploymentStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_request_serde_skips_unset_fields() {
        let request = LoanRequest::new(Money::brl(dec!(5000)), 6);
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("purpose").is_none());

        let parsed: LoanRequest = serde_json::from_value(serde_json::json!({
            "principal": { "amount": 5000.0, "currency": "BRL" },
            "installments": 6,
            "purpose": "debt"
        }))
        .unwrap();
        assert_eq!(parsed.purpose, Some(LoanPurpose::Debt));
        assert_eq!(parsed.principal, Money::brl(dec!(5000)));
    }
}
