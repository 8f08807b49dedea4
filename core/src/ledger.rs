//! Ledger data model — raw feed rows and their normalized forms.
//!
//! RULE: everything downstream of this module works on normalized,
//! strongly-typed records. The loose string feeds (heterogeneous source
//! tables, text-typed amount columns) are resolved here, once, at
//! ingestion; the engine never re-parses.

use crate::parse::{normalize_text, parse_amount, parse_date};
use crate::types::{AgentId, TeamName};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction class: new-deposit vs repeat-deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TxnType {
    Ftd,
    Rtn,
}

impl TxnType {
    /// Feed values are free-form; anything that isn't FTD is a repeat
    /// deposit. A missing type column defaults to FTD upstream.
    pub fn from_feed(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("ftd") {
            TxnType::Ftd
        } else {
            TxnType::Rtn
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TxnType::Ftd => "FTD",
            TxnType::Rtn => "RTN",
        }
    }
}

/// Payment method class. WALLET funds earn the commission premium and
/// WALLET withdrawals never reduce net deposits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PayMethod {
    Normal,
    Wallet,
}

impl PayMethod {
    pub fn from_feed(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.trim().eq_ignore_ascii_case("wallet") => PayMethod::Wallet,
            _ => PayMethod::Normal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PayMethod::Normal => "NORMAL",
            PayMethod::Wallet => "WALLET",
        }
    }
}

/// Calendar-month grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// One raw transaction row, exactly as the source table stores it —
/// every column text, every column optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTransaction {
    pub date: Option<String>,
    pub id: Option<String>,
    pub team: Option<String>,
    pub agent: Option<String>,
    pub country: Option<String>,
    pub affiliate: Option<String>,
    pub source: Option<String>,
    pub usd: Option<String>,
    pub method: Option<String>,
    pub month_name: Option<String>,
    pub txn_type: Option<String>,
}

impl RawTransaction {
    /// Resolve the loose columns to a typed record.
    ///
    /// Returns None when the row is unusable: no parseable date, or no
    /// agent after normalization. The `month_name` label is feed metadata
    /// only — month grouping always derives from the parsed date.
    pub fn normalize(&self) -> Option<Transaction> {
        let date = parse_date(self.date.as_deref().unwrap_or(""))?;
        let agent = normalize_text(self.agent.as_deref().unwrap_or(""))?;
        Some(Transaction {
            id: self.id.as_deref().and_then(normalize_text),
            agent,
            team: self.team.as_deref().and_then(normalize_text),
            country: self.country.as_deref().and_then(normalize_text),
            affiliate: self.affiliate.as_deref().and_then(normalize_text),
            source: self.source.as_deref().and_then(normalize_text),
            date,
            txn_type: TxnType::from_feed(self.txn_type.as_deref().unwrap_or("FTD")),
            method: PayMethod::from_feed(self.method.as_deref()),
            amount_usd: parse_amount(self.usd.as_deref().unwrap_or("")),
        })
    }
}

/// One raw withdrawal row from the withdrawal feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawWithdrawal {
    pub agent: Option<String>,
    pub usd: Option<String>,
    pub date: Option<String>,
    pub method: Option<String>,
}

impl RawWithdrawal {
    pub fn normalize(&self) -> Option<WithdrawalRecord> {
        let date = parse_date(self.date.as_deref().unwrap_or(""))?;
        let agent = normalize_text(self.agent.as_deref().unwrap_or(""))?;
        Some(WithdrawalRecord {
            agent,
            amount_usd: parse_amount(self.usd.as_deref().unwrap_or("")),
            date,
            method: PayMethod::from_feed(self.method.as_deref()),
        })
    }
}

/// A normalized ledger entry. Immutable input to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Option<String>,
    pub agent: AgentId,
    pub team: Option<TeamName>,
    pub country: Option<String>,
    pub affiliate: Option<String>,
    pub source: Option<String>,
    pub date: NaiveDate,
    pub txn_type: TxnType,
    pub method: PayMethod,
    pub amount_usd: f64,
}

/// A normalized withdrawal. Individual records are aggregated to
/// `(agent, month, method-class)` totals and not retained past that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalRecord {
    pub agent: AgentId,
    pub amount_usd: f64,
    pub date: NaiveDate,
    pub method: PayMethod,
}

/// Canonical row: a transaction plus the engine-owned fields computed
/// once per full-dataset pass. Scope-dependent fields (commission pct and
/// value) are NOT here — they live on `CommissionRow`, recomputed per
/// query.
#[derive(Debug, Clone, Serialize)]
pub struct LedgerRow {
    pub txn: Transaction,
    pub month_key: MonthKey,
    /// Position in the agent's month, 1-based, all transaction types
    /// counted. The FTD tier input for FTD rows.
    pub ftd_ordinal: u32,
    /// Withdrawal-adjusted amount for RTN rows; equals `amount_usd` for
    /// FTD rows.
    pub net_usd: f64,
}

impl LedgerRow {
    pub fn is_ftd(&self) -> bool {
        self.txn.txn_type == TxnType::Ftd
    }

    pub fn is_rtn(&self) -> bool {
        self.txn.txn_type == TxnType::Rtn
    }
}
