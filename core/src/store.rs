//! SQLite persistence layer.
//!
//! RULE: only store.rs talks to the database. The engine works on
//! normalized in-memory records; the store owns the raw text-typed feed
//! tables (the shape the upstream export produces) and the evaluated
//! report table.

use crate::error::EngineResult;
use crate::ledger::{RawTransaction, RawWithdrawal, Transaction, WithdrawalRecord};
use crate::resolver::CommissionRow;
use rusqlite::{params, Connection};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS raw_transaction (
    date        TEXT,
    id          TEXT,
    team        TEXT,
    agent       TEXT,
    country     TEXT,
    affiliate   TEXT,
    source      TEXT,
    usd         TEXT,
    method      TEXT,
    month_name  TEXT,
    type        TEXT
);
CREATE TABLE IF NOT EXISTS withdrawal (
    agent   TEXT,
    usd     TEXT,
    date    TEXT,
    method  TEXT
);
CREATE TABLE IF NOT EXISTS commission_row (
    date            TEXT NOT NULL,
    agent           TEXT NOT NULL,
    type            TEXT NOT NULL,
    team            TEXT,
    country         TEXT,
    affiliate       TEXT,
    method          TEXT NOT NULL,
    amount_usd      REAL NOT NULL,
    ftd_ordinal     INTEGER NOT NULL,
    net_usd         REAL NOT NULL,
    commission_pct  REAL NOT NULL,
    commission_usd  REAL NOT NULL
);
";

pub struct LedgerStore {
    conn: Connection,
}

impl LedgerStore {
    /// Open (or create) the ledger database at `path`.
    pub fn open(path: &str) -> EngineResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode only matters for real files; :memory: ignores it.
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> EngineResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Apply the schema.
    pub fn migrate(&self) -> EngineResult<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    // ── Raw feeds in ──────────────────────────────────────────────

    pub fn insert_raw_transaction(&self, raw: &RawTransaction) -> EngineResult<()> {
        self.conn.execute(
            "INSERT INTO raw_transaction
               (date, id, team, agent, country, affiliate, source, usd, method, month_name, type)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                raw.date,
                raw.id,
                raw.team,
                raw.agent,
                raw.country,
                raw.affiliate,
                raw.source,
                raw.usd,
                raw.method,
                raw.month_name,
                raw.txn_type,
            ],
        )?;
        Ok(())
    }

    pub fn insert_withdrawal(&self, raw: &RawWithdrawal) -> EngineResult<()> {
        self.conn.execute(
            "INSERT INTO withdrawal (agent, usd, date, method) VALUES (?1, ?2, ?3, ?4)",
            params![raw.agent, raw.usd, raw.date, raw.method],
        )?;
        Ok(())
    }

    // ── Normalized feeds out ──────────────────────────────────────

    /// Load and normalize every transaction row, in insertion order (the
    /// feed order that breaks same-day ties downstream). Rows without a
    /// usable date or agent are dropped, not surfaced as errors.
    pub fn load_transactions(&self) -> EngineResult<Vec<Transaction>> {
        let mut stmt = self.conn.prepare(
            "SELECT date, id, team, agent, country, affiliate, source, usd, method, month_name, type
             FROM raw_transaction ORDER BY rowid ASC",
        )?;
        let raws = stmt
            .query_map([], |row| {
                Ok(RawTransaction {
                    date: row.get(0)?,
                    id: row.get(1)?,
                    team: row.get(2)?,
                    agent: row.get(3)?,
                    country: row.get(4)?,
                    affiliate: row.get(5)?,
                    source: row.get(6)?,
                    usd: row.get(7)?,
                    method: row.get(8)?,
                    month_name: row.get(9)?,
                    txn_type: row.get(10)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let total = raws.len();
        let transactions: Vec<Transaction> =
            raws.iter().filter_map(RawTransaction::normalize).collect();
        if transactions.len() < total {
            log::debug!(
                "dropped {} of {} transaction rows (unusable date or agent)",
                total - transactions.len(),
                total
            );
        }
        Ok(transactions)
    }

    pub fn load_withdrawals(&self) -> EngineResult<Vec<WithdrawalRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT agent, usd, date, method FROM withdrawal ORDER BY rowid ASC",
        )?;
        let raws = stmt
            .query_map([], |row| {
                Ok(RawWithdrawal {
                    agent: row.get(0)?,
                    usd: row.get(1)?,
                    date: row.get(2)?,
                    method: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let total = raws.len();
        let withdrawals: Vec<WithdrawalRecord> =
            raws.iter().filter_map(RawWithdrawal::normalize).collect();
        if withdrawals.len() < total {
            log::debug!(
                "dropped {} of {} withdrawal rows (unusable date or agent)",
                total - withdrawals.len(),
                total
            );
        }
        Ok(withdrawals)
    }

    // ── Evaluated reports in ──────────────────────────────────────

    /// Replace the persisted report with the given rows.
    pub fn save_report(&self, rows: &[CommissionRow]) -> EngineResult<()> {
        self.conn.execute("DELETE FROM commission_row", [])?;
        let mut stmt = self.conn.prepare(
            "INSERT INTO commission_row
               (date, agent, type, team, country, affiliate, method,
                amount_usd, ftd_ordinal, net_usd, commission_pct, commission_usd)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        )?;
        for row in rows {
            stmt.execute(params![
                row.date.to_string(),
                row.agent,
                row.txn_type.as_str(),
                row.team,
                row.country,
                row.affiliate,
                row.method.as_str(),
                row.amount_usd,
                row.ftd_ordinal as i64,
                row.net_usd,
                row.commission_pct,
                row.commission_usd,
            ])?;
        }
        Ok(())
    }

    pub fn report_row_count(&self) -> EngineResult<i64> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM commission_row", [], |row| row.get(0))?;
        Ok(count)
    }
}
