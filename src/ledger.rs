//! The expense ledger
//!
//! Holds records in arrival order and is bound to one data file for its
//! whole lifetime. Memory and disk only meet on an explicit save or load.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{month_key, parse_date, Amount, Record};
use crate::storage::{read_records, write_records};

/// File name used when no path is given
pub const DEFAULT_DATA_FILE: &str = "expenses.json";

/// In-memory record store with file persistence
#[derive(Debug, Clone)]
pub struct Ledger {
    path: PathBuf,
    records: Vec<Record>,
}

impl Ledger {
    /// Create an empty ledger bound to `path` without reading it
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
        }
    }

    /// Create a ledger bound to `path` and load whatever is stored there
    pub fn open(path: impl Into<PathBuf>) -> LedgerResult<Self> {
        let mut ledger = Self::new(path);
        ledger.load()?;
        Ok(ledger)
    }

    /// Open the ledger stored in `expenses.json`
    pub fn open_default() -> LedgerResult<Self> {
        Self::open(DEFAULT_DATA_FILE)
    }

    /// The file this ledger saves to and loads from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records in insertion order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validate and append a new record
    pub fn add<A>(
        &mut self,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: A,
        date: &str,
    ) -> LedgerResult<()>
    where
        A: TryInto<Amount, Error = LedgerError>,
    {
        let record = Record::new(description, category, amount, date)?;
        debug!(record = %record, "adding record");
        self.records.push(record);
        Ok(())
    }

    /// All records sorted by date; records sharing a date keep arrival order
    pub fn list_all(&self) -> Vec<&Record> {
        let mut sorted: Vec<&Record> = self.records.iter().collect();
        // sort_by_key is stable
        sorted.sort_by_key(|r| r.date());
        sorted
    }

    /// Sum of amounts per category; only categories with records appear
    pub fn category_totals(&self) -> BTreeMap<String, Amount> {
        let mut totals: BTreeMap<String, Amount> = BTreeMap::new();
        for record in &self.records {
            *totals.entry(record.category().to_string()).or_default() += record.amount();
        }
        totals
    }

    /// Sum of amounts per `YYYY-MM`, in ascending month order
    pub fn monthly_totals(&self) -> BTreeMap<String, Amount> {
        let mut totals: BTreeMap<String, Amount> = BTreeMap::new();
        for record in &self.records {
            *totals.entry(month_key(record.date())).or_default() += record.amount();
        }
        totals
    }

    /// Sum of every record's amount
    pub fn grand_total(&self) -> Amount {
        self.records.iter().map(Record::amount).sum()
    }

    /// Remove records whose description equals `description` exactly
    pub fn delete_by_description(&mut self, description: &str) -> usize {
        let removed = self.remove_where(|r| r.description() == description);
        debug!(description, removed, "deleted by description");
        removed
    }

    /// Remove records whose category equals `category` exactly
    pub fn delete_by_category(&mut self, category: &str) -> usize {
        let removed = self.remove_where(|r| r.category() == category);
        debug!(category, removed, "deleted by category");
        removed
    }

    /// Remove records dated `date` (`YYYY-MM-DD`)
    ///
    /// A malformed date is an error and leaves the ledger unchanged.
    pub fn delete_by_date(&mut self, date: &str) -> LedgerResult<usize> {
        let target = parse_date(date)?;
        let removed = self.remove_where(|r| r.date() == target);
        debug!(date, removed, "deleted by date");
        Ok(removed)
    }

    /// Remove every record, returning how many there were
    pub fn delete_all(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        debug!(removed, "deleted all records");
        removed
    }

    /// Save to the bound file
    pub fn save(&self) -> LedgerResult<()> {
        self.save_to(&self.path)
    }

    /// Write every record, in insertion order, to `path`, replacing its content
    pub fn save_to(&self, path: impl AsRef<Path>) -> LedgerResult<()> {
        let path = path.as_ref();
        write_records(path, &self.records)?;
        debug!(path = %path.display(), count = self.records.len(), "saved records");
        Ok(())
    }

    /// Reload from the bound file
    pub fn load(&mut self) -> LedgerResult<()> {
        let path = self.path.clone();
        self.load_from(path)
    }

    /// Replace the in-memory records with the content of `path`
    ///
    /// A missing or unparsable file leaves the ledger empty without error.
    /// An invalid entry fails the whole load and keeps the current records.
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> LedgerResult<()> {
        let path = path.as_ref();
        self.records = read_records(path)?.unwrap_or_default();
        info!(path = %path.display(), count = self.records.len(), "loaded records");
        Ok(())
    }

    fn remove_where(&mut self, matches: impl Fn(&Record) -> bool) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !matches(r));
        before - self.records.len()
    }
}
