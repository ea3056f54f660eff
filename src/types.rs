use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Size category of a weapon, as named by the simulator's `SizeCategory` enum
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SizeCategory {
    Tiny,
    Small,
    Medium,
    Large,
    Huge,
    /// A code that is not one of T/S/M/L/H, kept uppercased so it still shows up in the output
    Other(String),
}

impl SizeCategory {
    /// Map the wiki's single-letter size code
    pub fn from_code(code: &str) -> Self {
        let code = code.trim().to_uppercase();
        match code.as_str() {
            "T" => SizeCategory::Tiny,
            "S" => SizeCategory::Small,
            "M" => SizeCategory::Medium,
            "L" => SizeCategory::Large,
            "H" => SizeCategory::Huge,
            _ => SizeCategory::Other(code),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, SizeCategory::Other(_))
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeCategory::Tiny => write!(f, "Tiny"),
            SizeCategory::Small => write!(f, "Small"),
            SizeCategory::Medium => write!(f, "Medium"),
            SizeCategory::Large => write!(f, "Large"),
            SizeCategory::Huge => write!(f, "Huge"),
            SizeCategory::Other(code) => write!(f, "{}", code),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DamageType {
    Bludgeoning,
    Slashing,
    Piercing,
}

impl DamageType {
    pub const ALL: [DamageType; 3] = [
        DamageType::Bludgeoning,
        DamageType::Slashing,
        DamageType::Piercing,
    ];

    /// Full spellings the wiki uses for this damage type
    pub fn spellings(&self) -> &'static [&'static str] {
        match self {
            DamageType::Bludgeoning => &["Bludgeoning"],
            DamageType::Slashing => &["Slashing"],
            DamageType::Piercing => &["Piercing", "Pierce"],
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DamageType::Bludgeoning => "Bludgeoning",
            DamageType::Slashing => "Slashing",
            DamageType::Piercing => "Piercing",
        };
        write!(f, "{}", name)
    }
}

/// Text of every `<td>` in one table row, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawWeaponRow {
    /// Position of the row among the data rows of the table
    pub index: usize,
    pub cells: Vec<String>,
}

impl RawWeaponRow {
    pub fn new(index: usize, cells: Vec<String>) -> Self {
        Self { index, cells }
    }

    pub fn cell(&self, i: usize) -> &str {
        self.cells.get(i).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeaponRecord {
    pub name: String,
    pub size: SizeCategory,
    pub damage_dice: String,
    pub threat_range: u8,
    pub crit_multiplier: u8,
    pub damage_types: Vec<DamageType>,
}

/// Anomaly on a row that was still turned into a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RowWarning {
    UnrecognizedSize(String),
    UnmatchedDamageType(String),
    NoDamageTypes,
}

impl fmt::Display for RowWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowWarning::UnrecognizedSize(code) => write!(f, "unrecognized size code '{}'", code),
            RowWarning::UnmatchedDamageType(token) => {
                write!(f, "unmatched damage type token '{}'", token)
            }
            RowWarning::NoDamageTypes => write!(f, "no damage types recognized"),
        }
    }
}

/// Why a row produced no record
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    #[error("expected at least {expected} cells, found {found}")]
    TooFewCells { expected: usize, found: usize },

    #[error("weapon name is empty")]
    EmptyName,

    #[error("size code is empty")]
    EmptySize,

    #[error("critical cell has no multiplier")]
    MissingCritical,

    #[error("threat range '{0}' is not a number")]
    InvalidThreatRange(String),

    #[error("critical multiplier '{0}' is not a number")]
    InvalidMultiplier(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRow {
    pub record: WeaponRecord,
    pub warnings: Vec<RowWarning>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedRow {
    pub row: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlaggedRow {
    pub row: usize,
    pub name: String,
    pub warning: RowWarning,
}

/// Outcome of one sync run
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncReport {
    pub source_url: String,
    pub output: String,
    pub rows_seen: usize,
    pub entries_written: usize,
    pub skipped: Vec<SkippedRow>,
    pub warnings: Vec<FlaggedRow>,
    pub dry_run: bool,
}
