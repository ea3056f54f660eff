use crate::constants::{DEFAULT_THREAT_RANGE, NAME_ALIASES, WEAPON_ROW_CELLS};
use crate::types::{
    DamageType, NormalizedRow, RawWeaponRow, RowWarning, SizeCategory, SkipReason, WeaponRecord,
};
use tracing::warn;

const NAME_CELL: usize = 0;
const SIZE_CELL: usize = 2;
const DAMAGE_CELL: usize = 3;
const CRITICAL_CELL: usize = 4;
const DAMAGE_TYPE_CELL: usize = 5;

/// Turns raw wiki table rows into weapon records.
///
/// A bad row never aborts the batch: it is either skipped with a [`SkipReason`]
/// or normalized with [`RowWarning`]s attached.
pub struct WeaponNormalizer {
    aliases: Vec<(String, String)>,
}

impl Default for WeaponNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl WeaponNormalizer {
    pub fn new() -> Self {
        Self::with_aliases(
            NAME_ALIASES
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        )
    }

    pub fn with_aliases(aliases: Vec<(String, String)>) -> Self {
        Self { aliases }
    }

    pub fn normalize(&self, row: &RawWeaponRow) -> Result<NormalizedRow, SkipReason> {
        if row.cells.len() < WEAPON_ROW_CELLS {
            return Err(SkipReason::TooFewCells {
                expected: WEAPON_ROW_CELLS,
                found: row.cells.len(),
            });
        }

        let mut warnings = Vec::new();

        let name = self.normalize_name(row.cell(NAME_CELL));
        if name.is_empty() {
            return Err(SkipReason::EmptyName);
        }

        let size_code = row.cell(SIZE_CELL).trim();
        if size_code.is_empty() {
            return Err(SkipReason::EmptySize);
        }
        let size = SizeCategory::from_code(size_code);
        if let SizeCategory::Other(code) = &size {
            warnings.push(RowWarning::UnrecognizedSize(code.clone()));
        }

        let damage_dice = first_damage_alternative(row.cell(DAMAGE_CELL));
        let (threat_range, crit_multiplier) = parse_critical(row.cell(CRITICAL_CELL))?;

        let (damage_types, unmatched) = parse_damage_types(row.cell(DAMAGE_TYPE_CELL));
        warnings.extend(unmatched.into_iter().map(RowWarning::UnmatchedDamageType));
        if damage_types.is_empty() {
            warnings.push(RowWarning::NoDamageTypes);
        }

        for warning in &warnings {
            warn!(row = row.index, weapon = %name, "{}", warning);
        }

        Ok(NormalizedRow {
            record: WeaponRecord {
                name,
                size,
                damage_dice,
                threat_range,
                crit_multiplier,
                damage_types,
            },
            warnings,
        })
    }

    /// Drop parentheses and apply the alias table, e.g. "Mace (Light Mace)" -> "Light Mace"
    pub fn normalize_name(&self, raw: &str) -> String {
        let name = raw.trim().replace(['(', ')'], "");
        let name = name.trim();
        self.aliases
            .iter()
            .find(|(from, _)| from == name)
            .map(|(_, to)| to.clone())
            .unwrap_or_else(|| name.to_string())
    }
}

/// "1d8/1d10" -> "1d8"
pub fn first_damage_alternative(cell: &str) -> String {
    cell.split('/').next().unwrap_or("").trim().to_string()
}

/// Parse a critical cell into `(threat_range, multiplier)`.
///
/// "x2" -> (20, 2), "19-20/x2" -> (19, 2), "18-20/x3" -> (18, 3)
pub fn parse_critical(cell: &str) -> Result<(u8, u8), SkipReason> {
    let segments: Vec<&str> = cell
        .trim()
        .split('x')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    match segments.as_slice() {
        [] => Err(SkipReason::MissingCritical),
        [multiplier] => Ok((DEFAULT_THREAT_RANGE, parse_multiplier(multiplier)?)),
        [threat, multiplier, ..] => {
            let threat = threat.replace('/', "");
            let lower = threat.split('-').next().unwrap_or("").trim();
            let threat_range = lower
                .parse::<u8>()
                .map_err(|_| SkipReason::InvalidThreatRange(threat.clone()))?;
            Ok((threat_range, parse_multiplier(multiplier)?))
        }
    }
}

fn parse_multiplier(token: &str) -> Result<u8, SkipReason> {
    token
        .parse::<u8>()
        .map_err(|_| SkipReason::InvalidMultiplier(token.to_string()))
}

/// Damage type a single hyphen-separated token names, if any. A token matches
/// when it is a case-insensitive prefix of one of the type's spellings, so
/// "Pierce", "Pierc" and "piercing" all map to piercing.
pub fn match_damage_type(token: &str) -> Option<DamageType> {
    let token = token.trim().to_lowercase();
    if token.is_empty() {
        return None;
    }
    DamageType::ALL.into_iter().find(|damage_type| {
        damage_type
            .spellings()
            .iter()
            .any(|spelling| spelling.to_lowercase().starts_with(&token))
    })
}

/// "Bludgeoning-Piercing" -> ([Bludgeoning, Piercing], []). Unmatched tokens are
/// returned alongside, in encounter order.
pub fn parse_damage_types(cell: &str) -> (Vec<DamageType>, Vec<String>) {
    let mut matched = Vec::new();
    let mut unmatched = Vec::new();

    for token in cell.split('-').map(str::trim).filter(|t| !t.is_empty()) {
        match match_damage_type(token) {
            Some(damage_type) => matched.push(damage_type),
            None => unmatched.push(token.to_string()),
        }
    }

    (matched, unmatched)
}
