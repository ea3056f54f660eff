// Defaults for the weapon table sync; the config file and CLI flags override them.

pub const DEFAULT_SOURCE_URL: &str = "https://wiki.nwnarelith.com/Weapons";
pub const DEFAULT_OUTPUT_PATH: &str = "./src/simulator/item/weapon_db.rs";
pub const DEFAULT_START_MARKER: &str = "//--AUTO-GENERATION-START";
pub const DEFAULT_END_MARKER: &str = "//--AUTO-GENERATION-END";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Threat range used when the critical cell only lists a multiplier.
pub const DEFAULT_THREAT_RANGE: u8 = 20;

/// Number of `<td>` cells a weapon row must have (name, unused, size, damage, critical, type).
pub const WEAPON_ROW_CELLS: usize = 6;

/// Weapon names as they appear on the wiki, paired with the name the simulator uses.
/// New inconsistencies in the source table get added here.
pub const NAME_ALIASES: &[(&str, &str)] = &[
    ("Mace Light Mace", "Light Mace"),
    ("Lance Small", "Small Lance"),
];

pub const TAB_SPACE: &str = "    ";
