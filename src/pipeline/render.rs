use crate::constants::TAB_SPACE;
use crate::types::WeaponRecord;

/// Escape a value for use inside a Rust string literal
fn string_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render one `(name, WeaponBase)` tuple entry for the simulator's weapon table.
///
/// Entries sit two levels deep inside the table literal and always end with a
/// newline, so a block of them can be spliced in line by line.
pub fn render_entry(record: &WeaponRecord) -> String {
    let tab_1 = TAB_SPACE.repeat(2);
    let tab_2 = TAB_SPACE.repeat(3);
    let tab_3 = TAB_SPACE.repeat(4);
    let name = string_literal(&record.name);
    let damage_types = record
        .damage_types
        .iter()
        .map(|damage_type| format!("DamageType::{}", damage_type))
        .collect::<Vec<_>>()
        .join(", ");

    let mut code = String::new();
    code.push_str(&format!("{tab_1}(\n"));
    code.push_str(&format!("{tab_2}\"{name}\".into(),\n"));
    code.push_str(&format!("{tab_2}WeaponBase::new(\n"));
    code.push_str(&format!("{tab_3}\"{name}\".into(),\n"));
    code.push_str(&format!("{tab_3}SizeCategory::{},\n", record.size));
    code.push_str(&format!(
        "{tab_3}Dice::from(\"{}\"),\n",
        string_literal(&record.damage_dice)
    ));
    code.push_str(&format!("{tab_3}{},\n", record.threat_range));
    code.push_str(&format!("{tab_3}{},\n", record.crit_multiplier));
    code.push_str(&format!("{tab_3}vec![{damage_types}],\n"));
    code.push_str(&format!("{tab_2}),\n"));
    code.push_str(&format!("{tab_1}),\n"));
    code
}
