//! Stages of a weapon table sync: extract rows from the page, normalize each
//! row into a record, render records as entries, patch them into the target.

pub mod extract;
pub mod normalize;
pub mod patch;
pub mod render;

pub use extract::TableExtractor;
pub use normalize::WeaponNormalizer;
pub use patch::patch_region;
pub use render::render_entry;
