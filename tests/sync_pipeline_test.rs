use anyhow::Result;
use async_trait::async_trait;
use std::fs;
use std::path::Path;
use tempfile::tempdir;
use weapon_db_sync::app::ports::DocumentSourcePort;
use weapon_db_sync::infra::FsTargetFile;
use weapon_db_sync::{SyncConfig, SyncError, SyncUseCase};

const WIKI_PAGE: &str = r#"
<html><body>
<table class="infobox"><tr><td>Weapons</td></tr></table>
<table class="wikitable">
  <tr><th>Weapon</th><th>Cost</th><th>Size</th><th>Damage</th><th>Critical</th><th>Type</th></tr>
  <tr><td>Longsword</td><td>15gp</td><td>M</td><td>1d8/1d10</td><td>19-20/x2</td><td>Slashing</td></tr>
  <tr><td>Dagger</td><td>2gp</td><td>T</td><td>1d4</td><td>x2</td><td>Pierce</td></tr>
  <tr><td>Mace (Light Mace)</td><td>5gp</td><td>S</td><td>1d6</td><td>x2</td><td>Bludgeoning</td></tr>
</table>
</body></html>
"#;

const WEAPON_DB: &str = "use std::collections::HashMap;

pub fn weapon_db() -> HashMap<String, WeaponBase> {
    HashMap::from([
        //--AUTO-GENERATION-START
        (\"Stale\".into(), WeaponBase::default()),
        //--AUTO-GENERATION-END
        (\"Unarmed\".into(), unarmed()),
    ])
}
";

struct StaticSource(&'static str);

#[async_trait]
impl DocumentSourcePort for StaticSource {
    async fn fetch(&self, _url: &str) -> weapon_db_sync::Result<String> {
        Ok(self.0.to_string())
    }
}

struct UnreachableSource;

#[async_trait]
impl DocumentSourcePort for UnreachableSource {
    async fn fetch(&self, url: &str) -> weapon_db_sync::Result<String> {
        Err(SyncError::SourceStatus {
            url: url.to_string(),
            status: 503,
        })
    }
}

fn sync_for(path: &Path, page: &'static str) -> SyncUseCase {
    let config = SyncConfig {
        output_path: path.to_path_buf(),
        ..SyncConfig::default()
    };
    SyncUseCase::new(
        config,
        Box::new(StaticSource(page)),
        Box::new(FsTargetFile::new(path)),
    )
}

fn lines_outside_region(content: &str) -> Vec<&str> {
    let start = content.find("//--AUTO-GENERATION-START").unwrap();
    let end = content.find("        //--AUTO-GENERATION-END").unwrap();
    let head_end = content[start..].find('\n').unwrap() + start + 1;
    vec![&content[..head_end], &content[end..]]
}

#[tokio::test]
async fn test_sync_rewrites_generated_region() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("weapon_db.rs");
    fs::write(&path, WEAPON_DB)?;

    let report = sync_for(&path, WIKI_PAGE).run().await?;
    assert_eq!(report.rows_seen, 3);
    assert_eq!(report.entries_written, 3);
    assert!(report.skipped.is_empty());
    assert!(report.warnings.is_empty());

    let written = fs::read_to_string(&path)?;
    assert!(!written.contains("Stale"));
    assert!(written.contains(concat!(
        "        (\n",
        "            \"Longsword\".into(),\n",
        "            WeaponBase::new(\n",
        "                \"Longsword\".into(),\n",
        "                SizeCategory::Medium,\n",
        "                Dice::from(\"1d8\"),\n",
        "                19,\n",
        "                2,\n",
        "                vec![DamageType::Slashing],\n",
        "            ),\n",
        "        ),\n",
    )));
    assert!(written.contains("\"Light Mace\".into(),"));
    assert!(written.contains("                20,\n                2,\n                vec![DamageType::Piercing],"));

    let longsword = written.find("Longsword").unwrap();
    let dagger = written.find("Dagger").unwrap();
    let mace = written.find("Light Mace").unwrap();
    assert!(longsword < dagger && dagger < mace);

    assert_eq!(lines_outside_region(&written), lines_outside_region(WEAPON_DB));
    Ok(())
}

#[tokio::test]
async fn test_second_run_is_byte_identical() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("weapon_db.rs");
    fs::write(&path, WEAPON_DB)?;

    sync_for(&path, WIKI_PAGE).run().await?;
    let first = fs::read(&path)?;
    sync_for(&path, WIKI_PAGE).run().await?;
    let second = fs::read(&path)?;

    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn test_empty_table_clears_region() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("weapon_db.rs");
    fs::write(&path, WEAPON_DB)?;

    let report = sync_for(&path, "<table><tr><th>Weapon</th></tr></table>").run().await?;
    assert_eq!(report.rows_seen, 0);
    assert_eq!(report.entries_written, 0);

    let written = fs::read_to_string(&path)?;
    assert_eq!(written, WEAPON_DB.replace("        (\"Stale\".into(), WeaponBase::default()),\n", ""));
    Ok(())
}

#[tokio::test]
async fn test_missing_sentinel_leaves_file_untouched() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("weapon_db.rs");
    let without_end = WEAPON_DB.replace("        //--AUTO-GENERATION-END\n", "");
    fs::write(&path, &without_end)?;

    let err = sync_for(&path, WIKI_PAGE).run().await.unwrap_err();
    assert!(matches!(err, SyncError::MissingSentinel { .. }));
    assert_eq!(err.exit_code(), 3);
    assert_eq!(fs::read_to_string(&path)?, without_end);
    Ok(())
}

#[tokio::test]
async fn test_unavailable_source_is_reported_separately() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("weapon_db.rs");
    fs::write(&path, WEAPON_DB)?;

    let use_case = SyncUseCase::new(
        SyncConfig::default(),
        Box::new(UnreachableSource),
        Box::new(FsTargetFile::new(&path)),
    );
    let err = use_case.run().await.unwrap_err();
    assert!(err.is_source_unavailable());
    assert_eq!(err.exit_code(), 2);

    let no_table = sync_for(&path, "<html><p>Maintenance</p></html>").run().await.unwrap_err();
    assert!(matches!(no_table, SyncError::NoTable));
    assert_eq!(no_table.exit_code(), 2);

    assert_eq!(fs::read_to_string(&path)?, WEAPON_DB);
    Ok(())
}
