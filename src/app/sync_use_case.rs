use tracing::{debug, info, instrument, warn};

use crate::app::ports::{DocumentSourcePort, TargetFilePort};
use crate::config::SyncConfig;
use crate::error::Result;
use crate::pipeline::{patch_region, render_entry, TableExtractor, WeaponNormalizer};
use crate::types::{FlaggedRow, SkippedRow, SyncReport};

/// Use case for regenerating the weapon table region of the target file
pub struct SyncUseCase {
    config: SyncConfig,
    source: Box<dyn DocumentSourcePort>,
    target: Box<dyn TargetFilePort>,
    normalizer: WeaponNormalizer,
}

impl SyncUseCase {
    pub fn new(
        config: SyncConfig,
        source: Box<dyn DocumentSourcePort>,
        target: Box<dyn TargetFilePort>,
    ) -> Self {
        Self {
            config,
            source,
            target,
            normalizer: WeaponNormalizer::new(),
        }
    }

    pub fn with_normalizer(mut self, normalizer: WeaponNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Fetch the page, rebuild every entry and rewrite the generated region.
    ///
    /// The target is only written once the sentinels have been found.
    #[instrument(skip(self), fields(url = %self.config.source_url))]
    pub async fn run(&self) -> Result<SyncReport> {
        info!("Fetching weapon table");
        let html = self.source.fetch(&self.config.source_url).await?;
        debug!("Fetched {} bytes", html.len());

        let mut report = SyncReport {
            source_url: self.config.source_url.clone(),
            output: self.target.describe(),
            dry_run: self.target.is_dry_run(),
            ..SyncReport::default()
        };
        let entries = self.build_entries(&html, &mut report)?;

        let content = self.target.read()?;
        let patched = patch_region(
            &content,
            &entries,
            &self.config.start_marker,
            &self.config.end_marker,
        )?;
        if patched == content {
            info!("Generated region already up to date");
        }
        self.target.write(&patched)?;
        report.entries_written = entries.len();

        info!(
            rows = report.rows_seen,
            entries = report.entries_written,
            skipped = report.skipped.len(),
            warnings = report.warnings.len(),
            "Weapon table synced to {}",
            report.output
        );
        Ok(report)
    }

    /// Extract, normalize and render rows in table order. Bad rows end up in
    /// the report instead of failing the run.
    fn build_entries(&self, html: &str, report: &mut SyncReport) -> Result<Vec<String>> {
        let extractor = TableExtractor::parse(html)?;
        let mut entries = Vec::new();

        for row in extractor.rows()? {
            report.rows_seen += 1;
            match self.normalizer.normalize(&row) {
                Ok(normalized) => {
                    debug!(row = row.index, weapon = %normalized.record.name, "Normalized row");
                    report.warnings.extend(normalized.warnings.into_iter().map(|warning| FlaggedRow {
                        row: row.index,
                        name: normalized.record.name.clone(),
                        warning,
                    }));
                    entries.push(render_entry(&normalized.record));
                }
                Err(reason) => {
                    warn!(row = row.index, cells = ?row.cells, "Skipping row: {}", reason);
                    report.skipped.push(SkippedRow {
                        row: row.index,
                        reason,
                    });
                }
            }
        }

        if report.rows_seen == 0 {
            warn!("Weapon table has no data rows - the page structure may have changed");
        }
        Ok(entries)
    }
}
