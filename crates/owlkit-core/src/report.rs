//! Report mode
//!
//! Writes one audit file per bucket: the relationship header followed by every
//! active stated relationship of every concept in the bucket, concepts in
//! ascending id order. A `report_summary.json` records the counts. Reports
//! only read the frozen classification, so rerunning them gives identical
//! files.

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::classify::{Bucket, Classification, ExtensionClassifier};
use crate::config::RunConfig;
use crate::emit::{RelationshipRow, RowWriter};
use crate::error::Result;
use crate::rf2::Rf2Reader;
use crate::taxonomy::{StatedView, Taxonomy};

pub const SUMMARY_FILE: &str = "report_summary.json";

/// Counts for one bucket file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketReport {
    pub bucket: Bucket,
    pub file_name: String,
    pub concepts: usize,
    pub rows: usize,
}

/// Counts for a whole report run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub extension_module_id: Option<u64>,
    pub both_international_relationships: usize,
    pub buckets: Vec<BucketReport>,
}

/// Write the rows for one concept set. Returns the sink and the row count.
pub fn write_bucket_report<W: Write>(
    sink: W,
    view: &dyn StatedView,
    concepts: &BTreeSet<u64>,
) -> Result<(W, usize)> {
    let mut writer = RowWriter::new(sink)?;
    for &concept_id in concepts {
        for rel in view.active_stated_relationships(concept_id) {
            writer.write_row(&RelationshipRow::from(rel))?;
        }
    }
    let rows = writer.rows();
    Ok((writer.finish()?, rows))
}

/// Write every bucket file and the summary into `dir`.
pub fn write_reports(
    dir: &Path,
    view: &dyn StatedView,
    classification: &Classification,
) -> Result<ReportSummary> {
    fs::create_dir_all(dir)?;

    info!(
        total = classification.both_international_relationships(),
        "active extension stated relationships with international source and destination"
    );

    let mut buckets = Vec::with_capacity(Bucket::ALL.len());
    for bucket in Bucket::ALL {
        let concepts = classification.concepts(bucket);
        let path = dir.join(bucket.report_file_name());
        let (_, rows) = write_bucket_report(File::create(&path)?, view, concepts)?;

        info!(total = concepts.len(), rows, "{}", bucket.description());
        info!("See full list in {}", path.display());

        buckets.push(BucketReport {
            bucket,
            file_name: bucket.report_file_name().to_string(),
            concepts: concepts.len(),
            rows,
        });
    }

    let summary = ReportSummary {
        extension_module_id: classification.extension_module_id(),
        both_international_relationships: classification.both_international_relationships(),
        buckets,
    };
    let json = serde_json::to_string_pretty(&summary)?;
    fs::write(dir.join(SUMMARY_FILE), json)?;

    Ok(summary)
}

/// Read the snapshot sources, classify, and write the reports.
pub fn analyze(reader: &Rf2Reader, config: &RunConfig) -> Result<ReportSummary> {
    let mut taxonomy = Taxonomy::new();
    let mut classifier = ExtensionClassifier::new();
    reader.load(&mut (&mut taxonomy, &mut classifier))?;

    let stats = taxonomy.stats();
    info!(
        concepts = stats.concepts,
        stated = stats.stated_relationships,
        active = stats.active_stated_relationships,
        dropped = stats.dropped_relationships,
        "taxonomy ready"
    );

    let (classification, _) = classifier.complete()?;
    if classification.extension_module_id().is_none() {
        warn!("no active extension concept found; every bucket will be empty");
    }

    write_reports(&config.report_dir, &taxonomy, &classification)
}
