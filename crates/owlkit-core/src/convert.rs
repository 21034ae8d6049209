//! Conversion mode
//!
//! One snapshot pass fills the taxonomy and drives the classifier, whose row
//! emitter writes inactivation rows straight into the relationship delta
//! entry of the output archive. Once the buckets are frozen the configured
//! bucket goes to the axiom generator and its rows fill the OWL axiom delta
//! entry.

use std::io::{BufWriter, Seek, Write};

use serde::Serialize;
use tracing::info;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::axiom::{AxiomGenerator, AxiomRow};
use crate::classify::{Bucket, ExtensionClassifier};
use crate::config::RunConfig;
use crate::constants::{
    LINE_ENDING, OWL_AXIOM_REFSET_DELTA, OWL_AXIOM_REFSET_HEADER, SCT2_STATED_RELATIONSHIP_DELTA,
    TXT,
};
use crate::emit::RowEmitter;
use crate::error::{Error, Result};
use crate::rf2::{LoadStats, Rf2Reader};
use crate::taxonomy::Taxonomy;

/// Outcome of one conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    pub bucket: Bucket,
    pub extension_module_id: u64,
    pub load: LoadStats,
    pub inactivated_relationships: usize,
    pub concepts: usize,
    pub axioms: usize,
    pub relationship_entry: String,
    pub axiom_entry: String,
}

pub fn relationship_delta_entry(effective_date: &str) -> String {
    format!("{SCT2_STATED_RELATIONSHIP_DELTA}{effective_date}{TXT}")
}

pub fn axiom_delta_entry(effective_date: &str) -> String {
    format!("{OWL_AXIOM_REFSET_DELTA}{effective_date}{TXT}")
}

/// Write the axiom header and rows.
pub fn write_axiom_rows<W: Write>(sink: W, rows: &[AxiomRow]) -> Result<W> {
    let mut out = BufWriter::new(sink);
    write!(out, "{OWL_AXIOM_REFSET_HEADER}{LINE_ENDING}")?;
    for row in rows {
        write!(out, "{row}{LINE_ENDING}")?;
    }
    out.into_inner().map_err(|e| Error::Io(e.into_error()))
}

/// Convert the configured bucket of extension edits into additional axioms.
///
/// Returns the finished archive sink and a summary.
pub fn convert<W, G>(
    reader: &Rf2Reader,
    config: &RunConfig,
    generator: &G,
    output: W,
) -> Result<(W, ConversionSummary)>
where
    W: Write + Seek,
    G: AxiomGenerator + ?Sized,
{
    config.validate()?;
    let bucket = config.target_bucket;
    if !generator.supports(bucket) {
        return Err(Error::UnsupportedStrategy(bucket));
    }

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let relationship_entry = relationship_delta_entry(&config.effective_date);
    let axiom_entry = axiom_delta_entry(&config.effective_date);

    let mut zip = ZipWriter::new(output);
    zip.start_file(relationship_entry.as_str(), options)?;

    let mut taxonomy = Taxonomy::new();
    let mut classifier = ExtensionClassifier::with_emitter(RowEmitter::new(&mut zip)?);
    let load = reader.load(&mut (&mut taxonomy, &mut classifier))?;
    let (classification, _) = classifier.complete()?;

    let module_id = classification
        .extension_module_id()
        .ok_or(Error::MissingExtensionModule)?;
    let concepts = classification.concepts(bucket);

    zip.start_file(axiom_entry.as_str(), options)?;
    let rows = generator.generate(&taxonomy, concepts, module_id)?;
    write_axiom_rows(&mut zip, &rows)?;
    let output = zip.finish()?;

    let summary = ConversionSummary {
        bucket,
        extension_module_id: module_id,
        load,
        inactivated_relationships: classification.both_international_relationships(),
        concepts: concepts.len(),
        axioms: rows.len(),
        relationship_entry,
        axiom_entry,
    };
    info!(
        bucket = %bucket,
        inactivated = summary.inactivated_relationships,
        concepts = summary.concepts,
        axioms = summary.axioms,
        "conversion complete"
    );
    Ok((output, summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_names_embed_effective_date() {
        assert_eq!(
            relationship_delta_entry("20240301"),
            "sct2_StatedRelationship_Delta_INT_20240301.txt"
        );
        assert_eq!(
            axiom_delta_entry("20240301"),
            "sct2_sRefset_OWLAxiomDelta_INT_20240301.txt"
        );
    }

    #[test]
    fn test_axiom_rows_follow_header() {
        let rows = vec![AxiomRow::new(9999, 733073007, 10, "SubClassOf(:10 :20)".into())];
        let out = String::from_utf8(write_axiom_rows(Vec::new(), &rows).unwrap()).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], OWL_AXIOM_REFSET_HEADER);
        assert!(lines[1].ends_with("\t\t1\t9999\t733073007\t10\tSubClassOf(:10 :20)"));
        assert_eq!(lines.len(), 2);
    }
}
