//! Shared snapshot fixture for integration tests

#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use owlkit_core::constants::{CORE_MODULE, IS_A};
use owlkit_core::{CharacteristicType, ConceptState, RelationshipState};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const EXT: u64 = 731000124108;
pub const FINDING_SITE: u64 = 363698007;
pub const PARENT: u64 = 20;
pub const SITE: u64 = 21;
pub const EXT_CONCEPT: u64 = 30;

/// Is-a only
pub const C1: u64 = 10;
/// Is-a and ungrouped attribute
pub const C2: u64 = 11;
/// Is-a and grouped attribute
pub const C3: u64 = 12;
/// Ungrouped attribute only
pub const C4: u64 = 13;
/// Grouped attribute only
pub const C5: u64 = 14;
/// Attribute pointing at an extension concept
pub const C6: u64 = 15;
/// Only inactive or inferred extension edits
pub const C7: u64 = 16;

const CONCEPT_HEADER: &str = "id\teffectiveTime\tactive\tmoduleId\tdefinitionStatusId";
const RELATIONSHIP_HEADER: &str = "id\teffectiveTime\tactive\tmoduleId\tsourceId\tdestinationId\trelationshipGroup\ttypeId\tcharacteristicTypeId\tmodifierId";

pub fn international_concepts() -> Vec<ConceptState> {
    [C1, C2, C3, C4, C5, C6, C7, PARENT, SITE]
        .into_iter()
        .map(|id| ConceptState::new(id, CORE_MODULE))
        .collect()
}

pub fn extension_concepts() -> Vec<ConceptState> {
    vec![ConceptState::new(EXT_CONCEPT, EXT)]
}

pub fn international_relationships() -> Vec<RelationshipState> {
    vec![RelationshipState::stated(2001, C1, IS_A, PARENT)]
}

/// Stated extension relationships, in file order.
pub fn extension_relationships() -> Vec<RelationshipState> {
    vec![
        RelationshipState::stated(1001, C1, IS_A, PARENT).module(EXT),
        RelationshipState::stated(1002, C2, IS_A, PARENT).module(EXT),
        RelationshipState::stated(1003, C2, FINDING_SITE, SITE).module(EXT),
        RelationshipState::stated(1004, C3, IS_A, PARENT).module(EXT),
        RelationshipState::stated(1005, C3, FINDING_SITE, SITE).module(EXT).group(1),
        RelationshipState::stated(1006, C4, FINDING_SITE, SITE).module(EXT),
        RelationshipState::stated(1007, C5, FINDING_SITE, SITE).module(EXT).group(1),
        RelationshipState::stated(1008, C6, FINDING_SITE, EXT_CONCEPT).module(EXT),
        RelationshipState::stated(1009, C7, IS_A, PARENT).module(EXT).inactive(),
        RelationshipState::stated(1011, EXT_CONCEPT, IS_A, PARENT).module(EXT),
    ]
}

/// Inferred extension relationships, which never count.
pub fn extension_inferred_relationships() -> Vec<RelationshipState> {
    vec![RelationshipState::stated(1010, C7, IS_A, PARENT)
        .module(EXT)
        .characteristic(CharacteristicType::Inferred)]
}

pub fn concept_table(rows: &[ConceptState]) -> String {
    let mut out = format!("{CONCEPT_HEADER}\r\n");
    for c in rows {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\r\n",
            c.id,
            c.effective_time.map(|t| t.to_string()).unwrap_or_default(),
            if c.active { 1 } else { 0 },
            c.module_id,
            c.definition_status_id
        ));
    }
    out
}

pub fn relationship_table(rows: &[RelationshipState]) -> String {
    let mut out = format!("{RELATIONSHIP_HEADER}\r\n");
    for r in rows {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\r\n",
            r.id,
            r.effective_time.map(|t| t.to_string()).unwrap_or_default(),
            if r.active { 1 } else { 0 },
            r.module_id,
            r.source_id,
            r.destination_id,
            r.group,
            r.type_id,
            r.characteristic_type_id,
            r.modifier_id
        ));
    }
    out
}

/// International release as a zip archive.
pub fn write_international_zip(dir: &Path) -> PathBuf {
    let path = dir.join("SnomedCT_InternationalRF2_PRODUCTION_20200131.zip");
    let mut zip = ZipWriter::new(File::create(&path).unwrap());
    let options = SimpleFileOptions::default();

    zip.start_file(
        "SnomedCT_InternationalRF2/Snapshot/Terminology/sct2_Concept_Snapshot_INT_20200131.txt",
        options,
    )
    .unwrap();
    zip.write_all(concept_table(&international_concepts()).as_bytes())
        .unwrap();

    zip.start_file(
        "SnomedCT_InternationalRF2/Snapshot/Terminology/sct2_StatedRelationship_Snapshot_INT_20200131.txt",
        options,
    )
    .unwrap();
    zip.write_all(relationship_table(&international_relationships()).as_bytes())
        .unwrap();

    zip.finish().unwrap();
    path
}

/// Extension snapshot export as a directory tree.
pub fn write_extension_dir(dir: &Path) -> PathBuf {
    let root = dir.join("extension").join("Snapshot").join("Terminology");
    fs::create_dir_all(&root).unwrap();

    fs::write(
        root.join("sct2_Concept_Snapshot_US1000124_20200301.txt"),
        concept_table(&extension_concepts()),
    )
    .unwrap();
    fs::write(
        root.join("sct2_StatedRelationship_Snapshot_US1000124_20200301.txt"),
        relationship_table(&extension_relationships()),
    )
    .unwrap();
    fs::write(
        root.join("sct2_Relationship_Snapshot_US1000124_20200301.txt"),
        relationship_table(&extension_inferred_relationships()),
    )
    .unwrap();
    fs::write(root.join("readme.txt"), "not a table").unwrap();

    dir.join("extension")
}
