//! Snapshot source reader
//!
//! Walks zip archives and directory trees for RF2 snapshot tables and pushes
//! every row into a [`ComponentFactory`]. Concept tables of every source are
//! read before any relationship table so listeners see concept state first.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};
use zip::ZipArchive;

use crate::error::{Error, Result};
use crate::rf2::parse::{parse_concept, parse_relationship};
use crate::rf2::ComponentFactory;

/// The RF2 tables the reader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Concept,
    StatedRelationship,
    InferredRelationship,
}

impl TableKind {
    /// Classify a file by its base name. Only snapshot tables are recognised.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
        if !base.contains("Snapshot") || !base.ends_with(".txt") {
            return None;
        }
        if base.starts_with("sct2_Concept_") {
            Some(Self::Concept)
        } else if base.starts_with("sct2_StatedRelationship_") {
            Some(Self::StatedRelationship)
        } else if base.starts_with("sct2_Relationship_") {
            Some(Self::InferredRelationship)
        } else {
            None
        }
    }

    fn is_relationship(&self) -> bool {
        !matches!(self, Self::Concept)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Concepts,
    Relationships,
}

impl Pass {
    fn accepts(&self, kind: TableKind) -> bool {
        match self {
            Self::Concepts => kind == TableKind::Concept,
            Self::Relationships => kind.is_relationship(),
        }
    }
}

/// Row counts from one load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    pub files: usize,
    pub concepts: usize,
    pub relationships: usize,
    /// Rows dropped because they could not be parsed
    pub skipped_rows: usize,
}

/// Reads RF2 snapshot sources in order.
#[derive(Debug, Clone)]
pub struct Rf2Reader {
    sources: Vec<PathBuf>,
}

impl Rf2Reader {
    /// Each source is a `.zip` archive, a directory, or a single snapshot file.
    pub fn new(sources: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            sources: sources.into_iter().map(Into::into).collect(),
        }
    }

    /// Push every row of every source into `factory`.
    pub fn load<F: ComponentFactory>(&self, factory: &mut F) -> Result<LoadStats> {
        let mut stats = LoadStats::default();
        for pass in [Pass::Concepts, Pass::Relationships] {
            for source in &self.sources {
                self.load_source(source, pass, factory, &mut stats)?;
            }
        }
        info!(
            files = stats.files,
            concepts = stats.concepts,
            relationships = stats.relationships,
            skipped = stats.skipped_rows,
            "snapshot loaded"
        );
        Ok(stats)
    }

    fn load_source<F: ComponentFactory>(
        &self,
        source: &Path,
        pass: Pass,
        factory: &mut F,
        stats: &mut LoadStats,
    ) -> Result<()> {
        if source.is_dir() {
            let mut files = Vec::new();
            collect_files(source, &mut files)?;
            files.sort();
            for path in files {
                let name = path.to_string_lossy().into_owned();
                if let Some(kind) = TableKind::from_file_name(&name).filter(|k| pass.accepts(*k)) {
                    let reader = BufReader::new(File::open(&path)?);
                    read_table(reader, kind, &path, factory, stats)?;
                }
            }
            Ok(())
        } else if is_zip(source) {
            let mut archive = ZipArchive::new(BufReader::new(File::open(source)?))?;
            for index in 0..archive.len() {
                let entry = archive.by_index(index)?;
                if entry.is_dir() {
                    continue;
                }
                let name = entry.name().to_string();
                if let Some(kind) = TableKind::from_file_name(&name).filter(|k| pass.accepts(*k)) {
                    let path = source.join(&name);
                    read_table(BufReader::new(entry), kind, &path, factory, stats)?;
                }
            }
            Ok(())
        } else if source.is_file() {
            let name = source.to_string_lossy().into_owned();
            match TableKind::from_file_name(&name) {
                Some(kind) if pass.accepts(kind) => {
                    let reader = BufReader::new(File::open(source)?);
                    read_table(reader, kind, source, factory, stats)
                }
                Some(_) => Ok(()),
                None => Err(Error::Config(format!(
                    "unsupported snapshot source `{}`",
                    source.display()
                ))),
            }
        } else {
            Err(Error::Config(format!(
                "snapshot source `{}` does not exist",
                source.display()
            )))
        }
    }
}

fn is_zip(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("zip"))
            .unwrap_or(false)
}

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(&path, out)?;
        } else {
            out.push(path);
        }
    }
    Ok(())
}

/// Read one snapshot table and push its rows.
///
/// The first line must be the RF2 header (starting with `id`). Malformed rows
/// are skipped and counted rather than failing the whole load.
pub fn read_table<R: BufRead, F: ComponentFactory>(
    reader: R,
    kind: TableKind,
    path: &Path,
    factory: &mut F,
    stats: &mut LoadStats,
) -> Result<()> {
    let mut lines = reader.lines();
    match lines.next() {
        Some(header) => {
            let header = header?;
            if !header.starts_with("id\t") {
                return Err(Error::MalformedFile {
                    path: path.to_path_buf(),
                    reason: "missing RF2 header".to_string(),
                });
            }
        }
        None => {
            warn!(path = %path.display(), "empty snapshot table");
            return Ok(());
        }
    }

    stats.files += 1;
    debug!(path = %path.display(), ?kind, "reading table");

    for (index, line) in lines.enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let pushed = match kind {
            TableKind::Concept => parse_concept(line).map(|c| {
                factory.new_concept_state(&c);
                stats.concepts += 1;
            }),
            TableKind::StatedRelationship | TableKind::InferredRelationship => {
                parse_relationship(line).map(|r| {
                    factory.new_relationship_state(&r);
                    stats.relationships += 1;
                })
            }
        };

        if pushed.is_none() {
            stats.skipped_rows += 1;
            warn!(path = %path.display(), line = index + 2, "skipping malformed row");
        }
    }

    Ok(())
}
