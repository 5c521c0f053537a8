//! Generate the spec test file end to end.
//!
//! A run is one linear pass: preamble, then every allow-listed document in walk order, then a
//! syntax check and format of the whole buffer, then a single replacement of the output file.
//!
//! ## Notes
//!
//! - Nothing is written when any step fails, so a bad corpus never clobbers a previous output.
//! - The DO-NOT-EDIT header is re-attached after formatting because `syn` drops plain comments.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::backend::emit::{emit_case, emit_preamble};
use crate::backend::rust_emitter::RustEmitter;
use crate::config::GeneratorConfig;
use crate::error::GenError;
use crate::spec;

/// Formatted output of a generation run, not yet written.
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    pub source: String,
    pub documents: usize,
    pub cases: usize,
}

/// What a completed run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output: PathBuf,
    pub documents: usize,
    pub cases: usize,
    pub bytes: usize,
}

/// Spec test generator.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Build the formatted test file in memory.
    #[tracing::instrument(skip_all, fields(root = %self.config.spec_root.display()))]
    pub fn generate(&self) -> Result<GeneratedArtifact, GenError> {
        let mut out = RustEmitter::new();
        emit_preamble(&mut out, &self.config.renderer_path).map_err(|source| GenError::Preamble { source })?;

        let files = spec::discover_spec_files(&self.config.spec_root, &self.config.topics, &self.config.extension)?;

        // routine name -> case it came from
        let mut seen: HashMap<String, String> = HashMap::new();
        let mut cases = 0;
        for path in &files {
            let document = spec::load_document(path)?;
            let scope = document.scope();
            tracing::debug!(path = %path.display(), %scope, cases = document.tests.len(), "emitting spec document");

            for case in &document.tests {
                let ident = emit_case(&mut out, &scope, case).map_err(|source| GenError::Emit {
                    path: path.clone(),
                    case: case.name.clone(),
                    source,
                })?;
                let origin = format!("{} ({})", case.name, path.display());
                if let Some(first) = seen.insert(ident.clone(), origin.clone()) {
                    return Err(GenError::DuplicateIdentifier {
                        ident,
                        first,
                        second: origin,
                    });
                }
                cases += 1;
            }
        }

        let source = validate_and_format(&header(&self.config), out.as_str())?;
        Ok(GeneratedArtifact {
            source,
            documents: files.len(),
            cases,
        })
    }

    /// Generate and write the output file.
    pub fn run(&self) -> Result<RunSummary, GenError> {
        let artifact = self.generate()?;
        write_artifact(&self.config.output, artifact.source.as_bytes())?;

        let summary = RunSummary {
            output: self.config.output.clone(),
            documents: artifact.documents,
            cases: artifact.cases,
            bytes: artifact.source.len(),
        };
        tracing::info!(
            output = %summary.output.display(),
            documents = summary.documents,
            cases = summary.cases,
            bytes = summary.bytes,
            "wrote spec tests"
        );
        Ok(summary)
    }
}

/// The DO-NOT-EDIT banner naming the command that produced the file.
pub fn header(config: &GeneratorConfig) -> String {
    format!("// generated by {}; DO NOT EDIT\n\n", config.command_line())
}

/// Parse `body` as a Rust file and pretty-print it under `header`.
///
/// On a parse failure the error carries the complete unformatted text.
pub fn validate_and_format(header: &str, body: &str) -> Result<String, GenError> {
    let syntax_tree = syn::parse_file(body).map_err(|e| GenError::Syntax {
        message: e.to_string(),
        source_text: format!("{}{}", header, body),
    })?;
    let formatted = prettyplease::unparse(&syntax_tree);
    Ok(format!("{}{}", header, formatted))
}

/// Replace `path` with `bytes` in one step.
///
/// The bytes go to a uniquely named temp file in the same directory, which is then persisted over
/// `path`. The temp file is removed on every failure path.
pub fn write_artifact(path: &Path, bytes: &[u8]) -> Result<(), GenError> {
    let write_error = |source: std::io::Error| GenError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staging = NamedTempFile::new_in(parent).map_err(write_error)?;
    staging.write_all(bytes).map_err(write_error)?;
    staging.as_file().sync_all().map_err(write_error)?;
    staging.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}
