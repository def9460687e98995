//! Turns reference locations into records, optionally with source lines.

use crate::error::Result;
use crate::util::{display_path, uri_to_path};
use futures::future::try_join_all;
use indexmap::IndexMap;
use lsp_types::{Location, Range};
use std::path::{Path, PathBuf};
use symgather_api::{ActionData, ApiResult, FileAccess, ItemContext, Record, RecordData, Target};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichOptions {
    pub show_line: bool,
    pub padding_width: usize,
    /// Directory displayed paths are made relative to.
    pub cwd: PathBuf,
}

/// Lines of each distinct target file, keyed in order of first mention.
pub type FileLines = IndexMap<PathBuf, Vec<String>>;

pub async fn enrich_locations(
    locations: Vec<Location>,
    context: &ItemContext,
    options: &EnrichOptions,
    files: &dyn FileAccess,
) -> Result<Vec<Record>> {
    let lines = if options.show_line {
        load_lines(&locations, files).await?
    } else {
        FileLines::new()
    };

    let records = locations
        .into_iter()
        .map(|location| {
            let path = uri_to_path(&location.uri);
            let text = lines
                .get(&path)
                .and_then(|content| line_text(content, location.range.start.line));
            location_to_record(location, path, text, context, options)
        })
        .collect();
    Ok(records)
}

/// Reads every distinct target once. Buffer errors abort; a file that
/// cannot be read from disk just contributes no lines.
pub async fn load_lines(locations: &[Location], files: &dyn FileAccess) -> Result<FileLines> {
    let mut lines = FileLines::new();
    for location in locations {
        lines.entry(uri_to_path(&location.uri)).or_default();
    }

    let contents = try_join_all(lines.keys().map(|path| read_lines(path, files))).await?;
    for (slot, content) in lines.values_mut().zip(contents) {
        *slot = content;
    }
    Ok(lines)
}

async fn read_lines(path: &Path, files: &dyn FileAccess) -> ApiResult<Vec<String>> {
    if files.is_buffer_loaded(path).await? {
        return files.read_buffer_lines(path).await;
    }
    match files.read_file(path).await {
        Ok(content) => Ok(content),
        Err(e) => {
            debug!("no line text for {}: {}", path.display(), e);
            Ok(Vec::new())
        }
    }
}

fn line_text(content: &[String], line: u32) -> Option<String> {
    let text = content.get(line as usize)?.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn location_to_record(
    location: Location,
    path: PathBuf,
    text: Option<String>,
    context: &ItemContext,
    options: &EnrichOptions,
) -> Record {
    let word = location_label(
        &path,
        &options.cwd,
        &location.range,
        text.as_deref(),
        options.padding_width,
    );
    Record {
        word,
        level: 0,
        tree_path: Vec::new(),
        is_tree: false,
        is_expanded: false,
        action: ActionData {
            target: Target::File {
                path,
                range: location.range,
            },
            context: context.clone(),
        },
        line_text: text,
        data: RecordData::Location(location),
    }
}

/// `path:line:col` with one based numbers, followed by the line text
/// when there is any.
pub fn location_label(
    path: &Path,
    cwd: &Path,
    range: &Range,
    text: Option<&str>,
    padding_width: usize,
) -> String {
    let location = format!(
        "{}:{}:{}",
        display_path(path, cwd),
        range.start.line + 1,
        range.start.character + 1
    );
    match text {
        Some(text) => format!("{location:<padding_width$} {text}"),
        None => location,
    }
}
