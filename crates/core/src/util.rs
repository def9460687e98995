use lsp_types::Uri;
use std::path::{Path, PathBuf};

/// Local path of a `file://` URI. Other schemes are kept verbatim so the
/// host can still open them through its own handlers.
pub fn uri_to_path(uri: &Uri) -> PathBuf {
    let raw = uri.as_str();
    url::Url::parse(raw)
        .ok()
        .filter(|url| url.scheme() == "file")
        .and_then(|url| url.to_file_path().ok())
        .unwrap_or_else(|| PathBuf::from(raw))
}

/// `path` relative to `cwd` when it lives below it.
pub fn display_path(path: &Path, cwd: &Path) -> String {
    path.strip_prefix(cwd)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
