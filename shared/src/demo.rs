use crate::upload::ImageKind;

/// File name a fetched sample is uploaded under: the last path segment,
/// ignoring any query string or fragment.
pub fn file_name_from_path(path: &str) -> String {
    let without_query = path.split(['?', '#']).next().unwrap_or(path);
    without_query
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or("sample")
        .to_string()
}

/// MIME type for a fetched sample. The server's content type wins; the file
/// extension is only consulted when the server sent none.
pub fn sample_mime_type(path: &str, served_type: Option<&str>) -> String {
    let served = served_type
        .map(|t| t.split(';').next().unwrap_or(t).trim())
        .filter(|t| !t.is_empty());

    if let Some(served) = served {
        return served.to_ascii_lowercase();
    }

    file_name_from_path(path)
        .rsplit_once('.')
        .and_then(|(_, ext)| ImageKind::from_extension(ext))
        .map(|kind| kind.mime_type().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "demo_test.rs"]
mod tests;
