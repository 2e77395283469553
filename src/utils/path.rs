use std::path::Path;

/// Get the file extension, lowercased
pub fn get_extension<P: AsRef<Path>>(path: P) -> Option<String> {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_extension() {
        assert_eq!(get_extension("notes/Page.MD"), Some("md".to_string()));
        assert_eq!(get_extension("events.json"), Some("json".to_string()));
        assert_eq!(get_extension("README"), None);
    }
}
