/// Default shallowest heading depth to render (h2 on a typical page)
pub fn default_start_level() -> usize {
    2
}

/// Default deepest heading depth to render, `-1` means no limit
pub fn default_end_level() -> i64 {
    3
}

/// Default list type
pub fn default_ordered() -> bool {
    false
}
