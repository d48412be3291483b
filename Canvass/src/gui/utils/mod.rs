//! GUI utilities

pub mod clipboard;

use floem_reactive::Scope;

/// Global scope for ext_action callbacks - reused to prevent scope accumulation
static EXT_ACTION_SCOPE: std::sync::OnceLock<Scope> = std::sync::OnceLock::new();

/// Get or create the global scope for ext_action calls
pub(crate) fn ext_action_scope() -> Scope {
    *EXT_ACTION_SCOPE.get_or_init(Scope::new)
}

/// Render a byte count the way file managers do.
pub fn human_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let bytes_f = bytes as f64;
    if bytes_f >= MB {
        format!("{:.1} MB", bytes_f / MB)
    } else if bytes_f >= KB {
        format!("{:.0} KB", bytes_f / KB)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::human_size;

    #[test]
    fn sizes_scale_through_units() {
        assert_eq!(human_size(512), "512 B");
        assert_eq!(human_size(2048), "2 KB");
        assert_eq!(human_size(3 * 1024 * 1024), "3.0 MB");
    }
}
