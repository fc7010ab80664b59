const KIB: f64 = 1024.0;
const MIB: f64 = 1024.0 * 1024.0;

/// Human-readable size with one decimal: KB below 1 MiB, MB otherwise.
pub fn format_size(bytes: u64) -> String {
    let bytes = bytes as f64;
    if bytes < MIB {
        format!("{:.1} KB", bytes / KIB)
    } else {
        format!("{:.1} MB", bytes / MIB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0.0 KB");
        assert_eq!(format_size(512), "0.5 KB");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1024 * 1024 - 1), "1024.0 KB");
        assert_eq!(format_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_size(15_728_640), "15.0 MB");
        assert_eq!(format_size(5 * 1024 * 1024 * 1024), "5120.0 MB");
    }
}
