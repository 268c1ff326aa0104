/// Format a byte count the way the result list displays it.
///
/// Sizes of a mebibyte or more render as `x.yMB`, everything below as whole `KB`.
pub fn format_size(bytes: u64) -> String {
    const MIB: u64 = 1024 * 1024;
    if bytes >= MIB {
        format!("{:.1}MB", bytes as f64 / MIB as f64)
    } else {
        format!("{:.0}KB", bytes as f64 / 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn megabyte_sizes_keep_one_decimal() {
        assert_eq!(format_size(1024 * 1024), "1.0MB");
        assert_eq!(format_size(2 * 1024 * 1024), "2.0MB");
        assert_eq!(format_size(1024 * 1024 + 512 * 1024), "1.5MB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0MB");
    }

    #[test]
    fn sub_megabyte_sizes_render_as_whole_kilobytes() {
        assert_eq!(format_size(0), "0KB");
        assert_eq!(format_size(1024), "1KB");
        assert_eq!(format_size(400 * 1024), "400KB");
        assert_eq!(format_size(1024 * 1024 - 1), "1024KB");
    }
}
