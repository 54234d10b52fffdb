/// Format a byte count in human-readable binary units (B, KB, MB, GB, TB)
pub fn format_size(size: u64) -> String {
    const KB: u64 = 1 << 10;
    const MB: u64 = 1 << 20;
    const GB: u64 = 1 << 30;
    const TB: u64 = 1 << 40;

    if size < KB {
        format!("{}B", size)
    } else if size < MB {
        format!("{:.1}KB", size as f64 / KB as f64)
    } else if size < GB {
        format!("{:.1}MB", size as f64 / MB as f64)
    } else if size < TB {
        format!("{:.1}GB", size as f64 / GB as f64)
    } else {
        format!("{:.1}TB", size as f64 / TB as f64)
    }
}
