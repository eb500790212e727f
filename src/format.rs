use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn truncate_unicode(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            result.push('\u{2026}');
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    const GB: u64 = 1024 * 1024 * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.0} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

pub fn usage_title(pid: u32, bytes: f64) -> String {
    format!("PID {pid} uses {bytes:.0} bytes")
}

pub fn terminated_title(pid: u32) -> String {
    format!("PID {pid} terminated")
}

pub fn initial_title(pid: u32) -> String {
    format!("Memory usage of PID {pid}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_scale_to_units() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024 + 512 * 1024), "5.5 MB");
        assert_eq!(format_bytes(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn truncation_appends_ellipsis() {
        assert_eq!(truncate_unicode("short", 10), "short");
        assert_eq!(truncate_unicode("abcdefghij", 5), "abcd\u{2026}");
        assert_eq!(truncate_unicode("日本語テキスト", 5), "日本\u{2026}");
    }

    #[test]
    fn titles_embed_pid_and_value() {
        assert_eq!(usage_title(42, 1_048_576.4), "PID 42 uses 1048576 bytes");
        assert_eq!(terminated_title(42), "PID 42 terminated");
        assert_eq!(initial_title(42), "Memory usage of PID 42");
    }
}
