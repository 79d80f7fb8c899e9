/// Format a raw byte count into a human-readable decimal-unit string:
/// "10.74GB", "5.369GB", "1000MB", "0kB".
pub fn fmt_size(bytes: u64) -> String {
    const GB: f64 = 1.0e9;
    const MB: f64 = 1.0e6;
    const KB: f64 = 1.0e3;

    let b = bytes as f64;
    if b >= GB {
        fmt_sig(b / GB, 4) + "GB"
    } else if b >= MB {
        fmt_sig(b / MB, 4) + "MB"
    } else {
        fmt_sig(b / KB, 4) + "kB"
    }
}

/// Format a percentage to 3 significant digits: "50%", "100%", "2.34%".
pub fn fmt_pct(pct: f64) -> String {
    fmt_sig(pct, 3) + "%"
}

/// Round to `sig` significant digits and trim trailing zeros, matching the
/// iostream default float notation ("50" rather than "50.00").
fn fmt_sig(v: f64, sig: usize) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let magnitude = v.abs().log10().floor() as i32;
    let decimals = (sig as i32 - 1 - magnitude).max(0) as usize;
    let s = format!("{:.*}", decimals, v);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
