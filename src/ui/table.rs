use crate::models::filesystem::Filesystem;
use crate::ui::theme::Palette;
use crate::util::human::{fmt_pct, fmt_size};

/// Visible width of the usage bar, in characters.
pub const BAR_WIDTH: usize = 60;

const MIN_NAME_WIDTH: usize = 14;
const COL_WIDTH: usize = 10;
const MOUNT_WIDTH: usize = 9;
const INDENT: &str = "  ";

/// Render the full report: a header line, then one row plus one bar line
/// per filesystem.
pub fn render(filesystems: &[Filesystem], palette: &Palette) -> String {
    // Widen the name column for devices longer than the classic 14 chars.
    let name_w = filesystems
        .iter()
        .map(|fs| fs.device.len())
        .max()
        .unwrap_or(0)
        .max(MIN_NAME_WIDTH);

    let mut out = String::new();
    out.push_str(&format!("{:<w$}", "Filesystem", w = name_w + INDENT.len()));
    for col in ["Size", "Used", "Avail", "Use%", "Mount"] {
        out.push_str(&format!("{:>w$}", col, w = COL_WIDTH));
    }
    out.push('\n');

    for fs in filesystems {
        let pct = fs.use_pct();
        out.push_str(&format!(
            "{}{:<nw$}{:>cw$}{:>cw$}{:>cw$}{:>cw$}{:>mw$}\n",
            INDENT,
            fs.device,
            fmt_size(fs.total_bytes),
            fmt_size(fs.used_bytes),
            fmt_size(fs.avail_bytes),
            fmt_pct(pct),
            fs.mount,
            nw = name_w,
            cw = COL_WIDTH,
            mw = MOUNT_WIDTH,
        ));
        out.push_str(&render_bar(pct, palette));
    }
    out
}

/// Filled length of the bar for a usage percentage, floor(60 * pct / 100).
pub fn bar_fill(pct: f64) -> usize {
    ((BAR_WIDTH as f64 * pct / 100.0).floor() as usize).min(BAR_WIDTH)
}

fn render_bar(pct: f64, palette: &Palette) -> String {
    let fill = bar_fill(pct);
    format!(
        "{}[{}{}{}{}{}]\n",
        INDENT,
        palette.active,
        "=".repeat(fill),
        palette.muted,
        "=".repeat(BAR_WIDTH - fill),
        palette.reset,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fs(device: &str, total: u64, used: u64, avail: u64, mount: &str) -> Filesystem {
        Filesystem {
            device: device.to_string(),
            mount: mount.to_string(),
            total_bytes: total,
            used_bytes: used,
            avail_bytes: avail,
        }
    }

    #[test]
    fn bar_fill_is_floor_and_bounded() {
        assert_eq!(bar_fill(0.0), 0);
        assert_eq!(bar_fill(50.0), 30);
        assert_eq!(bar_fill(100.0), 60);
        assert_eq!(bar_fill(99.9), 59);
        assert_eq!(bar_fill(1.0), 0);
        assert_eq!(bar_fill(1.7), 1);
    }

    #[test]
    fn bar_is_exactly_sixty_characters() {
        for pct in [0.0, 33.3, 50.0, 99.9, 100.0] {
            let bar = render_bar(pct, &Palette::plain());
            assert_eq!(bar.matches('=').count(), BAR_WIDTH, "pct {}", pct);
        }
    }

    #[test]
    fn colored_bar_wraps_fill_and_remainder() {
        let bar = render_bar(50.0, &Palette::colored());
        assert!(bar.starts_with("  [\x1b[32m"));
        assert!(bar.contains("\x1b[90m"));
        assert!(bar.ends_with("\x1b[0m]\n"));
        assert_eq!(bar.matches('=').count(), BAR_WIDTH);
    }

    #[test]
    fn half_full_filesystem_end_to_end() {
        // 20971520 blocks of 512 bytes, half used.
        let rows = vec![fs(
            "/dev/disk1",
            20971520 * 512,
            10485760 * 512,
            10485760 * 512,
            "/",
        )];
        let out = render(&rows, &Palette::plain());
        assert!(out.contains("10.74GB"));
        assert!(out.contains("5.369GB"));
        assert!(out.contains("       50%"));
        let bar_line = out.lines().last().unwrap();
        assert_eq!(bar_line.matches('=').count(), 60);
        // Half full: 30 active characters when colored.
        assert_eq!(bar_fill(50.0), 30);
    }

    #[test]
    fn header_names_survive_any_name_width() {
        for device in ["/dev/sda1", "/dev/mapper/vg0-a-very-long-volume-name"] {
            let rows = vec![fs(device, 1_000_000, 500_000, 500_000, "/")];
            let out = render(&rows, &Palette::plain());
            let header = out.lines().next().unwrap();
            let cols: Vec<&str> = header.split_whitespace().collect();
            assert_eq!(cols, ["Filesystem", "Size", "Used", "Avail", "Use%", "Mount"]);
        }
    }

    #[test]
    fn name_column_widens_for_long_devices() {
        let long = "/dev/mapper/vg0-a-very-long-volume-name";
        let rows = vec![
            fs(long, 2_000, 1_000, 1_000, "/data"),
            fs("/dev/sda1", 2_000, 1_000, 1_000, "/"),
        ];
        let out = render(&rows, &Palette::plain());
        let lines: Vec<&str> = out.lines().collect();
        // Both size columns start at the same offset.
        let off0 = lines[1].find("2kB").unwrap();
        let off1 = lines[3].find("2kB").unwrap();
        assert_eq!(off0, off1);
        assert!(off0 >= 2 + long.len());
    }

    #[test]
    fn negligible_usage_renders_zero_percent() {
        let rows = vec![fs("/dev/disk9", 1_000_000_000_000, 1_000, 999_999_999_000, "/big")];
        let out = render(&rows, &Palette::plain());
        assert!(out.contains("        0%"));
    }
}
