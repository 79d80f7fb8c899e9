use crate::models::filesystem::Filesystem;
use anyhow::{bail, Context, Result};
use std::process::Command;

/// Run `df <path>` and return its captured stdout.
///
/// The child's stdout and stderr are redirected into pipes; `output()` waits
/// for the child to exit and drains both streams before returning.
pub fn run_df(path: &str) -> Result<String> {
    let out = Command::new("df")
        .arg(path)
        .output()
        .context("failed to launch df")?;

    if !out.status.success() {
        bail!(
            "df exited with {}: {}",
            out.status,
            String::from_utf8_lossy(&out.stderr).trim()
        );
    }
    Ok(String::from_utf8_lossy(&out.stdout).into_owned())
}

/// Column layout of one df output variant, detected from its header line.
///
/// df's column set differs across platforms (macOS inserts inode columns,
/// GNU df reports 1K blocks), so columns are located by header name rather
/// than hardcoded position. The classic positions 0/1/2/3/last remain the
/// fallback for header tokens that cannot be found.
struct Layout {
    block_size: u64,
    device: usize,
    blocks: usize,
    used: usize,
    avail: usize,
    mount: Option<usize>,
}

impl Layout {
    fn detect(header: &str) -> Self {
        let cols: Vec<String> = header
            .split_whitespace()
            .map(|c| c.to_lowercase())
            .collect();
        let find = |pred: fn(&str) -> bool| cols.iter().position(|c| pred(c));

        let blocks = find(|c| c.contains("block") || c == "size");
        let block_size = blocks
            .map(|i| block_size_of(&cols[i]))
            .unwrap_or(DEFAULT_BLOCK_SIZE);

        Layout {
            block_size,
            device: find(|c| c.starts_with("filesystem")).unwrap_or(0),
            blocks: blocks.unwrap_or(1),
            used: find(|c| c == "used").unwrap_or(2),
            avail: find(|c| c.starts_with("avail")).unwrap_or(3),
            mount: find(|c| c.starts_with("mounted")),
        }
    }

    /// Minimum field count a data line must have.
    fn min_fields(&self) -> usize {
        self.device
            .max(self.blocks)
            .max(self.used)
            .max(self.avail)
            .max(self.mount.unwrap_or(0))
            + 1
    }
}

const DEFAULT_BLOCK_SIZE: u64 = 512;

/// Block size encoded in a header token like "512-blocks" or "1K-blocks".
fn block_size_of(col: &str) -> u64 {
    let digits: String = col.chars().take_while(|c| c.is_ascii_digit()).collect();
    let n: u64 = match digits.parse() {
        Ok(n) => n,
        Err(_) => return DEFAULT_BLOCK_SIZE,
    };
    if col[digits.len()..].starts_with('k') {
        n * 1024
    } else {
        n
    }
}

/// Parse raw df output: a header line followed by one line per filesystem.
pub fn parse_df(raw: &str) -> Result<Vec<Filesystem>> {
    let mut lines = raw.lines();
    let header = lines.next().context("df produced no output")?;
    let layout = Layout::detect(header);

    let mut out = Vec::new();
    for line in lines.filter(|l| !l.trim().is_empty()) {
        let fs = parse_row(line, &layout)
            .with_context(|| format!("malformed df line: {:?}", line))?;
        out.push(fs);
    }
    Ok(out)
}

fn parse_row(line: &str, layout: &Layout) -> Result<Filesystem> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < layout.min_fields() {
        bail!(
            "expected at least {} fields, got {}",
            layout.min_fields(),
            fields.len()
        );
    }

    let blocks: u64 = fields[layout.blocks].parse().context("total blocks")?;
    let used: u64 = fields[layout.used].parse().context("used blocks")?;
    let avail: u64 = fields[layout.avail].parse().context("available blocks")?;

    // Mount paths may contain spaces; take every field from the mount column on.
    let mount = match layout.mount {
        Some(i) => fields[i..].join(" "),
        None => fields[fields.len() - 1].to_string(),
    };

    Ok(Filesystem {
        device: fields[layout.device].to_string(),
        total_bytes: blocks * layout.block_size,
        used_bytes: used * layout.block_size,
        avail_bytes: avail * layout.block_size,
        mount,
    })
}
