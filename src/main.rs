mod collectors;
mod models;
mod ui;
mod util;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "fsstat", about = "Colorized filesystem usage report", version = "0.1")]
struct Cli {
    /// Target path handed to df
    #[arg(default_value = "/")]
    path: String,

    /// Print a one-shot JSON snapshot and exit
    #[arg(long)]
    json: bool,

    /// Disable ANSI colors (also auto-disabled when stdout is not a TTY)
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let raw = collectors::df::run_df(&cli.path)?;
    let filesystems = collectors::df::parse_df(&raw)?;

    if cli.json {
        return run_json_snapshot(&filesystems);
    }

    let palette = ui::theme::Palette::auto(cli.no_color);
    print!("{}", ui::table::render(&filesystems, &palette));
    Ok(())
}

fn run_json_snapshot(filesystems: &[models::filesystem::Filesystem]) -> Result<()> {
    use serde_json::{json, Value};
    use util::human::fmt_size;

    let rows: Vec<Value> = filesystems.iter().map(|fs| {
        json!({
            "device":     fs.device,
            "mountpoint": fs.mount,
            "total":      fs.total_bytes,
            "used":       fs.used_bytes,
            "avail":      fs.avail_bytes,
            "total_hr":   fmt_size(fs.total_bytes),
            "used_hr":    fmt_size(fs.used_bytes),
            "avail_hr":   fmt_size(fs.avail_bytes),
            "use_pct":    fs.use_pct(),
        })
    }).collect();

    let snapshot = json!({
        "fsstat_version": "0.1",
        "timestamp":   chrono::Local::now().to_rfc3339(),
        "filesystems": rows,
    });

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
