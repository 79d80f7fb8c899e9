/// One mounted filesystem's usage figures, as reported by df.
#[derive(Debug, Clone)]
pub struct Filesystem {
    pub device: String,
    pub mount: String,
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub avail_bytes: u64,
}

impl Filesystem {
    /// Usage percentage in [0, 100]. Values below 0.001 clamp to exactly 0
    /// so a negligible fraction never displays as a non-zero percent.
    pub fn use_pct(&self) -> f64 {
        if self.total_bytes == 0 {
            return 0.0;
        }
        let pct = self.used_bytes as f64 / self.total_bytes as f64 * 100.0;
        if pct < 1.0e-3 {
            0.0
        } else {
            pct
        }
    }
}
