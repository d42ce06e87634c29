use crate::conf::load_config_file;
use std::io::Write;
use std::path::Path;

pub fn check(path: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let cfg = load_config_file(path)?;

    writeln!(out, "✔ Config loaded successfully")?;
    writeln!(out, "✔ default window: {}", cfg.default_window)?;
    writeln!(
        out,
        "✔ region: {}",
        cfg.region.as_deref().unwrap_or("(SDK default)")
    )?;

    if cfg.log_groups.is_empty() {
        writeln!(out, "✔ log groups: any")?;
    } else {
        writeln!(out, "✔ {} log groups", cfg.log_groups.len())?;
        for group in &cfg.log_groups {
            writeln!(out, "    {group}")?;
        }
    }

    Ok(())
}
