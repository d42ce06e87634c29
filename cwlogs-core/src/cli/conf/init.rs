use crate::conf::{ConfigError, STARTER_CONFIG};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Write [`STARTER_CONFIG`] to `path`. Never overwrites.
pub fn init(path: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            },
            _ => ConfigError::write_file(path, e),
        })?;

    file.write_all(STARTER_CONFIG.as_bytes())
        .map_err(|e| ConfigError::write_file(path, e))?;

    writeln!(out, "✔ Wrote {}", path.display())?;
    Ok(())
}
