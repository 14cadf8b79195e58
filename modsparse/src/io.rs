//! Workload files on disk

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use modsparse_core::Workload;

use crate::error::Result;

/// Read and parse a workload file
///
/// With the `mmap` feature the file is memory-mapped and parsed in place.
#[cfg(feature = "mmap")]
pub fn load_workload<P: AsRef<Path>>(path: P) -> Result<Workload> {
    use memmap2::MmapOptions;

    let path = path.as_ref();
    let file = File::open(path)?;

    // Mapping a zero-length file fails on some platforms
    if file.metadata()?.len() == 0 {
        return Ok(Workload::parse("")?);
    }

    // SAFETY: read-only mapping; the bytes are validated as UTF-8 before use
    // and the map is dropped before this function returns
    let mmap = unsafe { MmapOptions::new().map(&file)? };
    let text = std::str::from_utf8(&mmap)?;
    let workload = Workload::parse(text)?;

    debug!(
        "loaded {} ({} bytes, {} operations)",
        path.display(),
        mmap.len(),
        workload.operations.len()
    );
    Ok(workload)
}

/// Read and parse a workload file
#[cfg(not(feature = "mmap"))]
pub fn load_workload<P: AsRef<Path>>(path: P) -> Result<Workload> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let workload = Workload::parse(std::str::from_utf8(&bytes)?)?;

    debug!(
        "loaded {} ({} bytes, {} operations)",
        path.display(),
        bytes.len(),
        workload.operations.len()
    );
    Ok(workload)
}

/// Write `workload` in the text format, creating parent directories
pub fn save_workload<P: AsRef<Path>>(path: P, workload: &Workload) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    write!(writer, "{workload}")?;
    writer.flush()?;
    Ok(())
}
