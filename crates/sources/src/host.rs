//! Host identity collector (node name and kernel release)

use lcd_sens_core::CollectionError;
use sysinfo::System;

/// Format `"<nodename> <release>"`, like `uname -nr`
pub fn collect() -> Result<String, CollectionError> {
    let node = System::host_name().ok_or(CollectionError::Unsupported("host name"))?;
    let release = System::kernel_version().ok_or(CollectionError::Unsupported("kernel release"))?;
    Ok(format_host(&node, &release))
}

pub fn format_host(node: &str, release: &str) -> String {
    format!("{} {}", node, release)
}
