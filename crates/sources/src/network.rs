//! Network collectors: local address and WiFi signal level

use crate::command::run_command;
use lcd_sens_core::CollectionError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::net::IpAddr;
use std::time::Duration;
use sysinfo::System;

/// `Signal level=-52 dBm` (dBm drivers) or `Signal level=70/100` (relative)
static SIGNAL_LEVEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Signal level\s*[=:]\s*(-?\d+(?:/\d+)?)").expect("signal level pattern is valid")
});

/// Resolve `<hostname><suffix>` and format `"IP: <addr>"`
pub async fn collect_ip(suffix: &str, timeout: Duration) -> Result<String, CollectionError> {
    let host = System::host_name().ok_or(CollectionError::Unsupported("host name"))?;
    let name = format!("{}{}", host, suffix);

    let lookup = tokio::time::timeout(timeout, tokio::net::lookup_host((name.clone(), 0))).await;
    let addrs = match lookup {
        Ok(Ok(addrs)) => addrs,
        Ok(Err(e)) => {
            return Err(CollectionError::Resolve {
                host: name,
                reason: e.to_string(),
            })
        }
        Err(_) => {
            return Err(CollectionError::Resolve {
                host: name,
                reason: format!("no answer within {:?}", timeout),
            })
        }
    };

    let addr = pick_address(addrs.map(|a| a.ip())).ok_or_else(|| CollectionError::Resolve {
        host: name,
        reason: "no addresses returned".to_string(),
    })?;
    Ok(format!("IP: {}", addr))
}

/// First IPv4 address, or the first address of any family
pub fn pick_address(addrs: impl IntoIterator<Item = IpAddr>) -> Option<IpAddr> {
    let mut fallback = None;
    for addr in addrs {
        if addr.is_ipv4() {
            return Some(addr);
        }
        fallback.get_or_insert(addr);
    }
    fallback
}

/// Run the wireless status command and extract the signal level
pub async fn collect_wifi(
    program: &str,
    args: &[String],
    timeout: Duration,
) -> Result<String, CollectionError> {
    let output = run_command(program, args, timeout).await?;
    parse_signal_level(&output).ok_or(CollectionError::MissingField("Signal level"))
}

/// Signal level without its unit, if the status text has one
pub fn parse_signal_level(status: &str) -> Option<String> {
    SIGNAL_LEVEL
        .captures(status)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
