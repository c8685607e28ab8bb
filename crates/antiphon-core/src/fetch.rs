//! Single GET against the chant archive.
//!
//! Uses the curl crate (libcurl). There is no retry: a non-200 status or a
//! transport failure ends the run.

use crate::config::AntiphonConfig;
use crate::error::{Result, ScrapeError};
use std::time::Duration;

/// Downloads the GABC source of `chant_id` and returns it as lines.
pub fn fetch_gabc(cfg: &AntiphonConfig, chant_id: &str) -> Result<Vec<String>> {
    let url = cfg.archive().download_url(chant_id)?;
    tracing::debug!(%url, "fetching gabc");
    let body = http_get(cfg, url.as_str())?;
    Ok(body_to_lines(&decode_body(&body)))
}

/// Performs the GET and returns the raw body. Runs in the current thread.
fn http_get(cfg: &AntiphonConfig, url: &str) -> Result<Vec<u8>> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(cfg.timeout_secs))?;
    if let Some(agent) = &cfg.user_agent {
        easy.useragent(agent)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    if status != 200 {
        return Err(ScrapeError::RemoteFetch {
            url: url.to_string(),
            status,
        });
    }
    tracing::debug!(bytes = body.len(), "fetched gabc body");
    Ok(body)
}

fn decode_body(body: &[u8]) -> String {
    match String::from_utf8(body.to_vec()) {
        Ok(s) => s,
        Err(_) => {
            tracing::warn!("archive response is not valid UTF-8; replacing invalid bytes");
            String::from_utf8_lossy(body).into_owned()
        }
    }
}

/// Splits on `\n`, `\r\n` and bare `\r`. A trailing line break does not
/// produce an empty last line.
pub fn body_to_lines(body: &str) -> Vec<String> {
    let normalized = body.replace("\r\n", "\n");
    let mut lines: Vec<String> = normalized
        .split(['\n', '\r'])
        .map(str::to_string)
        .collect();
    if lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}
