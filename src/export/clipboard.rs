//! Clipboard delivery for exported canvases.
//!
//! An export can be offered as the PNG itself or as its `data:` URL. Each
//! payload goes through `wl-copy` first; wl-clipboard-rs is the fallback when
//! the command is missing or fails.

use std::io::Write;
use std::process::{Command, Stdio};

use log::{debug, info, warn};
use wl_clipboard_rs::copy::{MimeType, Options, ServeRequests, Source};

use super::ExportError;

/// What gets placed on the clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardPayload {
    /// Encoded PNG bytes
    Png(Vec<u8>),
    /// A `data:image/png;base64,...` URL, offered as plain text
    DataUrl(String),
}

impl ClipboardPayload {
    /// MIME type advertised to pasting clients.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png(_) => "image/png",
            Self::DataUrl(_) => "text/plain;charset=utf-8",
        }
    }

    /// Raw bytes handed to the clipboard.
    pub fn bytes(&self) -> &[u8] {
        match self {
            Self::Png(data) => data,
            Self::DataUrl(url) => url.as_bytes(),
        }
    }
}

/// Places the payload on the Wayland clipboard.
pub fn copy_to_clipboard(payload: &ClipboardPayload) -> Result<(), ExportError> {
    debug!(
        "Copying {} ({} bytes) to clipboard",
        payload.mime_type(),
        payload.bytes().len()
    );
    copy_with_fallback(payload, copy_via_command, copy_via_library)
}

/// Tries `primary`, then `fallback`; when both fail the error names both causes.
pub(crate) fn copy_with_fallback<P, F>(
    payload: &ClipboardPayload,
    primary: P,
    fallback: F,
) -> Result<(), ExportError>
where
    P: FnOnce(&ClipboardPayload) -> Result<(), String>,
    F: FnOnce(&ClipboardPayload) -> Result<(), String>,
{
    let primary_err = match primary(payload) {
        Ok(()) => {
            info!("Canvas copied to clipboard via wl-copy");
            return Ok(());
        }
        Err(err) => err,
    };

    warn!("wl-copy unavailable ({primary_err}), trying wl-clipboard-rs");
    fallback(payload).map_err(|fallback_err| {
        ExportError::Clipboard(format!(
            "wl-copy: {primary_err}; wl-clipboard-rs: {fallback_err}"
        ))
    })?;
    info!("Canvas copied to clipboard via wl-clipboard-rs");
    Ok(())
}

fn copy_via_library(payload: &ClipboardPayload) -> Result<(), String> {
    let mut opts = Options::new();
    // One paste, then the serving process exits
    opts.serve_requests(ServeRequests::Only(1));
    opts.copy(
        Source::Bytes(payload.bytes().into()),
        MimeType::Specific(payload.mime_type().to_string()),
    )
    .map_err(|e| e.to_string())
}

fn copy_via_command(payload: &ClipboardPayload) -> Result<(), String> {
    let mut child = Command::new("wl-copy")
        .args(["--type", payload.mime_type()])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| format!("spawn failed: {e}"))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(payload.bytes())
            .map_err(|e| format!("write failed: {e}"))?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| format!("wait failed: {e}"))?;
    if !output.status.success() {
        return Err(String::from_utf8_lossy(&output.stderr).trim().to_string());
    }
    Ok(())
}
