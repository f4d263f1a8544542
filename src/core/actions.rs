//! Side effects behind the presenter's secondary actions.

use std::path::PathBuf;

use dioxus::prelude::*;

use crate::constants::COPY_TO_CLIPBOARD_SCRIPT;
use crate::core::export::{download_filename, gist_url, save_image};
use crate::core::lifecycle::ImageReference;
use crate::error::ActionError;

/// Writes `text` to the system clipboard, through the webview first and the
/// native clipboard when the webview refuses.
pub async fn copy_to_clipboard(text: &str) -> Result<(), ActionError> {
    match copy_via_webview(text).await {
        Ok(()) => Ok(()),
        Err(webview_err) => {
            tracing::debug!(error = %webview_err, "webview clipboard unavailable, using native clipboard");
            copy_via_native(text).map_err(|native_err| {
                ActionError::Clipboard(format!("{}; {}", clipboard_detail(webview_err), native_err))
            })
        }
    }
}

async fn copy_via_webview(text: &str) -> Result<(), ActionError> {
    let mut eval = document::eval(COPY_TO_CLIPBOARD_SCRIPT);
    eval.send(text)
        .map_err(|err| ActionError::Clipboard(err.to_string()))?;
    let reply: serde_json::Value = eval
        .recv()
        .await
        .map_err(|err| ActionError::Clipboard(err.to_string()))?;
    clipboard_reply(&reply)
}

fn copy_via_native(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())
}

/// Interprets the `{ ok, error }` object sent back by the clipboard script.
fn clipboard_reply(reply: &serde_json::Value) -> Result<(), ActionError> {
    match reply.get("ok").and_then(|ok| ok.as_bool()) {
        Some(true) => Ok(()),
        _ => Err(ActionError::Clipboard(
            reply
                .get("error")
                .and_then(|error| error.as_str())
                .unwrap_or("clipboard unavailable")
                .to_string(),
        )),
    }
}

fn clipboard_detail(err: ActionError) -> String {
    match err {
        ActionError::Clipboard(detail) => detail,
        other => other.to_string(),
    }
}

/// Opens a prefilled gist for `code` in the system browser.
pub fn share_to_gist(code: &str) -> Result<(), ActionError> {
    let url = gist_url(code);
    tracing::info!(bytes = code.len(), "opening gist export");
    open::that(&url).map_err(|err| ActionError::Export(err.to_string()))
}

/// Asks where to save the image, then writes it. `Ok(None)` means the dialog was cancelled.
pub async fn download_image(reference: &ImageReference) -> Result<Option<PathBuf>, ActionError> {
    let filename = download_filename(chrono::Utc::now());
    let Some(handle) = rfd::AsyncFileDialog::new()
        .set_file_name(filename.as_str())
        .add_filter("PNG image", &["png"])
        .save_file()
        .await
    else {
        tracing::debug!("image download cancelled");
        return Ok(None);
    };

    let path = handle.path().to_path_buf();
    save_image(reference, &path).await?;
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clipboard_reply_ok() {
        assert!(clipboard_reply(&json!({ "ok": true })).is_ok());
    }

    #[test]
    fn test_clipboard_reply_reports_script_error() {
        let err = clipboard_reply(&json!({ "ok": false, "error": "NotAllowedError" })).unwrap_err();
        assert!(matches!(err, ActionError::Clipboard(detail) if detail == "NotAllowedError"));

        let err = clipboard_reply(&json!({})).unwrap_err();
        assert!(matches!(err, ActionError::Clipboard(detail) if detail == "clipboard unavailable"));
    }
}
