use anyhow::anyhow;
use reqwest::StatusCode;
use std::error::Error as StdError;
use std::io::ErrorKind;

fn error_chain_has_io_kind(err: &(dyn StdError + 'static), kind: ErrorKind, needle: &str) -> bool {
    let mut current: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(source) = current {
        if let Some(io_err) = source.downcast_ref::<std::io::Error>()
            && io_err.kind() == kind
        {
            return true;
        }

        if source.to_string().to_ascii_lowercase().contains(needle) {
            return true;
        }

        current = source.source();
    }

    false
}

fn error_chain_has_connection_refused(err: &(dyn StdError + 'static)) -> bool {
    error_chain_has_io_kind(err, ErrorKind::ConnectionRefused, "connection refused")
}

fn error_chain_has_timeout(err: &(dyn StdError + 'static)) -> bool {
    error_chain_has_io_kind(err, ErrorKind::TimedOut, "timed out")
}

pub(crate) fn completion_request_error(err: reqwest::Error, api_url: &str) -> anyhow::Error {
    if err.is_timeout() || error_chain_has_timeout(&err) {
        return anyhow!(
            "Request to '{}' timed out. Check network connectivity and service responsiveness.",
            api_url
        );
    }

    if err.is_connect() {
        if error_chain_has_connection_refused(&err) {
            return anyhow!(
                "Connection refused at '{}'. Check AZURE_OPENAI_ENDPOINT and that the resource is reachable.",
                api_url
            );
        }

        return anyhow!(
            "Failed to connect to '{}'. Check AZURE_OPENAI_ENDPOINT and network connectivity.",
            api_url
        );
    }

    anyhow!("Failed to call '{}': {}", api_url, err)
}

// The auth message deliberately omits the response body; only the variable
// name is referenced, never its value.
pub(crate) fn completion_status_error(status: StatusCode, body: &str) -> anyhow::Error {
    match status.as_u16() {
        401 | 403 => anyhow!(
            "Authentication failed with status {}. Check AZURE_OPENAI_API_KEY; the key itself is never printed.",
            status
        ),
        404 => anyhow!(
            "Deployment not found (status {}). Check AZURE_OPENAI_DEPLOYMENT_NAME and AZURE_OPENAI_API_VERSION.",
            status
        ),
        429 => anyhow!(
            "Rate limit or quota exceeded (status {}). Wait before retrying or review the resource quota.",
            status
        ),
        _ => anyhow!("Chat completion failed with status {}: {}", status, body),
    }
}
