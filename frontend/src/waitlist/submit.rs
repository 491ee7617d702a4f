use gloo_net::http::Request;
use log::info;
use thiserror::Error;

use super::entry::WaitlistEntry;

#[derive(Debug, Error, PartialEq)]
pub enum SubmissionError {
    #[error("failed to encode waitlist entry: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("form endpoint answered with status {0}")]
    Status(u16),
}

/// POST the entry once. Any 2xx counts as accepted, the body is ignored.
pub async fn submit(endpoint: &str, entry: &WaitlistEntry) -> Result<(), SubmissionError> {
    let payload = entry
        .payload()
        .map_err(|missing| SubmissionError::Encode(format!("{:?} is required", missing)))?;

    let request = Request::post(endpoint)
        .json(&payload)
        .map_err(|e| SubmissionError::Encode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| SubmissionError::Network(e.to_string()))?;

    outcome(response.status())?;
    info!("Waitlist entry accepted with status {}", response.status());
    Ok(())
}

/// Any 2xx counts as accepted.
pub fn outcome(status: u16) -> Result<(), SubmissionError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmissionError::Status(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_2xx_is_accepted() {
        for status in [200, 201, 204, 299] {
            assert_eq!(outcome(status), Ok(()), "status {}", status);
        }
    }

    #[test]
    fn anything_else_fails_with_its_status() {
        for status in [100, 199, 300, 302, 404, 500, 503] {
            assert_eq!(outcome(status), Err(SubmissionError::Status(status)));
        }
    }
}
