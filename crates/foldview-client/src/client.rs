//! Blocking HTTP client for the structure-prediction service.

use crate::config::PredictorConfig;
use crate::error::PredictionError;
use foldview_core::{Sequence, StructurePayload};
use log::{debug, info};
use std::time::Duration;
use ureq::Agent;
use validator::Validate;

/// Declared content type. The body is the bare sequence, not `key=value`
/// pairs; the ESMFold service expects exactly this.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

const USER_AGENT: &str = concat!("foldview/", env!("CARGO_PKG_VERSION"));

/// Anything that turns a sequence into a structure-file payload.
pub trait StructurePredictor {
    fn predict(&self, sequence: &Sequence) -> Result<StructurePayload, PredictionError>;
}

/// Client for the ESMFold `foldSequence` endpoint.
pub struct EsmFoldClient {
    agent: Agent,
    config: PredictorConfig,
}

impl EsmFoldClient {
    pub fn new(config: PredictorConfig) -> Result<Self, PredictionError> {
        config.validate()?;
        let agent_config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .http_status_as_error(false)
            .build();
        Ok(Self {
            agent: Agent::new_with_config(agent_config),
            config,
        })
    }

    fn transport_error(&self, err: ureq::Error) -> PredictionError {
        match err {
            ureq::Error::Timeout(_) => PredictionError::Timeout(self.config.timeout_secs),
            other => PredictionError::Transport(other.to_string()),
        }
    }
}

impl StructurePredictor for EsmFoldClient {
    fn predict(&self, sequence: &Sequence) -> Result<StructurePayload, PredictionError> {
        info!(
            "Sending {} residues to {} (timeout {}s)",
            sequence.len(),
            self.config.endpoint,
            self.config.timeout_secs
        );
        let mut response = self
            .agent
            .post(&self.config.endpoint)
            .header("Content-Type", FORM_CONTENT_TYPE)
            .header("User-Agent", USER_AGENT)
            .send(sequence.as_str())
            .map_err(|e| self.transport_error(e))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| self.transport_error(e))?;
        debug!("service answered {} with {} bytes", status, body.len());

        if status == 200 {
            Ok(StructurePayload::new(body))
        } else {
            Err(PredictionError::Service { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::sync::mpsc;
    use std::thread;

    /// Serve one canned response and hand back the raw request.
    fn one_shot_server(status_line: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/foldSequence/v1/pdb/", listener.local_addr().unwrap());
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            tx.send(request).unwrap();
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        (url, rx)
    }

    fn read_request(stream: &mut TcpStream) -> String {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            buffer.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buffer).to_string();
            if let Some(split) = text.find("\r\n\r\n") {
                let content_length = text[..split]
                    .lines()
                    .find_map(|line| {
                        let lower = line.to_ascii_lowercase();
                        lower
                            .strip_prefix("content-length:")
                            .map(|v| v.trim().parse::<usize>().unwrap())
                    })
                    .unwrap_or(0);
                if buffer.len() >= split + 4 + content_length {
                    return text;
                }
            }
        }
        String::from_utf8_lossy(&buffer).to_string()
    }

    fn client_for(url: &str, timeout_secs: u64) -> EsmFoldClient {
        EsmFoldClient::new(
            PredictorConfig::builder()
                .endpoint(url)
                .timeout_secs(timeout_secs)
                .build(),
        )
        .unwrap()
    }

    #[test]
    fn test_success_returns_body_verbatim() {
        let pdb = "MODEL        1\nATOM      1  CA  ARG A   1       0.000   0.000   0.000  1.00 62.50           C\nENDMDL\nEND\n";
        let (url, requests) = one_shot_server("200 OK", pdb);
        let client = client_for(&url, 5);
        let payload = client.predict(&Sequence::parse("RPPGFSPFR").unwrap()).unwrap();
        assert_eq!(payload.as_str(), pdb);

        let request = requests.recv().unwrap();
        assert!(request.starts_with("POST /foldSequence/v1/pdb/ HTTP/1.1"));
        assert!(request
            .to_ascii_lowercase()
            .contains("content-type: application/x-www-form-urlencoded"));
        assert!(request.ends_with("\r\n\r\nRPPGFSPFR"));
    }

    #[test]
    fn test_service_error_carries_status_and_body() {
        let (url, _requests) = one_shot_server("500 Internal Server Error", "model overloaded");
        let client = client_for(&url, 5);
        let err = client
            .predict(&Sequence::parse("RPPGFSPFR").unwrap())
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "Error: 500 - model overloaded");
    }

    #[test]
    fn test_non_200_success_codes_are_errors() {
        let (url, _requests) = one_shot_server("202 Accepted", "queued");
        let client = client_for(&url, 5);
        let err = client
            .predict(&Sequence::parse("RPPGFSPFR").unwrap())
            .unwrap_err();
        assert!(matches!(err, PredictionError::Service { status: 202, .. }));
    }

    #[test]
    fn test_connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        drop(listener);
        let client = client_for(&url, 5);
        let err = client
            .predict(&Sequence::parse("RPPGFSPFR").unwrap())
            .unwrap_err();
        assert!(matches!(err, PredictionError::Transport(_)), "{:?}", err);
    }

    #[test]
    fn test_slow_service_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let _ = read_request(&mut stream);
            thread::sleep(Duration::from_secs(4));
        });
        let client = client_for(&url, 1);
        let err = client
            .predict(&Sequence::parse("RPPGFSPFR").unwrap())
            .unwrap_err();
        assert!(matches!(err, PredictionError::Timeout(1)), "{:?}", err);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = PredictorConfig::builder().timeout_secs(0).build();
        assert!(matches!(
            EsmFoldClient::new(config),
            Err(PredictionError::Config(_))
        ));
    }
}
