//! Common test utilities for integration tests

use rdm::downloader::{ImageFetcher, PageRenderer};
use rdm::errors::{AppError, AppResult};
use rdm::models::PrintOptions;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::thread;
use url::Url;

/// Sample JPEG-ish payload served for the hazard map
#[allow(dead_code)]
pub const HAZARD_BYTES: &[u8] = b"\xff\xd8\xff\xe0fake-jpeg";

/// Fetcher that records every URL and writes [`HAZARD_BYTES`] to the destination.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingFetcher {
    pub calls: Mutex<Vec<Url>>,
    pub fail: bool,
}

#[allow(dead_code)]
impl RecordingFetcher {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn urls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|u| u.to_string())
            .collect()
    }
}

impl ImageFetcher for RecordingFetcher {
    async fn fetch(&self, url: &Url, dest: &Path) -> AppResult<()> {
        self.calls.lock().unwrap().push(url.clone());
        if self.fail {
            return Err(AppError::NetworkError(format!("HTTP 404: {url}")));
        }
        fs::write(dest, HAZARD_BYTES)?;
        Ok(())
    }
}

/// Renderer that records every call and writes a stub PDF, failing for the
/// URLs listed in `fail_urls`.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingRenderer {
    pub calls: Mutex<Vec<(String, PathBuf, PrintOptions)>>,
    pub fail_urls: Vec<String>,
}

#[allow(dead_code)]
impl RecordingRenderer {
    pub fn failing_for(urls: &[&str]) -> Self {
        Self {
            fail_urls: urls.iter().map(|u| u.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn targets(&self) -> Vec<(String, PathBuf)> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(url, dest, _)| (url.clone(), dest.clone()))
            .collect()
    }
}

impl PageRenderer for RecordingRenderer {
    async fn render(&self, url: &str, dest: &Path, options: &PrintOptions) -> AppResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), dest.to_path_buf(), options.clone()));
        if self.fail_urls.iter().any(|u| u == url) {
            return Err(AppError::RenderError(format!("renderer crashed on {url}")));
        }
        fs::write(dest, b"%PDF-1.4 stub")?;
        Ok(())
    }
}

/// Writes a settings file with the given output directory and hazard base URL.
#[allow(dead_code)]
pub fn write_settings(dir: &Path, output_directory: &Path, hazard_base_url: &str) -> PathBuf {
    let path = dir.join("config.toml");
    let contents = format!(
        "[Settings]\noutput_directory = {:?}\nhazard_base_url = {:?}\n",
        output_directory.to_string_lossy(),
        hazard_base_url
    );
    fs::write(&path, contents).unwrap();
    path
}

/// Writes a city list file.
#[allow(dead_code)]
pub fn write_cities(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("weather_urls");
    fs::write(&path, contents).unwrap();
    path
}

/// Minimal HTTP/1.1 server answering every GET with `status` and `body`.
/// Returns the base URL (e.g. "http://127.0.0.1:12345/") and a log of request
/// paths. The server runs until the process exits.
#[allow(dead_code)]
pub fn start_server(status: &'static str, body: Vec<u8>) -> (String, std::sync::Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = std::sync::Arc::new(Mutex::new(Vec::new()));
    let log = std::sync::Arc::clone(&requests);

    thread::spawn(move || {
        for mut stream in listener.incoming().flatten() {
            let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
            let mut buf = [0u8; 8192];
            let n = match stream.read(&mut buf) {
                Ok(n) if n > 0 => n,
                _ => continue,
            };
            let request = String::from_utf8_lossy(&buf[..n]);
            if let Some(path) = request.split_whitespace().nth(1) {
                log.lock().unwrap().push(path.to_string());
            }
            let head = format!(
                "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(&body);
        }
    });

    (format!("http://127.0.0.1:{port}/"), requests)
}
