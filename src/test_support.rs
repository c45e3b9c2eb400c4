/// Throwaway HTTP responder and fixtures shared by the async tests
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use crate::config::StationConfig;

/// Answers every request with the same status and body, remembering request lines.
pub struct Responder {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
    task: JoinHandle<()>,
}

impl Responder {
    pub async fn start(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let seen = Arc::clone(&requests);
        let body = body.to_string();
        let task = tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                handle(stream, status, &body, &seen).await;
            }
        });

        Responder {
            addr,
            requests,
            task,
        }
    }

    /// `host:port` of the responder, usable as `PWS_IP`.
    pub fn host(&self) -> String {
        self.addr.to_string()
    }

    pub fn upload_url(&self) -> String {
        format!("http://{}/sendws.php", self.addr)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for Responder {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn handle(mut stream: TcpStream, status: u16, body: &str, seen: &Mutex<Vec<String>>) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }

    let head = String::from_utf8_lossy(&buf);
    if let Some(line) = head.lines().next() {
        seen.lock().unwrap().push(line.to_string());
    }

    let response = format!(
        "HTTP/1.1 {} Test\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

/// A local port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

/// Configuration pointing the pipeline at the given station host and upload URL.
pub fn config_for(host: &str, upload_url: &str) -> StationConfig {
    let vars: HashMap<&str, String> = HashMap::from([
        ("PWS_IP", host.to_string()),
        ("FETCH_INTERVAL", "3600".to_string()),
        ("USERNAME", "station".to_string()),
        ("PASSWORD", "secret".to_string()),
        ("UPLOAD_URL", upload_url.to_string()),
    ]);
    StationConfig::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

/// A live data page whose table rows carry the given input values.
pub fn livedata_page(values: &[(usize, &str)]) -> String {
    let rows = values.iter().map(|(index, _)| index + 1).max().unwrap_or(0);
    let mut page = String::from("<html><body><table>");
    for index in 0..rows {
        match values.iter().find(|(row, _)| *row == index) {
            Some((_, value)) => page.push_str(&format!(
                "<tr><td>Row {}</td><td><input value=\"{}\"></td></tr>",
                index, value
            )),
            None => page.push_str(&format!("<tr><td>Row {}</td></tr>", index)),
        }
    }
    page.push_str("</table></body></html>");
    page
}
