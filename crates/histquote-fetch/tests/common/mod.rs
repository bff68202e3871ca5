//! One-shot HTTP responder for transport tests.

#![allow(dead_code, unreachable_pub)]

use std::net::SocketAddr;
use std::time::Duration;

use histquote_fetch::{ClientConfig, HistoryClient};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub const BARS_BODY: &str = "Date,Open,High,Low,Close,Volume,Adj Close\n\
                             2020-01-03,104,106,103,105,1100000,105\n\
                             2020-01-02,100,105,99,104,1000000,104\n";

pub const DIVIDENDS_BODY: &str = "Date,Dividends\n\
                                  2019-05-10,0.77\n\
                                  2019-11-07,0.77\n\
                                  2019-08-09,0.77\n";

/// What the responder does once the request head has been read.
pub enum Reply {
    /// Send a complete response and close.
    Full { status: u16, body: String },
    /// Send headers and part of a chunked body, signal, then stall.
    Partial { prefix: String, sent: oneshot::Sender<()> },
    /// Never answer.
    Silent,
}

/// A running responder.
pub struct Server {
    pub addr: SocketAddr,
    /// Resolves to the request line (`GET /table.csv?... HTTP/1.1`).
    pub request_line: JoinHandle<String>,
}

impl Server {
    pub fn client(&self) -> HistoryClient {
        let base_url = format!("http://{}/table.csv", self.addr);
        HistoryClient::new(ClientConfig::default().with_base_url(base_url)).unwrap()
    }
}

/// Serves exactly one connection.
pub async fn serve_once(reply: Reply) -> Server {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let request_line = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let head = read_head(&mut socket).await;
        let request_line = head.lines().next().unwrap_or_default().to_string();

        match reply {
            Reply::Full { status, body } => {
                let response = format!(
                    "HTTP/1.1 {status} {}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    reason(status),
                    body.len()
                );
                socket.write_all(response.as_bytes()).await.unwrap();
                socket.shutdown().await.ok();
            }
            Reply::Partial { prefix, sent } => {
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: text/csv\r\nTransfer-Encoding: chunked\r\n\r\n{:x}\r\n{prefix}\r\n",
                    prefix.len()
                );
                socket.write_all(response.as_bytes()).await.unwrap();
                sent.send(()).ok();
                hold(socket).await;
            }
            Reply::Silent => hold(socket).await,
        }

        request_line
    });

    Server { addr, request_line }
}

async fn read_head(socket: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut buf).await.unwrap();
        if n == 0 {
            break;
        }
        head.extend_from_slice(&buf[..n]);
    }
    String::from_utf8_lossy(&head).into_owned()
}

/// Keeps the connection open until the client goes away.
async fn hold(mut socket: TcpStream) {
    let mut buf = [0u8; 64];
    let _ = tokio::time::timeout(Duration::from_secs(10), socket.read(&mut buf)).await;
}

const fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
