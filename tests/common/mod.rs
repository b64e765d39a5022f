#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// 只应答一次请求的本地HTTP服务，返回收到的原始请求头
pub struct CannedServer {
    pub watch_url: String,
    handle: JoinHandle<String>,
}

impl CannedServer {
    pub fn request(self) -> String {
        self.handle.join().unwrap()
    }
}

pub fn serve_once(status_line: &str, body: &[u8]) -> CannedServer {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let status_line = status_line.to_string();
    let body = body.to_vec();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let head = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status_line,
            body.len()
        );
        stream.write_all(head.as_bytes()).unwrap();
        stream.write_all(&body).unwrap();
        stream.flush().unwrap();
        String::from_utf8_lossy(&request).into_owned()
    });

    CannedServer {
        watch_url: format!("http://{}/watch?v=", addr),
        handle,
    }
}

pub fn watch_page(player_response: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><script>var ytInitialPlayerResponse = {};var meta = {{}};</script></head><body></body></html>",
        player_response
    )
}

pub const TWO_AUDIO_FORMATS: &str = r#"{"videoDetails":{"videoId":"abc123","title":"测试视频"},"streamingData":{"adaptiveFormats":[{"mimeType":"audio/mp4","bitrate":128000,"url":"A"},{"mimeType":"audio/mp4","bitrate":256000,"url":"B"}]}}"#;
