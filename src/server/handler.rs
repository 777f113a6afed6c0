//! Per-connection request handling.
//!
//! Each connection gets exactly one request line, at most one response, and
//! is closed afterwards. Header lines are consumed to find the end of the
//! request but never parsed.

use log::{debug, warn};
use tokio::fs;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::parser::{Method, parse_request_line};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::response::{HttpResponse, StatusCode};
use crate::server::{mime, path};

const FAVICON_TARGET: &str = "/favicon.ico";

/// Handle a single connection.
///
/// Reads one request line, drains the header block, and answers with a file,
/// an error page, or nothing at all. Unparseable request lines drop the
/// connection without a response; everything after a successful parse is
/// answered on the wire. I/O errors propagate to the caller.
pub async fn handle_connection<S>(socket: &mut S, config: &ServerConfig) -> Result<(), Error>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let (reader, mut writer) = tokio::io::split(socket);
    let mut reader = BufReader::with_capacity(config.read_buffer_size, reader);

    let mut line = Vec::new();
    if reader.read_until(b'\n', &mut line).await? == 0 {
        return Ok(()); // connection closed before a request line
    }

    let request = match parse_request_line(&String::from_utf8_lossy(&line)) {
        Ok(request) => request,
        Err(e) => {
            debug!("Dropping connection: {e}");
            return Ok(());
        }
    };

    // The favicon answer skips header consumption and the method check.
    if request.target == FAVICON_TARGET {
        return send_error(&mut writer, StatusCode::NotFound).await;
    }

    drain_headers(&mut reader).await?;

    if request.method != Method::GET {
        debug!("Rejecting {method} {target}", method = request.method, target = request.target);
        return send_error(&mut writer, StatusCode::MethodNotAllowed).await;
    }

    let Some(decoded) = path::decode_target(&request.target) else {
        debug!("Dropping connection: undecodable target {target}", target = request.target);
        return Ok(());
    };

    let Some(target) = path::resolve_target(&config.web_root, &decoded) else {
        warn!("Blocked path traversal attempt: {target}", target = request.target);
        return send_error(&mut writer, StatusCode::NotFound).await;
    };

    match fs::metadata(&target).await {
        Ok(metadata) if !metadata.is_dir() => {}
        _ => return send_error(&mut writer, StatusCode::NotFound).await,
    }

    let body = fs::read(&target).await?;
    let content_type = format!(
        "{}; charset=UTF-8",
        mime::content_type(target.extension().and_then(|e| e.to_str()))
    );

    let response = HttpResponse::new(StatusCode::Ok)
        .with_content_type(content_type)
        .with_body_bytes(body);
    writer.write_all(&response.to_bytes()).await?;
    writer.flush().await?;

    Ok(())
}

/// Read and discard header lines until a blank line or end of stream.
async fn drain_headers<R>(reader: &mut R) -> Result<(), Error>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = Vec::new();
    loop {
        line.clear();
        let n = reader.read_until(b'\n', &mut line).await?;
        if n == 0 || line.iter().all(u8::is_ascii_whitespace) {
            return Ok(());
        }
    }
}

/// Emit a complete error page response and flush.
async fn send_error<W>(writer: &mut W, status: StatusCode) -> Result<(), Error>
where
    W: AsyncWrite + Unpin,
{
    let response = HttpResponse::error_page(status);
    writer.write_all(&response.to_bytes()).await?;
    writer.flush().await?;
    Ok(())
}
