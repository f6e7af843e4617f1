use std::io::Read;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio_util::sync::CancellationToken;

use crate::serialization::SerializationError;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Reads `reader` to the end and decodes it as UTF-8 text.
#[deprecated(note = "use read_stream_to_string_async")]
pub fn read_stream_to_string<R: Read>(mut reader: R) -> Result<String, SerializationError> {
  let mut content = Vec::new();
  reader.read_to_end(&mut content)?;
  Ok(decode_text(&content))
}

/// Reads `reader` to the end in chunks of `chunk_size` bytes and decodes it as UTF-8 text.
///
/// Cancellation is checked before every chunk and while a read is pending. A cancelled
/// read returns [`SerializationError::Cancelled`] and discards what was read so far.
pub async fn read_stream_to_string_async<R>(
  mut reader: R,
  chunk_size: usize,
  cancellation: &CancellationToken,
) -> Result<String, SerializationError>
where
  R: AsyncRead + Unpin, {
  let mut content = Vec::new();
  let mut chunk = vec![0u8; chunk_size.max(1)];
  loop {
    if cancellation.is_cancelled() {
      return Err(SerializationError::Cancelled);
    }
    let read = tokio::select! {
      biased;
      _ = cancellation.cancelled() => return Err(SerializationError::Cancelled),
      read = reader.read(&mut chunk) => read?,
    };
    if read == 0 {
      break;
    }
    content.extend_from_slice(&chunk[..read]);
  }
  Ok(decode_text(&content))
}

/// Invalid sequences are replaced rather than rejected, and a leading byte order mark
/// is dropped.
fn decode_text(content: &[u8]) -> String {
  let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
  String::from_utf8_lossy(content).into_owned()
}
