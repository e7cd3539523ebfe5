use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, ToSocketAddrs};
use tokio::time::{timeout, Duration};

use crate::config::{DEFAULT_TIMEOUT_SECS, MAX_MESSAGE_SIZE};
use crate::protocol::Message;
use crate::transport::Transport;

/// Frames are a 4-byte big-endian length followed by a bincode body.
pub struct TcpTransport {
    stream: TcpStream,
    timeout_duration: Duration,
    max_message_size: u32,
}

fn io_error(e: std::io::Error, op: &str) -> anyhow::Error {
    match e.kind() {
        std::io::ErrorKind::UnexpectedEof => anyhow::anyhow!("Connection closed by peer"),
        std::io::ErrorKind::BrokenPipe | std::io::ErrorKind::ConnectionReset => {
            anyhow::anyhow!("Connection reset by peer")
        }
        _ => anyhow::anyhow!("{} error: {}", op, e),
    }
}

impl TcpTransport {
    pub fn new(stream: TcpStream) -> Self {
        Self::with_config(
            stream,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            MAX_MESSAGE_SIZE,
        )
    }

    pub fn with_config(
        stream: TcpStream,
        timeout_duration: Duration,
        max_message_size: u32,
    ) -> Self {
        Self {
            stream,
            timeout_duration,
            max_message_size,
        }
    }

    pub async fn connect<A: ToSocketAddrs>(addr: A) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self::new(stream))
    }
}

#[async_trait::async_trait]
impl Transport for TcpTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        let data =
            bincode::serialize(&msg).map_err(|e| anyhow::anyhow!("Serialization error: {}", e))?;
        if data.len() > self.max_message_size as usize {
            return Err(anyhow::anyhow!(
                "Message too large: {} bytes (max: {})",
                data.len(),
                self.max_message_size
            ));
        }

        let dur = self.timeout_duration;
        let send_op = async {
            let len = (data.len() as u32).to_be_bytes();
            self.stream
                .write_all(&len)
                .await
                .map_err(|e| io_error(e, "Write"))?;
            self.stream
                .write_all(&data)
                .await
                .map_err(|e| io_error(e, "Write"))?;
            anyhow::Ok(())
        };

        timeout(dur, send_op)
            .await
            .map_err(|_| anyhow::anyhow!("Send timeout after {:?}", dur))?
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        let max = self.max_message_size;
        let dur = self.timeout_duration;

        let recv_op = async {
            let mut len_buf = [0u8; 4];
            self.stream
                .read_exact(&mut len_buf)
                .await
                .map_err(|e| io_error(e, "Read"))?;

            let len = u32::from_be_bytes(len_buf);
            if len > max {
                return Err(anyhow::anyhow!(
                    "Message too large: {} bytes (max: {})",
                    len,
                    max
                ));
            }
            if len == 0 {
                return Err(anyhow::anyhow!("Invalid message length: 0"));
            }

            let mut buf = vec![0u8; len as usize];
            self.stream
                .read_exact(&mut buf)
                .await
                .map_err(|e| io_error(e, "Read"))?;

            let msg: Message = bincode::deserialize(&buf)
                .map_err(|e| anyhow::anyhow!("Deserialization error: {}", e))?;
            anyhow::Ok(msg)
        };

        timeout(dur, recv_op)
            .await
            .map_err(|_| anyhow::anyhow!("Receive timeout after {:?}", dur))?
    }
}
