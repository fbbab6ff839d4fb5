use std::sync::Arc;

use futures::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio_util::codec::{FramedRead, FramedWrite};
use tracing::{error, info};

use crate::codec::{Limits, RequestDecoder, ResponseEncoder};
use crate::handler::Handler;
use crate::protocol::{ScgiError, ScgiResponse, SendError};

/// One accepted SCGI connection, from first byte to teardown.
///
/// The lifecycle is linear: read until the single request is complete,
/// invoke the handler, write the response, flush and shut down. Any
/// transport or framing error short-circuits straight to teardown with no
/// response emitted; that failure is fatal to this connection only.
///
/// # Type Parameters
///
/// * `R`: The async readable stream type
/// * `W`: The async writable stream type
pub struct ScgiConnection<R, W> {
    framed_read: FramedRead<R, RequestDecoder>,
    framed_write: FramedWrite<W, ResponseEncoder>,
}

impl<R, W> ScgiConnection<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W, limits: Limits) -> Self {
        Self {
            framed_read: FramedRead::with_capacity(reader, RequestDecoder::new(limits), 4 * 1024),
            framed_write: FramedWrite::new(writer, ResponseEncoder::new()),
        }
    }

    /// Serves the connection to completion.
    ///
    /// At most one response is emitted, and only after the body is
    /// complete. A handler error is answered with the empty 500 response;
    /// decode and transport errors produce no response at all.
    pub async fn process<H>(mut self, handler: Arc<H>) -> Result<(), ScgiError>
    where
        H: Handler,
    {
        match self.framed_read.next().await {
            Some(Ok(request)) => {
                info!(
                    method = ?request.meta().method,
                    content_length = request.meta().content_length,
                    "request received"
                );

                let response = match handler.call(request).await {
                    Ok(response) => response,
                    Err(e) => {
                        error!("handler error, cause: {}", e.into());
                        ScgiResponse::internal_error()
                    }
                };

                // send flushes the outbound buffer; shutdown completes the
                // connection once the transport confirms the write
                self.framed_write.send(response).await?;
                self.framed_write.get_mut().shutdown().await.map_err(SendError::io)?;
                Ok(())
            }

            Some(Err(e)) => {
                error!("can't read request, cause {}", e);
                Err(e.into())
            }

            None => {
                info!("peer closed before sending a request");
                Ok(())
            }
        }
    }
}
