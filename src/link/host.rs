//! Host link: line protocol between the node and the supervising host.
//!
//! ```text
//!   host ──"LOCK_DOOR_REQUEST\r\n"──▶ LineDecoder ──▶ HostCommand
//!   host ◀──"2 : DOOR LOCKED\r\n"──── NodeMessage (Display) + client id
//! ```
//!
//! [`HostLink::poll_command`] never blocks: it checks
//! [`Transport::available`] before every read and returns after at most
//! one complete line, leaving later bytes queued for the next tick.

use core::fmt::Write as _;

use heapless::String;
use log::{debug, warn};

use crate::app::commands::HostCommand;
use crate::app::events::NodeMessage;
use crate::app::ports::MessageSink;
use crate::config::{CLIENT_ID_CAP, FIELD_SEPARATOR};
use crate::error::{Error, LinkError};

use super::codec::LineDecoder;
use super::transport::Transport;

/// Capacity of one outbound frame (prefix, body and terminator).
pub const MAX_MESSAGE_LEN: usize = 96;

/// Outbound line terminator; the host splits on CRLF.
const LINE_END: &str = "\r\n";

pub struct HostLink<T> {
    transport: T,
    decoder: LineDecoder,
    client_id: String<CLIENT_ID_CAP>,
    /// Outbound messages lost to transport or formatting errors.
    dropped: u32,
    /// A frame was cut off mid-write; terminate it before the next one.
    torn: bool,
}

impl<T: Transport> HostLink<T> {
    pub fn new(transport: T, client_id: String<CLIENT_ID_CAP>) -> Self {
        Self {
            transport,
            decoder: LineDecoder::new(),
            client_id,
            dropped: 0,
            torn: false,
        }
    }

    /// Read at most one command.  Empty lines are skipped; unrecognised
    /// lines come back as [`HostCommand::Unknown`].
    pub fn poll_command(&mut self) -> Option<HostCommand> {
        let mut byte = [0u8; 1];
        while self.transport.available() {
            match self.transport.read(&mut byte) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    warn!("{} ({:?})", Error::from(LinkError::ReadFailed), e);
                    self.decoder.reset();
                    break;
                }
            }

            match self.decoder.push(byte[0]) {
                None | Some(Ok([])) => {}
                Some(Ok(line)) => {
                    let cmd = HostCommand::parse_bytes(line);
                    if cmd == HostCommand::Unknown {
                        debug!(
                            "Host line ignored: {:?}",
                            core::str::from_utf8(line).unwrap_or("<non-utf8>")
                        );
                    }
                    return Some(cmd);
                }
                Some(Err(e)) => warn!("{}", Error::from(e)),
            }
        }
        None
    }

    /// Frame and write one message.
    ///
    /// If an earlier frame was only partly written, a bare terminator is
    /// sent first so the fragment ends up on its own line instead of
    /// prefixing this one.
    pub fn send_message(&mut self, msg: &NodeMessage) -> Result<(), LinkError> {
        let mut frame: String<MAX_MESSAGE_LEN> = String::new();
        write!(frame, "{}{}{}{}", self.client_id, FIELD_SEPARATOR, msg, LINE_END)
            .map_err(|_| LinkError::MessageTooLong)?;

        if self.torn {
            self.write_all(LINE_END.as_bytes())?;
            self.torn = false;
        }
        self.write_all(frame.as_bytes())?;
        self.transport.flush().map_err(|_| LinkError::WriteFailed)
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), LinkError> {
        let mut data = bytes;
        while !data.is_empty() {
            match self.transport.write(data) {
                Ok(n) if n > 0 => data = &data[n..],
                _ => {
                    self.torn |= data.len() < bytes.len();
                    return Err(LinkError::WriteFailed);
                }
            }
        }
        Ok(())
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Number of outbound messages dropped since boot.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}

impl<T: Transport> MessageSink for HostLink<T> {
    fn send(&mut self, msg: &NodeMessage) {
        if msg.is_alert() {
            warn!("TX | {}", msg);
        } else {
            debug!("TX | {}", msg);
        }
        if let Err(e) = self.send_message(msg) {
            self.dropped = self.dropped.saturating_add(1);
            warn!("Host link: '{}' dropped: {}", msg, e);
        }
    }
}
