use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};

use rosc::{OscMessage, OscPacket, OscType, encoder};

use crate::osc::error::SendError;

/// Anything OSC messages can be sent to
pub trait OscSink {
    fn send(&self, address: &str, arg: OscType) -> Result<(), SendError>;
}

/// Fire-and-forget OSC client over UDP
pub struct OscClient {
    socket: UdpSocket,
    target: SocketAddr,
}

impl OscClient {
    pub fn new(target: &str) -> Result<Self, SendError> {
        let target = target.to_socket_addrs()?.next().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::AddrNotAvailable,
                format!("{target} did not resolve to an address"),
            )
        })?;
        let bind_addr = if target.is_ipv4() {
            "0.0.0.0:0"
        } else {
            "[::]:0"
        };
        let socket = UdpSocket::bind(bind_addr)?;

        Ok(Self { socket, target })
    }

    pub fn target(&self) -> SocketAddr {
        self.target
    }
}

pub fn encode_message(address: &str, arg: OscType) -> Result<Vec<u8>, SendError> {
    let packet = OscPacket::Message(OscMessage {
        addr: address.to_string(),
        args: vec![arg],
    });
    encoder::encode(&packet).map_err(|e| SendError::Encode {
        address: address.to_string(),
        reason: format!("{e:?}"),
    })
}

impl OscSink for OscClient {
    fn send(&self, address: &str, arg: OscType) -> Result<(), SendError> {
        let bytes = encode_message(address, arg)?;
        self.socket.send_to(&bytes, self.target)?;
        Ok(())
    }
}
