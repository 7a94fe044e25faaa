use std::collections::HashMap;

use zbus::{
    blocking::{
        Connection,
        fdo::{DBusProxy, PropertiesProxy},
    },
    names::InterfaceName,
    zvariant::OwnedValue,
};

use crate::player::{
    error::BusError,
    metadata::{Metadata, MetadataValue},
};

pub const PLAYER_PATH: &str = "/org/mpris/MediaPlayer2";
pub const PLAYER_INTERFACE: &str = "org.mpris.MediaPlayer2.Player";

/// The few IPC operations the bridge needs from the session bus
pub trait PlayerBus {
    /// names currently registered on the bus
    fn list_names(&self) -> Result<Vec<String>, BusError>;

    /// the `Metadata` property of the player object owned by `service`
    fn metadata(&self, service: &str) -> Result<Metadata, BusError>;

    /// the `Position` property of the player object owned by `service`, in microseconds
    fn position(&self, service: &str) -> Result<MetadataValue, BusError>;
}

/// Blocking connection to the user's session bus
pub struct SessionBus {
    conn: Connection,
}

impl SessionBus {
    pub fn connect() -> Result<Self, BusError> {
        let conn = Connection::session()?;
        log::debug!("Connected to the session bus as {:?}", conn.unique_name());
        Ok(Self { conn })
    }

    fn get_property(&self, service: &str, property: &str) -> Result<OwnedValue, BusError> {
        let proxy = PropertiesProxy::builder(&self.conn)
            .destination(service)?
            .path(PLAYER_PATH)?
            .build()?;
        let interface = InterfaceName::try_from(PLAYER_INTERFACE)?;
        Ok(proxy.get(interface, property)?)
    }
}

impl PlayerBus for SessionBus {
    fn list_names(&self) -> Result<Vec<String>, BusError> {
        let proxy = DBusProxy::new(&self.conn)?;
        let names = proxy.list_names()?;
        Ok(names.iter().map(|name| name.to_string()).collect())
    }

    fn metadata(&self, service: &str) -> Result<Metadata, BusError> {
        let value = self.get_property(service, "Metadata")?;
        let entries = HashMap::<String, OwnedValue>::try_from(value).map_err(zbus::Error::from)?;
        Ok(Metadata::from_entries(
            entries.iter().map(|(key, value)| (key, &**value)),
        ))
    }

    fn position(&self, service: &str) -> Result<MetadataValue, BusError> {
        let value = self.get_property(service, "Position")?;
        Ok(MetadataValue::decode(&value))
    }
}
