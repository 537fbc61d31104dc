use amt_wsman::{MessageCreator, impl_namespaceable};
use serde::{Deserialize, Serialize};

use crate::{BodyResponse, ClientError, base::Base, transport::Transport};

pub const CLASS_NAME: &str = "AMT_GeneralSettings";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    #[serde(
        rename = "@xmlns:h",
        skip_deserializing,
        skip_serializing_if = "String::is_empty"
    )]
    pub namespace: String,
    #[serde(rename(serialize = "h:AMTNetworkEnabled", deserialize = "AMTNetworkEnabled"))]
    pub amt_network_enabled: i32,
    #[serde(rename(serialize = "h:DDNSPeriodicUpdateInterval", deserialize = "DDNSPeriodicUpdateInterval"))]
    pub ddns_periodic_update_interval: i32,
    #[serde(rename(serialize = "h:DDNSTTL", deserialize = "DDNSTTL"))]
    pub ddns_ttl: i32,
    #[serde(rename(serialize = "h:DDNSUpdateByDHCPServerEnabled", deserialize = "DDNSUpdateByDHCPServerEnabled"))]
    pub ddns_update_by_dhcp_server_enabled: bool,
    #[serde(rename(serialize = "h:DDNSUpdateEnabled", deserialize = "DDNSUpdateEnabled"))]
    pub ddns_update_enabled: bool,
    #[serde(rename(serialize = "h:DHCPv6ConfigurationTimeout", deserialize = "DHCPv6ConfigurationTimeout"))]
    pub dhcpv6_configuration_timeout: i32,
    #[serde(rename(serialize = "h:DigestRealm", deserialize = "DigestRealm"))]
    pub digest_realm: String,
    #[serde(rename(serialize = "h:DomainName", deserialize = "DomainName"))]
    pub domain_name: String,
    #[serde(rename(serialize = "h:ElementName", deserialize = "ElementName"))]
    pub element_name: String,
    #[serde(rename(serialize = "h:HostName", deserialize = "HostName"))]
    pub host_name: String,
    #[serde(rename(serialize = "h:HostOSFQDN", deserialize = "HostOSFQDN"))]
    pub host_os_fqdn: String,
    #[serde(rename(serialize = "h:IdleWakeTimeout", deserialize = "IdleWakeTimeout"))]
    pub idle_wake_timeout: i32,
    #[serde(rename(serialize = "h:InstanceID", deserialize = "InstanceID"))]
    pub instance_id: String,
    #[serde(rename(serialize = "h:NetworkInterfaceEnabled", deserialize = "NetworkInterfaceEnabled"))]
    pub network_interface_enabled: bool,
    #[serde(rename(serialize = "h:PingResponseEnabled", deserialize = "PingResponseEnabled"))]
    pub ping_response_enabled: bool,
    #[serde(rename(serialize = "h:PowerSource", deserialize = "PowerSource"))]
    pub power_source: i32,
    #[serde(rename(serialize = "h:PreferredAddressFamily", deserialize = "PreferredAddressFamily"))]
    pub preferred_address_family: i32,
    #[serde(rename(serialize = "h:PresenceNotificationInterval", deserialize = "PresenceNotificationInterval"))]
    pub presence_notification_interval: i32,
    #[serde(rename(serialize = "h:PrivacyLevel", deserialize = "PrivacyLevel"))]
    pub privacy_level: i32,
    #[serde(rename(serialize = "h:RmcpPingResponseEnabled", deserialize = "RmcpPingResponseEnabled"))]
    pub rmcp_ping_response_enabled: bool,
    #[serde(rename(serialize = "h:SharedFQDN", deserialize = "SharedFQDN"))]
    pub shared_fqdn: bool,
    #[serde(rename(serialize = "h:ThunderboltDockEnabled", deserialize = "ThunderboltDockEnabled"))]
    pub thunderbolt_dock_enabled: i32,
    #[serde(rename(serialize = "h:WsmanOnlyMode", deserialize = "WsmanOnlyMode"))]
    pub wsman_only_mode: bool,
}

impl_namespaceable!(GeneralSettings, instance_id);

pub struct GeneralSettingsMessages<'a> {
    base: Base<'a, GeneralSettings>,
}

impl<'a> GeneralSettingsMessages<'a> {
    pub fn new(creator: &'a MessageCreator, transport: Option<&'a dyn Transport>) -> Self {
        Self {
            base: Base::new(creator, CLASS_NAME, transport),
        }
    }

    pub fn get(&self) -> Result<BodyResponse<GeneralSettings>, ClientError> {
        self.base.get(None)
    }

    pub fn enumerate(&self) -> Result<BodyResponse<GeneralSettings>, ClientError> {
        self.base.enumerate()
    }

    pub fn pull(&self, enumeration_context: &str) -> Result<BodyResponse<GeneralSettings>, ClientError> {
        self.base.pull(enumeration_context)
    }

    pub fn put(&self, data: GeneralSettings) -> Result<BodyResponse<GeneralSettings>, ClientError> {
        self.base.put(data, false, None)
    }
}
