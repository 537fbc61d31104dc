mod failures;

pub(crate) const GENERAL_SETTINGS_GET: &str = include_str!("resources/general_settings_get.xml");
pub(crate) const BOOT_SETTING_DATA_ENUMERATE: &str =
    include_str!("resources/boot_setting_data_enumerate.xml");
pub(crate) const BOOT_SETTING_DATA_PULL: &str = include_str!("resources/boot_setting_data_pull.xml");
pub(crate) const SERVICE_AVAILABLE_PULL: &str = include_str!("resources/service_available_pull.xml");
pub(crate) const TLS_CREDENTIAL_CONTEXT_CREATE: &str =
    include_str!("resources/tls_credential_context_create.xml");
pub(crate) const PUBLIC_KEY_ADD_TRUSTED_ROOT: &str =
    include_str!("resources/public_key_add_trusted_root.xml");
pub(crate) const PUBLIC_PRIVATE_KEY_PAIR_DELETE: &str =
    include_str!("resources/public_private_key_pair_delete.xml");
pub(crate) const OPT_IN_START: &str = include_str!("resources/opt_in_start.xml");
pub(crate) const REDIRECTION_REQUEST_STATE_CHANGE: &str =
    include_str!("resources/redirection_request_state_change.xml");
pub(crate) const ALARM_CLOCK_PULL: &str = include_str!("resources/alarm_clock_pull.xml");
pub(crate) const FAULT_INVALID_SELECTORS: &str = include_str!("resources/fault_invalid_selectors.xml");
