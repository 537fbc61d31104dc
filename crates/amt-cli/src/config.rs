use amt_client::{SelectorSet, amt, cim, ips};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, registry::Registry};

/// Build, and optionally send, WS-Management requests for Intel AMT
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Schema the class belongs to
    #[arg(value_enum)]
    pub schema: Schema,

    /// Class name, e.g. AMT_GeneralSettings
    pub class: String,

    /// Operation to perform
    #[arg(value_enum)]
    pub verb: Verb,

    /// Selector as Name=Value, repeatable, kept in order
    #[arg(short, long = "selector", value_parser = parse_selector)]
    pub selectors: Vec<(String, String)>,

    /// Enumeration context for pull
    #[arg(long)]
    pub context: Option<String>,

    /// Action URI for request-state-change
    #[arg(long)]
    pub action: Option<String>,

    /// Requested state for request-state-change
    #[arg(long, allow_negative_numbers = true)]
    pub state: Option<i32>,

    /// Method name for method
    #[arg(long)]
    pub name: Option<String>,

    /// WS-Management endpoint, e.g. http://10.0.0.5:16992/wsman.
    /// Without it the request is printed and not sent.
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Accept invalid TLS certificates (self-signed AMT certificates)
    #[arg(long)]
    pub insecure: bool,

    /// First MessageID to use
    #[arg(long, default_value_t = 0)]
    pub message_id: u64,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Xml)]
    pub format: OutputFormat,

    /// Verbose logging (can be repeated for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase logging verbosity")]
    pub verbose: u8,
}

impl Args {
    pub fn selector_set(&self) -> SelectorSet {
        self.selectors
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Schema {
    Amt,
    Cim,
    Ips,
}

impl Schema {
    pub fn resource_uri_prefix(self) -> &'static str {
        match self {
            Self::Amt => amt::RESOURCE_URI_PREFIX,
            Self::Cim => cim::RESOURCE_URI_PREFIX,
            Self::Ips => ips::RESOURCE_URI_PREFIX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Verb {
    Enumerate,
    Pull,
    Get,
    Delete,
    RequestStateChange,
    Method,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Xml,
    Json,
    Yaml,
}

fn parse_selector(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected Name=Value, got `{raw}`"))?;
    if name.is_empty() {
        return Err(format!("selector name is empty in `{raw}`"));
    }
    Ok((name.to_owned(), value.to_owned()))
}

/// Logs go to stderr so stdout only carries the rendered message.
pub fn init_logging(verbose_level: u8) -> anyhow::Result<()> {
    let filter_str = match verbose_level {
        0 => "warn,ureq=error",
        1 => "info,ureq=warn",
        2 => "debug,ureq=info",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    let subscriber = Registry::default().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_ansi(false)
            .compact(),
    );

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selectors_in_order() {
        let args = Args::try_parse_from([
            "amt-wsman",
            "amt",
            "AMT_TLSSettingData",
            "get",
            "--selector",
            "InstanceID=Intel(r) AMT 802.3 TLS Settings",
            "-s",
            "Other=a=b",
        ])
        .unwrap();

        assert_eq!(args.schema, Schema::Amt);
        assert_eq!(args.verb, Verb::Get);
        assert_eq!(args.format, OutputFormat::Xml);
        let set = args.selector_set();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("InstanceID"), Some("Intel(r) AMT 802.3 TLS Settings"));
        assert_eq!(set.get("Other"), Some("a=b"));
    }

    #[test]
    fn test_request_state_change_arguments() {
        let args = Args::try_parse_from([
            "amt-wsman",
            "cim",
            "CIM_KVMRedirectionSAP",
            "request-state-change",
            "--action",
            "http://schemas.dmtf.org/wbem/wscim/1/cim-schema/2/CIM_KVMRedirectionSAP/RequestStateChange",
            "--state",
            "2",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.verb, Verb::RequestStateChange);
        assert_eq!(args.state, Some(2));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.schema.resource_uri_prefix(), cim::RESOURCE_URI_PREFIX);
    }

    #[test]
    fn test_invalid_selector_is_rejected() {
        assert!(parse_selector("NoEquals").is_err());
        assert!(parse_selector("=value").is_err());
        assert_eq!(
            parse_selector("Name=").unwrap(),
            ("Name".to_owned(), String::new())
        );
    }
}
