mod config;
mod http_client;

use amt_client::{Base, BodyResponse, Transport};
use amt_wsman::MessageCreator;
use anyhow::{Context, bail};
use clap::Parser;
use config::{Args, OutputFormat, Verb, init_logging};
use http_client::UreqTransport;
use serde_json::Value;
use tracing::{error, info, instrument};

type UntypedResponse = BodyResponse<Value, Value>;

#[instrument(name = "main", level = "info")]
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(args.verbose)?;
    info!("starting AMT WS-Management client");

    let transport = match &args.endpoint {
        Some(endpoint) => Some(UreqTransport::new(endpoint.clone(), args.insecure)?),
        None => None,
    };

    match run_app(&args, transport.as_ref().map(|t| t as &dyn Transport)) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "request failed");
            if let Some(message) = e
                .downcast_ref::<amt_client::ClientError>()
                .and_then(amt_client::ClientError::message)
                .filter(|message| message.is_sent())
            {
                eprintln!("{}", message.xml_output);
            }
            Err(e)
        }
    }
}

/// Builds the requested message, sends it when a transport is given and
/// renders the outcome in the selected format.
fn run_app(args: &Args, transport: Option<&dyn Transport>) -> anyhow::Result<String> {
    let creator = MessageCreator::builder()
        .message_id(args.message_id)
        .resource_uri_base(args.schema.resource_uri_prefix())
        .build();
    let base = Base::<Value, Value>::new(&creator, &args.class, transport);

    let response = dispatch(args, &base)?;
    render(&response, args.format)
}

fn dispatch(args: &Args, base: &Base<'_, Value, Value>) -> anyhow::Result<UntypedResponse> {
    let selectors = args.selector_set();
    let selectors = (!selectors.is_empty()).then_some(selectors);

    let response = match args.verb {
        Verb::Enumerate => base.enumerate()?,
        Verb::Pull => {
            let context = args
                .context
                .as_deref()
                .context("pull needs --context <ENUMERATION_CONTEXT>")?;
            base.pull(context)?
        }
        Verb::Get => base.get(selectors.as_ref())?,
        Verb::Delete => {
            let Some(selectors) = selectors.as_ref() else {
                bail!("delete needs at least one --selector");
            };
            base.delete(selectors)?
        }
        Verb::RequestStateChange => {
            let action = args
                .action
                .as_deref()
                .context("request-state-change needs --action <URI>")?;
            let state = args
                .state
                .context("request-state-change needs --state <N>")?;
            base.request_state_change(action, state)?
        }
        Verb::Method => {
            let name = args.name.as_deref().context("method needs --name <METHOD>")?;
            base.method::<String>(name, selectors.as_ref(), None)?
        }
    };

    Ok(response)
}

fn render(response: &UntypedResponse, format: OutputFormat) -> anyhow::Result<String> {
    if !response.is_sent() {
        return Ok(response.xml_input().to_owned());
    }

    let output = match format {
        OutputFormat::Xml => response.xml_output().to_owned(),
        OutputFormat::Json => response.json()?,
        OutputFormat::Yaml => response.yaml()?,
    };
    Ok(output)
}
