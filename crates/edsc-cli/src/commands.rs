use std::fs;

use anyhow::{Context, Result, bail};
use edsc_model::read_snapshot;
use edsc_url::query_string::parse;
use edsc_url::{decode_url_params, encode_url_query};
use tracing::info;

use edsc_cli::forward::{forward_query, params_from_json};
use edsc_cli::render::{field_rows, flatten_params, params_json, query_part, two_column_table};

use crate::cli::{DecodeArgs, EncodeArgs, ForwardArgs, ParamsArgs};

pub fn run_encode(args: &EncodeArgs) -> Result<()> {
    let snapshot = read_snapshot(&args.snapshot)
        .with_context(|| format!("read snapshot {}", args.snapshot.display()))?;
    let pathname = args.pathname.as_deref().unwrap_or(&snapshot.pathname);
    let url = encode_url_query(pathname, &snapshot.state);
    info!(pathname, length = url.len(), "encoded snapshot");
    println!("{url}");
    Ok(())
}

pub fn run_decode(args: &DecodeArgs) -> Result<()> {
    let state = decode_url_params(query_part(&args.url));
    let json = if args.pretty {
        serde_json::to_string_pretty(&state)
    } else {
        serde_json::to_string(&state)
    }
    .context("serialize decoded state")?;
    info!(focused = %state.focused_collection, "decoded link");
    println!("{json}");
    Ok(())
}

pub fn run_params(args: &ParamsArgs) -> Result<()> {
    let record = parse(query_part(&args.url));
    info!(count = record.len(), "parsed link parameters");
    if args.json {
        println!("{}", params_json(&record).context("serialize parsed params")?);
    } else {
        println!("{}", two_column_table(["Key", "Value"], flatten_params(&record)));
    }
    Ok(())
}

pub fn run_fields() -> Result<()> {
    println!("{}", two_column_table(["Key", "State"], field_rows()));
    Ok(())
}

pub fn run_forward(args: &ForwardArgs) -> Result<()> {
    let text = fs::read_to_string(&args.params)
        .with_context(|| format!("read params {}", args.params.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("parse params {}", args.params.display()))?;
    let Some(params) = params_from_json(value) else {
        bail!("params must be a JSON object: {}", args.params.display());
    };
    let query = forward_query(&params, &args.non_indexed, args.preset);
    info!(keys = params.len(), "built forwarded query");
    println!("{query}");
    Ok(())
}
