use crate::cli::{Cli, Commands};
use crate::domain::models::{DecodeReport, EncodeReport};
use crate::services::config::{load_config, resolve_packing};
use crate::services::normalize::normalize;
use crate::services::output::print_report;
use crate::services::positional::resolve_positional;
use crate::services::requests::{decode_request, encode_request};

pub fn handle_runtime_commands(cli: &Cli) -> anyhow::Result<bool> {
    match &cli.command {
        Some(Commands::Encode {
            first,
            second,
            width,
            args,
        }) => {
            let slots = resolve_positional(
                args,
                &[
                    first.as_deref().unwrap_or_default(),
                    second.as_deref().unwrap_or_default(),
                ],
            );
            // Only encode reads the config file.
            let config = load_config(cli.config.as_deref())?;
            let packing = resolve_packing(*width, &config)?;
            let encoded = encode_request(&slots[0], &slots[1], packing)?;
            let report = EncodeReport {
                combined: encoded.combined,
                first: encoded.pair.first,
                second: encoded.pair.second,
            };
            print_report(cli.json, &report, |r| r.combined.to_string())?;
        }
        Some(Commands::Decode { version, args }) => {
            let slots = resolve_positional(args, &[version.as_deref().unwrap_or_default()]);
            let pair = decode_request(&slots[0])?;
            let report = DecodeReport {
                combined: normalize(&slots[0])?,
                first: pair.first,
                second: pair.second,
            };
            print_report(cli.json, &report, |r| {
                format!("First = {}; Second = {}", r.first, r.second)
            })?;
        }
        _ => return Ok(false),
    }

    Ok(true)
}
