use anyhow::{Context, Result};
use clap::Parser;
use http::Method;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;
use trierouter::{logging, RouteTable};

/// Resolve request paths against a TOML route table
#[derive(Parser)]
#[command(name = "trierouter")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Route table file (one `[[route]]` table per route)
    #[arg(short, long, env = "TRIEROUTER_ROUTES")]
    routes: PathBuf,

    /// HTTP method of the request paths
    #[arg(short, long, default_value = "GET")]
    method: String,

    /// Log the registered routes before resolving
    #[arg(long, default_value_t = false)]
    dump: bool,

    /// Request paths to resolve
    paths: Vec<String>,
}

/// One JSON line per resolved path
#[derive(Serialize)]
struct Resolution<'a> {
    method: &'a str,
    path: &'a str,
    matched: bool,
    handlers: &'a [String],
    params: BTreeMap<String, String>,
    /// Methods that would have matched, when this one did not (405 vs 404)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    allowed: Vec<String>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_logging()?;

    let method = Method::from_bytes(cli.method.to_uppercase().as_bytes())
        .with_context(|| format!("Invalid HTTP method '{}'", cli.method))?;
    let router = RouteTable::from_path(&cli.routes)?.build_router()?;
    if cli.dump {
        router.dump_routes();
    }

    let mut unmatched = 0usize;
    for path in &cli.paths {
        let route_match = router.route(method.clone(), path);
        let line = match &route_match {
            Some(m) => serde_json::to_string(&Resolution {
                method: method.as_str(),
                path,
                matched: true,
                handlers: &m.handlers,
                params: m.path_params_map().into_iter().collect(),
                allowed: Vec::new(),
            })?,
            None => {
                unmatched += 1;
                serde_json::to_string(&Resolution {
                    method: method.as_str(),
                    path,
                    matched: false,
                    handlers: &[],
                    params: BTreeMap::new(),
                    allowed: router
                        .allowed_methods(path)
                        .iter()
                        .map(ToString::to_string)
                        .collect(),
                })?
            }
        };
        println!("{line}");
    }

    Ok(if unmatched == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
