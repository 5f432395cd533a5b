use std::env;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use wren::{AppHandle, ScriptEngine};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // The handle exists before any script runs
    let handle = AppHandle::global();
    let mut engine = ScriptEngine::new(handle.clone());

    // Parse command line args
    let args: Vec<String> = env::args().collect();
    let result = if args.len() > 1 {
        engine.load_file(&PathBuf::from(&args[1]))
    } else {
        engine.load_default()
    };
    result.map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("{}", serde_json::to_string_pretty(&handle.opt().snapshot())?);

    Ok(())
}
