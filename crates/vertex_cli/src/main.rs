/* 📖 # What does the vertex binary do?

It takes no arguments. If `vertex.toml` exists in the current directory it supplies the
starting vector and factor; otherwise the defaults `{3, 4}` and `5` are used.

Exit codes:
- 0: Success
- 1: Error (tracing setup failed, or the config file could not be loaded)
*/

use std::path::Path;
use std::process;

use vertex_base::VertexResult;
use vertex_base::tracing::{debug, init_tracing};
use vertex_core::{DemoConfig, load_config, run_indirection, run_scaling};

const CONFIG_FILE: &str = "vertex.toml";

/// Produce the demo output lines, reading `config_path` if it exists.
fn run(config_path: &Path) -> VertexResult<Vec<String>> {
    let config = if config_path.exists() {
        load_config(config_path)?
    } else {
        debug!("no {} found, using defaults", config_path.display());
        DemoConfig::default()
    };

    let mut lines = Vec::from(run_scaling(&config).lines());
    lines.push(run_indirection().line());
    Ok(lines)
}

fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    match run(Path::new(CONFIG_FILE)) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            debug!("{:?}", e);
            process::exit(1);
        }
    }
}
