/// picdrop simulator entry point for native builds
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use picdrop::config::UploaderConfig;
    use picdrop::native::{SimulationOptions, simulate};
    use picdrop_core::FileInfo;

    const HELP: &str = "\
picdrop-sim - run the upload dialog's simulated send from the command line

USAGE:
  picdrop-sim [OPTIONS] FILE...

OPTIONS:
  --config PATH        Read dialog configuration (JSON) from PATH
  --cancel-after N     Cancel the send after N timer ticks
  --fast               Don't wait between ticks
  -h, --help           Print this help
";

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return;
    }

    let config_path: Option<std::path::PathBuf> = match args.opt_value_from_str("--config") {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Invalid --config: {}", e);
            std::process::exit(2);
        }
    };
    let cancel_after: Option<usize> = match args.opt_value_from_str("--cancel-after") {
        Ok(n) => n,
        Err(e) => {
            eprintln!("Invalid --cancel-after: {}", e);
            std::process::exit(2);
        }
    };
    let fast = args.contains("--fast");

    let files: Vec<FileInfo> = args
        .finish()
        .into_iter()
        .map(|arg| FileInfo::from_name(arg.to_string_lossy()))
        .collect();

    let config = match config_path {
        Some(path) => match UploaderConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {:?}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => UploaderConfig::default(),
    };

    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    if files.is_empty() {
        log::warn!("No files given - nothing to send");
    }

    let options = SimulationOptions {
        config,
        cancel_after,
        fast,
    };

    match simulate(&files, &options) {
        Ok(summary) => {
            println!(
                "sent {} picture(s), {} returned to the dialog{} in {:.1}s",
                summary.sent,
                summary.reverted,
                if summary.cancelled { " (cancelled)" } else { "" },
                summary.elapsed.as_secs_f32()
            );
        }
        Err(e) => {
            eprintln!("Simulation error: {}", e);
            std::process::exit(1);
        }
    }
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
