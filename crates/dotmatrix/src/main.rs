use dotmatrix::{EmulatorConfig, USAGE};

fn main() {
    let config = match EmulatorConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err:#}\n{USAGE}");
            std::process::exit(1);
        }
    };

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if config.trace {
        logger.filter_module("dotmatrix_core::cpu", log::LevelFilter::Trace);
    }
    logger.init();

    if let Err(err) = dotmatrix::run(&config) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}
