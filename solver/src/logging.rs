use log::LevelFilter;

/// environment variable that overrides `--verbosity`, in `env_logger` filter syntax
const LOG_ENV: &str = "GRID_SOLVER_LOG";

pub struct Logger;

impl Logger {
    pub fn init(level: LevelFilter) {
        let mut builder: env_logger::Builder = colog::default_builder();
        builder.filter_level(level);
        builder.parse_env(env_logger::Env::new().filter(LOG_ENV));
        builder.init();
    }
}
