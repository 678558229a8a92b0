use std::{
    io::{self, Read as _},
    process::ExitCode,
    sync::Arc,
};

use hebrew_switcher::{
    config::{self, Config},
    english,
    replay::{self, ConsoleExecutor},
    storage::WordStore,
    util::tracing::init_tracing,
};
use hebrew_switcher_core::{Engine, EngineOptions, Lexicon};

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("hebrew-switcher: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> io::Result<()> {
    let realtime = std::env::args().skip(1).any(|arg| arg == "--realtime");

    let (cfg, dir) = match config::data_dir() {
        Ok(dir) => (config::load()?, dir),
        Err(err) => {
            tracing::warn!(error = %err, "no config location, using defaults");
            (Config::default(), std::env::current_dir()?)
        }
    };
    let store = WordStore::new(dir);
    let lexicon = Lexicon::new(
        store.load_hebrew_words(),
        english::build_oracle(&store, &cfg),
    );
    let lists = store.load_user_lists();
    let options = if realtime {
        cfg.engine_options()
    } else {
        EngineOptions::immediate()
    };

    let mut script = String::new();
    io::stdin().read_to_string(&mut script)?;
    let signals = replay::parse_script(&script)
        .map_err(|msg| io::Error::new(io::ErrorKind::InvalidData, msg))?;

    let executor = Arc::new(ConsoleExecutor::with_store(io::stdout(), store));
    let mut engine = Engine::new(Arc::new(lexicon), lists, executor, options);
    replay::run(&mut engine, signals);

    println!("tracked {}", engine.tracked_language());
    Ok(())
}
