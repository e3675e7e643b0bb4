use fixlog_adapters::{ScreenLogFactory, SessionSettings};
use fixlog_core::SessionId;
use fixlog_filter::FilteredLogFactory;
use fixlog_runner::{Command, Replay, ReplayArgs, ReplayError, args::HELP};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::sync::Arc;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = Command::parse(&args).and_then(|command| match command {
        Command::Help => {
            eprintln!("{}", HELP);
            Ok(())
        }
        Command::Replay(replay_args) => run(replay_args),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if matches!(e, ReplayError::Usage(_)) {
            eprintln!("{}", HELP);
        }
        std::process::exit(1);
    }
}

fn run(args: ReplayArgs) -> Result<(), ReplayError> {
    let settings = match &args.config {
        Some(path) => {
            log::info!("Loading settings from: {}", path.display());
            SessionSettings::from_file(path)?
        }
        None => SessionSettings::new(),
    };

    let session = resolve_session(args.session.as_deref(), &settings)?;

    let factory = FilteredLogFactory::new(ScreenLogFactory::new(), Arc::new(settings));
    let log = factory.create(&session)?;

    if !args.overrides.is_empty() {
        factory
            .registry()
            .set_custom_log_configuration(&session, &args.overrides);
    }
    log::info!(
        "[{}] Log configuration: {:?}",
        session,
        log.filter().current_configuration()
    );

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut replay = Replay::new(log);
    let stats = replay.run(reader)?;
    println!("{}", stats);

    factory.remove(&session)?;
    Ok(())
}

/// Use `--session` if given, else the single session in the settings file
fn resolve_session(
    requested: Option<&str>,
    settings: &SessionSettings,
) -> Result<SessionId, ReplayError> {
    if let Some(id) = requested {
        return Ok(id.parse()?);
    }

    let mut sessions = settings.session_ids();
    match sessions.len() {
        1 => Ok(sessions.remove(0)),
        0 => Err(ReplayError::Usage(
            "--session is required when the settings file defines no sessions".to_string(),
        )),
        n => Err(ReplayError::Usage(format!(
            "--session is required, settings file defines {} sessions",
            n
        ))),
    }
}
