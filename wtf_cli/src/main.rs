mod app;
mod cli;
mod logging;
mod output;

use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use clap::Parser;
use thiserror::Error;
use tracing::{error, info};
use wtf_core::{
    config::Config, engine::Engine, error::ConfigError, scorer::FuzzyScorer, session::Session,
    surface::Surface,
};
use wtf_term::{
    TermError, TtySurface,
    draw::{Theme, list_rows},
};

use cli::Cli;
use output::EXIT_NO_SELECTION;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Term(#[from] TermError),

    #[error("{0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    if let Err(code) = output::require_piped(io::stdin().is_terminal()) {
        eprintln!("{}", output::NOT_PIPED);
        return ExitCode::from(code);
    }

    logging::setup_tracing();

    match run() {
        Ok(selection) => match output::emit(&mut io::stdout().lock(), selection.as_deref()) {
            Ok(code) => ExitCode::from(code),
            Err(err) => {
                error!(%err, "writing selection failed");
                ExitCode::from(EXIT_NO_SELECTION)
            }
        },
        Err(err) => {
            error!(%err, "startup failed");
            eprintln!("wtf: {err}");
            ExitCode::from(EXIT_NO_SELECTION)
        }
    }
}

/// 读入候选、接管终端、跑会话；返回确认条目的原始字节。
///
/// 终端在返回前已经恢复，调用方可以直接写标准输出。
fn run() -> Result<Option<Vec<u8>>, AppError> {
    let config = Config::from_env()?;
    let store = wtf_source::from_reader(io::stdin().lock())?;
    info!(candidates = store.len(), ?config, "starting");

    let mut surface = TtySurface::new()?;
    let (_, height) = surface.size();
    let engine = Engine::new(store, FuzzyScorer);
    let mut session = Session::new(engine, &config, list_rows(height));

    let state = app::run(&mut session, &mut surface, config.layout, &Theme::default());
    drop(surface);
    info!(?state, "finished");
    state?;

    Ok(session.selection().map(|c| c.bytes().to_vec()))
}
