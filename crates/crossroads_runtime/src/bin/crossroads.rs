//! Crossroads CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use crossroads_runtime::{
    Arguments, GameConfig, Repl, Result, RuntimeError, ScriptEditor, logging,
};
use tracing::info;

fn main() -> ExitCode {
    let arguments = Arguments::parse();
    logging::init(arguments.log_level.as_deref());

    match run(&arguments) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            if let RuntimeError::World(err) = &e {
                if let Some(context) = &err.context {
                    eprintln!("{context}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(arguments: &Arguments) -> Result<()> {
    let config = GameConfig::from_arguments(arguments);
    let game = config.build_game()?;
    info!(
        room = %game.state().room(),
        width = config.width,
        "starting game"
    );

    if let Some(script) = &config.script {
        let editor = ScriptEditor::from_file(script)?;
        Repl::with_editor(editor, game)
            .configure(&config)
            .with_echo(true)
            .run()
    } else {
        Repl::new(game)?.configure(&config).run()
    }
}
