//! Command-line interface for speaking the phrases of a script.
//!
//! In the default mode a single phrase, chosen by its 1-based index, is spoken and the program
//! exits. In interactive mode (`-i`) the phrases are browsed with the keyboard and spoken on demand.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use crossterm::event::EventStream;
use phrase_speaker::display::{Display, Terminal};
use phrase_speaker::phrase::PhraseStore;
use phrase_speaker::session::Session;
use phrase_speaker::tokio::AsyncSynthesizer;
use phrase_speaker::tts::{Rate, Speech, Synthesizer, SyncSynthesizer, DEFAULT_PROGRAM};
use phrase_speaker::{Error, Result};
use tracing_subscriber::EnvFilter;

const ENGINE_ENV: &str = "PHRASE_SPEAKER_ENGINE";

/// Top-level CLI options.
#[derive(Parser, Debug)]
#[command(name = "phrase-speaker", version)]
#[command(about = "Speak the blank-line separated phrases of a script", long_about = None)]
struct Cli {
    /// Script file; phrases are separated by blank lines.
    script: PathBuf,
    /// 1-based number of the phrase to speak. Required unless `-i` is given.
    index: Option<usize>,
    /// Browse the phrases with the arrow keys and speak them with Enter.
    #[arg(short, long)]
    interactive: bool,
    /// Voice passed to the speech engine.
    #[arg(short, long)]
    voice: Option<String>,
    /// Speech engine program.
    #[arg(long, env = ENGINE_ENV, default_value = DEFAULT_PROGRAM)]
    engine: String,
    /// Rate of speech in words per minute.
    #[arg(long, env = "PHRASE_SPEAKER_RATE", default_value_t = Rate::DEFAULT.value())]
    rate: u32,
}

impl Cli {
    fn configure(&self, synth: &mut Synthesizer) {
        synth.set_program(self.engine.as_str());
        synth.set_rate(self.rate);
        synth.set_voice(self.voice.as_deref());
    }
}

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            let reason = err.kind().as_str().unwrap_or("malformed command line");
            return fail(None, Error::InvalidArguments(reason.to_string()));
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(Some(&cli), err),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.interactive && cli.index.is_none() {
        return Err(Error::InvalidArguments(
            "a phrase index is required unless -i is given".to_string(),
        ));
    }

    let store = PhraseStore::load(&cli.script)?;
    match cli.index {
        Some(index) if !cli.interactive => speak_one(cli, &store, index),
        _ => run_interactive(cli, &store),
    }
}

fn speak_one(cli: &Cli, store: &PhraseStore, index: usize) -> Result<()> {
    let phrase = store.try_get(index)?;
    println!("Playing {}/{}", index, store.count());

    let mut synth = SyncSynthesizer::new();
    cli.configure(&mut synth);
    // A failing engine is reported by the synthesizer and doesn't fail the run.
    synth.speak(phrase)?;
    Ok(())
}

fn run_interactive(cli: &Cli, store: &PhraseStore) -> Result<()> {
    if cli.index.is_some() {
        tracing::info!("phrase index is ignored in interactive mode");
    }

    let mut synth = AsyncSynthesizer::new();
    cli.configure(&mut synth);

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let _terminal = Terminal::enter()?;
            let mut session = Session::new(store, synth, Display::new(io::stdout()));
            session.run(EventStream::new(), quit_signal()).await
        })
}

async fn quit_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for interrupts");
        std::future::pending::<()>().await;
    }
}

/// Reports a fatal error on standard error and aloud, then returns the failure exit code.
fn fail(cli: Option<&Cli>, err: Error) -> ExitCode {
    eprintln!("Error {}: {}", err.code(), err);

    let mut synth = SyncSynthesizer::new();
    match cli {
        Some(cli) => cli.configure(&mut synth),
        None => {
            if let Ok(engine) = std::env::var(ENGINE_ENV) {
                synth.set_program(engine);
            }
        }
    }
    if let Err(announce_err) = synth.speak(Speech::quiet(err.announcement())) {
        tracing::debug!(error = %announce_err, "failed to announce error");
    }

    ExitCode::FAILURE
}
