use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Local;
use tagseek_core::{AppState, AppViewModel, Msg, Store};
use tagseek_engine::{ensure_data_dir, EngineHandle, FileKeyValueStore};
use tagseek_logging::{seek_info, seek_warn};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::ui::input::{parse_command, Command, HELP};
use super::ui::render;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app(config: AppConfig) -> Result<()> {
    if let Err(err) = ensure_data_dir(&config.data_dir) {
        seek_warn!("History will not persist: {}", err);
    }
    let store = Arc::new(FileKeyValueStore::new(&config.data_dir));
    let engine = EngineHandle::new(config.search.clone()).context("starting search engine")?;
    seek_info!(
        "Starting tagseek data_dir={:?} base_url={}",
        config.data_dir,
        config.search.base_url
    );

    let mut session = Session::new(EffectRunner::new(engine, store));
    session.subscribe(|view| print_lines(&render::render(view, Local::now())));
    println!("{HELP}");
    session.start();

    let lines = spawn_stdin_reader();
    loop {
        match lines.recv_timeout(POLL_INTERVAL) {
            Ok(line) => match parse_command(&line) {
                Command::Quit => break,
                Command::Help => println!("{HELP}"),
                Command::ShowHistory => println!("{}", render::history_line(&session.view().history)),
                Command::Select(index) => session.dispatch(Msg::HistoryEntrySelected(index)),
                Command::Submit(raw) => session.dispatch(Msg::TagSubmitted(raw)),
            },
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                // Input closed (e.g. piped tags): let the last search land.
                session.wait_for_results(config.search.request_timeout + POLL_INTERVAL);
                break;
            }
        }
        session.pump();
    }

    session.shutdown();
    seek_info!("Exiting tagseek");
    Ok(())
}

/// The store plus whatever executes its effects.
pub struct Session {
    store: Store,
    runner: EffectRunner,
}

impl Session {
    pub fn new(runner: EffectRunner) -> Self {
        Self {
            store: Store::new(AppState::new()),
            runner,
        }
    }

    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&AppViewModel) + 'static,
    {
        self.store.subscribe(subscriber);
    }

    /// Loads the persisted history and replays its most recent tag.
    pub fn start(&mut self) {
        let tags = self.runner.load_history();
        self.dispatch(Msg::HistoryLoaded(tags));
        self.dispatch(Msg::ReplayLastSearch);
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let mut pending = vec![msg];
        while let Some(msg) = pending.pop() {
            let effects = self.store.dispatch(msg);
            pending.extend(self.runner.run(effects));
        }
    }

    pub fn shutdown(&self) {
        self.runner.shutdown();
    }

    /// Feeds every finished search back into the store.
    pub fn pump(&mut self) {
        for msg in self.runner.poll() {
            self.dispatch(msg);
        }
    }

    /// Blocks until the latest search is answered or `timeout` passes.
    pub fn wait_for_results(&mut self, timeout: Duration) {
        let deadline = Instant::now() + timeout;
        while self.store.state().is_searching() {
            let now = Instant::now();
            if now >= deadline {
                seek_warn!("Gave up waiting for search results");
                break;
            }
            if let Some(msg) = self.runner.next_msg(POLL_INTERVAL.min(deadline - now)) {
                self.dispatch(msg);
            }
        }
    }

    pub fn view(&self) -> AppViewModel {
        self.store.view()
    }
}

fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn print_lines(lines: &[String]) {
    let mut stdout = io::stdout().lock();
    for line in lines {
        let _ = writeln!(stdout, "{line}");
    }
    let _ = writeln!(stdout);
    let _ = stdout.flush();
}
