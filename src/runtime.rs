use crate::{
    api::CompletionClient,
    app::App,
    catalog::{load_products, CatalogSource},
    key_handlers::map_key,
    reducer::{reduce, Action, CompletionOutcome, Effect},
    ui,
};
use crossterm::{
    event::{self, Event as CEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;

const TICK_RATE: Duration = Duration::from_millis(120);

enum Event {
    Input(CEvent),
    Tick,
}

/// Performs effects in background tasks and reports back as actions.
#[derive(Clone)]
pub struct EffectRunner {
    http: reqwest::Client,
    catalog: CatalogSource,
    completions: CompletionClient,
    actions: mpsc::UnboundedSender<Action>,
}

impl EffectRunner {
    pub fn new(
        http: reqwest::Client,
        catalog: CatalogSource,
        completions: CompletionClient,
        actions: mpsc::UnboundedSender<Action>,
    ) -> Self {
        Self {
            http,
            catalog,
            completions,
            actions,
        }
    }

    pub fn spawn(&self, effect: Effect) {
        let runner = self.clone();
        tokio::spawn(async move {
            let action = runner.perform(effect).await;
            if runner.actions.send(action).is_err() {
                log::debug!("UI loop closed before effect finished");
            }
        });
    }

    async fn perform(&self, effect: Effect) -> Action {
        match effect {
            Effect::LoadCatalog { category } => {
                let result = load_products(&self.catalog, &self.http)
                    .await
                    .map_err(|e| e.to_string());
                Action::CatalogLoaded { category, result }
            }
            Effect::RequestCompletion { kind, messages } => {
                log::info!("sending {:?} request with {} messages", kind, messages.len());
                let result = self.completions.complete(&messages).await;
                Action::CompletionFinished {
                    kind,
                    outcome: CompletionOutcome::from_result(result),
                }
            }
        }
    }
}

/// Sets up the terminal, runs the event loop, and restores the terminal on exit.
pub async fn run_ui(
    app: App,
    runner: EffectRunner,
    actions: mpsc::UnboundedReceiver<Action>,
) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, runner, actions).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        log::error!("UI loop exited with error: {}", err);
    }
    res
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    runner: EffectRunner,
    mut actions: mpsc::UnboundedReceiver<Action>,
) -> io::Result<()> {
    let (tx, mut rx) = mpsc::channel::<Event>(100);

    // crossterm polling blocks, so it gets its own thread.
    tokio::task::spawn_blocking(move || {
        let mut last_tick = Instant::now();
        loop {
            let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
            match event::poll(timeout) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if tx.blocking_send(Event::Input(event)).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        log::error!("failed to read terminal event: {}", e);
                        return;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    log::error!("failed to poll terminal events: {}", e);
                    return;
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                if tx.blocking_send(Event::Tick).is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        let action = tokio::select! {
            Some(event) = rx.recv() => match event {
                Event::Input(CEvent::Key(key)) if key.kind == KeyEventKind::Press => map_key(&app, key),
                Event::Input(_) => None,
                Event::Tick => Some(Action::Tick),
            },
            Some(action) = actions.recv() => Some(action),
            else => break,
        };

        if let Some(action) = action {
            for effect in reduce(&mut app, action) {
                runner.spawn(effect);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
