use crate::app::{App, CatalogView, Focus, RequestKind, RequestState};
use crate::catalog::filter_by_category;
use crate::chat_pane::ChatEntry;
use crate::constants::*;
use crate::conversation::routine_request;
use crate::errors::{RoutineError, RoutineResult};
use crate::models::{Message, Product};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    FocusNext,
    FocusPrev,
    CursorUp,
    CursorDown,
    SelectCategory(String),
    /// `result` carries the whole catalog; filtering happens here.
    CatalogLoaded {
        category: String,
        result: Result<Vec<Product>, String>,
    },
    ToggleProduct(String),
    RemoveSelected(String),
    GenerateRoutine,
    InputChar(char),
    InputBackspace,
    SubmitChat,
    CompletionFinished {
        kind: RequestKind,
        outcome: CompletionOutcome,
    },
    DismissWarning,
    Tick,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    Reply(String),
    MissingContent,
    Failed(String),
}

impl CompletionOutcome {
    pub fn from_result(result: RoutineResult<String>) -> Self {
        match result {
            Ok(reply) => CompletionOutcome::Reply(reply),
            Err(RoutineError::MissingContent) => CompletionOutcome::MissingContent,
            Err(e) => CompletionOutcome::Failed(e.to_string()),
        }
    }
}

/// Side effects the runtime performs on the reducer's behalf.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    LoadCatalog {
        category: String,
    },
    RequestCompletion {
        kind: RequestKind,
        messages: Vec<Message>,
    },
}

pub fn reduce(app: &mut App, action: Action) -> Vec<Effect> {
    if app.warning.is_some() && blocked_by_warning(&action) {
        return Vec::new();
    }

    match action {
        Action::FocusNext => {
            app.focus = app.focus.next();
            Vec::new()
        }
        Action::FocusPrev => {
            app.focus = app.focus.prev();
            Vec::new()
        }
        Action::CursorUp => {
            move_cursor(app, -1);
            Vec::new()
        }
        Action::CursorDown => {
            move_cursor(app, 1);
            Vec::new()
        }
        Action::SelectCategory(category) => {
            app.current_category = Some(category.clone());
            app.catalog_view = CatalogView::Loading;
            app.product_cursor = 0;
            vec![Effect::LoadCatalog { category }]
        }
        Action::CatalogLoaded { category, result } => {
            apply_catalog(app, category, result);
            Vec::new()
        }
        Action::ToggleProduct(name) => {
            let product = app
                .visible_products()
                .iter()
                .find(|p| p.name == name)
                .cloned();
            if let Some(product) = product {
                let selected = app.selection.toggle(&product);
                log::debug!("toggled '{}' (selected: {})", product.name, selected);
                clamp_selection_cursor(app);
            }
            Vec::new()
        }
        Action::RemoveSelected(name) => {
            if app.selection.remove(&name).is_some() {
                log::debug!("removed '{}' from selection", name);
                clamp_selection_cursor(app);
            }
            Vec::new()
        }
        Action::GenerateRoutine => generate_routine(app),
        Action::InputChar(c) => {
            app.chat_input.push(c);
            Vec::new()
        }
        Action::InputBackspace => {
            app.chat_input.pop();
            Vec::new()
        }
        Action::SubmitChat => submit_chat(app),
        Action::CompletionFinished { kind, outcome } => {
            finish_completion(app, kind, outcome);
            Vec::new()
        }
        Action::DismissWarning => {
            app.warning = None;
            Vec::new()
        }
        Action::Tick => {
            app.status_indicator.update_spinner();
            Vec::new()
        }
        Action::Quit => {
            app.should_quit = true;
            Vec::new()
        }
    }
}

/// User input is ignored while the warning is up; async results still land.
fn blocked_by_warning(action: &Action) -> bool {
    !matches!(
        action,
        Action::DismissWarning
            | Action::Quit
            | Action::Tick
            | Action::CatalogLoaded { .. }
            | Action::CompletionFinished { .. }
    )
}

fn move_cursor(app: &mut App, delta: isize) {
    let (cursor, len) = match app.focus {
        Focus::Categories => (&mut app.category_cursor, app.categories.len()),
        Focus::Products => {
            let len = app.visible_products().len();
            (&mut app.product_cursor, len)
        }
        Focus::Selected => (&mut app.selection_cursor, app.selection.len()),
        Focus::Chat => return,
    };
    if len == 0 {
        *cursor = 0;
        return;
    }
    *cursor = cursor.saturating_add_signed(delta).min(len - 1);
}

fn clamp_selection_cursor(app: &mut App) {
    app.selection_cursor = app
        .selection_cursor
        .min(app.selection.len().saturating_sub(1));
}

fn apply_catalog(app: &mut App, category: String, result: Result<Vec<Product>, String>) {
    if app.current_category.as_deref() != Some(category.as_str()) {
        log::debug!("discarding stale catalog load for '{}'", category);
        return;
    }

    app.catalog_view = match result {
        Ok(products) => {
            let filtered = filter_by_category(&products, &category);
            log::info!(
                "loaded {} of {} products for category '{}'",
                filtered.len(),
                products.len(),
                category
            );
            CatalogView::Loaded(filtered)
        }
        Err(e) => {
            log::error!("failed to load catalog for '{}': {}", category, e);
            CatalogView::Failed
        }
    };
    app.product_cursor = 0;
}

fn begin_request(app: &mut App, kind: RequestKind) -> Vec<Effect> {
    app.request = RequestState::Sending(kind);
    app.status_indicator.clear_status();
    app.status_indicator.set_thinking(true);
    vec![Effect::RequestCompletion {
        kind,
        messages: app.transcript.messages().to_vec(),
    }]
}

fn generate_routine(app: &mut App) -> Vec<Effect> {
    if app.is_sending() {
        app.status_indicator.set_status(REQUEST_IN_FLIGHT);
        return Vec::new();
    }

    if app.selection.is_empty() {
        app.warning = Some(NO_SELECTION_WARNING.to_string());
        return Vec::new();
    }

    let request = match routine_request(&app.selection) {
        Ok(request) => request,
        Err(e) => {
            log::error!("failed to describe selected products: {}", e);
            app.chat_pane
                .replace(vec![ChatEntry::Notice(ROUTINE_FAILED.to_string())]);
            return Vec::new();
        }
    };

    app.transcript.push_user(request);
    app.chat_pane
        .replace(vec![ChatEntry::Pending(ROUTINE_PENDING.to_string())]);
    begin_request(app, RequestKind::Routine)
}

fn submit_chat(app: &mut App) -> Vec<Effect> {
    if app.chat_input.trim().is_empty() {
        return Vec::new();
    }

    if app.is_sending() {
        app.status_indicator.set_status(REQUEST_IN_FLIGHT);
        return Vec::new();
    }

    let message = std::mem::take(&mut app.chat_input);
    app.transcript.push_user(message.clone());
    app.chat_pane.push(ChatEntry::User(message));
    app.chat_pane
        .push(ChatEntry::Pending(CHAT_PENDING.to_string()));
    begin_request(app, RequestKind::Chat)
}

fn finish_completion(app: &mut App, kind: RequestKind, outcome: CompletionOutcome) {
    app.request = RequestState::Idle;
    app.status_indicator.set_thinking(false);
    app.status_indicator.clear_status();

    match outcome {
        CompletionOutcome::Reply(reply) => {
            app.transcript.push_assistant(reply.clone());
            match kind {
                RequestKind::Routine => app.chat_pane.show_routine(&reply),
                RequestKind::Chat => app.chat_pane.resolve_pending(ChatEntry::Assistant(reply)),
            }
        }
        CompletionOutcome::MissingContent => {
            log::warn!("{:?} completion returned no message content", kind);
            match kind {
                RequestKind::Routine => app
                    .chat_pane
                    .replace(vec![ChatEntry::Notice(ROUTINE_MISSING_CONTENT.to_string())]),
                RequestKind::Chat => app
                    .chat_pane
                    .resolve_pending(ChatEntry::Assistant(CHAT_MISSING_CONTENT.to_string())),
            }
        }
        CompletionOutcome::Failed(e) => {
            log::error!("{:?} completion failed: {}", kind, e);
            match kind {
                RequestKind::Routine => app
                    .chat_pane
                    .replace(vec![ChatEntry::Notice(ROUTINE_FAILED.to_string())]),
                RequestKind::Chat => app
                    .chat_pane
                    .resolve_pending(ChatEntry::Assistant(CHAT_FAILED.to_string())),
            }
        }
    }
}
