use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, error, info, warn};

use appointment_cell::models::{
    BookingForm, HistoryList, SlotContainer, HISTORY_LOAD_FAILED, SLOTS_LOAD_FAILED,
};
use appointment_cell::services::{BookingService, HistoryService, SlotService};
use auth_cell::models::{AuthForm, AuthMode, AuthOutcome, Session};
use auth_cell::services::AuthService;
use auth_cell::session::SessionManager;
use shared_api::ClinicApiClient;
use shared_config::AppConfig;
use shared_models::ClientError;
use shared_utils::dates;

use crate::dialogs::Dialogs;
use crate::messages;
use crate::state::WidgetState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotLoad {
    Applied,
    Failed,
    /// The date or a newer load superseded this response.
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingOutcome {
    LoginRequired,
    Invalid,
    Booked,
    Rejected,
    ConnectionFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthControl {
    Opened,
    LoggedOut,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthSubmit {
    Registered,
    LoggedIn(Session),
    Invalid,
    Rejected,
    ServerError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryOutcome {
    LoginRequired,
    Loaded,
    Failed,
}

/// View-model of the booking page. Every user action is one async method;
/// the rendered result is read back through [`BookingWidget::snapshot`].
///
/// State sits behind a mutex that is never held across a request, so
/// overlapping actions interleave the same way browser callbacks do.
pub struct BookingWidget<D: Dialogs> {
    slots: SlotService,
    bookings: BookingService,
    history: HistoryService,
    auth: AuthService,
    session: SessionManager,
    dialogs: D,
    state: Mutex<WidgetState>,
}

impl<D: Dialogs> BookingWidget<D> {
    pub fn new(config: &AppConfig, session: SessionManager, dialogs: D) -> Self {
        let api = ClinicApiClient::new(config);

        Self {
            slots: SlotService::with_client(api.clone()),
            bookings: BookingService::with_client(api.clone()),
            history: HistoryService::with_client(api.clone()),
            auth: AuthService::with_client(api),
            session,
            dialogs,
            state: Mutex::new(WidgetState::new(dates::today())),
        }
    }

    /// Starts on `date` instead of today. Only available before the widget
    /// is shared, so no slot load can be in flight.
    pub fn with_date(mut self, date: &str) -> Self {
        self.state.get_mut().unwrap_or_else(PoisonError::into_inner).date = date.to_string();
        self
    }

    fn state(&self) -> MutexGuard<'_, WidgetState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> WidgetState {
        self.state().clone()
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Page load: login indicator, patient-name pre-fill, slots for the
    /// current date.
    pub async fn initialize(&self) -> SlotLoad {
        self.refresh_login_status();

        if let Some(name) = self.session.saved_patient_name() {
            self.state().patient_name = name;
        }

        self.load_slots().await
    }

    /// Drops all in-memory state and runs page load again.
    pub async fn reload(&self) -> SlotLoad {
        info!("Reloading booking page");
        *self.state() = WidgetState::new(dates::today());
        self.initialize().await
    }

    pub fn refresh_login_status(&self) {
        let label = match self.session.current() {
            Some(session) => messages::logged_in_label(&session.username),
            None => messages::LOGGED_OUT_LABEL.to_string(),
        };
        self.state().auth_button_label = label;
    }

    pub fn auth_button_label(&self) -> String {
        self.state().auth_button_label.clone()
    }

    pub fn set_patient_name(&self, name: &str) {
        self.state().patient_name = name.to_string();
    }

    // ==========================================================================
    // SLOTS
    // ==========================================================================

    pub async fn change_date(&self, date: &str) -> SlotLoad {
        self.state().date = date.to_string();
        self.load_slots().await
    }

    pub async fn load_slots(&self) -> SlotLoad {
        let (date, generation) = {
            let mut state = self.state();
            state.slot_generation += 1;
            state.slots = SlotContainer::Loading;
            (state.date.clone(), state.slot_generation)
        };

        let result = self.slots.load_board(&date).await;

        let mut state = self.state();
        if state.slot_generation != generation || state.date != date {
            warn!("Discarding stale slots for {} (showing {})", date, state.date);
            return SlotLoad::Stale;
        }

        match result {
            Ok(board) => {
                state.slots = SlotContainer::Ready(board);
                SlotLoad::Applied
            }
            Err(e) => {
                error!("Failed to load slots for {}: {}", date, e);
                state.slots = SlotContainer::Failed(SLOTS_LOAD_FAILED.to_string());
                SlotLoad::Failed
            }
        }
    }

    /// Selection only; nothing is sent until the form is submitted.
    pub fn select_slot(&self, id: i64) -> bool {
        self.state()
            .slots
            .board_mut()
            .map(|board| board.select(id))
            .unwrap_or(false)
    }

    // ==========================================================================
    // BOOKING
    // ==========================================================================

    pub async fn submit_booking(&self, form: &BookingForm) -> BookingOutcome {
        if let Err(e) = self.session.require() {
            debug!("Booking blocked: {}", e);
            self.dialogs.alert(messages::LOGIN_TO_BOOK);
            self.show_auth_modal();
            return BookingOutcome::LoginRequired;
        }

        let selected = self.state().selected_slot();

        match self.bookings.book(form, selected).await {
            Ok(_) => {
                self.state().status_message = None;
                self.dialogs.alert(&messages::booked(&form.name));
                self.load_slots().await;
                BookingOutcome::Booked
            }
            Err(ClientError::Validation(msg)) => {
                debug!("Booking form incomplete");
                self.state().status_message = Some(msg);
                BookingOutcome::Invalid
            }
            Err(e @ ClientError::Rejected { .. }) => {
                self.state().status_message = Some(messages::rejected(&e.user_message()));
                BookingOutcome::Rejected
            }
            Err(e) if e.is_transport() => {
                error!("Booking request failed: {}", e);
                self.state().status_message = Some(messages::CONNECTION_ERROR.to_string());
                BookingOutcome::ConnectionFailed
            }
            Err(e) => {
                error!("Unexpected booking error: {}", e);
                self.state().status_message = Some(messages::CONNECTION_ERROR.to_string());
                BookingOutcome::ConnectionFailed
            }
        }
    }

    // ==========================================================================
    // AUTH
    // ==========================================================================

    /// The auth button: opens the login modal, or offers logout when a
    /// session exists.
    pub async fn open_auth_modal(&self) -> AuthControl {
        let Some(session) = self.session.current() else {
            self.show_auth_modal();
            return AuthControl::Opened;
        };

        if !self.dialogs.confirm(&messages::confirm_logout(&session.username)) {
            return AuthControl::Cancelled;
        }

        if let Err(e) = self.session.clear() {
            error!("Failed to clear session for {}: {}", session.username, e);
        }
        info!("{} logged out", session.username);

        self.dialogs.reload();
        self.reload().await;
        AuthControl::LoggedOut
    }

    fn show_auth_modal(&self) {
        let mut state = self.state();
        state.auth_modal.mode = AuthMode::Login;
        state.auth_modal.message = None;
        state.auth_modal.open = true;
    }

    pub fn toggle_auth_mode(&self) -> AuthMode {
        let mut state = self.state();
        state.auth_modal.mode = state.auth_modal.mode.toggled();
        state.auth_modal.mode
    }

    pub fn close_auth_modal(&self) {
        self.state().auth_modal.open = false;
    }

    pub async fn submit_auth(&self, form: &AuthForm) -> AuthSubmit {
        let mode = self.state().auth_modal.mode;

        match self.auth.submit(mode, form).await {
            Ok(AuthOutcome::Registered) => {
                self.dialogs.alert(messages::REGISTERED);
                self.state().auth_modal.mode = AuthMode::Login;
                AuthSubmit::Registered
            }
            Ok(AuthOutcome::LoggedIn(session)) => self.complete_login(session),
            Err(ClientError::Validation(msg)) => {
                self.state().auth_modal.message = Some(msg);
                AuthSubmit::Invalid
            }
            Err(e @ ClientError::Rejected { .. }) => {
                self.state().auth_modal.message = Some(e.user_message());
                AuthSubmit::Rejected
            }
            Err(e) if e.is_transport() => {
                error!("{} request failed: {}", mode.endpoint(), e);
                self.state().auth_modal.message = Some(messages::SERVER_ERROR.to_string());
                AuthSubmit::ServerError
            }
            Err(e) => {
                error!("Unexpected {} error: {}", mode.endpoint(), e);
                self.state().auth_modal.message = Some(messages::SERVER_ERROR.to_string());
                AuthSubmit::ServerError
            }
        }
    }

    fn complete_login(&self, session: Session) -> AuthSubmit {
        let session = match self.session.persist_login(&session.username) {
            Ok(session) => session,
            Err(e) => {
                error!("Could not persist session: {}", e);
                self.state().auth_modal.message = Some(messages::SERVER_ERROR.to_string());
                return AuthSubmit::ServerError;
            }
        };

        {
            let mut state = self.state();
            state.auth_modal.open = false;
            state.auth_modal.message = None;
            state.patient_name = session.username.clone();
        }
        self.refresh_login_status();

        AuthSubmit::LoggedIn(session)
    }

    // ==========================================================================
    // HISTORY
    // ==========================================================================

    pub async fn open_history(&self) -> HistoryOutcome {
        let Ok(session) = self.session.require() else {
            self.dialogs.alert(messages::LOGIN_TO_VIEW_BOOKINGS);
            self.show_auth_modal();
            return HistoryOutcome::LoginRequired;
        };

        {
            let mut state = self.state();
            state.history.open = true;
            state.history.list = HistoryList::Loading;
        }

        let (list, outcome) = match self.history.load(&session.username).await {
            Ok(list) => (list, HistoryOutcome::Loaded),
            Err(e) => {
                error!("Failed to load bookings for {}: {}", session.username, e);
                (HistoryList::Failed(HISTORY_LOAD_FAILED.to_string()), HistoryOutcome::Failed)
            }
        };

        self.state().history.list = list;
        outcome
    }

    pub fn close_history(&self) {
        self.state().history.open = false;
    }
}
