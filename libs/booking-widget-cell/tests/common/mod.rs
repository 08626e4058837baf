use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use wiremock::{MockServer, Mock, ResponseTemplate};
use wiremock::matchers::{method, path};

use auth_cell::session::{MemoryStore, SessionManager};
use booking_widget_cell::{BookingWidget, Dialogs};
use shared_utils::test_utils::{MockClinicResponses, TestConfig};

/// Records every dialog shown and answers confirms with a fixed value.
#[derive(Default)]
pub struct RecordingDialogs {
    pub alerts: Mutex<Vec<String>>,
    pub confirms: Mutex<Vec<String>>,
    pub reloads: AtomicUsize,
    pub confirm_answer: bool,
}

impl RecordingDialogs {
    pub fn answering(confirm_answer: bool) -> Arc<Self> {
        Arc::new(Self { confirm_answer, ..Self::default() })
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.lock().unwrap().clone()
    }

    pub fn reload_count(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }
}

impl Dialogs for RecordingDialogs {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.lock().unwrap().push(message.to_string());
        self.confirm_answer
    }

    fn reload(&self) {
        self.reloads.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct TestWidget {
    pub widget: BookingWidget<Arc<RecordingDialogs>>,
    pub dialogs: Arc<RecordingDialogs>,
    pub session: SessionManager,
}

pub fn widget_for(server: &MockServer, confirm_answer: bool) -> TestWidget {
    let config = TestConfig::with_server(&server.uri()).to_app_config();
    let session = SessionManager::new(Arc::new(MemoryStore::new()));
    let dialogs = RecordingDialogs::answering(confirm_answer);

    TestWidget {
        widget: BookingWidget::new(&config, session.clone(), dialogs.clone()),
        dialogs,
        session,
    }
}

/// Any `/slots` request answers with the sample day.
pub async fn mount_any_slots(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/slots"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockClinicResponses::sample_day()))
        .mount(server)
        .await;
}
