
use crate::{
    CaseGateway, GatewayError, GatewayResult, Notifier, NotifyLevel, StatusChange, UpdateAck,
};

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use cb_core::{CaseRecord, CaseStatus, CreatedBy};

pub(crate) fn record(id: &str, status: CaseStatus) -> CaseRecord {
    CaseRecord::new(
        id,
        status,
        CreatedBy::Legacy("tester@example.com".to_string()),
    )
}

/// In-memory gateway with switchable failure modes
#[derive(Default)]
pub(crate) struct StubGateway {
    pub cases: Mutex<Vec<CaseRecord>>,
    pub fail_list: AtomicBool,
    pub fail_update: AtomicBool,
    pub reject_update: AtomicBool,
    pub updates: Mutex<Vec<StatusChange>>,
    pub list_calls: AtomicUsize,
}

impl StubGateway {
    pub fn with_cases(cases: Vec<CaseRecord>) -> Self {
        Self {
            cases: Mutex::new(cases),
            ..Self::default()
        }
    }

    pub fn recorded_updates(&self) -> Vec<StatusChange> {
        self.updates.lock().unwrap().clone()
    }

    pub fn list_call_count(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CaseGateway for StubGateway {
    async fn list_cases(&self) -> GatewayResult<Vec<CaseRecord>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(GatewayError::remote("list unavailable"));
        }
        Ok(self.cases.lock().unwrap().clone())
    }

    async fn update_case_status(&self, change: &StatusChange) -> GatewayResult<UpdateAck> {
        self.updates.lock().unwrap().push(change.clone());
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(GatewayError::remote("connection reset"));
        }
        if self.reject_update.load(Ordering::SeqCst) {
            return Ok(UpdateAck {
                success: false,
                message: Some("Unable to update".to_string()),
            });
        }
        Ok(UpdateAck::ok())
    }
}

/// Notifier that records every toast for assertions
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    pub events: Mutex<Vec<(String, NotifyLevel)>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<(String, NotifyLevel)> {
        self.events.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<(String, NotifyLevel)> {
        self.events.lock().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, level: NotifyLevel) {
        self.events
            .lock()
            .unwrap()
            .push((message.to_string(), level));
    }
}
