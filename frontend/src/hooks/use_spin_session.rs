use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use chrono::Utc;
use futures::future::{abortable, AbortHandle};
use gloo_timers::future::TimeoutFuture;
use shared::contact::{ContactField, ContactSubmission};
use shared::persistence::{settle_attempt, AttemptId, DocumentStore};
use shared::spin_session::{Command, SpinSession, TimerToken};
use shared::widget_config::WidgetConfig;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::get_api_base_url;
use crate::services::document_store::HttpDocumentStore;
use crate::services::local_cache;

type Timers = HashMap<TimerToken, AbortHandle>;

/// Drives a [`SpinSession`] from a component. Transitions go through here
/// and the commands they return run before the component re-renders.
#[derive(Clone)]
pub struct SpinController {
    session: Rc<RefCell<SpinSession>>,
    timers: Rc<RefCell<Timers>>,
    store: Rc<dyn DocumentStore>,
    redraw: UseForceUpdateHandle,
}

impl SpinController {
    pub fn session(&self) -> Ref<'_, SpinSession> {
        self.session.borrow()
    }

    pub fn open(&self) {
        self.apply(|session| session.open());
    }

    pub fn close(&self) {
        self.apply(|session| session.close());
    }

    pub fn acknowledge(&self) {
        self.apply(|session| session.acknowledge());
    }

    pub fn spin(&self) {
        self.apply(|session| session.spin(&mut rand::thread_rng()));
    }

    pub fn update_field(&self, field: ContactField, value: String) {
        let accepted = self.session.borrow_mut().update_field(field, value);
        if accepted {
            self.redraw.force_update();
        }
    }

    pub fn submit(&self) {
        self.apply(|session| session.submit(Utc::now()));
    }

    /// Session end: nothing scheduled may fire after this.
    pub fn cancel_all(&self) {
        for (_, handle) in self.timers.borrow_mut().drain() {
            handle.abort();
        }
    }

    fn apply<F>(&self, transition: F)
    where
        F: FnOnce(&mut SpinSession) -> Vec<Command>,
    {
        let commands = transition(&mut self.session.borrow_mut());
        for command in commands {
            self.execute(command);
        }
        self.redraw.force_update();
    }

    fn execute(&self, command: Command) {
        match command {
            Command::CancelPhaseTimers => {
                self.timers.borrow_mut().retain(|token, handle| {
                    if token.timer.is_phase_bound() {
                        handle.abort();
                        false
                    } else {
                        true
                    }
                });
            }
            Command::Schedule { token, after_ms } => self.schedule(token, after_ms),
            Command::Persist { attempt, record } => self.persist(attempt, record),
            Command::MirrorToCache(record) => {
                let key = self.session.borrow().config().local_cache_key.clone();
                if let Err(e) = local_cache::store(&key, &record) {
                    log::warn!("Failed to cache spin entry: {}", e);
                }
            }
            Command::Announce(text) => log::debug!("Announcing: {}", text),
            Command::ClearAnnouncement => log::debug!("Announcement cleared"),
        }
    }

    fn schedule(&self, token: TimerToken, after_ms: u32) {
        let (delay, handle) = abortable(TimeoutFuture::new(after_ms));
        if let Some(previous) = self.timers.borrow_mut().insert(token, handle) {
            previous.abort();
        }

        let controller = self.clone();
        spawn_local(async move {
            if delay.await.is_ok() {
                controller.timers.borrow_mut().remove(&token);
                controller.apply(|session| session.timer_elapsed(token));
            }
        });
    }

    fn persist(&self, attempt: AttemptId, record: ContactSubmission) {
        let (collection, timeout_ms) = {
            let session = self.session.borrow();
            (session.config().collection.clone(), session.config().submit_timeout_ms)
        };

        let controller = self.clone();
        spawn_local(async move {
            let (attempt, outcome) = settle_attempt(
                controller.store.as_ref(),
                &collection,
                attempt,
                &record,
                TimeoutFuture::new(timeout_ms),
            )
            .await;
            controller.apply(|session| session.submission_settled(attempt, outcome));
        });
    }
}

#[hook]
pub fn use_spin_session(config: WidgetConfig) -> SpinController {
    let redraw = use_force_update();
    let session = use_mut_ref(move || SpinSession::new(config));
    let timers = use_mut_ref(Timers::new);
    let store = use_memo((), |_| HttpDocumentStore::new(get_api_base_url()));
    let store: Rc<dyn DocumentStore> = store;

    let controller = SpinController {
        session,
        timers,
        store,
        redraw,
    };

    {
        let controller = controller.clone();
        use_effect_with((), move |_| move || controller.cancel_all());
    }

    controller
}
