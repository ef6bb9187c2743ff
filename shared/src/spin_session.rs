use chrono::{DateTime, Utc};
use rand::Rng;

use crate::constants::SUBMIT_FAILED_ERROR;
use crate::contact::{ContactField, ContactForm, ContactSubmission};
use crate::persistence::{AttemptId, SubmitOutcome};
use crate::prize_wheel::{select_prize_with_revolutions, SpinOutcome};
use crate::widget_config::WidgetConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Closed,
    Idle,
    Spinning,
    Revealed,
    FormOpen,
    Submitting,
    Submitted,
    SubmitFailed,
}

impl Phase {
    /// Phases where the claim form replaces the wheel.
    pub fn shows_form(&self) -> bool {
        matches!(
            self,
            Phase::FormOpen | Phase::Submitting | Phase::Submitted | Phase::SubmitFailed
        )
    }

    fn accepts_input(&self) -> bool {
        matches!(self, Phase::FormOpen | Phase::SubmitFailed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timer {
    SpinComplete,
    RevealForm,
    Announce,
    ClearAnnouncement,
}

impl Timer {
    /// Phase-bound timers die with the phase that scheduled them. The
    /// announcement pair follows the committed outcome instead.
    pub fn is_phase_bound(&self) -> bool {
        matches!(self, Timer::SpinComplete | Timer::RevealForm)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    pub timer: Timer,
    pub epoch: u64,
}

/// Side effects the host runs on behalf of the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CancelPhaseTimers,
    Schedule { token: TimerToken, after_ms: u32 },
    Persist { attempt: AttemptId, record: ContactSubmission },
    MirrorToCache(ContactSubmission),
    Announce(String),
    ClearAnnouncement,
}

/// State of the spin widget for one page visit.
///
/// Every method that changes state returns the commands the host has to
/// run. Guards live here: a call that does not apply to the current phase
/// returns no commands and leaves the session untouched.
#[derive(Debug, Clone)]
pub struct SpinSession {
    config: WidgetConfig,
    visible: bool,
    phase: Phase,
    spin_angle: f64,
    outcome: Option<SpinOutcome>,
    form: ContactForm,
    missing_fields: Vec<ContactField>,
    in_flight: Option<AttemptId>,
    pending_record: Option<ContactSubmission>,
    last_error: Option<String>,
    announcement: Option<String>,
    announced: bool,
    epoch: u64,
    attempts: AttemptId,
}

impl SpinSession {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            config,
            visible: false,
            phase: Phase::Idle,
            spin_angle: 0.0,
            outcome: None,
            form: ContactForm::default(),
            missing_fields: Vec::new(),
            in_flight: None,
            pending_record: None,
            last_error: None,
            announcement: None,
            announced: false,
            epoch: 0,
            attempts: 0,
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Current phase as seen by the visitor.
    pub fn phase(&self) -> Phase {
        if self.visible {
            self.phase
        } else {
            Phase::Closed
        }
    }

    /// Phase the session has reached, visible or not.
    pub fn progress(&self) -> Phase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn spin_angle(&self) -> f64 {
        self.spin_angle
    }

    pub fn outcome(&self) -> Option<&SpinOutcome> {
        self.outcome.as_ref()
    }

    pub fn has_spun(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn missing_fields(&self) -> &[ContactField] {
        &self.missing_fields
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn announcement(&self) -> Option<&str> {
        self.announcement.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn attempts(&self) -> AttemptId {
        self.attempts
    }

    pub fn open(&mut self) -> Vec<Command> {
        if !self.visible {
            self.visible = true;
            log::debug!("spin widget opened in {:?}", self.phase);
        }
        Vec::new()
    }

    /// Hides the widget. The committed outcome, pending phase timers and an
    /// in-flight write all belong to the session and keep running.
    pub fn close(&mut self) -> Vec<Command> {
        if self.visible {
            self.visible = false;
            log::debug!("spin widget closed in {:?}", self.phase);
        }
        Vec::new()
    }

    /// Success overlay "Close" button.
    pub fn acknowledge(&mut self) -> Vec<Command> {
        self.close()
    }

    pub fn spin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Command> {
        if !self.visible || self.phase != Phase::Idle || self.outcome.is_some() {
            log::debug!("spin ignored in {:?}", self.phase());
            return Vec::new();
        }

        let outcome =
            select_prize_with_revolutions(&self.config.catalog, self.config.full_revolutions, rng);
        log::info!("spin committed: {} ({}deg)", outcome.prize.label, outcome.target_rotation);

        self.spin_angle += outcome.target_rotation;
        self.outcome = Some(outcome);

        let mut commands = self.enter(Phase::Spinning);
        commands.push(self.schedule(Timer::SpinComplete, self.config.spin_duration_ms));
        commands.push(self.schedule(Timer::Announce, self.config.announce_delay_ms));
        commands
    }

    pub fn timer_elapsed(&mut self, token: TimerToken) -> Vec<Command> {
        match token.timer {
            Timer::SpinComplete => {
                if !self.is_current(token, Phase::Spinning) {
                    return self.stale(token);
                }
                let mut commands = self.enter(Phase::Revealed);
                commands.push(self.schedule(Timer::RevealForm, self.config.reveal_delay_ms));
                commands
            }
            Timer::RevealForm => {
                if !self.is_current(token, Phase::Revealed) {
                    return self.stale(token);
                }
                self.enter(Phase::FormOpen)
            }
            Timer::Announce => {
                let Some(outcome) = &self.outcome else {
                    return self.stale(token);
                };
                if self.announced {
                    return self.stale(token);
                }
                let text = format!("You won: {}", outcome.prize.label);
                self.announced = true;
                self.announcement = Some(text.clone());
                vec![
                    Command::Announce(text),
                    self.schedule(Timer::ClearAnnouncement, self.config.announcement_lifetime_ms),
                ]
            }
            Timer::ClearAnnouncement => match self.announcement.take() {
                Some(_) => vec![Command::ClearAnnouncement],
                None => self.stale(token),
            },
        }
    }

    /// Edits a form field. Only the open form (or the form shown again
    /// after a failure) takes input.
    pub fn update_field(&mut self, field: ContactField, value: String) -> bool {
        if !self.phase.accepts_input() {
            return false;
        }
        if !value.trim().is_empty() {
            self.missing_fields.retain(|missing| *missing != field);
        }
        self.form.set(field, value);
        true
    }

    pub fn submit(&mut self, captured_at: DateTime<Utc>) -> Vec<Command> {
        if !self.phase.accepts_input() {
            log::debug!("submit ignored in {:?}", self.phase);
            return Vec::new();
        }

        let missing = self.form.missing_fields();
        if !missing.is_empty() {
            log::debug!("submit refused, missing {:?}", missing);
            self.missing_fields = missing;
            return Vec::new();
        }

        let Some(outcome) = &self.outcome else {
            return Vec::new();
        };
        let record = self.form.to_submission(&outcome.prize.label, captured_at);

        self.attempts += 1;
        let attempt = self.attempts;
        self.in_flight = Some(attempt);
        self.pending_record = Some(record.clone());
        self.missing_fields.clear();
        self.last_error = None;

        let mut commands = self.enter(Phase::Submitting);
        commands.push(Command::Persist { attempt, record });
        commands
    }

    /// Applies the result of the race for `attempt`. Results for an attempt
    /// that is no longer in flight are dropped.
    pub fn submission_settled(&mut self, attempt: AttemptId, outcome: SubmitOutcome) -> Vec<Command> {
        if self.phase != Phase::Submitting || self.in_flight != Some(attempt) {
            log::warn!("ignoring late result for attempt {} in {:?}", attempt, self.phase);
            return Vec::new();
        }

        self.in_flight = None;
        let record = self.pending_record.take();

        match outcome {
            SubmitOutcome::Stored(_) => {
                let mut commands = self.enter(Phase::Submitted);
                if let Some(record) = record {
                    commands.push(Command::MirrorToCache(record));
                }
                commands
            }
            SubmitOutcome::Rejected(_) | SubmitOutcome::TimedOut => {
                self.last_error = Some(SUBMIT_FAILED_ERROR.to_string());
                self.enter(Phase::SubmitFailed)
            }
        }
    }

    fn enter(&mut self, phase: Phase) -> Vec<Command> {
        log::debug!("spin widget {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        self.epoch += 1;
        vec![Command::CancelPhaseTimers]
    }

    fn schedule(&self, timer: Timer, after_ms: u32) -> Command {
        Command::Schedule {
            token: TimerToken {
                timer,
                epoch: self.epoch,
            },
            after_ms,
        }
    }

    fn is_current(&self, token: TimerToken, phase: Phase) -> bool {
        self.phase == phase && self.epoch == token.epoch
    }

    fn stale(&self, token: TimerToken) -> Vec<Command> {
        log::debug!("stale {:?} timer ignored in {:?}", token.timer, self.phase);
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{settle_attempt, DocumentHandle, DocumentStore, StoreError};
    use crate::prize_wheel::{select_prize, PrizeCatalog};
    use futures::channel::oneshot;
    use futures::future::LocalBoxFuture;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::{Cell, RefCell};
    use std::time::Duration;

    fn open_session() -> SpinSession {
        let mut session = SpinSession::new(WidgetConfig::default());
        session.open();
        session
    }

    fn scheduled(commands: &[Command], timer: Timer) -> Option<(TimerToken, u32)> {
        commands.iter().find_map(|command| match command {
            Command::Schedule { token, after_ms } if token.timer == timer => Some((*token, *after_ms)),
            _ => None,
        })
    }

    fn persisted(commands: &[Command]) -> Vec<(AttemptId, ContactSubmission)> {
        commands
            .iter()
            .filter_map(|command| match command {
                Command::Persist { attempt, record } => Some((*attempt, record.clone())),
                _ => None,
            })
            .collect()
    }

    fn seed_for_index(index: usize) -> u64 {
        let catalog = PrizeCatalog::default();
        (0u64..)
            .find(|seed| select_prize(&catalog, &mut StdRng::seed_from_u64(*seed)).index == index)
            .unwrap()
    }

    /// Spins and runs both phase timers so the form is showing.
    fn form_session() -> SpinSession {
        let mut session = open_session();
        let commands = session.spin(&mut StdRng::seed_from_u64(1));
        let (spin_done, _) = scheduled(&commands, Timer::SpinComplete).unwrap();
        let commands = session.timer_elapsed(spin_done);
        let (reveal, _) = scheduled(&commands, Timer::RevealForm).unwrap();
        session.timer_elapsed(reveal);
        assert_eq!(session.phase(), Phase::FormOpen);
        session
    }

    fn fill(session: &mut SpinSession) {
        assert!(session.update_field(ContactField::Name, "Asha".to_string()));
        assert!(session.update_field(ContactField::Email, "asha@example.com".to_string()));
        assert!(session.update_field(ContactField::Phone, "9876543210".to_string()));
    }

    fn handle() -> DocumentHandle {
        DocumentHandle {
            id: "3f1c".to_string(),
            collection: "spin_entries".to_string(),
            created_at: Utc::now(),
        }
    }

    /// Store whose single write settles when the test says so.
    struct ChannelStore {
        calls: Cell<usize>,
        pending: RefCell<Option<oneshot::Receiver<Result<DocumentHandle, StoreError>>>>,
    }

    impl ChannelStore {
        fn new() -> (Self, oneshot::Sender<Result<DocumentHandle, StoreError>>) {
            let (tx, rx) = oneshot::channel();
            let store = ChannelStore {
                calls: Cell::new(0),
                pending: RefCell::new(Some(rx)),
            };
            (store, tx)
        }
    }

    impl DocumentStore for ChannelStore {
        fn create_record(
            &self,
            _collection: &str,
            _record: &ContactSubmission,
        ) -> LocalBoxFuture<'static, Result<DocumentHandle, StoreError>> {
            self.calls.set(self.calls.get() + 1);
            let rx = self.pending.borrow_mut().take();
            Box::pin(async move {
                match rx {
                    Some(rx) => rx
                        .await
                        .unwrap_or_else(|_| Err(StoreError::Network("sender dropped".to_string()))),
                    None => futures::future::pending().await,
                }
            })
        }
    }

    #[test]
    fn test_starts_closed_and_opens_idle() {
        let mut session = SpinSession::new(WidgetConfig::default());
        assert_eq!(session.phase(), Phase::Closed);
        assert!(session.open().is_empty());
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn test_spin_requires_open_widget() {
        let mut session = SpinSession::new(WidgetConfig::default());
        assert!(session.spin(&mut StdRng::seed_from_u64(3)).is_empty());
        assert!(session.outcome().is_none());
    }

    #[test]
    fn test_outcome_committed_at_spin_start() {
        let mut session = open_session();
        let commands = session.spin(&mut StdRng::seed_from_u64(9));

        assert_eq!(session.phase(), Phase::Spinning);
        let outcome = session.outcome().unwrap().clone();
        assert_eq!(session.spin_angle(), outcome.target_rotation);
        assert_eq!(commands[0], Command::CancelPhaseTimers);
        assert_eq!(scheduled(&commands, Timer::SpinComplete).unwrap().1, 3000);
        assert_eq!(scheduled(&commands, Timer::Announce).unwrap().1, 3000);
    }

    #[test]
    fn test_flat_ten_percent_revealed_after_spin() {
        let mut session = open_session();
        let commands = session.spin(&mut StdRng::seed_from_u64(seed_for_index(2)));
        assert_eq!(session.spin_angle(), 1935.0);

        let (token, after_ms) = scheduled(&commands, Timer::SpinComplete).unwrap();
        assert_eq!(after_ms, 3000);
        let commands = session.timer_elapsed(token);
        assert_eq!(session.phase(), Phase::Revealed);
        assert_eq!(session.outcome().unwrap().prize.label, "Flat 10% off");

        let (token, after_ms) = scheduled(&commands, Timer::RevealForm).unwrap();
        assert_eq!(after_ms, 800);
        session.timer_elapsed(token);
        assert_eq!(session.phase(), Phase::FormOpen);
    }

    #[test]
    fn test_one_spin_per_session() {
        let mut session = open_session();
        session.spin(&mut StdRng::seed_from_u64(4));
        let first = session.outcome().unwrap().clone();
        let angle = session.spin_angle();

        assert!(session.spin(&mut StdRng::seed_from_u64(5)).is_empty());
        assert_eq!(session.outcome(), Some(&first));
        assert_eq!(session.spin_angle(), angle);

        let mut session = form_session();
        let first = session.outcome().unwrap().clone();
        assert!(session.spin(&mut StdRng::seed_from_u64(6)).is_empty());
        assert_eq!(session.outcome(), Some(&first));
        assert_eq!(session.phase(), Phase::FormOpen);
    }

    #[test]
    fn test_stale_phase_timers_ignored() {
        let mut session = open_session();
        let commands = session.spin(&mut StdRng::seed_from_u64(2));
        let (spin_done, _) = scheduled(&commands, Timer::SpinComplete).unwrap();
        let commands = session.timer_elapsed(spin_done);
        let (reveal, _) = scheduled(&commands, Timer::RevealForm).unwrap();

        // Firing the spin timer again must not re-enter Revealed.
        assert!(session.timer_elapsed(spin_done).is_empty());
        session.timer_elapsed(reveal);
        assert_eq!(session.phase(), Phase::FormOpen);

        assert!(session.timer_elapsed(reveal).is_empty());
        assert!(session.timer_elapsed(spin_done).is_empty());
        assert_eq!(session.phase(), Phase::FormOpen);
    }

    #[test]
    fn test_close_mid_spin_keeps_progress() {
        let mut session = open_session();
        let commands = session.spin(&mut StdRng::seed_from_u64(8));
        let committed = session.outcome().unwrap().clone();
        let (spin_done, _) = scheduled(&commands, Timer::SpinComplete).unwrap();

        session.close();
        assert_eq!(session.phase(), Phase::Closed);
        session.timer_elapsed(spin_done);
        assert_eq!(session.progress(), Phase::Revealed);

        session.open();
        assert_eq!(session.phase(), Phase::Revealed);
        assert_eq!(session.outcome(), Some(&committed));
    }

    #[test]
    fn test_announcement_is_transient() {
        let mut session = open_session();
        let commands = session.spin(&mut StdRng::seed_from_u64(seed_for_index(1)));
        let (announce, _) = scheduled(&commands, Timer::Announce).unwrap();

        let commands = session.timer_elapsed(announce);
        assert_eq!(commands[0], Command::Announce("You won: Fridge magnet + 10% off".to_string()));
        assert_eq!(session.announcement(), Some("You won: Fridge magnet + 10% off"));
        let (clear, after_ms) = scheduled(&commands, Timer::ClearAnnouncement).unwrap();
        assert_eq!(after_ms, 1000);

        assert!(session.timer_elapsed(announce).is_empty());
        assert_eq!(session.timer_elapsed(clear), vec![Command::ClearAnnouncement]);
        assert_eq!(session.announcement(), None);
        assert!(session.timer_elapsed(clear).is_empty());
    }

    #[test]
    fn test_blank_phone_keeps_form_open() {
        let mut session = form_session();
        session.update_field(ContactField::Name, "Asha".to_string());
        session.update_field(ContactField::Email, "asha@example.com".to_string());
        session.update_field(ContactField::Phone, "   ".to_string());

        assert!(session.submit(Utc::now()).is_empty());
        assert_eq!(session.phase(), Phase::FormOpen);
        assert_eq!(session.missing_fields(), &[ContactField::Phone]);
        assert_eq!(session.attempts(), 0);

        session.update_field(ContactField::Phone, "9876543210".to_string());
        assert!(session.missing_fields().is_empty());
    }

    #[test]
    fn test_double_submit_persists_once() {
        let mut session = form_session();
        fill(&mut session);

        let first = session.submit(Utc::now());
        assert_eq!(persisted(&first).len(), 1);
        assert_eq!(session.phase(), Phase::Submitting);

        assert!(session.submit(Utc::now()).is_empty());
        assert!(!session.update_field(ContactField::Name, "Someone else".to_string()));
        assert_eq!(session.attempts(), 1);
    }

    #[test]
    fn test_stored_submission_mirrors_to_cache() {
        let mut session = form_session();
        fill(&mut session);
        let (attempt, record) = persisted(&session.submit(Utc::now())).remove(0);
        assert_eq!(record.prize, session.outcome().unwrap().prize.label);

        let commands = session.submission_settled(attempt, SubmitOutcome::Stored(handle()));
        assert_eq!(session.phase(), Phase::Submitted);
        assert_eq!(session.last_error(), None);
        let mirrored: Vec<_> = commands
            .iter()
            .filter(|command| matches!(command, Command::MirrorToCache(_)))
            .collect();
        assert_eq!(mirrored, vec![&Command::MirrorToCache(record)]);

        session.acknowledge();
        assert_eq!(session.phase(), Phase::Closed);
    }

    #[test]
    fn test_failed_submission_is_retryable() {
        let mut session = form_session();
        fill(&mut session);
        let (attempt, _) = persisted(&session.submit(Utc::now())).remove(0);

        session.submission_settled(
            attempt,
            SubmitOutcome::Rejected(StoreError::Rejected {
                status: 500,
                message: "Database error".to_string(),
            }),
        );
        assert_eq!(session.phase(), Phase::SubmitFailed);
        assert_eq!(session.last_error(), Some(SUBMIT_FAILED_ERROR));
        assert_eq!(session.form().name, "Asha");

        let retry = session.submit(Utc::now());
        let (second, _) = persisted(&retry).remove(0);
        assert_eq!(second, attempt + 1);
        assert_eq!(session.last_error(), None);

        // The first attempt settling late changes nothing.
        assert!(session.submission_settled(attempt, SubmitOutcome::Stored(handle())).is_empty());
        assert_eq!(session.phase(), Phase::Submitting);

        session.submission_settled(second, SubmitOutcome::Stored(handle()));
        assert_eq!(session.phase(), Phase::Submitted);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hanging_store_fails_at_timeout() {
        let mut session = form_session();
        fill(&mut session);
        let (attempt, record) = persisted(&session.submit(Utc::now())).remove(0);
        let (store, late_reply) = ChannelStore::new();
        let timeout_ms = session.config().submit_timeout_ms as u64;

        let race = settle_attempt(
            &store,
            "spin_entries",
            attempt,
            &record,
            tokio::time::sleep(Duration::from_millis(timeout_ms)),
        );
        tokio::pin!(race);

        assert!(tokio::time::timeout(Duration::from_millis(timeout_ms - 1), &mut race)
            .await
            .is_err());
        assert_eq!(session.phase(), Phase::Submitting);

        let (settled, outcome) = race.await;
        assert_eq!(outcome, SubmitOutcome::TimedOut);
        session.submission_settled(settled, outcome);

        assert_eq!(session.phase(), Phase::SubmitFailed);
        assert_eq!(session.last_error(), Some(SUBMIT_FAILED_ERROR));
        assert_eq!(session.form().phone, "9876543210");
        assert_eq!(store.calls.get(), 1);

        // The write was detached: nobody is listening for its reply.
        assert!(late_reply.send(Ok(handle())).is_err());
        assert!(session.submission_settled(settled, SubmitOutcome::Stored(handle())).is_empty());
        assert_eq!(session.phase(), Phase::SubmitFailed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_prompt_store_reaches_submitted() {
        let mut session = form_session();
        fill(&mut session);
        let (attempt, record) = persisted(&session.submit(Utc::now())).remove(0);
        let (store, reply) = ChannelStore::new();
        reply.send(Ok(handle())).unwrap();

        let (settled, outcome) = settle_attempt(
            &store,
            "spin_entries",
            attempt,
            &record,
            tokio::time::sleep(Duration::from_millis(8000)),
        )
        .await;
        let commands = session.submission_settled(settled, outcome);

        assert_eq!(session.phase(), Phase::Submitted);
        assert_eq!(session.last_error(), None);
        assert_eq!(store.calls.get(), 1);
        assert_eq!(
            commands.iter().filter(|c| matches!(c, Command::MirrorToCache(_))).count(),
            1
        );
    }
}
