//! Test doubles shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use futures::channel::oneshot;

use crate::models::Session;
use crate::router::navigator::{NavigationEffect, Navigator};
use crate::services::{ProbeError, SessionProbe};

pub fn alice() -> Session {
    Session {
        user: Some("alice".to_string()),
        ..Session::default()
    }
}

/// Probe answering from a script. The last answer repeats forever.
pub struct ScriptedProbe {
    answers: RefCell<VecDeque<Result<Session, ProbeError>>>,
    calls: Cell<usize>,
}

impl ScriptedProbe {
    pub fn always(answer: Result<Session, ProbeError>) -> Self {
        Self::sequence(vec![answer])
    }

    pub fn sequence(answers: Vec<Result<Session, ProbeError>>) -> Self {
        assert!(!answers.is_empty(), "script needs at least one answer");
        Self {
            answers: RefCell::new(answers.into()),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl SessionProbe for ScriptedProbe {
    async fn probe(&self) -> Result<Session, ProbeError> {
        self.calls.set(self.calls.get() + 1);
        let mut answers = self.answers.borrow_mut();
        if answers.len() > 1 {
            answers.pop_front().unwrap()
        } else {
            answers.front().cloned().unwrap()
        }
    }
}

/// Probe that stays pending until the test sends its answer.
pub struct ChannelProbe {
    pending: RefCell<VecDeque<oneshot::Receiver<Result<Session, ProbeError>>>>,
}

impl ChannelProbe {
    pub fn new() -> (Self, oneshot::Sender<Result<Session, ProbeError>>) {
        let (tx, rx) = oneshot::channel();
        let probe = Self {
            pending: RefCell::new(VecDeque::from([rx])),
        };
        (probe, tx)
    }
}

impl SessionProbe for ChannelProbe {
    async fn probe(&self) -> Result<Session, ProbeError> {
        let rx = self.pending.borrow_mut().pop_front();
        match rx {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ProbeError::Network("probe dropped".to_string()))),
            None => Err(ProbeError::Network("no scripted answer".to_string())),
        }
    }
}

/// Navigator that only records what it was asked to do.
pub struct RecordingNavigator {
    path: RefCell<String>,
    effects: RefCell<Vec<NavigationEffect>>,
}

impl Default for RecordingNavigator {
    fn default() -> Self {
        Self::at("/")
    }
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        Self {
            path: RefCell::new(path.to_string()),
            effects: RefCell::new(Vec::new()),
        }
    }

    pub fn effects(&self) -> Vec<NavigationEffect> {
        self.effects.borrow().clone()
    }

    pub fn external_redirects(&self) -> usize {
        self.effects
            .borrow()
            .iter()
            .filter(|effect| matches!(effect, NavigationEffect::ExternalRedirect(_)))
            .count()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.path.borrow().clone()
    }

    fn apply(&self, effect: NavigationEffect) {
        if let NavigationEffect::Push(path) | NavigationEffect::Replace(path) = &effect {
            *self.path.borrow_mut() = path.clone();
        }
        self.effects.borrow_mut().push(effect);
    }
}
