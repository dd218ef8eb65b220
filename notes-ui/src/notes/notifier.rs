use gloo_timers::future::TimeoutFuture;

use crate::notes::state::NotesStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast-success",
            Self::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    /// Exit transition running; removed once it finishes
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
}

/// Stack of transient notifications. No deduplication.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notifier {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl Notifier {
    pub fn notify(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            phase: ToastPhase::Visible,
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.notify(message, ToastKind::Success)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.notify(message, ToastKind::Error)
    }

    pub fn begin_exit(&mut self, id: u64) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.phase = ToastPhase::Leaving;
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn last(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}

/// Visible for `display_ms`, then Leaving for `exit_ms`, then gone.
pub async fn schedule_dismissal<S: NotesStore>(
    mut store: S,
    id: u64,
    display_ms: u32,
    exit_ms: u32,
) {
    TimeoutFuture::new(display_ms).await;
    store.modify(|state| state.notifier.begin_exit(id));
    TimeoutFuture::new(exit_ms).await;
    store.modify(|state| state.notifier.remove(id));
}
