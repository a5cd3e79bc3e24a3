//! Change notification payloads and element handles

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter backing per-instance element ids
static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identifier of a rendered input control.
///
/// Used to associate the label with the control and, once the control is
/// mounted, as the handle carried by change notifications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementHandle(String);

impl ElementHandle {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    /// Allocate a process-unique handle
    pub fn unique() -> Self {
        let n = NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed);
        Self(format!("fieldkit-input-{n}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A value change reported by an input field.
///
/// Emitted for typed input and for the clear action. `source` is the handle
/// of the mounted control, or `None` when nothing is mounted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub value: String,
    pub source: Option<ElementHandle>,
}

impl ChangeEvent {
    pub fn new<S: Into<String>>(value: S, source: Option<ElementHandle>) -> Self {
        Self {
            value: value.into(),
            source,
        }
    }

    /// The event emitted by the clear action
    pub fn cleared(source: Option<ElementHandle>) -> Self {
        Self::new(String::new(), source)
    }

    pub fn is_clear(&self) -> bool {
        self.value.is_empty()
    }
}
