//! First-in-first-out queue of pending calls.

use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Local};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

/// Identifier handed out by [`CallQueueManager::enqueue`].
///
/// Ids increase monotonically within one manager and are never reused, even
/// after the queue has been cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CallId(u64);

impl CallId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One caller's request. Immutable once queued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Call {
    id: CallId,
    caller_name: String,
    issue: String,
    received_at: DateTime<Local>,
}

impl Call {
    pub fn id(&self) -> CallId {
        self.id
    }

    pub fn caller_name(&self) -> &str {
        &self.caller_name
    }

    pub fn issue(&self) -> &str {
        &self.issue
    }

    pub fn received_at(&self) -> DateTime<Local> {
        self.received_at
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Call from: {} (Issue: {})", self.caller_name, self.issue)
    }
}

/// Input field of a call, used to report which one failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallField {
    CallerName,
    Issue,
}

impl fmt::Display for CallField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallField::CallerName => f.write_str("caller name"),
            CallField::Issue => f.write_str("issue"),
        }
    }
}

/// Precondition failures reported by the queue. Neither is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("{field} must not be empty")]
    InvalidInput { field: CallField },
    #[error("no calls in queue")]
    EmptyQueue,
}

/// Owns the pending calls in arrival order.
#[derive(Debug, Default)]
pub struct CallQueueManager {
    calls: VecDeque<Call>,
    next_id: u64,
}

impl CallQueueManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a call to the back of the queue.
    ///
    /// Both fields are trimmed before validation and storage. The caller name
    /// is checked first, so a request with both fields blank reports
    /// [`CallField::CallerName`].
    pub fn enqueue(&mut self, caller_name: &str, issue: &str) -> Result<CallId, QueueError> {
        let caller_name = caller_name.trim();
        let issue = issue.trim();
        if caller_name.is_empty() {
            return Err(QueueError::InvalidInput {
                field: CallField::CallerName,
            });
        }
        if issue.is_empty() {
            return Err(QueueError::InvalidInput {
                field: CallField::Issue,
            });
        }

        self.next_id += 1;
        let id = CallId(self.next_id);
        self.calls.push_back(Call {
            id,
            caller_name: caller_name.to_string(),
            issue: issue.to_string(),
            received_at: Local::now(),
        });
        debug!(call_id = id.get(), size = self.calls.len(), "Call enqueued");
        Ok(id)
    }

    /// Remove and return the oldest call.
    pub fn dequeue(&mut self) -> Result<Call, QueueError> {
        let call = self.calls.pop_front().ok_or(QueueError::EmptyQueue)?;
        debug!(call_id = call.id.get(), size = self.calls.len(), "Call dequeued");
        Ok(call)
    }

    /// Drop every pending call and report how many there were.
    pub fn clear(&mut self) -> usize {
        let removed = self.calls.len();
        self.calls.clear();
        info!(removed, "Call queue cleared");
        removed
    }

    /// Owned copy of the queue, front to back.
    pub fn snapshot(&self) -> Vec<Call> {
        self.calls.iter().cloned().collect()
    }

    pub fn peek(&self) -> Option<&Call> {
        self.calls.front()
    }

    /// Look up a call that is still waiting.
    pub fn get(&self, id: CallId) -> Option<&Call> {
        // Ids are assigned in ascending order, so the deque stays sorted by id.
        self.calls
            .binary_search_by_key(&id, |call| call.id)
            .ok()
            .and_then(|index| self.calls.get(index))
    }

    pub fn size(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enqueue_trims_fields() {
        let mut queue = CallQueueManager::new();
        queue.enqueue("  Alice  ", "\tNo dial tone \n").unwrap();

        let call = queue.peek().unwrap();
        assert_eq!(call.caller_name(), "Alice");
        assert_eq!(call.issue(), "No dial tone");
    }

    #[test]
    fn test_enqueue_reports_first_blank_field() {
        let mut queue = CallQueueManager::new();
        assert_eq!(
            queue.enqueue(" ", " "),
            Err(QueueError::InvalidInput {
                field: CallField::CallerName
            })
        );
        assert_eq!(
            queue.enqueue("Bob", ""),
            Err(QueueError::InvalidInput {
                field: CallField::Issue
            })
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let mut queue = CallQueueManager::new();
        let first = queue.enqueue("Alice", "Router").unwrap();
        let second = queue.enqueue("Bob", "Login").unwrap();
        assert!(second > first);

        assert_eq!(queue.clear(), 2);
        let third = queue.enqueue("Carol", "Billing").unwrap();
        assert!(third > second);
        assert_eq!(third.to_string(), "#3");
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut queue = CallQueueManager::new();
        queue.enqueue("Alice", "Router").unwrap();
        let snapshot = queue.snapshot();

        queue.dequeue().unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(queue.size(), 0);
    }

    #[test]
    fn test_get_finds_only_waiting_calls() {
        let mut queue = CallQueueManager::new();
        let alice = queue.enqueue("Alice", "Router").unwrap();
        let bob = queue.enqueue("Bob", "Login").unwrap();

        assert_eq!(queue.get(bob).map(Call::caller_name), Some("Bob"));
        queue.dequeue().unwrap();
        assert!(queue.get(alice).is_none());
        assert!(queue.get(bob).is_some());
    }

    #[test]
    fn test_call_display() {
        let mut queue = CallQueueManager::new();
        queue.enqueue("Alice Johnson", "Internet speed issues").unwrap();
        assert_eq!(
            queue.peek().unwrap().to_string(),
            "Call from: Alice Johnson (Issue: Internet speed issues)"
        );
    }
}
