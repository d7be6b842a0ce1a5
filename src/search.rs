//! Catalog search helpers: the client-side name filter, request generations
//! and the keystroke debouncer.

use crate::models::Tool;
use gloo_timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Case-insensitive substring match over name and use case.
pub fn matches_query(tool: &Tool, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    tool.tool_name.to_lowercase().contains(&needle)
        || tool
            .use_case
            .as_deref()
            .is_some_and(|use_case| use_case.to_lowercase().contains(&needle))
}

pub fn filter_tools(tools: Vec<Tool>, query: &str) -> Vec<Tool> {
    tools
        .into_iter()
        .filter(|tool| matches_query(tool, query))
        .collect()
}

/// Monotonic counter deciding which in-flight request may still render.
///
/// Each load takes a ticket; only the holder of the newest ticket is allowed
/// to write its result into the view.
#[derive(Debug, Clone, Default)]
pub struct SearchGeneration {
    latest: Rc<Cell<u64>>,
}

#[derive(Debug, Clone)]
pub struct SearchTicket {
    generation: u64,
    latest: Rc<Cell<u64>>,
}

impl SearchGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier ticket.
    pub fn begin(&self) -> SearchTicket {
        let generation = self.latest.get() + 1;
        self.latest.set(generation);
        SearchTicket {
            generation,
            latest: Rc::clone(&self.latest),
        }
    }
}

impl SearchTicket {
    pub fn is_current(&self) -> bool {
        self.latest.get() == self.generation
    }
}

/// Runs the latest scheduled action once no new one arrived for `delay_ms`.
#[derive(Clone)]
pub struct Debouncer {
    delay_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn schedule(&self, action: impl FnOnce() + 'static) {
        let timeout = Timeout::new(self.delay_ms, action);
        // Dropping the previous timeout clears it.
        self.pending.borrow_mut().replace(timeout);
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntityId, PricingType};

    fn tool(name: &str, use_case: Option<&str>) -> Tool {
        Tool {
            id: EntityId::from(name),
            tool_name: name.to_string(),
            use_case: use_case.map(str::to_string),
            category: None,
            pricing_type: PricingType::Free,
            avg_rating: 0.0,
        }
    }

    #[test]
    fn filters_by_name_case_insensitively() {
        let tools = vec![tool("GPT Helper", None), tool("Image Editor", None)];
        let names: Vec<String> = filter_tools(tools, "gpt")
            .into_iter()
            .map(|t| t.tool_name)
            .collect();
        assert_eq!(names, vec!["GPT Helper"]);
    }

    #[test]
    fn matches_use_case_too() {
        let t = tool("Pixel", Some("Photo RETOUCHING"));
        assert!(matches_query(&t, "retouch"));
        assert!(!matches_query(&t, "video"));
        assert!(matches_query(&t, "   "));
    }

    #[test]
    fn only_latest_ticket_is_current() {
        let generations = SearchGeneration::new();
        let first = generations.begin();
        assert!(first.is_current());
        let second = generations.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }
}
