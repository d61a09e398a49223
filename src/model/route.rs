//! The routing policy tree
//!
//! A route is a recursive node: it names a receiver, constrains which alerts
//! it applies to via label matchers, and owns an ordered list of child
//! routes. Receiver names and time-interval names are logical references
//! resolved by the consuming service, never validated here; the three timing
//! fields are carried as opaque duration strings for the same reason.

use serde::{Deserialize, Serialize};

/// One node of the routing policy tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Route {
    /// Name of the receiver handling alerts that stop at this node
    pub receiver: String,
    /// Label names to group alerts by
    pub group_by: Vec<String>,
    /// Label matcher expressions selecting alerts for this node
    pub matchers: Vec<String>,
    /// Keep evaluating sibling routes after this node matches
    pub continue_matching: bool,
    /// Child routes, evaluated in order
    pub routes: Vec<Route>,
    pub group_wait: String,
    pub group_interval: String,
    pub repeat_interval: String,
    /// Names of time intervals during which this route is muted
    pub mute_time_intervals: Vec<String>,
    /// Names of time intervals during which this route is active
    pub active_time_intervals: Vec<String>,
}

impl Route {
    /// Total number of nodes in this subtree, the node itself included.
    pub fn node_count(&self) -> usize {
        1 + self.routes.iter().map(Route::node_count).sum::<usize>()
    }

    /// Depth of this subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.routes.iter().map(Route::depth).max().unwrap_or(0)
    }
}
