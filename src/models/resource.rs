//! Resource model.
//!
//! A resource is an execution slot with a processing capacity. The search
//! queries identity and capacity only; provisioning, contention, and actual
//! execution semantics are the caller's concern.

use serde::{Deserialize, Serialize};

/// Capability contract for a resource provider entry.
pub trait Resource {
    /// Unique identifier within the resource universe.
    fn id(&self) -> &str;

    /// Work units this resource can process per unit time.
    ///
    /// Must be finite and strictly positive.
    fn capacity(&self) -> f64;
}

/// A plain owned resource for callers without their own resource type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleResource {
    /// Unique resource identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Processing rate in work units per time unit.
    pub capacity: f64,
}

impl SimpleResource {
    /// Creates a resource with the given ID and capacity.
    pub fn new(id: impl Into<String>, capacity: f64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity,
        }
    }

    /// Sets the resource name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Resource for SimpleResource {
    fn id(&self) -> &str {
        &self.id
    }

    fn capacity(&self) -> f64 {
        self.capacity
    }
}
