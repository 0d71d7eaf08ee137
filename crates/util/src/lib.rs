//! gdforge-util - shared value utilities for the gdforge workspace.

pub mod deep_equal;
pub mod snapshot;

pub use deep_equal::deep_equal;
pub use snapshot::snapshot;
