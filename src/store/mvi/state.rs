//! Base trait for slice state in MVI architecture.

use serde::Serialize;

/// Marker trait for slice state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Comparable (PartialEq, used by the store to keep unchanged slices shared)
/// - Serializable (state snapshots are dumped as JSON for inspection)
pub trait SliceState: Clone + PartialEq + Default + Serialize + Send + Sync + 'static {}
