//! The local persistence boundary.

/// Unit-of-work handle for the store that owns local contact entities.
///
/// The adapter mutates contacts in memory and then calls [`commit`] once to
/// flush the change, followed by [`detach`] so later reads go back to the
/// store instead of a tracked-entity cache.
///
/// [`commit`]: Persistence::commit
/// [`detach`]: Persistence::detach
pub trait Persistence {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Flush every pending entity change.
  fn commit(&self) -> Result<(), Self::Error>;

  /// Drop tracked entities after a commit. Stores without an identity map
  /// can rely on the default no-op.
  fn detach(&self) -> Result<(), Self::Error> { Ok(()) }
}
