//! Which list a subscribe call targets.

use std::{convert::Infallible, fmt, str::FromStr};

use mailup_core::remote::{ListId, ListSummary};

/// A list addressed by id, by exact name, or "whatever comes first".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListSelector {
  /// Used as-is, without asking the remote for its lists.
  Id(ListId),
  /// Matched case-sensitively against list names; the first match wins.
  Name(String),
  /// The first list the remote returns.
  #[default]
  Default,
}

impl ListSelector {
  /// Resolve against a remote listing. `Id` never reaches this point in the
  /// adapter, but resolves to itself here as well.
  pub fn resolve(&self, lists: &[ListSummary]) -> Option<ListId> {
    match self {
      Self::Id(id) => Some(*id),
      Self::Name(name) => lists.iter().find(|l| &l.name == name).map(|l| l.id),
      Self::Default => lists.first().map(|l| l.id),
    }
  }
}

impl fmt::Display for ListSelector {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Id(id) => write!(f, "list id {id}"),
      Self::Name(name) => write!(f, "list name {name:?}"),
      Self::Default => f.write_str("the default list"),
    }
  }
}

/// ASCII digits select by id, `""` or `"default"` select the default list,
/// and anything else is a list name. Surrounding whitespace is ignored in
/// every case.
impl FromStr for ListSelector {
  type Err = Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed == "default" {
      return Ok(Self::Default);
    }
    if trimmed.bytes().all(|b| b.is_ascii_digit()) {
      // Digit strings too long for an id fall through to a name lookup.
      if let Ok(id) = trimmed.parse::<i64>() {
        return Ok(Self::Id(ListId(id)));
      }
    }
    Ok(Self::Name(trimmed.to_owned()))
  }
}

impl From<ListId> for ListSelector {
  fn from(id: ListId) -> Self { Self::Id(id) }
}

impl From<&str> for ListSelector {
  fn from(s: &str) -> Self {
    match s.parse() {
      Ok(selector) => selector,
      Err(never) => match never {},
    }
  }
}

impl From<String> for ListSelector {
  fn from(s: String) -> Self { Self::from(s.as_str()) }
}

impl<T: Into<ListSelector>> From<Option<T>> for ListSelector {
  fn from(s: Option<T>) -> Self { s.map_or(Self::Default, Into::into) }
}
