// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	collections::BTreeMap,
	fmt::{self, Display, Formatter},
};

use serde::{Deserialize, Serialize};
use tframe_type::Error;

use crate::Result;

/// Key/value tags that tell apart series sharing a field name, e.g.
/// `{service=auth}`. Keys are kept sorted, so iteration and rendering are
/// deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Labels(BTreeMap<String, String>);

impl Labels {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses the rendered form `k=v, k2=v2`, with or without surrounding braces.
	pub fn parse(input: &str) -> Result<Self> {
		let trimmed = input.trim();
		let inner = trimmed.strip_prefix('{').and_then(|s| s.strip_suffix('}')).unwrap_or(trimmed).trim();

		let mut labels = BTreeMap::new();
		if inner.is_empty() {
			return Ok(Self(labels));
		}

		for pair in inner.split(',') {
			let Some((key, value)) = pair.split_once('=') else {
				return Err(Error::LabelParse {
					input: input.to_string(),
					reason: format!("expected key=value, got {:?}", pair.trim()),
				});
			};
			let key = key.trim();
			if key.is_empty() {
				return Err(Error::LabelParse {
					input: input.to_string(),
					reason: "empty label key".to_string(),
				});
			}
			labels.insert(key.to_string(), value.trim().to_string());
		}

		Ok(Self(labels))
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// True if every pair of `other` is present in `self`.
	pub fn contains(&self, other: &Labels) -> bool {
		other.iter().all(|(k, v)| self.get(k) == Some(v))
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}
}

impl Display for Labels {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		for (i, (key, value)) in self.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{key}={value}")?;
		}
		Ok(())
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Labels {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Labels {
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_display_is_sorted() {
		let labels = Labels::from([("service", "auth"), ("az", "eu-1"), ("host", "a")]);
		assert_eq!(labels.to_string(), "az=eu-1, host=a, service=auth");
	}

	#[test]
	fn test_display_empty() {
		assert_eq!(Labels::new().to_string(), "");
	}

	#[test]
	fn test_equality_ignores_insertion_order() {
		let a = Labels::from([("a", "1"), ("b", "2")]);
		let b = Labels::from([("b", "2"), ("a", "1")]);
		assert_eq!(a, b);
		assert_ne!(a, Labels::from([("a", "1")]));
	}

	#[test]
	fn test_parse() {
		let labels = Labels::parse("{service=auth, place=Ecuador}").unwrap();
		assert_eq!(labels, Labels::from([("service", "auth"), ("place", "Ecuador")]));

		let labels = Labels::parse("a=1,b=2").unwrap();
		assert_eq!(labels.get("b"), Some("2"));

		assert!(Labels::parse("{}").unwrap().is_empty());
		assert!(Labels::parse("").unwrap().is_empty());
	}

	#[test]
	fn test_parse_round_trips_display() {
		let labels = Labels::from([("service", "auth"), ("code", "200")]);
		assert_eq!(Labels::parse(&labels.to_string()).unwrap(), labels);
	}

	#[test]
	fn test_parse_rejects_malformed() {
		assert!(matches!(Labels::parse("a=1, b"), Err(Error::LabelParse { .. })));
		assert!(matches!(Labels::parse("=1"), Err(Error::LabelParse { .. })));
	}

	#[test]
	fn test_contains() {
		let labels = Labels::from([("service", "auth"), ("code", "200")]);
		assert!(labels.contains(&Labels::from([("code", "200")])));
		assert!(labels.contains(&Labels::new()));
		assert!(!labels.contains(&Labels::from([("code", "500")])));
	}
}
