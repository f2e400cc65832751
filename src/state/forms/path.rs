//! Typed addressing into the form value tree

use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while parsing or writing through a [`FieldPath`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("path is empty")]
    Empty,
    #[error("path `{0}` contains an empty segment")]
    EmptySegment(String),
    #[error("index {index} is out of bounds at `{path}`")]
    IndexOutOfBounds { path: String, index: usize },
    #[error("cannot descend into a scalar at `{0}`")]
    NotAContainer(String),
}

/// One step of a path: an object key or an array index
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(k) => write!(f, "{k}"),
            PathSegment::Index(i) => write!(f, "{i}"),
        }
    }
}

/// A path into a nested object/array tree
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Path with a single key segment
    pub fn key(key: &str) -> Self {
        Self {
            segments: vec![PathSegment::Key(key.to_string())],
        }
    }

    /// Extend the path with an object key
    pub fn then_key(mut self, key: &str) -> Self {
        self.segments.push(PathSegment::Key(key.to_string()));
        self
    }

    /// Extend the path with an array index
    pub fn then_index(mut self, index: usize) -> Self {
        self.segments.push(PathSegment::Index(index));
        self
    }

    /// Concatenate two paths (e.g. list path + item index + item field)
    pub fn join(&self, other: &FieldPath) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Read the value addressed by this path
    pub fn get<'a>(&self, tree: &'a Value) -> Option<&'a Value> {
        self.segments
            .iter()
            .try_fold(tree, |node, segment| match segment {
                PathSegment::Key(k) => node.as_object()?.get(k),
                PathSegment::Index(i) => node.as_array()?.get(*i),
            })
    }

    /// Mutable access to the value addressed by this path
    pub fn get_mut<'a>(&self, tree: &'a mut Value) -> Option<&'a mut Value> {
        let mut node = tree;
        for segment in &self.segments {
            node = match segment {
                PathSegment::Key(k) => node.as_object_mut()?.get_mut(k)?,
                PathSegment::Index(i) => node.as_array_mut()?.get_mut(*i)?,
            };
        }
        Some(node)
    }

    /// Write `value` at this path.
    ///
    /// Missing keys (and `null` nodes) along the way become objects. Arrays
    /// are never grown implicitly, so an index past the end is an error.
    pub fn set(&self, tree: &mut Value, value: Value) -> Result<(), PathError> {
        let Some((last, parents)) = self.segments.split_last() else {
            return Err(PathError::Empty);
        };

        let mut node = tree;
        for (depth, segment) in parents.iter().enumerate() {
            node = match segment {
                PathSegment::Key(k) => {
                    if node.is_null() {
                        *node = Value::Object(Map::new());
                    }
                    let object = node
                        .as_object_mut()
                        .ok_or_else(|| PathError::NotAContainer(self.prefix(depth)))?;
                    object
                        .entry(k.clone())
                        .or_insert_with(|| Value::Object(Map::new()))
                }
                PathSegment::Index(i) => {
                    let array = node
                        .as_array_mut()
                        .ok_or_else(|| PathError::NotAContainer(self.prefix(depth)))?;
                    array.get_mut(*i).ok_or(PathError::IndexOutOfBounds {
                        path: self.prefix(depth),
                        index: *i,
                    })?
                }
            };
        }

        match last {
            PathSegment::Key(k) => {
                if node.is_null() {
                    *node = Value::Object(Map::new());
                }
                let object = node
                    .as_object_mut()
                    .ok_or_else(|| PathError::NotAContainer(self.prefix(parents.len())))?;
                object.insert(k.clone(), value);
            }
            PathSegment::Index(i) => {
                let array = node
                    .as_array_mut()
                    .ok_or_else(|| PathError::NotAContainer(self.prefix(parents.len())))?;
                let slot = array.get_mut(*i).ok_or(PathError::IndexOutOfBounds {
                    path: self.prefix(parents.len()),
                    index: *i,
                })?;
                *slot = value;
            }
        }
        Ok(())
    }

    /// Dotted rendering of the first `depth` segments
    fn prefix(&self, depth: usize) -> String {
        Self {
            segments: self.segments[..depth].to_vec(),
        }
        .to_string()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for FieldPath {
    type Err = PathError;

    /// Parse a dotted path. All-digit segments become array indices.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PathError::Empty);
        }
        let segments = s
            .split('.')
            .map(|part| {
                if part.is_empty() {
                    Err(PathError::EmptySegment(s.to_string()))
                } else if let Ok(index) = part.parse::<usize>() {
                    Ok(PathSegment::Index(index))
                } else {
                    Ok(PathSegment::Key(part.to_string()))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { segments })
    }
}

/// A value counts as filled in unless it is missing, `null` or `""`.
/// Numbers (including zero) and booleans are always present.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}
