// runar_lazy_log/src/logging/marker.rs
//
// Category tags attached to individual log calls

use std::fmt;
use std::sync::Arc;

/// A named tag attached to a log statement so backends can route or filter it.
///
/// Markers are cheap to clone: every clone shares the same allocation, which
/// is what [`Marker::ptr_eq`] compares. Equality (`==`) compares names only.
#[derive(Clone)]
pub struct Marker {
    inner: Arc<MarkerInner>,
}

struct MarkerInner {
    name: String,
    references: Vec<Marker>,
}

impl Marker {
    /// Create a marker with the given name and no references
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(MarkerInner {
                name: name.into(),
                references: Vec::new(),
            }),
        }
    }

    /// Create a new marker that also references `other`.
    ///
    /// The receiver is left untouched; the returned marker has the same name
    /// and the extended reference list.
    pub fn with_reference(&self, other: Marker) -> Self {
        let mut references = self.inner.references.clone();
        references.push(other);
        Self {
            inner: Arc::new(MarkerInner {
                name: self.inner.name.clone(),
                references,
            }),
        }
    }

    /// The marker name
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Markers directly referenced by this one
    pub fn references(&self) -> &[Marker] {
        &self.inner.references
    }

    /// True if this marker or any marker it (transitively) references is named `name`
    pub fn contains(&self, name: &str) -> bool {
        self.name() == name || self.references().iter().any(|m| m.contains(name))
    }

    /// True if both handles point at the same marker instance
    pub fn ptr_eq(&self, other: &Marker) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Marker {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Marker {}

impl fmt::Debug for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("Marker");
        tuple.field(&self.name());
        if !self.references().is_empty() {
            tuple.field(&self.references());
        }
        tuple.finish()
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        if !self.references().is_empty() {
            f.write_str(" [ ")?;
            for (i, reference) in self.references().iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", reference)?;
            }
            f.write_str(" ]")?;
        }
        Ok(())
    }
}
