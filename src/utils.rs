use serde::{Deserialize, Serialize};

/// A cell whose value can be read freely but only replaced wholesale.
///
/// This container implements `Deref` to `T`, but not `DerefMut`, so the
/// inner value cannot be edited in place even through a mutable reference
/// to the cell. The only mutation is `Guarded::replace(&mut cell, value)`,
/// which swaps in a whole new value and hands back the old one. Stored
/// play results use this so a result is either kept intact or replaced by
/// a complete new one, never half-updated.
///
/// # Example
///
/// ```rust
/// # use astragali::utils::Guarded;
/// let mut cell = Guarded::new(1);
/// assert_eq!(*cell, 1); // Deref works
///
/// // *cell += 1; // This line would cause a compile-time error
///
/// let old = Guarded::replace(&mut cell, 2);
/// assert_eq!((old, *cell), (1, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Guarded<T> {
    value: T,
}

impl<T> Guarded<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn replace(cell: &mut Self, value: T) -> T {
        std::mem::replace(&mut cell.value, value)
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> std::ops::Deref for Guarded<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}
