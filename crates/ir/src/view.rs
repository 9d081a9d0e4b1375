// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Live Clause Views
//!
//! Each list of a [`SqlQueryModel`](crate::SqlQueryModel) lives in shared
//! storage. The model holds the only writer ([`ClauseList`]); accessors hand out
//! [`ClauseView`] handles bound to the same storage.
//!
//! A view is not a copy. Entries appended to the model after the view was
//! obtained are visible through it:
//!
//! ```rust
//! use sql_query_model_ir::SqlQueryModel;
//!
//! let mut model = SqlQueryModel::new();
//! model.add_table("a", Some("a"));
//!
//! let tables = model.tables();
//! model.add_table("b", Some("b"));
//!
//! assert_eq!(tables.len(), 2);
//! ```
//!
//! A view has no mutating operations, so writing through it does not compile:
//!
//! ```rust,compile_fail
//! use sql_query_model_ir::{SqlQueryModel, TableRef};
//!
//! let model = SqlQueryModel::new();
//! let tables = model.tables();
//! tables.push(TableRef::new("b", None));
//! ```

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use serde::{Serialize, Serializer};

/// Owned, append-only storage for one clause list
pub(crate) struct ClauseList<T> {
    items: Arc<RwLock<Vec<T>>>,
}

impl<T> ClauseList<T> {
    pub(crate) fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub(crate) fn push(&mut self, item: T) {
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(item);
    }

    pub(crate) fn view(&self) -> ClauseView<T> {
        ClauseView {
            items: Arc::clone(&self.items),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.view().is_empty()
    }
}

/// Read-only live handle over one clause list
///
/// Cloning a view yields another handle to the same storage.
pub struct ClauseView<T> {
    items: Arc<RwLock<Vec<T>>>,
}

impl<T> ClauseView<T> {
    fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl<T: Clone> ClauseView<T> {
    /// Run `f` over the entries as they are right now
    ///
    /// The closure sees a copy taken before it runs, so it may append to the
    /// owning model. Those appends are not part of the slice.
    pub fn with<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        let items = self.to_vec();
        f(&items)
    }

    pub fn get(&self, index: usize) -> Option<T> {
        self.read().get(index).cloned()
    }

    pub fn first(&self) -> Option<T> {
        self.read().first().cloned()
    }

    pub fn last(&self) -> Option<T> {
        self.read().last().cloned()
    }

    /// Copy of the entries as they are right now
    pub fn to_vec(&self) -> Vec<T> {
        self.read().clone()
    }

    /// Iterate over a point-in-time snapshot
    pub fn iter(&self) -> std::vec::IntoIter<T> {
        self.to_vec().into_iter()
    }
}

impl<T> Clone for ClauseView<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ClauseView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.read().iter()).finish()
    }
}

impl<T: Serialize> Serialize for ClauseView<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.read().serialize(serializer)
    }
}
