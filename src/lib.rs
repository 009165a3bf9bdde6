#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// Cursor-based traversal shared by maps and sorted views.
pub mod cursor;

/// Error types reported by maps and sorted views.
pub mod error;

/// The `PrimitiveKey` trait and its implementations for built-in scalars.
pub mod key;

/// The `PrimitiveMap` capability contract.
pub mod map;

/// Hash builders suited to primitive keys.
pub mod mixer;

/// An open-addressing hash map over primitive keys.
///
/// This module provides `PrimitiveHashMap`, a linear-probing table with
/// backward-shift deletion and an index-based slot API.
pub mod primitive_map;

/// Read-only views iterating a map in comparator order.
pub mod sorted_view;

pub use cursor::Cursor;
pub use error::Error;
pub use key::PrimitiveKey;
pub use map::PrimitiveMap;
pub use mixer::DefaultHashBuilder;
pub use mixer::PhiHasher;
pub use mixer::PhiMixer;
pub use primitive_map::LongObjectHashMap;
pub use primitive_map::PrimitiveHashMap;
pub use sorted_view::IterationOrder;
pub use sorted_view::SortedIterationView;
