//! Create and list operations over a [`SessionStore`](crate::store::SessionStore).
//!
//! Both registries are `impl` blocks on the store so callers thread a single
//! `&mut SessionStore` through every operation.

pub mod enrollments;
pub mod events;
