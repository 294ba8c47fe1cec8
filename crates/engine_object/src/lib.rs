//! # engine_object
//!
//! The host object model the rest of the engine builds on: what an object is,
//! how it is identified, and how the rest of the world learns that it has been
//! destroyed.
//!
//! This crate provides:
//!
//! - [`ObjectId`]: process-wide reference identity for objects.
//! - [`DestroySignal`]: a one-shot destroy notification per object.
//! - [`Object`] / [`Component`]: the object supertype and the constrained
//!   supertype for values that other objects may reference.
//! - [`TypeTag`]: runtime type descriptor for typed lookups.
//! - [`Scene`]: owns object lifetimes and fires destroy signals, deferred to
//!   the end of the frame or immediately.
//!
//! Everything here is single-threaded (`Rc`-based) and driven from the main
//! frame loop.

pub mod id;
pub mod object;
pub mod scene;
pub mod signal;

pub use id::ObjectId;
pub use object::{Component, Object, ObjectCore, TypeTag};
pub use scene::Scene;
pub use signal::DestroySignal;
