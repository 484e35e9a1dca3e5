//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer runs the reducers: it validates inputs, selects the reducer
//! pass (sequential or injected) and defines the result type.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Reducer execution engine.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for masked operations.
pub mod output;
