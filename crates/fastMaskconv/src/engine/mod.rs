//! Layer 4: Engine
//!
//! This layer provides the parallel reducer passes for masked convolution.
//! They plug into the `maskconv` executor in place of its sequential passes.

// Parallel execution engine using CPU threads
pub mod executor;
