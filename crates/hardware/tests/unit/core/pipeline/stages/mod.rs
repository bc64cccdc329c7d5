/// Decode phase tests.
pub mod decode;


/// Fetch phase tests.
pub mod fetch;

/// Memory phase tests.
pub mod memory;
