// Compile-time-configurable assertion checks. Call sites are expected to
//  glob-import the crate root, since the macro expansions reference the
//  config and assert_internal modules unqualified:
//
//      use kassert::*;



// General library config

pub mod config;

// Assertions

pub mod assert_internal;
pub use kassert_macro::*;
