

// What a failed check does after reporting. Break halts at the call site via
//  debug_break!(); Panic exists so automated test runs can observe the halt
//  without a hardware trap killing the harness.

#[derive(Debug, PartialEq, Eq)]
pub enum FailureMode
{
	Break,
	Panic,
}

#[cfg(feature="panic_on_failures")]
mod cfg
{
	use super::FailureMode;

	pub const ENABLE_ASSERTS 	: bool 			= true;
	pub const FAILURE_MODE 		: FailureMode	= FailureMode::Panic;
}

#[cfg(not(feature="panic_on_failures"))]
mod cfg
{
	use super::FailureMode;

	#[cfg(feature="enable_asserts")] 			pub const ENABLE_ASSERTS 	: bool 			= true;
	#[cfg(not(feature="enable_asserts"))] 		pub const ENABLE_ASSERTS 	: bool 			= false;

	pub const FAILURE_MODE 		: FailureMode	= FailureMode::Break;
}

pub use cfg::*;

// Debug-only checks follow the build profile, not a crate feature

#[cfg(debug_assertions)] 		pub const DEBUG_CHECKS : bool = true;
#[cfg(not(debug_assertions))] 	pub const DEBUG_CHECKS : bool = false;
