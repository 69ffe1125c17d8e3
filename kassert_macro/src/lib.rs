// NOTE These macros live in their own crate so that the debug_break!() call
//  causes a breakpoint in the source file that wrote the check. With the macros
//  defined in the kassert crate itself, checks inside that crate would land the
//  debugger on the macro definition instead of the failing call site.

// The expansions reference the kassert root modules unqualified, so callers are
//  expected to glob-import the root crate:
//
//      use kassert::*;



// NOTE Not using std::intrinsics::breakpoint(), since a function call makes the
//  breakpoint "appear" here instead of in the file where the check is written.
//  Being a macro keeps the trap instruction at the call site.

#[cfg(target_arch="x86_64")]
#[macro_export]
macro_rules! debug_break
{
	() => { unsafe { std::arch::asm!("int3"); } }
}

#[cfg(target_arch="aarch64")]
#[macro_export]
macro_rules! debug_break
{
	() => { unsafe { std::arch::asm!("brk #0xf000"); } }
}

// No inline trap instruction available; a hard abort still stops the thread at
//  the failure site, it just can't hand control to an attached debugger.

#[cfg(not(any(target_arch="x86_64", target_arch="aarch64")))]
#[macro_export]
macro_rules! debug_break
{
	() => { std::process::abort(); }
}



// Common macro for validating some code assumption. Checks can be compiled out
//  entirely (based on config features), so shouldn't produce any side effects.
//
// The guarded expression is evaluated exactly once; everything reported about
//  it comes from stringify!, never a second evaluation.

#[cfg(feature="enable_asserts")]
#[macro_export]
macro_rules! ASSERT
{
	{ $f_check:expr } =>
	{
		if ($f_check) == false
		{
			// Check has failed...

			assert_internal::report_assertion_failure(
				stringify!($f_check),
				"",
				file!(),
				line!());

			match config::FAILURE_MODE
			{
				config::FailureMode::Break 	=> { debug_break!(); }
				config::FailureMode::Panic 	=>
				{
					assert_internal::panic_on_failure(stringify!($f_check), file!(), line!());
				}
			}
		}
	};
}

// Same as ASSERT, but the failure report carries a caller-supplied message
//  (format string plus arguments, formatted only on the failure path).

#[cfg(feature="enable_asserts")]
#[macro_export]
macro_rules! ASSERT_MSG
{
	{ $f_check:expr, $( $e:expr ),+, } =>
	{
		if ($f_check) == false
		{
			// Check has failed...

			assert_internal::report_assertion_failure(
				stringify!($f_check),
				&format!($($e),+),
				file!(),
				line!());

			match config::FAILURE_MODE
			{
				config::FailureMode::Break 	=> { debug_break!(); }
				config::FailureMode::Panic 	=>
				{
					assert_internal::panic_on_failure(stringify!($f_check), file!(), line!());
				}
			}
		}
	};
	{ $f_check:expr, $( $e:expr ),+ } =>
	{
		ASSERT_MSG!{ $f_check, $($e,)+ };
	};
}

// Same as ASSERT, but only active in debug builds. Release builds compile the
//  check out even when asserts are otherwise enabled.

#[cfg(all(feature="enable_asserts", debug_assertions))]
#[macro_export]
macro_rules! ASSERT_DEBUG
{
	{ $f_check:expr } =>
	{
		if ($f_check) == false
		{
			// Check has failed...

			assert_internal::report_assertion_failure(
				stringify!($f_check),
				"",
				file!(),
				line!());

			match config::FAILURE_MODE
			{
				config::FailureMode::Break 	=> { debug_break!(); }
				config::FailureMode::Panic 	=>
				{
					assert_internal::panic_on_failure(stringify!($f_check), file!(), line!());
				}
			}
		}
	};
}



// Disabled variants expand to nothing at all: the guarded expression (and any
//  message arguments) never appear in the compiled output.

#[cfg(not(feature="enable_asserts"))]
#[macro_export]
macro_rules! ASSERT
{
	( $($tokens:tt)* ) => {};
}

#[cfg(not(feature="enable_asserts"))]
#[macro_export]
macro_rules! ASSERT_MSG
{
	( $($tokens:tt)* ) => {};
}

#[cfg(not(all(feature="enable_asserts", debug_assertions)))]
#[macro_export]
macro_rules! ASSERT_DEBUG
{
	( $($tokens:tt)* ) => {};
}



// Marks code that must never be reached.

#[macro_export]
macro_rules! FAIL
{
	{ $( $e:expr ),+, } =>
	{
		ASSERT_MSG!{ false, $($e,)+ }
	};
	{ $( $e:expr ),+ } =>
	{
		ASSERT_MSG!{ false, $($e,)+ }
	};
}
