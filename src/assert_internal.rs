use std::sync::RwLock;



// The host's diagnostic sink. Must be callable from any thread, and must not
//  itself run assertion checks; it is invoked synchronously on the failing
//  thread, exactly once per failed check, immediately before the halt.

pub type FailureHandler = fn(
	expression 	: &str,
	message 	: &str,
	file_path 	: &str,
	line_number : u32);

lazy_static::lazy_static!
{
	static ref FAILURE_HANDLER : RwLock<FailureHandler> =
		RwLock::new(default_failure_handler as FailureHandler);
}

// Replaces the default console reporter with a host-owned one. Applies
//  process-wide; checks that fail before this is called use the default.

pub fn set_failure_handler(handler : FailureHandler)
{
	if let Ok(mut slot) = FAILURE_HANDLER.write()
	{
		*slot = handler;
	}
}

// Single entry point the assert macros report through. Never halts and never
//  fails itself: the caller is already on the terminal failure path and still
//  has to reach the trap, so an unavailable handler slot just means falling
//  back to the console reporter.

pub fn report_assertion_failure(
	expression 	: &str,
	message 	: &str,
	file_path 	: &str,
	line_number : u32)
{
	let handler = match FAILURE_HANDLER.read()
	{
		Ok(slot) 	=> *slot,
		Err(_) 		=> default_failure_handler as FailureHandler,
	};

	handler(expression, message, file_path, line_number);
}

// Halt used by FailureMode::Panic, after the failure has been reported

pub fn panic_on_failure(expression : &str, file_path : &str, line_number : u32) -> !
{
	panic!("failed assert: {} @ {}:{}", expression, file_name(file_path), line_number);
}

pub fn file_name(file_path : &str) -> &str
{
	match file_path.rfind(std::path::MAIN_SEPARATOR)
	{
		Some(index) 	=> &file_path[index + 1..],
		None 			=> file_path,
	}
}

fn default_failure_handler(
	expression 	: &str,
	message 	: &str,
	file_path 	: &str,
	line_number : u32)
{
	use colored::*;

	eprintln!(
		"{} {}{}{}{} :: {}",
		"🛑 ASSERT ".on_red(),
		"at ".dimmed(),
		file_name(file_path).dimmed(),
		":".dimmed(),
		format!("{}", line_number).dimmed(),
		expression.red());

	if !message.is_empty()
	{
		eprintln!("   {}", message.red());
	}
}
