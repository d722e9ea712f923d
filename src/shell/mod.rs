//! External command probing and execution.

pub mod command;
pub mod mock;
pub mod path;
pub mod platform;
pub mod runner;

pub use command::{execute, CommandOptions, CommandResult, Invocation};
pub use mock::MockRunner;
pub use path::{is_executable, parse_system_path, resolve_tool_path};
pub use platform::{is_ci, is_elevated};
pub use runner::{CommandRunner, SystemRunner};
