/// Format conversion command.
pub mod convert;
/// Store directory listing command.
pub mod list;
/// Tree renderer shared by commands.
pub mod print;
/// Stored file decode command.
pub mod show;
pub(crate) mod util;
