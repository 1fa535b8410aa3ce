pub mod completion;
pub mod config;
pub mod convert;
pub mod format;
pub mod parse;

pub use completion::cmd_generate_completion;
pub use config::cmd_show_config;
pub use convert::cmd_convert;
pub use format::cmd_format;
pub use parse::cmd_parse;
