//! # mtp-describe-config
//!
//! Loads [`DescribeOptions`](mtp_describe::DescribeOptions) from annotation
//! files and the environment, so that stream descriptors, examples and auth
//! metadata can live next to a tool instead of inside its source.
//!
//! ## Sources
//!
//! - `~/.mtp/describe.{toml,yaml,yml,json}` (global)
//! - `./.mtp/describe.{toml,yaml,yml,json}` (project)
//! - an explicit file passed to [`ConfigProvider::with_file`]
//! - `MTP_DESCRIBE_*` environment variables
//!
//! ## Example file
//!
//! ```toml
//! version = "1.2.0"
//!
//! [auth]
//! type = "api-key"
//! envVar = "FILETOOL_KEY"
//!
//! [commands.convert.arg_descriptions]
//! input = "Input file path"
//!
//! [commands.convert.stdout]
//! contentType = "application/json"
//!
//! [[commands.convert.examples]]
//! description = "Convert a CSV file to JSON"
//! command = "filetool convert data.csv --format json"
//! ```

pub mod discovery;
pub mod error;
pub mod provider;

pub use discovery::{ConfigFile, ConfigFormat, ConfigScope, FileDiscovery};
pub use error::{ConfigError, ConfigResult};
pub use provider::{ConfigProvider, ENV_PREFIX, VERSION_ENV_VAR};

use mtp_describe::DescribeOptions;

/// Load annotations from the default sources on top of `defaults`
///
/// # Errors
///
/// See [`ConfigProvider::load`].
pub fn load_options(defaults: DescribeOptions) -> ConfigResult<DescribeOptions> {
    ConfigProvider::new().with_defaults(defaults).load()
}
