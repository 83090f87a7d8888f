//! Command pattern interfaces
//!
//! Each CLI subcommand is a `Command` built from parsed arguments by a
//! `CommandFactory`.

use crate::api::PiscolaGeo;
use crate::errors::GeoResult;

/// Represents an executable command in the application
pub trait Command {
    /// Execute the command
    ///
    /// # Returns
    /// Result indicating success or an error
    fn execute(&self) -> GeoResult<()>;
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `geo` - Library facade carrying the loaded configuration
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches, geo: &'a PiscolaGeo) -> GeoResult<Box<dyn Command + 'a>>;
}
