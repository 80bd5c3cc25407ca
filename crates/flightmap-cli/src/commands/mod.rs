// Handlers for CLI subcommands.
//
// main.rs parses arguments and loads the dataset; each module here turns a
// loaded `RoutingService` into output for one subcommand.

pub mod airports;
pub mod route;
