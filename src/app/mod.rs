// Application layer: the command line front end on top of the library.

pub mod commands;

pub use commands::execute;
