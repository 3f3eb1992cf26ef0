pub mod calc;
pub mod command;
pub mod config;
pub mod consts;
pub mod dispatcher;
pub mod intents;
pub mod providers;
pub mod server;
pub mod text;
