mod app_command;
mod config;
