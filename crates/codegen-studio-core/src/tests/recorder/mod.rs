mod command;
mod launcher;
mod recorder_config;
