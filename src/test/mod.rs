mod config;
mod resource;
mod sim_time;
