mod calibration;
mod config;
mod fabric;
